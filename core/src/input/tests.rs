use super::*;

struct Fixed(ButtonState);

impl InputSource for Fixed {
    fn poll(&mut self) -> ButtonState {
        self.0
    }
}

#[test]
fn test_combined_input_ors_pressed_and_held() {
    let mut combined = CombinedInput::new();
    combined.attach(Box::new(Fixed(ButtonState {
        pressed: Buttons::LEFT,
        held: Buttons::LEFT,
    })));
    combined.attach(Box::new(Fixed(ButtonState {
        pressed: Buttons::empty(),
        held: Buttons::CONFIRM,
    })));

    let merged = combined.poll();
    assert_eq!(merged.pressed, Buttons::LEFT);
    assert_eq!(merged.held, Buttons::LEFT | Buttons::CONFIRM);
}

#[test]
fn test_combined_input_empty_is_neutral() {
    let mut combined = CombinedInput::new();
    assert_eq!(combined.poll(), ButtonState::default());
}

#[test]
fn test_merge_keeps_existing_flags() {
    let mut state = ButtonState {
        pressed: Buttons::UP,
        held: Buttons::UP,
    };
    state.merge(ButtonState {
        pressed: Buttons::DOWN,
        held: Buttons::DOWN | Buttons::UP,
    });
    assert_eq!(state.pressed, Buttons::UP | Buttons::DOWN);
    assert_eq!(state.held, Buttons::UP | Buttons::DOWN);
}
