//! Property tests for color parsing and state resolution.
//!
//! 1. Display output of any color parses back to the same color.
//! 2. Parsing never panics and only accepts 6 or 8 hex digits.
//! 3. Resolving a state returns its override, else the default color.
//! 4. `from_flags` yields `Disabled` whenever the component is disabled.

use proptest::prelude::*;
use sirio_style::{Color, ColorState, InteractionState};

fn color() -> impl Strategy<Value = Color> {
    any::<u32>().prop_map(Color)
}

fn state() -> impl Strategy<Value = InteractionState> {
    prop_oneof![
        Just(InteractionState::Default),
        Just(InteractionState::Pressed),
        Just(InteractionState::Hovered),
        Just(InteractionState::Focused),
        Just(InteractionState::Disabled),
    ]
}

fn color_state() -> impl Strategy<Value = ColorState> {
    (
        color(),
        proptest::option::of(color()),
        proptest::option::of(color()),
        proptest::option::of(color()),
        proptest::option::of(color()),
    )
        .prop_map(|(default, pressed, hovered, focused, disabled)| ColorState {
            default,
            pressed,
            hovered,
            focused,
            disabled,
        })
}

proptest! {
    #[test]
    fn display_parses_back(c in color()) {
        prop_assert_eq!(c.to_string().parse::<Color>(), Ok(c));
    }

    #[test]
    fn parsing_accepts_only_hex_of_valid_length(input in "#?[0-9a-fA-FxZ+ ]{0,10}") {
        let digits = input.strip_prefix('#').unwrap_or(&input);
        let valid = matches!(digits.len(), 6 | 8)
            && digits.chars().all(|c| c.is_ascii_hexdigit());
        prop_assert_eq!(Color::from_hex(&input).is_ok(), valid);
    }

    #[test]
    fn resolve_prefers_override(colors in color_state(), s in state()) {
        let expected = match s {
            InteractionState::Default => None,
            InteractionState::Pressed => colors.pressed,
            InteractionState::Hovered => colors.hovered,
            InteractionState::Focused => colors.focused,
            InteractionState::Disabled => colors.disabled,
        }
        .unwrap_or(colors.default);
        prop_assert_eq!(colors.resolve(s), expected);
    }

    #[test]
    fn disabled_flag_wins(pressed: bool, hovered: bool, focused: bool) {
        prop_assert_eq!(
            InteractionState::from_flags(false, pressed, hovered, focused),
            InteractionState::Disabled
        );
    }
}
