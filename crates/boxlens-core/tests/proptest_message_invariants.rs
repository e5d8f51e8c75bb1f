//! Property-based tests for wire decoding and label text.
//!
//! Verifies:
//! 1. Any command survives the JSON wire unchanged.
//! 2. Unknown command tags are rejected before field decoding.
//! 3. A negative `maxDepth` never decodes.
//! 4. Selectors never contain empty class or id fragments.

use boxlens_core::label::ElementInfo;
use boxlens_core::{Command, MessageError, Mode, VisualOptions};
use proptest::prelude::*;

fn arb_options() -> impl Strategy<Value = VisualOptions> {
    (any::<bool>(), any::<bool>(), any::<u32>()).prop_map(|(d, b, depth)| VisualOptions {
        show_dimensions: d,
        show_borders: b,
        max_depth: depth,
    })
}

fn arb_command() -> impl Strategy<Value = Command> {
    let mode = prop_oneof![Just(Mode::Disabled), Just(Mode::Hover), Just(Mode::Outline)];
    prop_oneof![
        (mode, arb_options()).prop_map(|(mode, options)| Command::SetMode { mode, options }),
        arb_options().prop_map(|options| Command::UpdateSettings { options }),
    ]
}

proptest! {
    #[test]
    fn commands_survive_the_wire(command in arb_command()) {
        let json = command.to_json_string().unwrap();
        prop_assert_eq!(Command::from_json_str(&json).unwrap(), command);
    }

    #[test]
    fn unknown_tags_are_rejected(tag in "[a-zA-Z]{1,12}") {
        prop_assume!(tag != "setMode" && tag != "updateSettings");
        let json = format!(r#"{{"command":"{tag}","mode":"hover"}}"#);
        prop_assert_eq!(
            Command::from_json_str(&json),
            Err(MessageError::UnknownCommand(tag))
        );
    }

    #[test]
    fn negative_depth_never_decodes(depth in i64::MIN..0) {
        let json = format!(
            r#"{{"command":"updateSettings","showDimensions":true,"showBorders":true,"maxDepth":{depth}}}"#
        );
        prop_assert!(matches!(
            Command::from_json_str(&json),
            Err(MessageError::InvalidField(_))
        ));
    }

    #[test]
    fn selector_has_no_empty_fragments(
        tag in "[A-Za-z]{1,8}",
        id in "[a-z0-9-]{0,6}",
        class in "[ a-z]{0,20}",
    ) {
        let selector = ElementInfo::new(tag.clone()).with_id(id).with_class(class).selector();
        prop_assert!(selector.starts_with(&tag.to_lowercase()));
        prop_assert!(!selector.contains(".."));
        prop_assert!(!selector.ends_with('.'));
        prop_assert!(!selector.ends_with('#'));
        prop_assert!(!selector.contains(' '));
    }
}
