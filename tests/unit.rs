#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use yabai_client::parse::parse;
    use yabai_client::selector::*;
    use yabai_client::types::{Display, Rule, Space, Window};
    use yabai_client::validator::*;
    use yabai_client::{Category, Error};

    fn space_json() -> Value {
        json!({
            "id": 1,
            "uuid": "A7C4D2E0-0000-0000-0000-000000000001",
            "index": 1,
            "label": "main",
            "type": "bsp",
            "display": 1,
            "windows": [10, 11],
            "first-window": 10,
            "last-window": 11,
            "has-focus": true,
            "is-visible": true,
            "is-native-fullscreen": false
        })
    }

    fn display_json() -> Value {
        json!({
            "id": 1,
            "uuid": "B8D5E3F1-0000-0000-0000-000000000002",
            "index": "1",
            "frame": { "x": 0.0, "y": 0.0, "w": 1440.0, "h": 900.0 },
            "spaces": [1, 2, 3]
        })
    }

    fn window_json() -> Value {
        json!({
            "id": 10,
            "pid": 4242,
            "app": "Terminal",
            "title": "zsh",
            "frame": { "x": 10.0, "y": 32.0, "w": 700.0, "h": 434.0 },
            "role": "AXWindow",
            "subrole": "AXStandardWindow",
            "display": 1,
            "space": 1,
            "level": 0,
            "opacity": 1.0,
            "split-type": "vertical",
            "split-child": "first_child",
            "stack-index": 0,
            "can-move": true,
            "can-resize": true,
            "has-focus": true,
            "has-shadow": true,
            "has-border": false,
            "has-parent-zoom": false,
            "has-fullscreen-zoom": false,
            "is-native-fullscreen": false,
            "is-visible": true,
            "is-minimized": false,
            "is-hidden": false,
            "is-floating": false,
            "is-sticky": false,
            "is-topmost": false,
            "is-grabbed": false
        })
    }

    fn rule_json() -> Value {
        json!({
            "index": 0,
            "label": "pip",
            "app": "^Firefox$",
            "title": "^Picture-in-Picture$",
            "role": "AXWindow",
            "subrole": "AXStandardWindow",
            "display": 1,
            "space": 2,
            "follow_space": false,
            "opacity": 0.9,
            "manage": false,
            "sticky": true,
            "layer": "above",
            "grid": "1:1:0:0:1:1"
        })
    }

    fn signal_json() -> Value {
        json!({
            "index": 0,
            "label": "on_focus",
            "app": "",
            "title": "",
            "event": "window_focused",
            "action": "echo focused"
        })
    }

    fn without(value: &Value, key: &str) -> Value {
        let mut v = value.clone();
        v.as_object_mut().unwrap().remove(key);
        v
    }

    fn retyped(value: &Value, key: &str) -> Value {
        let mut v = value.clone();
        // A value of the wrong primitive kind for every field under test.
        v.as_object_mut().unwrap().insert(key.to_string(), json!([null]));
        v
    }

    const SPACE_FIELDS: &[&str] = &[
        "id",
        "uuid",
        "index",
        "label",
        "type",
        "display",
        "windows",
        "first-window",
        "last-window",
        "has-focus",
        "is-visible",
        "is-native-fullscreen",
    ];

    const WINDOW_FIELDS: &[&str] = &[
        "id",
        "pid",
        "app",
        "title",
        "frame",
        "role",
        "subrole",
        "display",
        "space",
        "level",
        "opacity",
        "split-type",
        "split-child",
        "stack-index",
        "can-move",
        "can-resize",
        "has-focus",
        "has-shadow",
        "has-border",
        "has-parent-zoom",
        "has-fullscreen-zoom",
        "is-native-fullscreen",
        "is-visible",
        "is-minimized",
        "is-hidden",
        "is-floating",
        "is-sticky",
        "is-topmost",
        "is-grabbed",
    ];

    #[test]
    fn space_validator_accepts_conformant_object() {
        assert!(is_space(&space_json()));
    }

    #[test]
    fn space_validator_rejects_any_missing_required_field() {
        for field in SPACE_FIELDS {
            assert!(
                !is_space(&without(&space_json(), field)),
                "accepted space without {field}"
            );
        }
    }

    #[test]
    fn space_validator_rejects_any_retyped_field() {
        for field in SPACE_FIELDS {
            assert!(
                !is_space(&retyped(&space_json(), field)),
                "accepted space with retyped {field}"
            );
        }
    }

    #[test]
    fn space_validator_rejects_numeric_string_id() {
        let mut v = space_json();
        v["id"] = json!("1");
        assert!(!is_space(&v), "coerced a numeric string to a number");
    }

    #[test]
    fn space_validator_rejects_non_numeric_window_element() {
        let mut v = space_json();
        v["windows"] = json!([10, "11"]);
        assert!(!is_space(&v));
    }

    #[test]
    fn display_validator_accepts_conformant_object() {
        assert!(is_display(&display_json()));
    }

    #[test]
    fn display_validator_requires_string_index() {
        let mut v = display_json();
        v["index"] = json!(1);
        assert!(!is_display(&v));
    }

    #[test]
    fn display_validator_checks_frame_fields() {
        let mut v = display_json();
        v["frame"] = json!({ "x": 0.0, "y": 0.0, "w": 1440.0 });
        assert!(!is_display(&v));
        let mut v = display_json();
        v["frame"]["h"] = json!("900");
        assert!(!is_display(&v));
    }

    #[test]
    fn window_validator_accepts_conformant_object() {
        assert!(is_window(&window_json()));
    }

    #[test]
    fn window_validator_rejects_any_missing_required_field() {
        for field in WINDOW_FIELDS {
            assert!(
                !is_window(&without(&window_json(), field)),
                "accepted window without {field}"
            );
        }
    }

    #[test]
    fn rule_validator_accepts_absent_optional_fields() {
        // mouse_follows_focus, border and native-fullscreen are absent.
        assert!(is_rule(&rule_json()));
    }

    #[test]
    fn rule_validator_accepts_present_optional_fields() {
        let mut v = rule_json();
        v["mouse_follows_focus"] = json!(true);
        v["border"] = json!(false);
        v["native-fullscreen"] = json!(false);
        assert!(is_rule(&v));
    }

    #[test]
    fn rule_validator_rejects_mistyped_optional_field() {
        let mut v = rule_json();
        v["manage"] = json!(1);
        assert!(!is_rule(&v));
    }

    #[test]
    fn rule_validator_rejects_missing_required_field() {
        assert!(!is_rule(&without(&rule_json(), "follow_space")));
    }

    #[test]
    fn signal_validator_accepts_conformant_object() {
        assert!(is_signal(&signal_json()));
    }

    #[test]
    fn signal_validator_rejects_missing_action() {
        assert!(!is_signal(&without(&signal_json(), "action")));
    }

    #[test]
    fn validators_reject_non_objects() {
        for v in [json!(null), json!(1), json!("space"), json!([])] {
            assert!(!is_space(&v));
            assert!(!is_display(&v));
            assert!(!is_window(&v));
            assert!(!is_rule(&v));
            assert!(!is_signal(&v));
        }
    }

    #[test]
    fn validators_are_idempotent() {
        let good = space_json();
        let bad = without(&space_json(), "uuid");
        assert_eq!(is_space(&good), is_space(&good));
        assert_eq!(is_space(&bad), is_space(&bad));
    }

    #[test]
    fn array_of_requires_every_element_to_pass() {
        let all_spaces = json!([space_json(), space_json()]);
        let one_bad = json!([space_json(), without(&space_json(), "uuid")]);
        assert!(array_of(is_space)(&all_spaces));
        assert!(!array_of(is_space)(&one_bad));
    }

    #[test]
    fn array_of_accepts_empty_array_and_rejects_non_arrays() {
        assert!(array_of(is_space)(&json!([])));
        assert!(!array_of(is_space)(&space_json()));
        assert!(!array_of(is_space)(&json!(null)));
    }

    #[test]
    fn parse_empty_string_is_a_parse_failure() {
        let result: Result<Vec<Space>, _> = parse("", array_of(is_space), "Space");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn parse_garbage_is_a_parse_failure() {
        let result: Result<Vec<Space>, _> = parse("not json", array_of(is_space), "Space");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn parse_wrong_shape_is_a_schema_mismatch() {
        let text = json!([without(&space_json(), "uuid")]).to_string();
        let result: Result<Vec<Space>, _> = parse(&text, array_of(is_space), "Space");
        assert!(matches!(
            result,
            Err(Error::SchemaMismatch { entity: "Space" })
        ));
    }

    #[test]
    fn parse_valid_space_array() {
        let text = json!([space_json()]).to_string();
        let spaces: Vec<Space> = parse(&text, array_of(is_space), "Space").unwrap();
        assert_eq!(spaces.len(), 1);
        assert_eq!(spaces[0].id, 1);
        assert_eq!(spaces[0].kind, "bsp");
        assert_eq!(spaces[0].windows, vec![10, 11]);
        assert_eq!(spaces[0].first_window, 10);
        assert!(spaces[0].has_focus);
    }

    #[test]
    fn parse_valid_display_array() {
        let text = json!([display_json()]).to_string();
        let displays: Vec<Display> = parse(&text, array_of(is_display), "Display").unwrap();
        assert_eq!(displays[0].index, "1");
        assert_eq!(displays[0].frame.w, 1440.0);
        assert_eq!(displays[0].spaces, vec![1, 2, 3]);
    }

    #[test]
    fn parse_valid_window_array() {
        let text = json!([window_json()]).to_string();
        let windows: Vec<Window> = parse(&text, array_of(is_window), "Window").unwrap();
        assert_eq!(windows[0].app, "Terminal");
        assert_eq!(windows[0].split_type, "vertical");
        assert_eq!(windows[0].stack_index, 0);
        assert!(!windows[0].is_floating);
    }

    #[test]
    fn parse_rule_with_absent_optionals() {
        let text = json!([rule_json()]).to_string();
        let rules: Vec<Rule> = parse(&text, array_of(is_rule), "Rule").unwrap();
        assert_eq!(rules[0].manage, Some(false));
        assert_eq!(rules[0].mouse_follows_focus, None);
        assert_eq!(rules[0].native_fullscreen, None);
        assert_eq!(rules[0].grid, "1:1:0:0:1:1");
    }

    #[test]
    fn category_names() {
        assert_eq!(Category::Display.as_str(), "display");
        assert_eq!(Category::Space.as_str(), "space");
        assert_eq!(Category::Window.as_str(), "window");
        assert_eq!(Category::Rule.as_str(), "rule");
        assert_eq!(Category::Signal.as_str(), "signal");
        assert_eq!(Category::Query.as_str(), "query");
    }

    #[test]
    fn selector_stringification() {
        assert_eq!(SpaceSel::Recent.to_string(), "recent");
        assert_eq!(SpaceSel::Next.to_string(), "next");
        assert_eq!(SpaceSel::Index(4).to_string(), "4");
        assert_eq!(SpaceSel::Label("code".into()).to_string(), "code");
        assert_eq!(DisplaySel::Prev.to_string(), "prev");
        assert_eq!(DisplaySel::Index(2).to_string(), "2");
        assert_eq!(Place::North.to_string(), "north");
        assert_eq!(Place::Mouse.to_string(), "mouse");
        assert_eq!(RelocateTarget::Last.to_string(), "last");
        assert_eq!(Rotation::Deg270.to_string(), "270");
        assert_eq!(ZoomKind::ZoomParent.to_string(), "zoom-parent");
    }

    #[test]
    fn mode_and_handle_prefixes() {
        assert_eq!(Mode::Relative.prefix(), "rel");
        assert_eq!(Mode::Absolute.prefix(), "abs");
        assert_eq!(ResizeHandle::Absolute.prefix(), "abs");
        assert_eq!(ResizeHandle::TopLeft.prefix(), "top_left");
        assert_eq!(ResizeHandle::BottomRight.prefix(), "bottom_right");
    }

    #[test]
    fn error_messages() {
        let err = Error::CommandFailed("could not locate space".into());
        assert_eq!(err.to_string(), "could not locate space");

        let err = Error::NotImplemented("rule --add");
        assert_eq!(err.to_string(), "rule --add is not implemented");

        let err = Error::SchemaMismatch { entity: "Space" };
        assert!(err.to_string().contains("Space"));
    }
}
