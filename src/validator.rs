//! Structural validators for yabai query output.
//!
//! Each validator is a pure predicate over a `serde_json::Value`: true only
//! if every required field is present with the correct primitive type and
//! every nested structure validates. No coercion - a numeric string is not
//! a number. Optional fields must be absent or correctly typed, never
//! defaulted here.

use serde_json::{Map, Value};

/// Lift an element validator to a validator over JSON arrays. Every element
/// must pass.
pub fn array_of<F>(element: F) -> impl Fn(&Value) -> bool
where
    F: Fn(&Value) -> bool,
{
    move |value| match value.as_array() {
        Some(items) => items.iter().all(&element),
        None => false,
    }
}

fn number(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).map(Value::is_number).unwrap_or(false)
}

fn string(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).map(Value::is_string).unwrap_or(false)
}

fn boolean(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).map(Value::is_boolean).unwrap_or(false)
}

/// Absent-or-boolean.
fn opt_boolean(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).map(Value::is_boolean).unwrap_or(true)
}

fn number_array(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key)
        .map(|v| array_of(Value::is_number)(v))
        .unwrap_or(false)
}

fn frame(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).map(is_frame).unwrap_or(false)
}

fn is_frame(value: &Value) -> bool {
    match value.as_object() {
        Some(obj) => {
            number(obj, "x") && number(obj, "y") && number(obj, "w") && number(obj, "h")
        }
        None => false,
    }
}

pub fn is_space(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    number(obj, "id")
        && string(obj, "uuid")
        && number(obj, "index")
        && string(obj, "label")
        && string(obj, "type")
        && number(obj, "display")
        && number_array(obj, "windows")
        && number(obj, "first-window")
        && number(obj, "last-window")
        && boolean(obj, "has-focus")
        && boolean(obj, "is-visible")
        && boolean(obj, "is-native-fullscreen")
}

pub fn is_display(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    number(obj, "id")
        && string(obj, "uuid")
        && string(obj, "index")
        && frame(obj, "frame")
        && number_array(obj, "spaces")
}

pub fn is_window(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    number(obj, "id")
        && number(obj, "pid")
        && string(obj, "app")
        && string(obj, "title")
        && frame(obj, "frame")
        && string(obj, "role")
        && string(obj, "subrole")
        && number(obj, "display")
        && number(obj, "space")
        && number(obj, "level")
        && number(obj, "opacity")
        && string(obj, "split-type")
        && string(obj, "split-child")
        && number(obj, "stack-index")
        && boolean(obj, "can-move")
        && boolean(obj, "can-resize")
        && boolean(obj, "has-focus")
        && boolean(obj, "has-shadow")
        && boolean(obj, "has-border")
        && boolean(obj, "has-parent-zoom")
        && boolean(obj, "has-fullscreen-zoom")
        && boolean(obj, "is-native-fullscreen")
        && boolean(obj, "is-visible")
        && boolean(obj, "is-minimized")
        && boolean(obj, "is-hidden")
        && boolean(obj, "is-floating")
        && boolean(obj, "is-sticky")
        && boolean(obj, "is-topmost")
        && boolean(obj, "is-grabbed")
}

pub fn is_rule(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    number(obj, "index")
        && string(obj, "label")
        && string(obj, "app")
        && string(obj, "title")
        && string(obj, "role")
        && string(obj, "subrole")
        && number(obj, "display")
        && number(obj, "space")
        && boolean(obj, "follow_space")
        && number(obj, "opacity")
        && opt_boolean(obj, "manage")
        && opt_boolean(obj, "sticky")
        && opt_boolean(obj, "mouse_follows_focus")
        && string(obj, "layer")
        && opt_boolean(obj, "border")
        && opt_boolean(obj, "native-fullscreen")
        && string(obj, "grid")
}

pub fn is_signal(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    number(obj, "index")
        && string(obj, "label")
        && string(obj, "app")
        && string(obj, "title")
        && string(obj, "event")
        && string(obj, "action")
}
