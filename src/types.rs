//! Entities returned by yabai queries.
//!
//! These are plain pass-through records: constructed fresh from each
//! invocation's output, never cached or mutated by this crate. Field sets
//! mirror the yabai JSON schemas one to one.

use serde::{Deserialize, Serialize};

/// Rectangular frame of a display or window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Space {
    pub id: u32,
    pub uuid: String,
    pub index: u32,
    pub label: String,
    /// Space type as reported by yabai ("bsp", "float", ...). Named `kind`
    /// because `type` is reserved.
    #[serde(rename = "type")]
    pub kind: String,
    /// Id of the owning display.
    pub display: u32,
    /// Ids of windows on this space, in order.
    pub windows: Vec<u32>,
    pub first_window: u32,
    pub last_window: u32,
    pub has_focus: bool,
    pub is_visible: bool,
    pub is_native_fullscreen: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Display {
    pub id: u32,
    pub uuid: String,
    /// yabai reports the display index as a string.
    pub index: String,
    pub frame: Frame,
    /// Ids of spaces owned by this display.
    pub spaces: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Window {
    pub id: u32,
    pub pid: u32,
    pub app: String,
    pub title: String,
    pub frame: Frame,
    /// Accessibility role (e.g. "AXWindow").
    pub role: String,
    pub subrole: String,
    pub display: u32,
    pub space: u32,
    /// Stacking level.
    pub level: i32,
    /// 0.0 - 1.0.
    pub opacity: f64,
    pub split_type: String,
    pub split_child: String,
    pub stack_index: i32,
    pub can_move: bool,
    pub can_resize: bool,
    pub has_focus: bool,
    pub has_shadow: bool,
    pub has_border: bool,
    pub has_parent_zoom: bool,
    pub has_fullscreen_zoom: bool,
    pub is_native_fullscreen: bool,
    pub is_visible: bool,
    pub is_minimized: bool,
    pub is_hidden: bool,
    pub is_floating: bool,
    pub is_sticky: bool,
    pub is_topmost: bool,
    pub is_grabbed: bool,
}

/// A registered window rule. yabai mixes snake_case and kebab-case keys
/// here, so only the one kebab field is renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub index: u32,
    pub label: String,
    pub app: String,
    pub title: String,
    pub role: String,
    pub subrole: String,
    pub display: u32,
    pub space: u32,
    pub follow_space: bool,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse_follows_focus: Option<bool>,
    pub layer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<bool>,
    #[serde(
        rename = "native-fullscreen",
        skip_serializing_if = "Option::is_none"
    )]
    pub native_fullscreen: Option<bool>,
    pub grid: String,
}

/// A registered event signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub index: u32,
    pub label: String,
    pub app: String,
    pub title: String,
    pub event: String,
    pub action: String,
}
