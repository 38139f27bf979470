//! Selector and parameter types for the command modules.
//!
//! Each selector is a closed sum of the positional keywords yabai accepts
//! plus a numeric id or label, with `Display` giving its command-line form.
//! Optional selectors stay `Option<...>` in the API; they are rendered to
//! the empty-string sentinel only at the argument-building boundary, where
//! the client filters them out.

use std::fmt;

/// Display selector: positional keyword or arrangement index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySel {
    Recent,
    Prev,
    Next,
    Index(u32),
}

impl fmt::Display for DisplaySel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplaySel::Recent => f.write_str("recent"),
            DisplaySel::Prev => f.write_str("prev"),
            DisplaySel::Next => f.write_str("next"),
            DisplaySel::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Space selector: positional keyword, mission-control index or label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceSel {
    Recent,
    Prev,
    Next,
    Index(u32),
    Label(String),
}

impl fmt::Display for SpaceSel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceSel::Recent => f.write_str("recent"),
            SpaceSel::Prev => f.write_str("prev"),
            SpaceSel::Next => f.write_str("next"),
            SpaceSel::Index(i) => write!(f, "{i}"),
            SpaceSel::Label(label) => f.write_str(label),
        }
    }
}

/// Where to move a space within its display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceMoveTarget {
    Prev,
    Next,
    Index(u32),
}

impl fmt::Display for SpaceMoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceMoveTarget::Prev => f.write_str("prev"),
            SpaceMoveTarget::Next => f.write_str("next"),
            SpaceMoveTarget::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Relative placement used by window focus/swap/warp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    North,
    East,
    South,
    West,
    Prev,
    Next,
    First,
    Last,
    Recent,
    Mouse,
}

impl Place {
    pub fn as_str(self) -> &'static str {
        match self {
            Place::North => "north",
            Place::East => "east",
            Place::South => "south",
            Place::West => "west",
            Place::Prev => "prev",
            Place::Next => "next",
            Place::First => "first",
            Place::Last => "last",
            Place::Recent => "recent",
            Place::Mouse => "mouse",
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mirror axis. Serialized with a literal `-axis` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Clockwise rotation of the window tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Deg90,
    Deg180,
    Deg270,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Deg90 => f.write_str("90"),
            Rotation::Deg180 => f.write_str("180"),
            Rotation::Deg270 => f.write_str("270"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Bsp,
    Float,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Bsp => f.write_str("bsp"),
            Layout::Float => f.write_str("float"),
        }
    }
}

/// What `space --toggle` toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceToggle {
    Padding,
    Gap,
}

impl fmt::Display for SpaceToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceToggle::Padding => f.write_str("padding"),
            SpaceToggle::Gap => f.write_str("gap"),
        }
    }
}

/// Relative adds to the current value, absolute replaces it. yabai takes
/// the mode truncated to its first three characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Relative,
    Absolute,
}

impl Mode {
    pub fn prefix(self) -> &'static str {
        match self {
            Mode::Relative => "rel",
            Mode::Absolute => "abs",
        }
    }
}

/// Resize anchor: `absolute` truncates to `abs`, the edge and corner
/// keywords pass through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    Absolute,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    pub fn prefix(self) -> &'static str {
        match self {
            ResizeHandle::Absolute => "abs",
            ResizeHandle::Top => "top",
            ResizeHandle::Bottom => "bottom",
            ResizeHandle::Left => "left",
            ResizeHandle::Right => "right",
            ResizeHandle::TopLeft => "top_left",
            ResizeHandle::TopRight => "top_right",
            ResizeHandle::BottomLeft => "bottom_left",
            ResizeHandle::BottomRight => "bottom_right",
        }
    }
}

/// Whether a window is sent to a display or a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocateKind {
    Display,
    Space,
}

impl RelocateKind {
    pub fn flag(self) -> &'static str {
        match self {
            RelocateKind::Display => "--display",
            RelocateKind::Space => "--space",
        }
    }
}

/// Destination for window relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocateTarget {
    Prev,
    Next,
    First,
    Last,
    Index(u32),
}

impl fmt::Display for RelocateTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelocateTarget::Prev => f.write_str("prev"),
            RelocateTarget::Next => f.write_str("next"),
            RelocateTarget::First => f.write_str("first"),
            RelocateTarget::Last => f.write_str("last"),
            RelocateTarget::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Zoom toggles for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomKind {
    ZoomParent,
    ZoomFullscreen,
    NativeFullscreen,
}

impl fmt::Display for ZoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoomKind::ZoomParent => f.write_str("zoom-parent"),
            ZoomKind::ZoomFullscreen => f.write_str("zoom-fullscreen"),
            ZoomKind::NativeFullscreen => f.write_str("native-fullscreen"),
        }
    }
}

/// Togglable window properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowProperty {
    Float,
    Border,
    Sticky,
}

impl fmt::Display for WindowProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowProperty::Float => f.write_str("float"),
            WindowProperty::Border => f.write_str("border"),
            WindowProperty::Sticky => f.write_str("sticky"),
        }
    }
}

/// Per-side padding. Omitted sides default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

/// Coordinate or size delta. Omitted components default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Grid placement: rows:cols:start-x:start-y:width:height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
    pub start_x: u32,
    pub start_y: u32,
    pub width: u32,
    pub height: u32,
}
