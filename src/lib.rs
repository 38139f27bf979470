pub mod client;
pub mod commands;
pub mod error;
pub mod invoke;
pub mod parse;
pub mod selector;
pub mod types;
pub mod validator;

pub use client::Yabai;
pub use error::{Error, Result};
pub use invoke::{Category, Invoker, ProcessInvoker};
pub use selector::{
    Axis, DisplaySel, GridSpec, Layout, Mode, Padding, Place, Point, RelocateKind,
    RelocateTarget, ResizeHandle, Rotation, SpaceMoveTarget, SpaceSel, SpaceToggle,
    WindowProperty, ZoomKind,
};
pub use types::{Display, Frame, Rule, Signal, Space, Window};
