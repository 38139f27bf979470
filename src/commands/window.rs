use crate::client::{opt_token, Yabai};
use crate::error::Result;
use crate::invoke::Category;
use crate::selector::{
    GridSpec, Mode, Place, Point, RelocateKind, RelocateTarget, ResizeHandle, WindowProperty,
    ZoomKind,
};

impl Yabai {
    /// Focus a window relative to the target, or to the current window if
    /// `target` is `None`.
    ///
    /// Caveat: yabai's handling of a window selector combined with a
    /// placement keyword is not well documented; verify against a live
    /// yabai before relying on the combined form.
    pub async fn focus_window(&self, place: Place, target: Option<u32>) -> Result<()> {
        self.run(
            Category::Window,
            vec![opt_token(&target), "--focus".to_string(), place.to_string()],
        )
        .await
    }

    /// Swap a window with the one at the given placement.
    pub async fn swap_window(&self, place: Place, target: Option<u32>) -> Result<()> {
        self.run(
            Category::Window,
            vec![opt_token(&target), "--swap".to_string(), place.to_string()],
        )
        .await
    }

    /// Re-insert a window at the given placement, splitting the node there.
    pub async fn warp_window(&self, place: Place, target: Option<u32>) -> Result<()> {
        self.run(
            Category::Window,
            vec![opt_token(&target), "--warp".to_string(), place.to_string()],
        )
        .await
    }

    /// Move a window. Serialized as `rel|abs:x:y`; omitted components of
    /// `to` default to 0.
    pub async fn move_window(
        &self,
        mode: Mode,
        to: Point,
        target: Option<u32>,
    ) -> Result<()> {
        let query = format!("{}:{}:{}", mode.prefix(), to.x, to.y);
        self.run(
            Category::Window,
            vec![opt_token(&target), "--move".to_string(), query],
        )
        .await
    }

    /// Resize a window from the given handle. Serialized as
    /// `abs|<handle>:x:y`.
    pub async fn resize_window(
        &self,
        handle: ResizeHandle,
        size: Point,
        target: Option<u32>,
    ) -> Result<()> {
        let query = format!("{}:{}:{}", handle.prefix(), size.x, size.y);
        self.run(
            Category::Window,
            vec![opt_token(&target), "--resize".to_string(), query],
        )
        .await
    }

    /// Snap a window into a cell of a virtual grid. Serialized as
    /// `rows:cols:start-x:start-y:width:height`.
    pub async fn grid_window(&self, grid: GridSpec, target: Option<u32>) -> Result<()> {
        let query = format!(
            "{}:{}:{}:{}:{}:{}",
            grid.rows, grid.cols, grid.start_x, grid.start_y, grid.width, grid.height
        );
        self.run(
            Category::Window,
            vec![opt_token(&target), "--grid".to_string(), query],
        )
        .await
    }

    /// Send a window to another display or space.
    pub async fn relocate_window(
        &self,
        kind: RelocateKind,
        to: RelocateTarget,
        target: Option<u32>,
    ) -> Result<()> {
        self.run(
            Category::Window,
            vec![opt_token(&target), kind.flag().to_string(), to.to_string()],
        )
        .await
    }

    /// Toggle a zoom state on a window.
    pub async fn zoom_window(&self, kind: ZoomKind, target: Option<u32>) -> Result<()> {
        self.run(
            Category::Window,
            vec![opt_token(&target), "--toggle".to_string(), kind.to_string()],
        )
        .await
    }

    /// Toggle the split orientation of a window's parent node.
    pub async fn toggle_window_split(&self, target: Option<u32>) -> Result<()> {
        self.run(
            Category::Window,
            vec![
                opt_token(&target),
                "--toggle".to_string(),
                "split".to_string(),
            ],
        )
        .await
    }

    /// Toggle a window property (float, border, sticky).
    pub async fn toggle_window_property(
        &self,
        property: WindowProperty,
        target: Option<u32>,
    ) -> Result<()> {
        self.run(
            Category::Window,
            vec![
                opt_token(&target),
                "--toggle".to_string(),
                property.to_string(),
            ],
        )
        .await
    }
}
