use crate::client::{opt_token, Yabai};
use crate::error::Result;
use crate::invoke::Category;
use crate::selector::{
    Axis, Layout, Mode, Padding, Rotation, SpaceMoveTarget, SpaceSel, SpaceToggle,
};

impl Yabai {
    /// Focus the given space.
    pub async fn focus_space(&self, target: SpaceSel) -> Result<()> {
        self.run(
            Category::Space,
            vec!["--focus".to_string(), target.to_string()],
        )
        .await
    }

    /// Create a new space on the current display.
    pub async fn create_space(&self) -> Result<()> {
        self.run(Category::Space, vec!["--create".to_string()]).await
    }

    /// Destroy the given space, or the current one if `target` is `None`.
    pub async fn destroy_space(&self, target: Option<SpaceSel>) -> Result<()> {
        self.run(
            Category::Space,
            vec![opt_token(&target), "--destroy".to_string()],
        )
        .await
    }

    /// Move a space to another index on its display.
    pub async fn move_space(
        &self,
        to: SpaceMoveTarget,
        target: Option<SpaceSel>,
    ) -> Result<()> {
        self.run(
            Category::Space,
            vec![opt_token(&target), "--move".to_string(), to.to_string()],
        )
        .await
    }

    /// Send a space to the display with the given arrangement index.
    pub async fn send_space_to_display(
        &self,
        display: u32,
        target: Option<SpaceSel>,
    ) -> Result<()> {
        self.run(
            Category::Space,
            vec![
                opt_token(&target),
                "--display".to_string(),
                display.to_string(),
            ],
        )
        .await
    }

    /// Label a space so it can be addressed by name.
    pub async fn label_space(&self, target: SpaceSel, label: &str) -> Result<()> {
        self.run(
            Category::Space,
            vec![target.to_string(), "--label".to_string(), label.to_string()],
        )
        .await
    }

    /// Balance all windows on a space to occupy equal area.
    pub async fn balance_space(&self, target: Option<SpaceSel>) -> Result<()> {
        self.run(
            Category::Space,
            vec![opt_token(&target), "--balance".to_string()],
        )
        .await
    }

    /// Flip the window tree along the given axis.
    pub async fn flip_space(&self, axis: Axis, target: Option<SpaceSel>) -> Result<()> {
        self.run(
            Category::Space,
            vec![
                opt_token(&target),
                "--mirror".to_string(),
                format!("{axis}-axis"),
            ],
        )
        .await
    }

    /// Rotate the window tree clockwise.
    pub async fn rotate_space(
        &self,
        rotation: Rotation,
        target: Option<SpaceSel>,
    ) -> Result<()> {
        self.run(
            Category::Space,
            vec![
                opt_token(&target),
                "--rotate".to_string(),
                rotation.to_string(),
            ],
        )
        .await
    }

    /// Set the layout of a space.
    pub async fn set_space_layout(
        &self,
        layout: Layout,
        target: Option<SpaceSel>,
    ) -> Result<()> {
        self.run(
            Category::Space,
            vec![
                opt_token(&target),
                "--layout".to_string(),
                layout.to_string(),
            ],
        )
        .await
    }

    /// Toggle padding or gap on a space.
    pub async fn toggle_space(
        &self,
        what: SpaceToggle,
        target: Option<SpaceSel>,
    ) -> Result<()> {
        self.run(
            Category::Space,
            vec![opt_token(&target), "--toggle".to_string(), what.to_string()],
        )
        .await
    }

    /// Change the padding of a space. Sides left at their `Default` are
    /// sent as 0. Serialized as `rel|abs:top:bottom:left:right`.
    pub async fn set_space_padding(
        &self,
        mode: Mode,
        padding: Padding,
        target: Option<SpaceSel>,
    ) -> Result<()> {
        let query = format!(
            "{}:{}:{}:{}:{}",
            mode.prefix(),
            padding.top,
            padding.bottom,
            padding.left,
            padding.right
        );
        self.run(
            Category::Space,
            vec![opt_token(&target), "--padding".to_string(), query],
        )
        .await
    }

    /// Change the window gap of a space. Serialized as `rel|abs:gap`.
    pub async fn set_space_gap(
        &self,
        mode: Mode,
        gap: i32,
        target: Option<SpaceSel>,
    ) -> Result<()> {
        let query = format!("{}:{}", mode.prefix(), gap);
        self.run(
            Category::Space,
            vec![opt_token(&target), "--gap".to_string(), query],
        )
        .await
    }
}
