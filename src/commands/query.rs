use crate::client::Yabai;
use crate::error::Result;
use crate::invoke::Category;
use crate::types::{Display, Space, Window};
use crate::validator::{array_of, is_display, is_space, is_window};

impl Yabai {
    /// Query all spaces.
    pub async fn query_spaces(&self) -> Result<Vec<Space>> {
        self.query(
            Category::Query,
            vec!["--spaces".to_string()],
            array_of(is_space),
            "Space",
        )
        .await
    }

    /// Query all displays.
    pub async fn query_displays(&self) -> Result<Vec<Display>> {
        self.query(
            Category::Query,
            vec!["--displays".to_string()],
            array_of(is_display),
            "Display",
        )
        .await
    }

    /// Query all windows.
    pub async fn query_windows(&self) -> Result<Vec<Window>> {
        self.query(
            Category::Query,
            vec!["--windows".to_string()],
            array_of(is_window),
            "Window",
        )
        .await
    }
}
