use crate::client::Yabai;
use crate::error::Result;
use crate::invoke::Category;
use crate::selector::DisplaySel;

impl Yabai {
    /// Focus the given display.
    pub async fn focus_display(&self, target: DisplaySel) -> Result<()> {
        self.run(
            Category::Display,
            vec!["--focus".to_string(), target.to_string()],
        )
        .await
    }
}
