use crate::client::Yabai;
use crate::error::Result;
use crate::invoke::Category;
use crate::types::Signal;
use crate::validator::{array_of, is_signal};

impl Yabai {
    /// Register a signal: run `action` when `event` fires. An optional
    /// label makes the signal addressable for removal.
    pub async fn add_signal(
        &self,
        event: &str,
        action: &str,
        label: Option<&str>,
    ) -> Result<()> {
        let mut args = vec![
            "--add".to_string(),
            format!("event={event}"),
            format!("action={action}"),
        ];
        if let Some(label) = label {
            args.push(format!("label={label}"));
        }
        self.run(Category::Signal, args).await
    }

    /// Remove the signal with the given label.
    pub async fn remove_signal(&self, label: &str) -> Result<()> {
        self.run(
            Category::Signal,
            vec!["--remove".to_string(), label.to_string()],
        )
        .await
    }

    /// List registered signals.
    pub async fn list_signals(&self) -> Result<Vec<Signal>> {
        self.query(
            Category::Signal,
            vec!["--list".to_string()],
            array_of(is_signal),
            "Signal",
        )
        .await
    }
}
