use crate::client::Yabai;
use crate::error::{Error, Result};
use crate::invoke::Category;
use crate::types::Rule;
use crate::validator::{array_of, is_rule};

impl Yabai {
    /// Register a window rule.
    ///
    /// Not implemented: returns [`Error::NotImplemented`] without spawning
    /// a process.
    pub async fn add_rule(&self) -> Result<()> {
        Err(Error::NotImplemented("rule --add"))
    }

    /// Remove a window rule.
    ///
    /// Not implemented: returns [`Error::NotImplemented`] without spawning
    /// a process.
    pub async fn remove_rule(&self) -> Result<()> {
        Err(Error::NotImplemented("rule --remove"))
    }

    /// List registered rules.
    pub async fn list_rules(&self) -> Result<Vec<Rule>> {
        self.query(
            Category::Rule,
            vec!["--list".to_string()],
            array_of(is_rule),
            "Rule",
        )
        .await
    }
}
