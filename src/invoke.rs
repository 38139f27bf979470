//! Process invocation - the only side-effecting primitive in the crate.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt;
use tokio::process::Command;

/// Top-level yabai message category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Display,
    Space,
    Window,
    Rule,
    Signal,
    Query,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Display => "display",
            Category::Space => "space",
            Category::Window => "window",
            Category::Rule => "rule",
            Category::Signal => "signal",
            Category::Query => "query",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Executes one yabai message and returns its stdout text.
///
/// Command functions only ever talk to this trait, so tests substitute a
/// fake invoker and assert on the argument vector without spawning anything.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, category: Category, args: &[String]) -> Result<String>;
}

/// The real invoker: spawns one child process per call, no retry, no pooling.
pub struct ProcessInvoker {
    program: String,
}

impl ProcessInvoker {
    pub fn new() -> Self {
        Self {
            program: "yabai".to_string(),
        }
    }

    /// Use a binary other than `yabai` on PATH (e.g. an absolute path).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ProcessInvoker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Invoker for ProcessInvoker {
    async fn invoke(&self, category: Category, args: &[String]) -> Result<String> {
        tracing::debug!(category = %category, ?args, "invoking yabai");

        // `output()` waits for exit and drains both pipes, so no process
        // handle outlives the call on any path.
        let output = Command::new(&self.program)
            .arg("--message")
            .arg(category.as_str())
            .args(args)
            .output()
            .await
            .map_err(Error::Spawn)?;

        if !output.status.success() {
            return Err(Error::CommandFailed(
                String::from_utf8_lossy(&output.stderr).to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
