//! The client handle command modules hang off of.

use crate::error::Result;
use crate::invoke::{Category, Invoker, ProcessInvoker};
use crate::parse::parse;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Handle to the yabai command-line tool.
///
/// Holds no state besides the invoker: every call spawns one independent
/// child process, and concurrent calls run concurrently with no ordering
/// imposed by this crate.
#[derive(Clone)]
pub struct Yabai {
    invoker: Arc<dyn Invoker>,
}

impl Yabai {
    /// Client driving the `yabai` binary on PATH.
    pub fn new() -> Self {
        Self::with_invoker(Arc::new(ProcessInvoker::new()))
    }

    /// Client driving a specific binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self::with_invoker(Arc::new(ProcessInvoker::with_program(program)))
    }

    /// Client with a substituted invoker (used by tests to capture argument
    /// vectors without spawning processes).
    pub fn with_invoker(invoker: Arc<dyn Invoker>) -> Self {
        Self { invoker }
    }

    /// Single choke point between command functions and the invoker.
    ///
    /// Empty tokens stand for omitted optional selectors and are dropped
    /// here, so they never reach yabai as literal empty positional
    /// arguments.
    pub(crate) async fn message(&self, category: Category, args: Vec<String>) -> Result<String> {
        let args: Vec<String> = args.into_iter().filter(|arg| !arg.is_empty()).collect();
        self.invoker.invoke(category, &args).await
    }

    /// Write operation: success output is discarded.
    pub(crate) async fn run(&self, category: Category, args: Vec<String>) -> Result<()> {
        self.message(category, args).await.map(|_| ())
    }

    /// Query operation: stdout is parsed and shape-checked.
    pub(crate) async fn query<T, V>(
        &self,
        category: Category,
        args: Vec<String>,
        validator: V,
        entity: &'static str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        V: Fn(&Value) -> bool,
    {
        let stdout = self.message(category, args).await?;
        parse(&stdout, validator, entity)
    }
}

impl Default for Yabai {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an optional selector to its positional token, using the empty
/// string as the "use the currently selected entity" sentinel.
pub(crate) fn opt_token<T: ToString>(sel: &Option<T>) -> String {
    sel.as_ref().map(T::to_string).unwrap_or_default()
}
