//! Tool registry - name to tool mapping
//!
//! Built once at agent construction and never mutated afterwards, so the
//! read path is plain `&self` lookups and safe for concurrent callers.

use std::collections::HashMap;

use crate::error::{GoferError, Result};

use super::Tool;

/// Holds the agent's tools, keyed by unique name
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool under its own name.
    ///
    /// Fails with `DuplicateTool` if the name is taken; the registry is
    /// left unchanged in that case.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<()> {
        let name = tool.name();
        if self.tools.contains_key(name) {
            return Err(GoferError::DuplicateTool(name.to_string()));
        }
        self.tools.insert(name.to_string(), tool);
        Ok(())
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Result<&dyn Tool> {
        self.tools
            .get(name)
            .map(|t| t.as_ref())
            .ok_or_else(|| GoferError::UnknownTool(name.to_string()))
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List all tool names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over all tools
    pub fn all(&self) -> impl Iterator<Item = &dyn Tool> {
        self.tools.values().map(|t| t.as_ref())
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
