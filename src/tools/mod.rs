//! Built-in tools and the tool contract
//!
//! Every capability the agent can dispatch to implements the [`Tool`]
//! trait: a unique name, a human-readable description, and a synchronous
//! invoke taking at most one string argument. Tools are owned by the
//! registry, built once at agent construction.

mod calculator;
mod clock;
mod random;
mod registry;
mod weather;

pub use calculator::CalculatorTool;
pub use clock::ClockTool;
pub use random::RandomTool;
pub use registry::ToolRegistry;
pub use weather::{DEFAULT_LOCATION, WeatherTool};

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// A named capability the agent can invoke for a task
pub trait Tool: Send + Sync {
    /// Unique tool name, referenced by routing rules
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Invoke the tool with an optional string argument
    fn invoke(&self, args: Option<&str>) -> Result<ToolOutput>;
}

/// Value produced by a successful tool invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Text(String),
    Integer(i64),
    Number(f64),
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolOutput::Text(s) => write!(f, "{}", s),
            ToolOutput::Integer(n) => write!(f, "{}", n),
            ToolOutput::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

/// Render integral values without a trailing `.0`, so `2 + 2 * 3` prints `8`.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
