//! Gofer - a keyword-routed errand agent
//!
//! Gofer takes a free-text task string, runs it through an ordered rule
//! table, and dispatches it to exactly one built-in tool (weather,
//! calculator, random, clock). No match yields a defined fallback outcome.

pub mod agent;
pub mod calc;
pub mod config;
pub mod error;
pub mod ports;
pub mod tools;

pub use agent::{Agent, Outcome};
pub use error::{GoferError, Result};
