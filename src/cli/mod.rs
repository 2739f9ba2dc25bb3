//! CLI module for gofer - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for one-shot dispatch,
//! direct calculation, tool listing, and the interactive REPL.

pub mod commands;

pub use commands::Cli;
