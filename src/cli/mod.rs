//! Command-line interface
//!
//! Argument definitions and the command handlers behind them.

pub mod args;
pub mod commands;
