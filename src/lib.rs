//! # clk - ClickUp time tracking from the command line
//!
//! A small client for ClickUp's time tracking API: see what is running,
//! list assigned tasks, start a timer on a task, stop it, and jump back to
//! the task that was tracked before.
//!
//! ## Features
//!
//! - **Timer Control**: `status`, `switch <id>`, `meetings`, `stop`
//! - **Task Switching**: `back` resumes the previous task from recent history
//! - **Task Listing**: `tasks` shows open tasks assigned to you
//! - **History**: `recent` shows the latest time entries as a table
//!
//! Every invocation starts cold: ClickUp is the only source of truth and
//! nothing is persisted between runs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
