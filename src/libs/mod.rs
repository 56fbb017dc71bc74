//! Core library modules for the clk application.
//!
//! ## Features
//!
//! - **Configuration**: API key and endpoint from the environment or an env file
//! - **Transport**: `reqwest` implementation of the API transport seam
//! - **Task Switching**: Resolution of name, id and "previous task" requests
//! - **Presentation**: Messages, time formatting and table rendering

pub mod config;
pub mod formatter;
pub mod http;
pub mod messages;
pub mod resolver;
pub mod view;
