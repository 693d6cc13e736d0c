//! Command handlers.  One module per subcommand; dispatch lives in `main.rs`.

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;
