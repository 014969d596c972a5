//! Terminal front end for the tic-tac-toe engine.
//!
//! - **Config**: TOML settings for the session ([`TerminalConfig`])
//! - **Session**: reads moves, filters claimed cells, draws the board, and
//!   announces wins ([`Session`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;

pub use config::{ConfigError, ConfigErrorKind, TerminalConfig};
pub use session::{Rejection, Session, SessionEnd, validate_moves, write_lines};
