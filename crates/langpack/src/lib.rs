//! # Langpack
//!
//! Command-line front-end over the langpack crates: lists installed language
//! packs, resolves strings, switches and persists the active language, and
//! renders the translated title screen.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::App;
pub use cli::{Cli, Command};
pub use error::{AppError, AppResult};
