//! gamehub CLI library
//!
//! Exposes the route table and guarded navigation for use in tests.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod navigate;
pub(crate) mod route;


pub use error::{CliError, CliErrorResult};
pub use navigate::{Navigation, navigate};
pub use route::Route;
