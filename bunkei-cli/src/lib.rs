//! bunkei CLI library
//!
//! Command-line front end for the bunkei sentence-structure classifier and
//! rewriter. The binary is the external collaborator the core expects: it
//! reads raw text from files or stdin, calls into `bunkei-core`, and renders
//! whatever comes back.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod tokens;

pub use error::{CliError, CliResult};
