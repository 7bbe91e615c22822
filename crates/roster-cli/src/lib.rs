//! Library components of the roster CLI.

pub mod commands;
pub mod logging;
