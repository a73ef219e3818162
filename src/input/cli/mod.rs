//! Headless command line front end.

pub mod args;
pub mod commands;
