//! Core library components.
//!
//! Configuration, the data model, sealing, and the GitHub client. Nothing
//! here prints to the terminal.

pub mod config;
pub mod constants;
pub mod crypto;
pub mod domain;
pub mod github;
pub mod validation;
