//! # Registro CLI
//!
//! Command-line front-end for the participant registration stores.

pub mod admin;
pub mod commands;
pub mod interactive;
pub mod table;
