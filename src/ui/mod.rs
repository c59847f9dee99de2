//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! Everything the user is meant to read goes through this module. Tracing
//! output is for diagnosing autotag itself and is configured separately in
//! [`crate::cli::logging`].

pub mod output;
