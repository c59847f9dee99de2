//! core
//!
//! Core domain types and option resolution for autotag.
//!
//! # Modules
//!
//! - [`options`] - Option record, shared flag grammar, command resolver
//! - [`config`] - Defaults file discovery and loading
//! - [`settings`] - Effective settings and validated commands
//! - [`types`] - Strong types: StageName
//!
//! # Design Principles
//!
//! - Parsing is a pure function of its input; nothing here keeps state
//! - Strong typing prevents invalid states at compile time
//! - Defaults are applied once, in [`settings`], never while parsing

pub mod config;
pub mod options;
pub mod settings;
pub mod types;
