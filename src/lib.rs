//! # Staff Records
//!
//! A small record book of workers with:
//! - Year validation on insert
//! - A collection kept sorted by name
//! - Tenure queries
//! - XML persistence
//! - An interactive shell
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   Shell                      │
//! │        (Command parsing, Session loop)       │
//! └─────────────────────┬───────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────┐
//! │                   Staff                      │
//! │     (add / render / select / load / save)    │
//! └─────────────────────┬───────────────────────┘
//!                       │
//!                       ▼
//!                ┌─────────────┐
//!                │    Codec    │
//!                │    (XML)    │
//!                └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod worker;
pub mod codec;
pub mod staff;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StaffError, Result};
pub use config::Config;
pub use staff::{current_year, Staff};
pub use worker::Worker;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the staff record book
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
