//! Core types for deptree
//!
//! This module holds the error vocabulary shared by the boundary layers
//! (configuration, snapshot loading, CLI). The reconciliation core itself
//! lives in [`crate::resolver`] and never produces errors.
//!
//! # Error Handling Pattern
//!
//! ```rust,no_run
//! use deptree_cli::core::{DeptreeError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn load() -> Result<()> {
//!     Err(DeptreeError::InvalidFormat {
//!         format: "yaml".to_string(),
//!     }
//!     .into())
//! }
//!
//! if let Err(e) = load() {
//!     user_friendly_error(e).display();
//! }
//! ```

pub mod error;

pub use error::{DeptreeError, ErrorContext, user_friendly_error};
