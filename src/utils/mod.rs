//! Utility Functions
//!
//! User-friendly error formatting for failures that end the run.
//!
//! ```rust
//! use clipscope::utils::format_user_error;
//!
//! let err = anyhow::anyhow!("backend error: failed to run xclip");
//! eprintln!("{}", format_user_error(&err));
//! ```

pub mod errors;

pub use errors::format_user_error;
