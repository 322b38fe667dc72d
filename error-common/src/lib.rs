//! Common error handling for the hospital admission engine
//!
//! Each crate keeps its own `thiserror` enum for the failures it can
//! produce. Binaries fold those into [`RustCareError`], which carries a
//! stable error code for reporting.
//!
//! # Error Categories
//!
//! - **InputError**: malformed operator input (fatal)
//! - **AdmissionError**: an admission that could not complete (wraps
//!   `workflow_engine::WorkflowError`, source chain kept)
//! - **ConfigError**: logging or command-line configuration problems
//! - **IoError**: terminal read/write failures
//!
//! # Example
//!
//! ```rust
//! use error_common::{log_error, RustCareError};
//!
//! fn parse_selection(line: &str) -> error_common::Result<i64> {
//!     line.trim()
//!         .parse()
//!         .map_err(|_| RustCareError::InputError(format!("'{}' is not a number", line.trim())))
//! }
//!
//! if let Err(e) = parse_selection("abc") {
//!     log_error("menu", &e);
//!     assert_eq!(e.code(), error_common::codes::input::MALFORMED_SELECTION);
//! }
//! ```

pub mod types;
pub mod codes;

pub use types::*;
