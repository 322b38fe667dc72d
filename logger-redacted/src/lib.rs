//! Logging for the hospital admission engine with patient data redaction
//!
//! Patient names and contact details are protected health information and
//! must not reach log output in clear text. [`PiiRedactor`] turns them into
//! short hash tokens so that log lines about the same patient still
//! correlate.
//!
//! - **Patient names**: John → PATIENT[hash]
//! - **Email Addresses**: user@example.com → EMAIL[hash]
//! - **Phone Numbers**: (555) 123-4567 → PHONE[hash]
//! - **SSN**: 123-45-6789 → SSN[hash]
//!
//! # Example
//!
//! ```rust
//! use logger_redacted::{init_logging, LoggerConfig, PiiRedactor};
//!
//! init_logging(&LoggerConfig::default())?;
//!
//! let redactor = PiiRedactor::default();
//! tracing::info!(patient = %redactor.redact_name("John"), "Patient admitted");
//! # Ok::<(), logger_redacted::LoggerError>(())
//! ```

pub mod redactor;
pub mod macros;
pub mod config;
pub mod init;
pub mod error;

pub use redactor::*;
pub use config::*;
pub use init::*;
pub use error::*;
