//! Billing for hospital admissions
//!
//! Provides the billing half of an admission:
//! - Patient kinds and their fixed bill rules
//! - Billing strategies (fee adjustments applied to a computed bill)
//! - Strategy application
//! - Printable receipts

pub mod service;
pub mod models;
pub mod strategy;
pub mod receipt;
pub mod error;

pub use service::*;
pub use models::*;
pub use strategy::*;
pub use receipt::*;
pub use error::*;

pub use rust_decimal::Decimal;
