//! Patient admission workflow for the hospital admission engine
//!
//! An admission runs four steps, strictly in order:
//! 1. Calculate the patient's bill from their category
//! 2. Apply the selected billing strategy
//! 3. Write the receipt
//! 4. Publish a `patient.admitted` notification
//!
//! # Example
//!
//! ```rust
//! use billing_service::{BillingStrategy, Patient};
//! use events_bus::{ConsoleHandler, EventBus};
//! use workflow_engine::AdmissionWorkflow;
//!
//! let mut bus = EventBus::new();
//! bus.subscribe_handler(ConsoleHandler::stdout());
//!
//! let workflow = AdmissionWorkflow::new(bus);
//! let record = workflow.admit_patient(
//!     Patient::in_patient(1, "John", 3),
//!     BillingStrategy::Insurance,
//!     &mut std::io::stdout(),
//! )?;
//! assert_eq!(record.final_bill, billing_service::Decimal::from(4200));
//! # Ok::<(), workflow_engine::WorkflowError>(())
//! ```

pub mod admission;
pub mod step;
pub mod error;

pub use admission::*;
pub use step::*;
pub use error::*;
