use billing_service::BillingError;
use events_bus::EventBusError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Billing failed: {0}")]
    Billing(#[from] BillingError),

    #[error("Admission notification failed: {0}")]
    Notification(#[from] EventBusError),
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
