use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Receipt output error: {0}")]
    ReceiptOutput(#[from] io::Error),
}

pub type BillingResult<T> = Result<T, BillingError>;
