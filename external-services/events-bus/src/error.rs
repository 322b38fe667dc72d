use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventBusError {
    #[error("Event handler failed: {0}")]
    HandlerError(String),

    #[error("Event output failed: {0}")]
    OutputError(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, EventBusError>;
