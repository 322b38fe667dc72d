//! In-process notification channel for the admission engine
//!
//! A synchronous publish/subscribe point:
//! - Handlers are registered once, at startup
//! - `publish` calls every handler in subscription order on the caller's thread
//! - A failing handler stops delivery and its error is returned to the publisher
//!
//! # Example
//!
//! ```rust
//! use events_bus::{Event, EventBus};
//!
//! let mut bus = EventBus::new();
//! bus.subscribe(|event: &Event| {
//!     println!("Received: {}", event.message);
//!     Ok(())
//! });
//!
//! bus.publish(&Event::new("patient.admitted", "Patient John admitted successfully."))?;
//! # Ok::<(), events_bus::EventBusError>(())
//! ```

pub mod bus;
pub mod event;
pub mod handlers;
pub mod error;

pub use bus::*;
pub use event::*;
pub use handlers::*;
pub use error::*;
