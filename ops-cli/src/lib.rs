//! Interactive admission CLI
//!
//! Presents the patient-type menu, reads one selection and runs a single
//! admission with the matching sample patient and billing strategy.
//!
//! ```bash
//! hospital-admission                    # interactive
//! echo 1 | hospital-admission --no-pause
//! hospital-admission --verbose --log-format json
//! ```

pub mod cli;
pub mod menu;
pub mod runner;

pub use cli::*;
pub use menu::*;
pub use runner::*;
