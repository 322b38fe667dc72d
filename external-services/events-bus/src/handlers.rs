// Event handlers
use std::cell::RefCell;
use std::io::{self, Write};

use crate::error::Result;
use crate::event::Event;

/// Receives events published on the bus
pub trait EventHandler {
    fn handle_event(&self, event: &Event) -> Result<()>;
}

impl<F> EventHandler for F
where
    F: Fn(&Event) -> Result<()>,
{
    fn handle_event(&self, event: &Event) -> Result<()> {
        self(event)
    }
}

/// Line written for each notification
pub fn notification_line(event: &Event) -> String {
    format!("[NOTIFICATION] {}", event.message)
}

/// Writes every notification as a `[NOTIFICATION]` line
pub struct ConsoleHandler<W: Write = io::Stdout> {
    out: RefCell<W>,
}

impl ConsoleHandler {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleHandler<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> EventHandler for ConsoleHandler<W> {
    fn handle_event(&self, event: &Event) -> Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", notification_line(event))?;
        out.flush()?;
        Ok(())
    }
}
