use crate::error::Result;
use crate::event::Event;
use crate::handlers::EventHandler;

/// Synchronous publish/subscribe channel.
///
/// Handlers run on the publisher's thread in the order they were
/// subscribed. Delivery stops at the first handler error, which is
/// returned from [`EventBus::publish`]; handlers after it are not called.
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Returns its position in delivery order.
    pub fn subscribe<F>(&mut self, handler: F) -> usize
    where
        F: Fn(&Event) -> Result<()> + 'static,
    {
        self.subscribe_handler(handler)
    }

    /// Register any [`EventHandler`]. Returns its position in delivery order.
    pub fn subscribe_handler<H>(&mut self, handler: H) -> usize
    where
        H: EventHandler + 'static,
    {
        let index = self.handlers.len();
        self.handlers.push(Box::new(handler));
        tracing::debug!(subscriber = index, "Event handler subscribed");
        index
    }

    /// Deliver `event` to every subscriber. Returns how many handlers ran.
    pub fn publish(&self, event: &Event) -> Result<usize> {
        if self.handlers.is_empty() {
            tracing::debug!(event_type = %event.event_type, "No subscribers, event dropped");
            return Ok(0);
        }

        for (index, handler) in self.handlers.iter().enumerate() {
            if let Err(e) = handler.handle_event(event) {
                tracing::error!(
                    event_id = %event.id,
                    event_type = %event.event_type,
                    subscriber = index,
                    error = %e,
                    "Event handler failed, delivery stopped"
                );
                return Err(e);
            }
        }

        tracing::debug!(
            event_id = %event.id,
            event_type = %event.event_type,
            delivered = self.handlers.len(),
            "Event published"
        );
        Ok(self.handlers.len())
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}
