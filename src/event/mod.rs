mod bus;
mod events;

pub use bus::EventBus;
pub use events::SketchEvent;

/// Receives sketch notifications synchronously, in emit order
pub trait EventHandler {
    fn handle_event(&mut self, event: &SketchEvent);
}

impl<F: FnMut(&SketchEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &SketchEvent) {
        self(event)
    }
}
