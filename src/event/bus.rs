use std::cell::RefCell;
use std::fmt;

use super::{CanvasEvent, EventHandler};

/// Fans canvas events out to subscribers, in subscription order.
///
/// The canvas is driven from a single thread, so subscribers sit behind a
/// `RefCell` and `emit` can take `&self`. A subscriber must not subscribe
/// or emit from inside `handle_event`.
#[derive(Default)]
pub struct EventBus {
    subscribers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.subscribers.borrow_mut().push(handler);
    }

    pub fn emit(&self, event: CanvasEvent) {
        for subscriber in self.subscribers.borrow_mut().iter_mut() {
            subscriber.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Recorder {
        label: &'static str,
        log: Rc<RefCell<Vec<(&'static str, CanvasEvent)>>>,
    }

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &CanvasEvent) {
            self.log.borrow_mut().push((self.label, event.clone()));
        }
    }

    #[test]
    fn test_subscribers_see_events_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let bus = EventBus::new();
        for label in ["first", "second"] {
            bus.subscribe(Box::new(Recorder { label, log: log.clone() }));
        }

        bus.emit(CanvasEvent::Cleared);
        bus.emit(CanvasEvent::StrokeUndone { remaining: 0 });

        assert_eq!(
            *log.borrow(),
            vec![
                ("first", CanvasEvent::Cleared),
                ("second", CanvasEvent::Cleared),
                ("first", CanvasEvent::StrokeUndone { remaining: 0 }),
                ("second", CanvasEvent::StrokeUndone { remaining: 0 }),
            ]
        );
    }

    #[test]
    fn test_emit_without_subscribers() {
        EventBus::new().emit(CanvasEvent::Cleared);
    }
}
