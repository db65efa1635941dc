use rootbrack_core::Observer;
use rootbrack_solvers::Event;

/// Observer that records every event it sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    events: Vec<Event>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Returns the bracket width after each event.
    pub fn widths(&self) -> impl Iterator<Item = f64> + '_ {
        self.events.iter().map(Event::width)
    }

    /// Consumes the history, returning the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl Observer<Event> for History {
    fn observe(&mut self, event: &Event) {
        self.events.push(*event);
    }
}
