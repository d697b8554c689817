//! Observer registry keyed by notification topic.

use std::collections::HashMap;
use std::fmt;

/// What an observer is listening for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// The machine entered this state.
    Enter(String),
    /// The machine is leaving this state.
    Exit(String),
    /// The machine accepted this event.
    Event(String),
}

/// A zero-argument notification callback.
pub type Observer = Box<dyn FnMut()>;

/// Ordered observer lists per topic.
///
/// Delivery is synchronous and follows registration order.
#[derive(Default)]
pub struct Observers {
    registered: HashMap<Topic, Vec<Observer>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer to the topic's list.
    pub fn subscribe(&mut self, topic: Topic, observer: Observer) {
        self.registered.entry(topic).or_default().push(observer);
    }

    /// Invoke every observer of `topic`, returning how many ran.
    pub fn publish(&mut self, topic: &Topic) -> usize {
        match self.registered.get_mut(topic) {
            Some(observers) => {
                for observer in observers.iter_mut() {
                    observer();
                }
                observers.len()
            }
            None => 0,
        }
    }

    /// Number of observers registered for `topic`.
    pub fn count(&self, topic: &Topic) -> usize {
        self.registered.get(topic).map_or(0, Vec::len)
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (topic, observers) in &self.registered {
            map.entry(topic, &observers.len());
        }
        map.finish()
    }
}
