// SPDX-License-Identifier: MPL-2.0
//! Notification diagnostics.
//!
//! The crate carries no logging facade; instead, notifier outcomes are
//! recorded as typed events in a memory-bounded ring buffer that the host
//! application can inspect or export.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Default number of retained notifier events.
pub const DEFAULT_LOG_CAPACITY: usize = 256;

/// Outcome of one selection notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NotifierEvent {
    /// The selection reached the endpoint.
    Sent {
        /// Id of the committed tariff.
        tariff_id: String,
    },
    /// Delivery failed; the gesture pipeline is unaffected.
    Failed {
        /// Id of the committed tariff.
        tariff_id: String,
        /// Transport or status error description.
        reason: String,
    },
}

/// A circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity (at
    /// least 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Iterates over elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// Shared, thread-safe notifier event log.
///
/// Cloning is cheap; all clones record into the same buffer.
#[derive(Debug, Clone)]
pub struct EventLog {
    inner: Arc<Mutex<CircularBuffer<NotifierEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records one event. A poisoned lock still records: the buffer holds
    /// plain data, so the previous panic cannot have left it inconsistent.
    pub fn record(&self, event: NotifierEvent) {
        let mut buffer = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        buffer.push(event);
    }

    /// Copies the current events in chronological order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<NotifierEvent> {
        let buffer = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        buffer.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        let buffer = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_evicts_oldest_at_capacity() {
        let mut buffer = CircularBuffer::new(2);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![2, 3]);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn buffer_capacity_is_at_least_one() {
        let mut buffer = CircularBuffer::new(0);
        buffer.push("only");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn buffer_clear_empties_it() {
        let mut buffer = CircularBuffer::new(4);
        buffer.push(1);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn log_clones_share_the_buffer() {
        let log = EventLog::with_capacity(8);
        let clone = log.clone();

        clone.record(NotifierEvent::Sent {
            tariff_id: "3".to_string(),
        });

        assert_eq!(log.len(), 1);
        assert_eq!(
            log.snapshot(),
            vec![NotifierEvent::Sent {
                tariff_id: "3".to_string()
            }]
        );
    }

    #[test]
    fn events_serialize_with_snake_case_tag() {
        let event = NotifierEvent::Failed {
            tariff_id: "2".to_string(),
            reason: "status 500".to_string(),
        };
        let json = serde_json::to_string(&event).expect("serializable");
        assert!(json.contains(r#""event":"failed""#));
        assert!(json.contains(r#""tariff_id":"2""#));
    }
}
