//! UI events reported outward to host application code.
//!
//! Events are fire-and-forget: the view builds an event, hands it to an
//! [`EventDispatcher`], and never waits for an answer. On the host side each
//! event is seen as a name plus a JSON payload.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::sync::mpsc;

/// An event that can be sent to the host.
pub trait Event {
    /// Host-visible event name, e.g. `onTaskListItemPress`.
    fn event_name(&self) -> &'static str;
    /// Event payload as seen by host code.
    fn event_data(&self) -> Value;
    fn surface_id(&self) -> i32;
    fn view_id(&self) -> i32;
}

/// Type-erased event as it travels through a dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchedEvent {
    pub surface_id: i32,
    pub view_id: i32,
    pub name: String,
    pub data: Value,
}

impl DispatchedEvent {
    pub fn from_event<E: Event + ?Sized>(event: &E) -> Self {
        Self {
            surface_id: event.surface_id(),
            view_id: event.view_id(),
            name: event.event_name().to_string(),
            data: event.event_data(),
        }
    }
}

// ============================================================================
// Events
// ============================================================================

/// A task-list checkbox was toggled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListItemPressEvent {
    pub surface_id: i32,
    pub view_id: i32,
    /// Position of the toggled item among the document's task items.
    pub index: i32,
    /// New checked state.
    pub checked: bool,
    /// Text content of the item.
    pub text: String,
}

impl TaskListItemPressEvent {
    pub const EVENT_NAME: &'static str = "onTaskListItemPress";

    pub fn new(
        surface_id: i32,
        view_id: i32,
        index: i32,
        checked: bool,
        text: impl Into<String>,
    ) -> Self {
        Self {
            surface_id,
            view_id,
            index,
            checked,
            text: text.into(),
        }
    }

    /// Apply this event's new state to the markdown source.
    pub fn toggle(&self, markdown: &str) -> String {
        match usize::try_from(self.index) {
            Ok(index) => crate::task_list::toggle_task_at_index(markdown, index, self.checked),
            Err(_) => markdown.to_string(),
        }
    }
}

impl Event for TaskListItemPressEvent {
    fn event_name(&self) -> &'static str {
        Self::EVENT_NAME
    }

    fn event_data(&self) -> Value {
        json!({
            "index": self.index,
            "checked": self.checked,
            "text": self.text,
        })
    }

    fn surface_id(&self) -> i32 {
        self.surface_id
    }

    fn view_id(&self) -> i32 {
        self.view_id
    }
}

/// A link was tapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPressEvent {
    pub surface_id: i32,
    pub view_id: i32,
    pub url: String,
}

impl LinkPressEvent {
    pub const EVENT_NAME: &'static str = "onLinkPress";

    pub fn new(surface_id: i32, view_id: i32, url: impl Into<String>) -> Self {
        Self {
            surface_id,
            view_id,
            url: url.into(),
        }
    }
}

impl Event for LinkPressEvent {
    fn event_name(&self) -> &'static str {
        Self::EVENT_NAME
    }

    fn event_data(&self) -> Value {
        json!({ "url": self.url })
    }

    fn surface_id(&self) -> i32 {
        self.surface_id
    }

    fn view_id(&self) -> i32 {
        self.view_id
    }
}

/// A link was long-pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkLongPressEvent {
    pub surface_id: i32,
    pub view_id: i32,
    pub url: String,
}

impl LinkLongPressEvent {
    pub const EVENT_NAME: &'static str = "onLinkLongPress";

    pub fn new(surface_id: i32, view_id: i32, url: impl Into<String>) -> Self {
        Self {
            surface_id,
            view_id,
            url: url.into(),
        }
    }
}

impl Event for LinkLongPressEvent {
    fn event_name(&self) -> &'static str {
        Self::EVENT_NAME
    }

    fn event_data(&self) -> Value {
        json!({ "url": self.url })
    }

    fn surface_id(&self) -> i32 {
        self.surface_id
    }

    fn view_id(&self) -> i32 {
        self.view_id
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Sink for outgoing events. Implementations must not block.
pub trait EventDispatcher: Send + Sync {
    fn dispatch_event(&self, event: DispatchedEvent);
}

/// Send `event` through `dispatcher`.
pub fn emit<D, E>(dispatcher: &D, event: &E)
where
    D: EventDispatcher + ?Sized,
    E: Event + ?Sized,
{
    log::debug!(
        "Emitting {} for view {}",
        event.event_name(),
        event.view_id()
    );
    dispatcher.dispatch_event(DispatchedEvent::from_event(event));
}

/// Dispatcher backed by an unbounded channel; the host drains the receiver.
#[derive(Debug, Clone)]
pub struct ChannelEventDispatcher {
    sender: mpsc::UnboundedSender<DispatchedEvent>,
}

impl ChannelEventDispatcher {
    /// Create a dispatcher and the receiver the host reads events from.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DispatchedEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl EventDispatcher for ChannelEventDispatcher {
    fn dispatch_event(&self, event: DispatchedEvent) {
        if let Err(e) = self.sender.send(event) {
            log::debug!("Event receiver dropped; discarding {}", e.0.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_list_event_payload() {
        let event = TaskListItemPressEvent::new(1, 42, 2, true, "Buy milk");
        assert_eq!(event.event_name(), "onTaskListItemPress");
        assert_eq!(
            event.event_data(),
            json!({"index": 2, "checked": true, "text": "Buy milk"})
        );
    }

    #[test]
    fn test_link_event_names() {
        assert_eq!(LinkPressEvent::new(0, 1, "https://a").event_name(), "onLinkPress");
        assert_eq!(
            LinkLongPressEvent::new(0, 1, "https://a").event_data(),
            json!({"url": "https://a"})
        );
    }

    #[test]
    fn test_negative_index_toggle_is_noop() {
        let event = TaskListItemPressEvent::new(0, 0, -1, true, "x");
        assert_eq!(event.toggle("- [ ] x"), "- [ ] x");
    }

    #[test]
    fn test_channel_dispatch() {
        let (dispatcher, mut rx) = ChannelEventDispatcher::channel();
        emit(&dispatcher, &LinkPressEvent::new(3, 7, "https://example.com"));
        let got = rx.try_recv().unwrap();
        assert_eq!(got.name, "onLinkPress");
        assert_eq!(got.surface_id, 3);
        assert_eq!(got.view_id, 7);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dispatch_after_receiver_dropped_does_not_panic() {
        let (dispatcher, rx) = ChannelEventDispatcher::channel();
        drop(rx);
        assert!(dispatcher.is_closed());
        emit(&dispatcher, &LinkPressEvent::new(0, 0, "u"));
    }
}
