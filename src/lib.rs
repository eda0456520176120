//! Bridge layer for the richtext markdown view.
//!
//! The theme model lives in the `richtext-config` crate and is re-exported
//! here. This crate adds the pieces that talk to the host: outgoing UI
//! events, layout direction queries, and task-list marker rewriting.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod events;
pub mod layout;
pub mod task_list;

pub use richtext_config as config;
pub use richtext_config::{Color, HeaderConfig, RichTextTheme, ThemeOptions, Typeface};

pub use events::{
    ChannelEventDispatcher, DispatchedEvent, Event, EventDispatcher, LinkLongPressEvent,
    LinkPressEvent, TaskListItemPressEvent, emit,
};
pub use layout::{LayoutDirection, ResourceConfiguration, Resources};
pub use task_list::{task_count, toggle_task_at_index};
