//! Chat transcript state and its height rules.

use contracts::chat::{ChatMessage, ChatRole};
use leptos::prelude::*;
use uuid::Uuid;

/// Height limits of the chat container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChatBounds {
    pub min_height: f64,
    pub max_height: f64,
    /// Share of the viewport height the container may take.
    pub viewport_ratio: f64,
}

impl Default for ChatBounds {
    fn default() -> Self {
        Self {
            min_height: 300.0,
            max_height: 800.0,
            viewport_ratio: 0.7,
        }
    }
}

/// Measured sizes feeding the layout computation. Rows that could not be
/// measured fall back to fixed estimates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChatMetrics {
    pub content_height: f64,
    pub viewport_height: f64,
    pub input_row_height: Option<f64>,
    pub actions_row_height: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChatLayout {
    pub container_height: f64,
    pub messages_height: f64,
}

const CONTENT_PADDING: f64 = 100.0;
const INPUT_ROW_FALLBACK: f64 = 60.0;
const ACTIONS_ROW_FALLBACK: f64 = 40.0;
const ROW_GAPS: f64 = 30.0;

impl ChatBounds {
    pub fn layout(&self, metrics: &ChatMetrics) -> ChatLayout {
        let max = (metrics.viewport_height * self.viewport_ratio).min(self.max_height);
        let container_height = self
            .min_height
            .max((metrics.content_height + CONTENT_PADDING).min(max));
        let reserved = metrics.input_row_height.unwrap_or(INPUT_ROW_FALLBACK)
            + metrics.actions_row_height.unwrap_or(ACTIONS_ROW_FALLBACK)
            + ROW_GAPS;
        ChatLayout {
            container_height,
            messages_height: (container_height - reserved).max(0.0),
        }
    }

    fn initial_layout(&self) -> ChatLayout {
        self.layout(&ChatMetrics {
            viewport_height: f64::INFINITY,
            ..ChatMetrics::default()
        })
    }
}

/// Session-lived transcript. Messages keep insertion order.
#[derive(Clone, Copy)]
pub struct ChatTranscript {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub visible: RwSignal<bool>,
    pub layout: RwSignal<ChatLayout>,
    bounds: ChatBounds,
}

impl ChatTranscript {
    pub fn new(bounds: ChatBounds) -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            visible: RwSignal::new(false),
            layout: RwSignal::new(bounds.initial_layout()),
            bounds,
        }
    }

    pub fn append(&self, role: ChatRole, content: &str) -> Uuid {
        let message = ChatMessage::new(role, content);
        let id = message.id;
        self.messages.update(|messages| messages.push(message));
        id
    }

    pub fn remove(&self, id: Uuid) -> bool {
        let mut removed = false;
        self.messages.update(|messages| {
            let before = messages.len();
            messages.retain(|m| m.id != id);
            removed = messages.len() != before;
        });
        removed
    }

    pub fn clear(&self) {
        self.messages.set(Vec::new());
    }

    pub fn reveal(&self) {
        self.visible.set(true);
    }

    pub fn adjust_height(&self, metrics: &ChatMetrics) -> ChatLayout {
        let layout = self.bounds.layout(metrics);
        self.layout.set(layout);
        layout
    }
}
