//! Shared UI components.

pub mod console;
