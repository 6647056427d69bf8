//! Application Context
//!
//! Gesture plumbing shared via Leptos Context API.

use editable_list::{Mode, SymbolIcons};
use leptos::prelude::*;
use leptos_gestures::{GestureHandlers, GestureSignals, PressKind};

/// List-wide gesture state provided via context
#[derive(Clone, Copy)]
pub struct ListContext {
    pub gestures: GestureSignals,
    pub handlers: GestureHandlers,
    pub icons: SymbolIcons,
    long_press_ms: u32,
    collapse_ms: u32,
}

impl ListContext {
    pub fn new(gestures: GestureSignals, handlers: GestureHandlers, long_press_ms: u32, collapse_ms: u32) -> Self {
        Self {
            gestures,
            handlers,
            icons: SymbolIcons,
            long_press_ms,
            collapse_ms,
        }
    }

    /// Rows swipe in browse mode and long-press to drag in edit mode
    pub fn press_kind(&self, mode: Mode) -> PressKind {
        match mode {
            Mode::Browse => PressKind::Swipe,
            Mode::Edit => PressKind::LongPress(self.long_press_ms),
        }
    }

    pub fn collapse_ms(&self) -> u32 {
        self.collapse_ms
    }

    /// A swipe or drag just ended; the trailing click should be ignored
    pub fn gesture_just_ended(&self) -> bool {
        self.gestures.gesture_just_ended_read.get_untracked()
    }
}

pub fn use_list_context() -> ListContext {
    use_context::<ListContext>().expect("ListContext should be provided")
}
