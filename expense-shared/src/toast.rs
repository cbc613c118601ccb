//! Single-slot notification state.
//!
//! A new toast overwrites the current one. Every `show` bumps a generation
//! counter; a timer armed for an older generation cannot hide a newer toast.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How long a toast stays up unless the request says otherwise.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
    Warning,
}

/// What a view asks to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    pub message: String,
    pub kind: ToastKind,
    /// Falls back to [`DEFAULT_TOAST_DURATION_MS`].
    pub duration_ms: Option<u32>,
}

impl ToastRequest {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms: None,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// The singleton toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
    pub is_visible: bool,
    generation: u64,
}

impl Default for ToastState {
    fn default() -> Self {
        Self {
            message: String::new(),
            kind: ToastKind::default(),
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            is_visible: false,
            generation: 0,
        }
    }
}

impl ToastState {
    /// Replace the current toast and make it visible.
    ///
    /// Returns the generation to pass to [`ToastState::expire`] when the
    /// display timer fires.
    pub fn show(&mut self, request: ToastRequest) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = request.message;
        self.kind = request.kind;
        self.duration_ms = request.duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS);
        self.is_visible = true;
        self.generation
    }

    /// Hide whatever is showing.
    pub fn dismiss(&mut self) {
        self.is_visible = false;
    }

    /// Timer callback: hide only if `generation` is still the current toast.
    ///
    /// Returns whether the toast was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.is_visible && self.generation == generation {
            self.is_visible = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
