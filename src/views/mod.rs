//! View controllers for the three screens
//!
//! Orchestration only: each view composes the canvas, the adapter, and the
//! dispatcher. Outcomes the user should see are returned as `Notice`s for
//! the app shell to display.

pub mod editor;
pub mod gallery;
pub mod toolbar;
pub mod viewer;

/// A transient, non-blocking message for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}
