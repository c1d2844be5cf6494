//! Toast notifications shown over the page.
//!
//! DESIGN
//! ======
//! Each shown toast has a string id and a sequence number. Showing a toast
//! whose id is already on screen replaces it in place instead of stacking a
//! second copy. Auto-dismiss timers expire by `(id, seq)`, so a timer armed
//! for an older toast never removes the replacement that reused its id.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Auto-dismiss delay for transient toasts.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Info => "toast--info",
        }
    }
}

/// Button rendered inside a toast.
#[derive(Clone)]
pub struct ToastAction {
    pub label: String,
    on_click: Arc<dyn Fn() + Send + Sync>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, on_click: impl Fn() + Send + Sync + 'static) -> Self {
        Self { label: label.into(), on_click: Arc::new(on_click) }
    }

    pub fn run(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction").field("label", &self.label).finish_non_exhaustive()
    }
}

/// A toast to show. `duration: None` keeps it until dismissed.
#[derive(Clone, Debug)]
pub struct Toast {
    pub id: Option<String>,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<Duration>,
    pub action: Option<ToastAction>,
}

impl Toast {
    fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            id: None,
            kind,
            title: title.into(),
            description: None,
            duration: Some(DEFAULT_TOAST_DURATION),
            action: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// A toast currently on screen.
#[derive(Clone, Debug)]
pub struct ShownToast {
    pub id: String,
    pub seq: u64,
    pub toast: Toast,
}

/// Identifies one particular showing of a toast, for expiry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastHandle {
    pub id: String,
    pub seq: u64,
}

/// Toasts on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    items: Vec<ShownToast>,
    next_seq: u64,
}

impl ToastState {
    pub fn items(&self) -> &[ShownToast] {
        &self.items
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: &str) -> Option<&ShownToast> {
        self.items.iter().find(|t| t.id == id)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Show `toast`, replacing any toast with the same id.
    pub fn show(&mut self, toast: Toast) -> ToastHandle {
        self.next_seq += 1;
        let seq = self.next_seq;
        let id = toast.id.clone().unwrap_or_else(|| format!("toast-{seq}"));
        let shown = ShownToast { id: id.clone(), seq, toast };
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(slot) => *slot = shown,
            None => self.items.push(shown),
        }
        ToastHandle { id, seq }
    }

    /// Remove the toast with `id`, whichever showing it is.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Remove the toast only if it is still the showing named by `handle`.
    pub fn expire(&mut self, handle: &ToastHandle) -> bool {
        let before = self.items.len();
        self.items
            .retain(|t| !(t.id == handle.id && t.seq == handle.seq));
        self.items.len() != before
    }
}
