//! Global toast notification queue.
//!
//! DESIGN
//! ======
//! The API client has no access to Leptos context (call-sites run inside
//! detached `spawn_local` tasks), so notifications flow through a
//! thread-local sink. The root `App` installs a sink that pushes into its
//! `RwSignal<ToastState>`; tests install a recording closure instead. With no
//! sink installed, notifications are logged and dropped.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::cell::RefCell;
use std::rc::Rc;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Maximum number of toasts kept on screen; older ones are evicted first.
pub const TOAST_CAP: usize = 5;

/// Severity of a toast, mapped to a CSS modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Ordered list of visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id. Evicts the oldest entry past [`TOAST_CAP`].
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, level, message: message.into() });
        if self.items.len() > TOAST_CAP {
            let overflow = self.items.len() - TOAST_CAP;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

type Sink = Rc<dyn Fn(ToastLevel, String)>;

thread_local! {
    static SINK: RefCell<Option<Sink>> = const { RefCell::new(None) };
}

/// Route all notifications on this thread to `sink`, replacing any previous one.
pub fn install_sink(sink: impl Fn(ToastLevel, String) + 'static) {
    SINK.with(|slot| *slot.borrow_mut() = Some(Rc::new(sink)));
}

/// Remove the installed sink.
pub fn clear_sink() {
    SINK.with(|slot| slot.borrow_mut().take());
}

/// Deliver a notification. Returns `false` when no sink is installed.
pub fn notify(level: ToastLevel, message: impl Into<String>) -> bool {
    let message = message.into();
    // Clone out of the cell so a sink may itself install or clear sinks.
    let sink = SINK.with(|slot| slot.borrow().clone());
    match sink {
        Some(sink) => {
            sink(level, message);
            true
        }
        None => {
            log::warn!("toast dropped (no sink installed): {message}");
            false
        }
    }
}

/// Shorthand for an error toast.
pub fn error(message: impl Into<String>) -> bool {
    notify(ToastLevel::Error, message)
}
