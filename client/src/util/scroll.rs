//! Scroll restoration across client-side navigation.
//!
//! Back/forward traversal returns the page to where the user left that
//! history entry; every fresh navigation starts at the top. [`ScrollMemory`]
//! holds the decision logic and is browser-agnostic; [`install`] wires it to
//! `history.state`, `popstate`, window scroll events and the router's URL.
//! Requires a browser environment.
//!
//! DESIGN
//! ======
//! Offsets are keyed per history entry, not per path. A fresh entry has no
//! state when the router pushes it, so it gets the next [`EntryKey`] written
//! into `history.state`. Traversal reads that key back and restores the offset
//! recorded under it. The router sets `history.state` before reactive effects
//! run, so the effect always sees the entry it landed on.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::collections::HashMap;

/// Identifier stamped into `history.state` for one history entry.
pub type EntryKey = u64;

/// Window scroll offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

impl ScrollPosition {
    pub const TOP: Self = Self { x: 0.0, y: 0.0 };
}

/// Outcome of arriving on a history entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landing {
    pub key: EntryKey,
    /// Offset to scroll to.
    pub position: ScrollPosition,
    /// The entry had no key yet; the caller must stamp `key` into it.
    pub fresh: bool,
}

/// Last known offset per history entry.
#[derive(Clone, Debug)]
pub struct ScrollMemory {
    saved: HashMap<EntryKey, ScrollPosition>,
    current: Option<EntryKey>,
    next_key: EntryKey,
}

impl Default for ScrollMemory {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ScrollMemory {
    /// Memory that hands out keys starting at `first_key`. Seed it per page
    /// load so keys left in `history.state` by an earlier load never collide.
    pub fn new(first_key: EntryKey) -> Self {
        Self { saved: HashMap::new(), current: None, next_key: first_key }
    }

    /// Remember `position` for the entry currently on screen.
    pub fn record(&mut self, position: ScrollPosition) {
        if let Some(key) = self.current {
            self.saved.insert(key, position);
        }
    }

    /// Switch to a history entry and return where to scroll.
    ///
    /// `Some(key)` is an entry stamped earlier (back/forward or reload) and
    /// restores its offset, or the top if none was recorded. `None` is a fresh
    /// entry: it gets a new key and starts at the top.
    pub fn land(&mut self, entry: Option<EntryKey>) -> Landing {
        let landing = match entry {
            Some(key) => Landing {
                key,
                position: self.saved.get(&key).copied().unwrap_or(ScrollPosition::TOP),
                fresh: false,
            },
            None => {
                let key = self.next_key;
                self.next_key += 1;
                Landing { key, position: ScrollPosition::TOP, fresh: true }
            }
        };
        self.current = Some(landing.key);
        landing
    }
}

/// Attach scroll restoration to the router's current URL (path, query and
/// hash), so a change in any of them counts as a navigation.
///
/// Must be called inside a `<Router>`. No-op outside the browser.
pub fn install(url: leptos::prelude::Memo<String>) {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use leptos::prelude::*;
        use wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(history) = window.history() {
            let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
        }

        // Page-load origin in microseconds keeps keys unique across reloads.
        let first_key = window.performance().map_or(1, |perf| js_to_key(perf.time_origin() * 1000.0));
        let memory = Rc::new(RefCell::new(ScrollMemory::new(first_key)));

        let land = {
            let memory = memory.clone();
            Rc::new(move || {
                let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
                    return;
                };
                let entry = history.state().ok().and_then(|state| state.as_f64()).map(js_to_key);
                let landing = memory.borrow_mut().land(entry);
                if landing.fresh {
                    let _ = history.replace_state(&JsValue::from_f64(key_to_js(landing.key)), "");
                }
                let target = landing.position;
                // Wait for the new view to lay out before scrolling.
                request_animation_frame(move || {
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(target.x, target.y);
                    }
                });
            })
        };

        // Covers traversals that leave the URL unchanged, which the effect
        // below never sees. Landing twice on one entry is harmless.
        let on_popstate = land.clone();
        let _ = window_event_listener(leptos::ev::popstate, move |_| on_popstate());

        let scroll_memory = memory.clone();
        let _ = window_event_listener(leptos::ev::scroll, move |_| {
            if let Some(window) = web_sys::window() {
                let x = window.scroll_x().unwrap_or_default();
                let y = window.scroll_y().unwrap_or_default();
                scroll_memory.borrow_mut().record(ScrollPosition { x, y });
            }
        });

        Effect::new(move || {
            url.track();
            land();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn js_to_key(value: f64) -> EntryKey {
    value.max(0.0) as EntryKey
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_precision_loss)]
fn key_to_js(key: EntryKey) -> f64 {
    key as f64
}
