//! The display capabilities the dashboard needs from its host.
//!
//! Elements are addressed by id. Operations on an id the host does not
//! know are silently ignored, the way a selector that matches nothing is.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

pub trait Surface: Send + Sync {
    fn set_text(&self, id: &str, text: &str);

    /// Sets the CSS `color` of an element; an empty string resets it.
    fn set_color(&self, id: &str, color: &str);

    fn clear_children(&self, id: &str);

    fn append_button(&self, container: &str, label: &str, on_click: ClickHandler);

    /// Swaps all buttons of `container` for `buttons`. Hosts that can make
    /// the swap atomic should override this.
    fn replace_buttons(&self, container: &str, buttons: Vec<(String, ClickHandler)>) {
        self.clear_children(container);
        for (label, on_click) in buttons {
            self.append_button(container, &label, on_click);
        }
    }

    fn bind_body_click(&self, on_click: ClickHandler);

    fn request_fullscreen(&self);

    /// Blocking user-facing notice.
    fn alert(&self, message: &str);
}

#[derive(Clone)]
pub struct Button {
    pub label: String,
    on_click: ClickHandler,
}

impl Button {
    pub fn click(&self) {
        (self.on_click)();
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button").field("label", &self.label).finish()
    }
}

#[derive(Default)]
struct Elements {
    ids: BTreeSet<String>,
    text: BTreeMap<String, String>,
    color: BTreeMap<String, String>,
    buttons: BTreeMap<String, Vec<Button>>,
    body_click: Option<ClickHandler>,
    alerts: Vec<String>,
    notice: Option<String>,
    fullscreen: bool,
}

/// Plain copy of what a [`MemorySurface`] currently shows.
#[derive(Debug, Clone, Default)]
pub struct SurfaceSnapshot {
    pub text: BTreeMap<String, String>,
    pub color: BTreeMap<String, String>,
    pub buttons: BTreeMap<String, Vec<String>>,
    /// Latest notice that has not been dismissed yet.
    pub notice: Option<String>,
    pub fullscreen: bool,
}

/// A [`Surface`] that keeps every element in memory.
#[derive(Default)]
pub struct MemorySurface {
    elements: Mutex<Elements>,
}

impl MemorySurface {
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = Elements {
            ids: ids.into_iter().map(Into::into).collect(),
            ..Elements::default()
        };
        Self {
            elements: Mutex::new(elements),
        }
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.lock().text.get(id).cloned()
    }

    pub fn color(&self, id: &str) -> Option<String> {
        self.lock().color.get(id).cloned()
    }

    pub fn buttons(&self, container: &str) -> Vec<Button> {
        self.lock().buttons.get(container).cloned().unwrap_or_default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    pub fn notice(&self) -> Option<String> {
        self.lock().notice.clone()
    }

    pub fn dismiss_notice(&self) -> Option<String> {
        self.lock().notice.take()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.lock().fullscreen
    }

    /// Activates the `index`-th button of `container`. Returns false when
    /// there is no such button.
    pub fn click(&self, container: &str, index: usize) -> bool {
        // The handler runs outside the lock; it may touch the surface again.
        let button = self
            .lock()
            .buttons
            .get(container)
            .and_then(|buttons| buttons.get(index))
            .cloned();
        match button {
            Some(button) => {
                button.click();
                true
            }
            None => false,
        }
    }

    pub fn click_body(&self) {
        let handler = self.lock().body_click.clone();
        if let Some(handler) = handler {
            handler();
        }
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        let elements = self.lock();
        SurfaceSnapshot {
            text: elements.text.clone(),
            color: elements.color.clone(),
            buttons: elements
                .buttons
                .iter()
                .map(|(id, buttons)| {
                    let labels = buttons.iter().map(|b| b.label.clone()).collect();
                    (id.clone(), labels)
                })
                .collect(),
            notice: elements.notice.clone(),
            fullscreen: elements.fullscreen,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Elements> {
        self.elements.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Surface for MemorySurface {
    fn set_text(&self, id: &str, text: &str) {
        let mut elements = self.lock();
        if elements.ids.contains(id) {
            elements.text.insert(id.to_string(), text.to_string());
        }
    }

    fn set_color(&self, id: &str, color: &str) {
        let mut elements = self.lock();
        if elements.ids.contains(id) {
            elements.color.insert(id.to_string(), color.to_string());
        }
    }

    fn clear_children(&self, id: &str) {
        let mut elements = self.lock();
        if elements.ids.contains(id) {
            elements.buttons.remove(id);
        }
    }

    fn append_button(&self, container: &str, label: &str, on_click: ClickHandler) {
        let mut elements = self.lock();
        if elements.ids.contains(container) {
            elements
                .buttons
                .entry(container.to_string())
                .or_default()
                .push(Button {
                    label: label.to_string(),
                    on_click,
                });
        }
    }

    fn replace_buttons(&self, container: &str, buttons: Vec<(String, ClickHandler)>) {
        let mut elements = self.lock();
        if elements.ids.contains(container) {
            let buttons = buttons
                .into_iter()
                .map(|(label, on_click)| Button { label, on_click })
                .collect();
            elements.buttons.insert(container.to_string(), buttons);
        }
    }

    fn bind_body_click(&self, on_click: ClickHandler) {
        self.lock().body_click = Some(on_click);
    }

    fn request_fullscreen(&self) {
        self.lock().fullscreen = true;
    }

    fn alert(&self, message: &str) {
        let mut elements = self.lock();
        elements.alerts.push(message.to_string());
        elements.notice = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn unknown_ids_are_ignored() {
        let surface = MemorySurface::with_elements(["today"]);
        surface.set_text("nowhere", "1 time");
        surface.append_button("nowhere", "Ann", Arc::new(|| {}));

        assert_eq!(surface.text("nowhere"), None);
        assert!(surface.buttons("nowhere").is_empty());
    }

    #[test]
    fn click_runs_the_bound_handler() {
        let surface = MemorySurface::with_elements(["persons"]);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        surface.append_button(
            "persons",
            "Ann",
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(surface.click("persons", 0));
        assert!(!surface.click("persons", 1));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clear_children_drops_buttons() {
        let surface = MemorySurface::with_elements(["persons"]);
        surface.append_button("persons", "Ann", Arc::new(|| {}));
        surface.clear_children("persons");
        assert!(surface.snapshot().buttons.get("persons").is_none());
    }

    #[test]
    fn notice_stays_until_dismissed() {
        let surface = MemorySurface::with_elements(["today"]);
        surface.alert("first");
        surface.alert("second");
        surface.set_text("today", "2 times");

        assert_eq!(surface.snapshot().notice.as_deref(), Some("second"));
        assert_eq!(surface.dismiss_notice().as_deref(), Some("second"));
        assert_eq!(surface.notice(), None);
        assert_eq!(surface.alerts(), ["first", "second"]);
    }
}
