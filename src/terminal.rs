use crate::surface::{ClickHandler, MemorySurface, Surface, SurfaceSnapshot};
use crate::ui::{ELEMENT_IDS, LAST, PERSONS, THIS_WEEK, TODAY, TOTAL};
use chrono::Local;
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

const ALT_SCREEN: &str = "\x1b[?1049h";
const CLEAR: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";

/// Draws the dashboard to stdout. State lives in a [`MemorySurface`]; every
/// change schedules a redraw.
pub struct TerminalSurface {
    elements: MemorySurface,
    changed: Notify,
}

impl TerminalSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            elements: MemorySurface::with_elements(ELEMENT_IDS),
            changed: Notify::new(),
        })
    }

    pub fn elements(&self) -> &MemorySurface {
        &self.elements
    }

    /// Redraws after each burst of changes until the process exits.
    pub async fn draw_loop(self: Arc<Self>) {
        loop {
            self.changed.notified().await;
            // Let the other routines of the same tick land first.
            tokio::time::sleep(Duration::from_millis(50)).await;
            println!("{}", draw(&self.elements.snapshot()));
        }
    }

    /// Clears the pending notice and redraws.
    pub fn dismiss_notice(&self) {
        if self.elements.dismiss_notice().is_some() {
            self.touch();
        }
    }

    fn touch(&self) {
        self.changed.notify_one();
    }
}

impl Surface for TerminalSurface {
    fn set_text(&self, id: &str, text: &str) {
        self.elements.set_text(id, text);
        self.touch();
    }

    fn set_color(&self, id: &str, color: &str) {
        self.elements.set_color(id, color);
        self.touch();
    }

    fn clear_children(&self, id: &str) {
        self.elements.clear_children(id);
        self.touch();
    }

    fn append_button(&self, container: &str, label: &str, on_click: ClickHandler) {
        self.elements.append_button(container, label, on_click);
        self.touch();
    }

    fn replace_buttons(&self, container: &str, buttons: Vec<(String, ClickHandler)>) {
        self.elements.replace_buttons(container, buttons);
        self.touch();
    }

    fn bind_body_click(&self, on_click: ClickHandler) {
        self.elements.bind_body_click(on_click);
    }

    fn request_fullscreen(&self) {
        if !self.elements.is_fullscreen() {
            print!("{ALT_SCREEN}");
        }
        self.elements.request_fullscreen();
        self.touch();
    }

    fn alert(&self, message: &str) {
        self.elements.alert(message);
        self.touch();
    }
}

pub fn draw(snapshot: &SurfaceSnapshot) -> String {
    let text = |id: &str| snapshot.text.get(id).map(String::as_str).unwrap_or("-");

    let mut out = String::new();
    if snapshot.fullscreen {
        out.push_str(CLEAR);
    }
    let _ = writeln!(out, "== counter dashboard ({}) ==", Local::now().format("%H:%M:%S"));
    let _ = writeln!(out, "today:     {}", text(TODAY));
    let _ = writeln!(out, "this week: {}", text(THIS_WEEK));
    if snapshot.text.contains_key(TOTAL) {
        let _ = writeln!(out, "total:     {}", text(TOTAL));
    }

    let color = snapshot.color.get(LAST).map(String::as_str).unwrap_or("");
    let _ = writeln!(out, "last:      {}{}{RESET}", ansi(color), text(LAST));

    let buttons = snapshot.buttons.get(PERSONS).cloned().unwrap_or_default();
    for (index, label) in buttons.iter().enumerate() {
        let _ = write!(out, "[{}] {label}  ", index + 1);
    }
    if let Some(notice) = &snapshot.notice {
        let _ = write!(out, "\n\n!! {}\n!! (press enter to dismiss)", notice.replace('\n', "\n!! "));
    }
    out.push_str("\n<n> count for person n, f fullscreen, q quit");
    out
}

fn ansi(color: &str) -> &'static str {
    match color {
        "green" => "\x1b[32m",
        "red" => "\x1b[31m",
        _ => "",
    }
}
