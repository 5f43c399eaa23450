use crate::models::{LastEventSnapshot, TotalsSnapshot, UserId, UserRecord};
use crate::surface::{ClickHandler, Surface};
use crate::time_format::{RecencyDisplay, RecencyPolicy, format_elapsed};
use std::sync::Arc;

pub const TODAY: &str = "today";
pub const THIS_WEEK: &str = "this_week";
pub const TOTAL: &str = "total";
pub const LAST: &str = "last";
pub const PERSONS: &str = "persons";

pub const ELEMENT_IDS: [&str; 5] = [TODAY, THIS_WEEK, TOTAL, LAST, PERSONS];

/// Invoked with the id of the user whose button was activated.
pub type Activate = Arc<dyn Fn(UserId) + Send + Sync>;

#[derive(Clone)]
pub struct Renderer {
    surface: Arc<dyn Surface>,
    policy: RecencyPolicy,
}

impl Renderer {
    pub fn new(surface: Arc<dyn Surface>, policy: RecencyPolicy) -> Self {
        Self { surface, policy }
    }

    pub fn totals(&self, totals: &TotalsSnapshot) {
        self.surface.set_text(TODAY, &times_text(totals.today));
        self.surface.set_text(THIS_WEEK, &times_text(totals.this_week));
        if let Some(total) = totals.total {
            self.surface.set_text(TOTAL, &times_text(total));
        }
    }

    pub fn last_event(&self, last: &LastEventSnapshot) -> RecencyDisplay {
        let display = format_elapsed(last.elapsed, &self.policy);
        self.recency(&display);
        display
    }

    pub fn recency(&self, display: &RecencyDisplay) {
        self.surface.set_text(LAST, &display.text);
        self.surface.set_color(LAST, "");
        let color = display.category.css_color();
        if !color.is_empty() {
            self.surface.set_color(LAST, color);
        }
    }

    /// Replaces the person buttons with one per user, in roster order.
    pub fn roster(&self, roster: &[UserRecord], activate: &Activate) {
        let buttons = roster
            .iter()
            .map(|user| {
                let id = user.id.clone();
                let activate = Arc::clone(activate);
                let on_click: ClickHandler = Arc::new(move || activate(id.clone()));
                (user.name.clone(), on_click)
            })
            .collect();
        self.surface.replace_buttons(PERSONS, buttons);
    }

    pub fn notice(&self, message: &str) {
        self.surface.alert(message);
    }
}

pub fn times_text(count: u64) -> String {
    if count == 1 {
        format!("{count} time")
    } else {
        format!("{count} times")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use std::sync::Mutex;

    fn renderer() -> (Arc<MemorySurface>, Renderer) {
        let surface = Arc::new(MemorySurface::with_elements(ELEMENT_IDS));
        let renderer = Renderer::new(surface.clone(), RecencyPolicy::CURRENT);
        (surface, renderer)
    }

    #[test]
    fn totals_use_singular_only_for_one() {
        let (surface, renderer) = renderer();
        renderer.totals(&TotalsSnapshot {
            today: 1,
            this_week: 5,
            total: None,
        });
        assert_eq!(surface.text(TODAY).as_deref(), Some("1 time"));
        assert_eq!(surface.text(THIS_WEEK).as_deref(), Some("5 times"));
        assert_eq!(surface.text(TOTAL), None);

        renderer.totals(&TotalsSnapshot {
            today: 0,
            this_week: 5,
            total: Some(1),
        });
        assert_eq!(surface.text(TODAY).as_deref(), Some("0 times"));
        assert_eq!(surface.text(TOTAL).as_deref(), Some("1 time"));
    }

    #[test]
    fn recency_color_resets_when_back_to_normal() {
        let (surface, renderer) = renderer();

        renderer.last_event(&LastEventSnapshot { elapsed: 500.0 });
        assert_eq!(surface.color(LAST).as_deref(), Some("red"));

        renderer.last_event(&LastEventSnapshot { elapsed: 100.0 });
        assert_eq!(surface.color(LAST).as_deref(), Some(""));
        assert_eq!(surface.text(LAST).as_deref(), Some("1.7 hours ago"));

        renderer.last_event(&LastEventSnapshot { elapsed: 3.0 });
        assert_eq!(surface.color(LAST).as_deref(), Some("green"));
        assert_eq!(surface.text(LAST).as_deref(), Some("3 minutes ago"));
    }

    #[test]
    fn roster_buttons_capture_distinct_ids() {
        let (surface, renderer) = renderer();
        let activated = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&activated);
        let activate: Activate = Arc::new(move |id: UserId| sink.lock().unwrap().push(id));

        let roster = vec![
            UserRecord { id: UserId::Number(1), name: "Ann".into() },
            UserRecord { id: UserId::Number(2), name: "Bo".into() },
            UserRecord { id: UserId::from("c"), name: "Cy".into() },
        ];
        renderer.roster(&roster, &activate);

        let buttons = surface.buttons(PERSONS);
        let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Ann", "Bo", "Cy"]);

        for index in [2, 0, 1] {
            assert!(surface.click(PERSONS, index));
        }
        assert_eq!(
            *activated.lock().unwrap(),
            [UserId::from("c"), UserId::Number(1), UserId::Number(2)]
        );
    }

    #[test]
    fn roster_rebuild_replaces_previous_buttons() {
        let (surface, renderer) = renderer();
        let activate: Activate = Arc::new(|_: UserId| {});
        let roster = vec![
            UserRecord { id: UserId::Number(1), name: "Ann".into() },
            UserRecord { id: UserId::Number(2), name: "Bo".into() },
        ];
        renderer.roster(&roster, &activate);
        renderer.roster(&roster[..1], &activate);

        assert_eq!(surface.buttons(PERSONS).len(), 1);
    }

    #[test]
    fn overlapping_roster_rebuilds_never_duplicate_buttons() {
        let (surface, renderer) = renderer();
        let activate: Activate = Arc::new(|_: UserId| {});
        let roster: Vec<_> = (0..3)
            .map(|n| UserRecord { id: UserId::Number(n), name: format!("user {n}") })
            .collect();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        renderer.roster(&roster, &activate);
                    }
                });
            }
        });

        assert_eq!(surface.buttons(PERSONS).len(), 3);
    }
}
