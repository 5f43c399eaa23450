pub const DAY_MINUTES: f64 = 24.0 * 60.0;
pub const RECENT_BEFORE_MINUTES: f64 = 45.0;
pub const STALE_AFTER_MINUTES: f64 = 360.0;
/// Stale threshold used before it was relaxed to [`STALE_AFTER_MINUTES`].
pub const LEGACY_STALE_AFTER_MINUTES: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecencyCategory {
    Normal,
    Recent,
    Stale,
}

impl RecencyCategory {
    /// CSS foreground color; empty resets to the default.
    pub fn css_color(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Recent => "green",
            Self::Stale => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecencyDisplay {
    pub text: String,
    pub category: RecencyCategory,
}

/// Thresholds and bucketing for the "last event" display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecencyPolicy {
    pub recent_before_minutes: f64,
    pub stale_after_minutes: f64,
    /// Show elapsed times above an hour in hours instead of minutes.
    pub hour_scale: bool,
}

impl RecencyPolicy {
    pub const CURRENT: Self = Self {
        recent_before_minutes: RECENT_BEFORE_MINUTES,
        stale_after_minutes: STALE_AFTER_MINUTES,
        hour_scale: true,
    };

    pub const LEGACY: Self = Self {
        recent_before_minutes: RECENT_BEFORE_MINUTES,
        stale_after_minutes: LEGACY_STALE_AFTER_MINUTES,
        hour_scale: false,
    };
}

impl Default for RecencyPolicy {
    fn default() -> Self {
        Self::CURRENT
    }
}

pub fn format_elapsed(elapsed_minutes: f64, policy: &RecencyPolicy) -> RecencyDisplay {
    RecencyDisplay {
        text: elapsed_text(elapsed_minutes, policy),
        category: categorize(elapsed_minutes, policy),
    }
}

fn elapsed_text(elapsed_minutes: f64, policy: &RecencyPolicy) -> String {
    if elapsed_minutes > DAY_MINUTES {
        return "more than a day before".to_string();
    }

    // NaN and negative readings collapse to zero.
    let minutes = if elapsed_minutes > 0.0 {
        elapsed_minutes.trunc()
    } else {
        0.0
    };
    let (value, unit) = if policy.hour_scale && minutes > 60.0 {
        ((elapsed_minutes / 60.0 * 10.0).round() / 10.0, "hour")
    } else {
        (minutes, "minute")
    };

    let plural = if value == 1.0 { "" } else { "s" };
    format!("{value} {unit}{plural} ago")
}

fn categorize(elapsed_minutes: f64, policy: &RecencyPolicy) -> RecencyCategory {
    if elapsed_minutes < policy.recent_before_minutes {
        RecencyCategory::Recent
    } else if elapsed_minutes > policy.stale_after_minutes {
        RecencyCategory::Stale
    } else {
        RecencyCategory::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(elapsed: f64) -> RecencyDisplay {
        format_elapsed(elapsed, &RecencyPolicy::CURRENT)
    }

    #[test]
    fn non_positive_elapsed_reads_zero_minutes_and_recent() {
        for elapsed in [0.0, -0.0, -1.0, -250.5] {
            let display = current(elapsed);
            assert_eq!(display.text, "0 minutes ago", "elapsed {elapsed}");
            assert_eq!(display.category, RecencyCategory::Recent);
        }
    }

    #[test]
    fn minute_texts_pluralize_on_exact_one() {
        assert_eq!(current(1.0).text, "1 minute ago");
        assert_eq!(current(1.9).text, "1 minute ago");
        assert_eq!(current(30.0).text, "30 minutes ago");
        assert_eq!(current(60.9).text, "60 minutes ago");
    }

    #[test]
    fn hour_scale_rounds_to_one_decimal() {
        assert_eq!(current(90.0).text, "1.5 hours ago");
        assert_eq!(current(61.0).text, "1 hour ago");
        assert_eq!(current(120.0).text, "2 hours ago");
        assert_eq!(current(1439.0).text, "24 hours ago");
    }

    #[test]
    fn legacy_policy_keeps_minutes() {
        let display = format_elapsed(90.0, &RecencyPolicy::LEGACY);
        assert_eq!(display.text, "90 minutes ago");
        assert_eq!(display.category, RecencyCategory::Normal);
        assert_eq!(
            format_elapsed(120.5, &RecencyPolicy::LEGACY).category,
            RecencyCategory::Stale
        );
    }

    #[test]
    fn more_than_a_day_is_stale() {
        let display = current(1500.0);
        assert_eq!(display.text, "more than a day before");
        assert_eq!(display.category, RecencyCategory::Stale);
    }

    #[test]
    fn color_thresholds_use_raw_elapsed() {
        assert_eq!(current(44.9).category, RecencyCategory::Recent);
        assert_eq!(current(STALE_AFTER_MINUTES + 0.1).category, RecencyCategory::Stale);

        let mut elapsed = RECENT_BEFORE_MINUTES;
        while elapsed <= STALE_AFTER_MINUTES {
            assert_eq!(current(elapsed).category, RecencyCategory::Normal, "elapsed {elapsed}");
            elapsed += 7.5;
        }
        assert_eq!(current(STALE_AFTER_MINUTES).category, RecencyCategory::Normal);
    }

    #[test]
    fn category_colors() {
        assert_eq!(RecencyCategory::Normal.css_color(), "");
        assert_eq!(RecencyCategory::Recent.css_color(), "green");
        assert_eq!(RecencyCategory::Stale.css_color(), "red");
    }
}
