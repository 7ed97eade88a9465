//! Calendar events, dashboard schedule widgets and planner helpers.

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    Class,
    Assignment,
    Exam,
    Date,
}

impl EventKind {
    /// Plural label used by the filter panel.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Class => "classes",
            Self::Assignment => "assignments",
            Self::Exam => "exams",
            Self::Date => "dates",
        }
    }

    #[must_use]
    pub const fn is_deadline(self) -> bool {
        matches!(self, Self::Assignment | Self::Exam)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub id: &'static str,
    pub kind: EventKind,
    pub title: &'static str,
    /// Relative ("Today", "Next Week") or absolute ("12 Nov 2025").
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub url: &'static str,
}

impl CalendarEvent {
    /// Time split into clock and meridiem, e.g. `("10:00", "AM")`.
    #[must_use]
    pub fn time_parts(&self) -> (&'static str, &'static str) {
        let mut parts = self.time.split(' ');
        (parts.next().unwrap_or(""), parts.next().unwrap_or(""))
    }

    #[must_use]
    pub fn badge(&self) -> DateBadge {
        DateBadge::for_date(self.date)
    }
}

#[must_use]
pub fn events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: "c1",
            kind: EventKind::Class,
            title: "COMP101 Lecture",
            date: "Today",
            time: "10:00 AM",
            location: "Building 10, Room 301",
            url: "/timetable",
        },
        CalendarEvent {
            id: "c2",
            kind: EventKind::Class,
            title: "ENG202 Tutorial",
            date: "Today",
            time: "2:00 PM",
            location: "Engineering Block B",
            url: "/timetable",
        },
        CalendarEvent {
            id: "a1",
            kind: EventKind::Assignment,
            title: "Essay Submission",
            date: "Tomorrow",
            time: "11:59 PM",
            location: "Canvas",
            url: "#",
        },
        CalendarEvent {
            id: "k1",
            kind: EventKind::Date,
            title: "Census Date",
            date: "Next Week",
            time: "All Day",
            location: "Admin",
            url: "#",
        },
        CalendarEvent {
            id: "e1",
            kind: EventKind::Exam,
            title: "COMP101 Final Exam",
            date: "12 Nov 2025",
            time: "9:00 AM",
            location: "Examination Hall A",
            url: "#",
        },
    ]
}

/// Up to three events dated "Today".
#[must_use]
pub fn todays_schedule(events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| e.date == "Today").take(3).collect()
}

/// Assignments and exams, in table order.
#[must_use]
pub fn deadlines(events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| e.kind.is_deadline()).collect()
}

/// Per-kind visibility toggles; everything starts visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFilters {
    pub class: bool,
    pub assignment: bool,
    pub exam: bool,
    pub date: bool,
}

impl Default for EventFilters {
    fn default() -> Self {
        Self {
            class: true,
            assignment: true,
            exam: true,
            date: true,
        }
    }
}

impl EventFilters {
    #[must_use]
    pub const fn allows(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Class => self.class,
            EventKind::Assignment => self.assignment,
            EventKind::Exam => self.exam,
            EventKind::Date => self.date,
        }
    }

    #[must_use]
    pub const fn toggled(mut self, kind: EventKind) -> Self {
        match kind {
            EventKind::Class => self.class = !self.class,
            EventKind::Assignment => self.assignment = !self.assignment,
            EventKind::Exam => self.exam = !self.exam,
            EventKind::Date => self.date = !self.date,
        }
        self
    }

    #[must_use]
    pub fn apply<'a>(&self, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
        events.iter().filter(|e| self.allows(e.kind)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
pub enum CalendarView {
    #[default]
    Planner,
    Month,
}

/// Two-line date tile of the planner view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBadge {
    pub top: String,
    pub bottom: String,
}

impl DateBadge {
    /// "Today" and "Tomorrow" read `NOW` over the word; other dates show the
    /// second word over the first ("12 Nov 2025" gives `Nov` over `12`).
    #[must_use]
    pub fn for_date(date: &str) -> Self {
        if date == "Today" || date == "Tomorrow" {
            return Self {
                top: "NOW".to_string(),
                bottom: date.to_string(),
            };
        }
        let mut words = date.split(' ');
        let first = words.next().unwrap_or_default();
        let second = words.next().unwrap_or_default();
        Self {
            top: second.to_string(),
            bottom: first.to_string(),
        }
    }
}

/// Number of day cells in the placeholder month grid, and the highlighted
/// exam day (1-based).
pub const MONTH_DAYS: u32 = 30;
pub const MONTH_EXAM_DAY: u32 = 12;

/// Personal iCal feed offered in the subscription dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarFeed {
    pub label: &'static str,
    pub url: String,
}

const FEED_ACCOUNT: &str = "u12345";

#[must_use]
pub fn feeds(base: &str) -> Vec<CalendarFeed> {
    let base = base.trim_end_matches('/');
    vec![
        CalendarFeed {
            label: "Class Timetable",
            url: format!("{base}/{FEED_ACCOUNT}/timetable.ics"),
        },
        CalendarFeed {
            label: "Assignments & Deadlines",
            url: format!("{base}/{FEED_ACCOUNT}/canvas.ics"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    fn ids(events: &[&CalendarEvent]) -> Vec<&'static str> {
        events.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_todays_schedule() {
        let all = events();
        assert_eq!(ids(&todays_schedule(&all)), vec!["c1", "c2"]);
    }

    #[test]
    fn test_todays_schedule_caps_at_three() {
        let mut all = events();
        for event in &mut all {
            event.date = "Today";
        }
        assert_eq!(todays_schedule(&all).len(), 3);
    }

    #[test]
    fn test_deadlines() {
        let all = events();
        assert_eq!(ids(&deadlines(&all)), vec!["a1", "e1"]);
    }

    #[test]
    fn test_filters_toggle() {
        let all = events();
        let filters = EventFilters::default().toggled(EventKind::Class);
        assert_eq!(ids(&filters.apply(&all)), vec!["a1", "k1", "e1"]);
        assert_eq!(filters.toggled(EventKind::Class), EventFilters::default());

        let none = EventKind::iter().fold(EventFilters::default(), EventFilters::toggled);
        assert!(none.apply(&all).is_empty());
    }

    #[test_case("Today", "NOW", "Today")]
    #[test_case("Tomorrow", "NOW", "Tomorrow")]
    #[test_case("12 Nov 2025", "Nov", "12")]
    #[test_case("Next Week", "Week", "Next")]
    fn test_date_badge(date: &str, top: &str, bottom: &str) {
        let badge = DateBadge::for_date(date);
        assert_eq!(badge.top, top);
        assert_eq!(badge.bottom, bottom);
    }

    #[test]
    fn test_time_parts() {
        let all = events();
        assert_eq!(all[0].time_parts(), ("10:00", "AM"));
        assert_eq!(all[3].time_parts(), ("All", "Day"));
    }

    #[test]
    fn test_feeds() {
        let feeds = feeds("https://uni.edu.au/ical/");
        assert_eq!(feeds[0].url, "https://uni.edu.au/ical/u12345/timetable.ics");
        assert_eq!(feeds[1].url, "https://uni.edu.au/ical/u12345/canvas.ics");
    }
}
