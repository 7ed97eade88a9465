//! Help page triage.

use serde::Serialize;

const VISA_ANSWER: &str = "As an international student, you must maintain a valid CoE. Contact Stop 1 immediately if you underload.";
const EXAM_ANSWER: &str = "Exam timetables are released 6 weeks before the assessment period. Check your 'My Study' tab.";

/// What the help page shows for the current query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Triage {
    /// No query: popular topics and personal recommendations.
    Browse,
    /// Canned assistant answer.
    Answer { text: &'static str },
    /// Generic search results for the query.
    Results { query: String },
}

/// Classifies a help query. Visa questions take precedence over exams.
#[must_use]
pub fn triage(query: &str) -> Triage {
    if query.is_empty() {
        return Triage::Browse;
    }
    let lowered = query.to_lowercase();
    if lowered.contains("visa") {
        Triage::Answer { text: VISA_ANSWER }
    } else if lowered.contains("exam") {
        Triage::Answer { text: EXAM_ANSWER }
    } else {
        Triage::Results {
            query: query.to_string(),
        }
    }
}

pub const POPULAR_TOPICS: [&str; 3] = ["Enrolment Help", "Fees & Payments", "Exams & Results"];

/// `tel:` link for a display phone number.
#[must_use]
pub fn phone_href(display: &str) -> String {
    let digits: String = display.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_empty_query_browses() {
        assert_eq!(triage(""), Triage::Browse);
    }

    #[test_case("Visa renewal")]
    #[test_case("my VISA and exam")]
    fn test_visa_wins(query: &str) {
        assert_eq!(triage(query), Triage::Answer { text: VISA_ANSWER });
    }

    #[test]
    fn test_exam_answer() {
        assert_eq!(triage("Exams"), Triage::Answer { text: EXAM_ANSWER });
    }

    #[test]
    fn test_other_queries_search() {
        assert_eq!(
            triage("parking"),
            Triage::Results {
                query: "parking".into()
            }
        );
    }

    #[test]
    fn test_phone_href() {
        assert_eq!(phone_href("13 00 12 34 56"), "tel:1300123456");
    }
}
