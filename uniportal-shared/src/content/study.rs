//! Course progress, results and timetable allocations.

use serde::Serialize;

/// Credit point threshold above which a student counts as final year.
pub const FINAL_YEAR_CREDITS: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcademicProgress {
    pub credits_completed: u32,
    pub credits_total: u32,
    pub expected_completion: &'static str,
    pub status: &'static str,
}

impl AcademicProgress {
    /// Completed share of the degree, 0 to 100.
    #[must_use]
    pub fn percent_complete(&self) -> f64 {
        if self.credits_total == 0 {
            return 0.0;
        }
        f64::from(self.credits_completed) / f64::from(self.credits_total) * 100.0
    }

    #[must_use]
    pub const fn is_final_year(&self) -> bool {
        self.credits_completed > FINAL_YEAR_CREDITS
    }
}

#[must_use]
pub fn progress() -> AcademicProgress {
    AcademicProgress {
        credits_completed: 144,
        credits_total: 288,
        expected_completion: "Nov 2026",
        status: "Good Standing",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub name: &'static str,
    pub mark: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectResult {
    pub code: &'static str,
    pub name: &'static str,
    pub mark: u8,
    pub grade: &'static str,
    pub assessments: Vec<Assessment>,
}

#[must_use]
pub fn results() -> Vec<SubjectResult> {
    vec![
        SubjectResult {
            code: "COMP101",
            name: "Intro to Programming",
            mark: 82,
            grade: "H1",
            assessments: vec![
                Assessment {
                    name: "Assignment 1",
                    mark: "90/100",
                    status: "Graded",
                },
                Assessment {
                    name: "Mid-Sem Test",
                    mark: "74/100",
                    status: "Graded",
                },
            ],
        },
        SubjectResult {
            code: "ENG202",
            name: "Engineering Mechanics",
            mark: 65,
            grade: "H3",
            assessments: vec![Assessment {
                name: "Lab Report",
                mark: "Pending",
                status: "Submitted",
            }],
        },
    ]
}

/// One subject row of the allocation card on the timetable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub code: &'static str,
    pub summary: &'static str,
    pub action: &'static str,
    /// Whether the row still needs the student's input.
    pub pending: bool,
}

#[must_use]
pub fn allocations() -> Vec<Allocation> {
    vec![
        Allocation {
            code: "COMP101",
            summary: "Lecture: Allocated • Tutorial: Pending",
            action: "Edit Preferences",
            pending: true,
        },
        Allocation {
            code: "ENG202",
            summary: "Lecture: Allocated • Lab: Allocated",
            action: "View",
            pending: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        let progress = progress();
        assert!((progress.percent_complete() - 50.0).abs() < f64::EPSILON);
        assert!(!progress.is_final_year());
    }

    #[test]
    fn test_final_year_threshold() {
        let mut progress = progress();
        progress.credits_completed = 200;
        assert!(!progress.is_final_year());
        progress.credits_completed = 201;
        assert!(progress.is_final_year());
    }

    #[test]
    fn test_zero_total_credits() {
        let progress = AcademicProgress {
            credits_total: 0,
            ..progress()
        };
        assert!(progress.percent_complete().abs() < f64::EPSILON);
    }

    #[test]
    fn test_results_table() {
        let results = results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].grade, "H1");
        assert_eq!(results[1].assessments[0].mark, "Pending");
        assert_eq!(allocations().iter().filter(|a| a.pending).count(), 1);
    }
}
