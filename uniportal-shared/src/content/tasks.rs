//! Student tasks and Stop 1 enquiries.

use serde::Serialize;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentTask {
    pub id: &'static str,
    pub title: &'static str,
    pub due: &'static str,
    pub completed: bool,
}

#[must_use]
pub fn student_tasks() -> Vec<StudentTask> {
    vec![
        StudentTask {
            id: "t1",
            title: "Submit Census Form",
            due: "Tomorrow",
            completed: false,
        },
        StudentTask {
            id: "t2",
            title: "Register for Semester 2 Classes",
            due: "15 Nov",
            completed: false,
        },
        StudentTask {
            id: "t3",
            title: "Update Emergency Contact",
            due: "ASAP",
            completed: true,
        },
    ]
}

/// Flips completion of the task `id`; other tasks are untouched.
pub fn toggle_task(tasks: &mut [StudentTask], id: &str) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.completed = !task.completed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum EnquiryStatus {
    #[strum(serialize = "In Progress")]
    InProgress,
    #[strum(serialize = "Action Required")]
    ActionRequired,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enquiry {
    pub id: &'static str,
    pub title: &'static str,
    pub status: EnquiryStatus,
    pub updated: &'static str,
    pub last_response: &'static str,
}

#[must_use]
pub fn enquiries() -> Vec<Enquiry> {
    vec![
        Enquiry {
            id: "e1",
            title: "Subject Amendment Request",
            status: EnquiryStatus::InProgress,
            updated: "Today",
            last_response: "We are reviewing your request.",
        },
        Enquiry {
            id: "e2",
            title: "Lost ID Card",
            status: EnquiryStatus::ActionRequired,
            updated: "Yesterday",
            last_response: "Please upload a new photo.",
        },
        Enquiry {
            id: "e3",
            title: "Timetable Clash",
            status: EnquiryStatus::Closed,
            updated: "Last Month",
            last_response: "Resolved.",
        },
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
pub enum TasksTab {
    #[default]
    #[strum(serialize = "My Tasks")]
    Tasks,
    #[strum(serialize = "Enquiries (Stop 1)")]
    Enquiries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_task() {
        let mut tasks = student_tasks();
        toggle_task(&mut tasks, "t1");
        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);
        toggle_task(&mut tasks, "t1");
        assert_eq!(tasks, student_tasks());
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(TasksTab::default().to_string(), "My Tasks");
        assert_eq!(EnquiryStatus::ActionRequired.to_string(), "Action Required");
    }
}
