//! First-semester onboarding checklist.

use crate::models::Persona;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingTask {
    pub id: u32,
    pub label: &'static str,
    pub completed: bool,
    /// Completed by the system; the student cannot toggle it.
    pub automatic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    tasks: Vec<OnboardingTask>,
}

impl Default for Checklist {
    fn default() -> Self {
        Self {
            tasks: vec![
                OnboardingTask {
                    id: 1,
                    label: "Accept Terms & Conditions",
                    completed: true,
                    automatic: true,
                },
                OnboardingTask {
                    id: 2,
                    label: "Upload Student ID Photo",
                    completed: false,
                    automatic: false,
                },
                OnboardingTask {
                    id: 3,
                    label: "Complete Academic Integrity Module",
                    completed: false,
                    automatic: true,
                },
                OnboardingTask {
                    id: 4,
                    label: "Register for Orientation",
                    completed: false,
                    automatic: false,
                },
            ],
        }
    }
}

impl Checklist {
    /// Shown to commencing students only.
    #[must_use]
    pub fn applies_to(persona: &Persona) -> bool {
        persona.is_commencing()
    }

    #[must_use]
    pub fn tasks(&self) -> &[OnboardingTask] {
        &self.tasks
    }

    /// Flips a manual task. Returns `false` for automatic or unknown tasks.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) if !task.automatic => {
                task.completed = !task.completed;
                true
            }
            _ => false,
        }
    }

    /// Completed share, rounded to a whole percent.
    #[must_use]
    pub fn progress(&self) -> u8 {
        if self.tasks.is_empty() {
            return 0;
        }
        let done = self.tasks.iter().filter(|t| t.completed).count();
        let percent = (done * 200 + self.tasks.len()) / (self.tasks.len() * 2);
        u8::try_from(percent).unwrap_or(100)
    }
}
