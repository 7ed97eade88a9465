//! First-run tutorial overlay.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [TutorialStep; 4] = [
    TutorialStep {
        title: "Welcome to your new Portal",
        description: "This is your unified dashboard for everything university related.",
    },
    TutorialStep {
        title: "Navigation",
        description: "Use the sidebar to access your Study, Finances, and Support services.",
    },
    TutorialStep {
        title: "Global Search",
        description: "Find anything instantly using the search bar above.",
    },
    TutorialStep {
        title: "Personalised for you",
        description: "Your widgets update automatically based on your enrolment.",
    },
];

/// Result of pressing the primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Step(usize),
    Finished,
}

/// Cursor over [`STEPS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tutorial {
    step: usize,
}

impl Tutorial {
    #[must_use]
    pub const fn step(self) -> usize {
        self.step
    }

    #[must_use]
    pub const fn current(self) -> TutorialStep {
        STEPS[self.step]
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.step + 1 >= STEPS.len()
    }

    #[must_use]
    pub const fn button_label(self) -> &'static str {
        if self.is_last() { "Finish" } else { "Next" }
    }

    /// Moves to the next step, or reports that the tour is over.
    #[must_use]
    pub const fn advance(self) -> Advance {
        if self.is_last() {
            Advance::Finished
        } else {
            Advance::Step(self.step + 1)
        }
    }

    #[must_use]
    pub const fn at(step: usize) -> Self {
        let last = STEPS.len() - 1;
        Self {
            step: if step > last { last } else { step },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_through() {
        let mut tutorial = Tutorial::default();
        let mut labels = vec![tutorial.button_label()];
        while let Advance::Step(next) = tutorial.advance() {
            tutorial = Tutorial::at(next);
            labels.push(tutorial.button_label());
        }
        assert_eq!(labels, vec!["Next", "Next", "Next", "Finish"]);
        assert_eq!(tutorial.current().title, "Personalised for you");
    }

    #[test]
    fn test_at_clamps() {
        assert_eq!(Tutorial::at(10).step(), 3);
    }
}
