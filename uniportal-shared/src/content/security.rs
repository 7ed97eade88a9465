//! PIN-gated sensitive profile fields.

use thiserror::Error;

/// PIN accepted by the prototype.
pub const DEMO_PIN: &str = "0000";

pub const MASK: &str = "••••••••";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    #[error("Incorrect PIN. Try 0000.")]
    Incorrect,
}

/// Reveal state of one sensitive field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinGate {
    revealed: bool,
    prompting: bool,
    error: Option<PinError>,
}

impl PinGate {
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub const fn is_prompting(&self) -> bool {
        self.prompting
    }

    #[must_use]
    pub const fn error(&self) -> Option<&PinError> {
        self.error.as_ref()
    }

    /// Hides a revealed value immediately; otherwise opens the PIN prompt
    /// with a clean slate.
    pub fn toggle(&mut self) {
        if self.revealed {
            self.revealed = false;
        } else {
            self.prompting = true;
            self.error = None;
        }
    }

    /// Checks `pin`. On success the value is revealed and the prompt closes.
    ///
    /// # Errors
    /// Returns [`PinError::Incorrect`] and keeps the prompt open on a
    /// mismatch.
    pub fn submit(&mut self, pin: &str) -> Result<(), PinError> {
        if pin == DEMO_PIN {
            self.revealed = true;
            self.prompting = false;
            self.error = None;
            Ok(())
        } else {
            self.error = Some(PinError::Incorrect);
            Err(PinError::Incorrect)
        }
    }

    pub fn dismiss(&mut self) {
        self.prompting = false;
    }

    /// Text to display for `value` in the current state.
    #[must_use]
    pub fn display<'a>(&self, value: &'a str) -> &'a str {
        if self.revealed { value } else { MASK }
    }
}

/// Sensitive personal details shown on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensitiveDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PERSONAL_DETAILS: [SensitiveDetail; 3] = [
    SensitiveDetail {
        label: "Legal Name",
        value: "Alexander James Student",
    },
    SensitiveDetail {
        label: "USI (Unique Student Identifier)",
        value: "3000 123 456",
    },
    SensitiveDetail {
        label: "WAM (Weighted Average Mark)",
        value: "78.5 (Distinction)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_until_correct_pin() {
        let mut gate = PinGate::default();
        assert_eq!(gate.display("secret"), MASK);

        gate.toggle();
        assert!(gate.is_prompting());
        assert_eq!(gate.submit("1234"), Err(PinError::Incorrect));
        assert_eq!(
            gate.error().map(ToString::to_string).as_deref(),
            Some("Incorrect PIN. Try 0000.")
        );
        assert!(gate.is_prompting());
        assert_eq!(gate.display("secret"), MASK);

        gate.submit("0000").unwrap();
        assert!(!gate.is_prompting());
        assert!(gate.error().is_none());
        assert_eq!(gate.display("secret"), "secret");
    }

    #[test]
    fn test_hiding_needs_no_pin() {
        let mut gate = PinGate::default();
        gate.toggle();
        gate.submit(DEMO_PIN).unwrap();
        gate.toggle();
        assert!(!gate.is_revealed());
        assert!(!gate.is_prompting());
    }

    #[test]
    fn test_reopening_clears_error() {
        let mut gate = PinGate::default();
        gate.toggle();
        let _ = gate.submit("9");
        gate.dismiss();
        gate.toggle();
        assert!(gate.error().is_none());
    }
}
