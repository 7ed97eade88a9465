use serde::{Deserialize, Serialize};

/// Identity record attached to an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Student number.
    pub id: String,

    /// Display name.
    pub name: String,

    /// University email address.
    pub email: String,

    /// Initials shown in the avatar bubble.
    pub avatar: String,

    /// Human readable time of the previous sign-in.
    pub last_login: String,
}

impl UserRecord {
    /// The fixed identity used by the simulated sign-in and by session restore.
    /// Identity is never round-tripped through storage.
    #[must_use]
    pub fn student() -> Self {
        Self {
            id: "s1234567".to_string(),
            name: "Alex Student".to_string(),
            email: "alex.student@uni.edu.au".to_string(),
            avatar: "AS".to_string(),
            last_login: "Today, 9:41 AM".to_string(),
        }
    }

    /// First word of the display name, used in greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Record of whether a user is considered logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Present exactly when the session is authenticated.
    pub user: Option<UserRecord>,

    /// One-way flag set once the first-run tutorial is finished or skipped.
    pub tutorial_seen: bool,
}

impl Session {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_record() {
        let user = UserRecord::student();
        assert_eq!(user.id, "s1234567");
        assert_eq!(user.first_name(), "Alex");
        assert_eq!(user.avatar, "AS");
    }

    #[test]
    fn test_first_name_of_single_word() {
        let user = UserRecord {
            name: "Cher".into(),
            ..UserRecord::student()
        };
        assert_eq!(user.first_name(), "Cher");
    }

    #[test]
    fn test_empty_session() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(!session.tutorial_seen);
    }

    #[test]
    fn test_authenticated_follows_user() {
        let session = Session {
            user: Some(UserRecord::student()),
            tutorial_seen: false,
        };
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Alex Student"));
    }
}
