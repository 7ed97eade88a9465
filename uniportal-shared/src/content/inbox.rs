//! Inbox messages and notices.

use serde::Serialize;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum MessageCategory {
    Emergency,
    Academic,
    Admin,
    Community,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: &'static str,
    pub title: &'static str,
    pub category: MessageCategory,
    pub date: &'static str,
    pub read: bool,
    pub body: &'static str,
}

/// Filter chips shown above the message list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
pub enum InboxFilter {
    #[default]
    All,
    Academic,
    Admin,
    Emergency,
}

impl InboxFilter {
    #[must_use]
    pub fn matches(self, message: &Message) -> bool {
        match self {
            Self::All => true,
            Self::Academic => message.category == MessageCategory::Academic,
            Self::Admin => message.category == MessageCategory::Admin,
            Self::Emergency => message.category == MessageCategory::Emergency,
        }
    }
}

#[must_use]
pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: "m1",
            title: "URGENT: Campus Power Outage",
            category: MessageCategory::Emergency,
            date: "Today, 8:00 AM",
            read: false,
            body: "Main campus is currently experiencing a power outage. Classes in Building A are cancelled.",
        },
        Message {
            id: "m2",
            title: "Assignment 1 Graded",
            category: MessageCategory::Academic,
            date: "Yesterday",
            read: true,
            body: "Your results for Intro to Programming are now available.",
        },
        Message {
            id: "m3",
            title: "Library Fines Outstanding",
            category: MessageCategory::Admin,
            date: "2 days ago",
            read: false,
            body: "Please pay your outstanding fine of $5.00.",
        },
        Message {
            id: "m4",
            title: "Club Sign-up Day",
            category: MessageCategory::Community,
            date: "Last Week",
            read: true,
            body: "Join us on the lawn for club sign-ups.",
        },
    ]
}

/// Page-local copy of the messages. Read state is never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbox {
    messages: Vec<Message>,
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new(messages())
    }
}

impl Inbox {
    #[must_use]
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn filtered(&self, filter: InboxFilter) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(move |m| filter.matches(m))
    }

    /// Flips the read flag of `id`. Unknown ids are ignored.
    pub fn toggle_read(&mut self, id: &str) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            message.read = !message.read;
        }
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.read).count()
    }

    /// Dashboard notices: the first `limit` unread messages.
    #[must_use]
    pub fn top_unread(&self, limit: usize) -> Vec<&Message> {
        self.messages.iter().filter(|m| !m.read).take(limit).collect()
    }

    /// First unread emergency, shown as a blocking alert.
    #[must_use]
    pub fn urgent(&self) -> Option<&Message> {
        self.messages
            .iter()
            .find(|m| m.category == MessageCategory::Emergency && !m.read)
    }
}
