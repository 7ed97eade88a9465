//! Floating assistant transcript.
//!
//! The transcript is pure state; the renderer owns the timer that delivers
//! the simulated reply.

use serde::Serialize;

pub const GREETING: &str = "Hi Alex! I am your AI Assistant. How can I help you today?";
pub const SIMULATED_REPLY: &str = "This is a simulated AI response. I can help with finding library books, checking your timetable, or contacting Stop 1.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantChat {
    lines: Vec<ChatLine>,
}

impl Default for AssistantChat {
    fn default() -> Self {
        Self {
            lines: vec![ChatLine {
                speaker: Speaker::Bot,
                text: GREETING.to_string(),
            }],
        }
    }
}

impl AssistantChat {
    #[must_use]
    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }

    /// Appends the user's message. Blank input is ignored; returns whether a
    /// reply should be scheduled.
    pub fn submit(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.lines.push(ChatLine {
            speaker: Speaker::User,
            text: text.to_string(),
        });
        true
    }

    pub fn push_reply(&mut self) {
        self.lines.push(ChatLine {
            speaker: Speaker::Bot,
            text: SIMULATED_REPLY.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_greeting() {
        let chat = AssistantChat::default();
        assert_eq!(chat.lines().len(), 1);
        assert_eq!(chat.lines()[0].speaker, Speaker::Bot);
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut chat = AssistantChat::default();
        assert!(!chat.submit("   "));
        assert_eq!(chat, AssistantChat::default());
    }

    #[test]
    fn test_submit_then_reply() {
        let mut chat = AssistantChat::default();
        assert!(chat.submit("Where is the library?"));
        chat.push_reply();
        let speakers: Vec<_> = chat.lines().iter().map(|l| l.speaker).collect();
        assert_eq!(speakers, vec![Speaker::Bot, Speaker::User, Speaker::Bot]);
        assert_eq!(chat.lines()[2].text, SIMULATED_REPLY);
    }

    #[test]
    fn test_replies_follow_each_submission() {
        let mut chat = AssistantChat::default();
        chat.submit("one");
        chat.submit("two");
        chat.push_reply();
        chat.push_reply();
        assert_eq!(chat.lines().len(), 5);
    }
}
