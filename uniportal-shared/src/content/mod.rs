//! # Page content
//!
//! Static tables behind the portal pages and the small pure derivations the
//! pages compute from them (filters, counts, progress, triage). Page-local
//! state types live here too so they can be tested natively.

pub mod assistant;
pub mod calendar;
pub mod finance;
pub mod help;
pub mod inbox;
pub mod interests;
pub mod locate;
pub mod onboarding;
pub mod personalization;
pub mod search;
pub mod security;
pub mod services;
pub mod study;
pub mod tasks;
pub mod tutorial;

pub use assistant::AssistantChat;
pub use inbox::{Inbox, InboxFilter};
pub use locate::LocateStatus;
pub use onboarding::Checklist;
pub use security::PinGate;
pub use tutorial::Tutorial;
