#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Framework-independent core of the UniPortal student portal.
//!
//! The three process-wide stores (path, session, persona), the view resolver,
//! the persona-filtered navigation tree and the mock content tables all live
//! here so they can be exercised natively, without a browser.

pub mod config;
pub mod content;
pub mod errors;
pub mod models;
pub mod store;
