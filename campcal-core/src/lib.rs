//! Core types for campcal.
//!
//! This crate turns a camp/conference schedule into iCalendar documents:
//! - `schedule` loads activities and groups them by track
//! - `decorate` picks emoji for an activity from its text
//! - `ics` builds event blocks and whole calendar documents
//! - `export` writes the full calendar plus one calendar per track

pub mod config;
pub mod decorate;
pub mod error;
pub mod export;
pub mod filename;
pub mod ics;
pub mod schedule;

pub use error::{CampCalError, CampCalResult};
