//! ICS generation.
//!
//! Events are built with the `icalendar` crate, which escapes and folds
//! content lines. This module only writes .ics documents; the parser is used
//! by tests.

mod event;
mod generate;
mod timestamp;

pub use event::CalendarEvent;
pub use generate::generate_calendar;
pub use timestamp::format_timestamp;
