//! VEVENT assembly from schedule activities.

use chrono::TimeZone;
use chrono_tz::Tz;
use icalendar::{Component, EventLike, Property};

use super::timestamp::{parse_local, time_token};
use crate::config::ExportConfig;
use crate::decorate::decorated_summary;
use crate::error::CampCalResult;
use crate::schedule::{Activity, Place, place_name};

/// A calendar event built from one activity, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    /// UTC stamp derived from the start, so output is reproducible
    pub dtstamp: String,
    pub tzid: String,
    pub start: String,
    pub end: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub category: Option<String>,
}

impl CalendarEvent {
    /// Build the event for an activity at `ordinal` in the full schedule.
    /// `places` resolves the activity's `placeId` to a venue name.
    ///
    /// Returns `Ok(None)` for activities without a date or start time.
    /// Unparseable dates or times are errors.
    pub fn from_activity(
        ordinal: usize,
        activity: &Activity,
        places: &[Place],
        config: &ExportConfig,
    ) -> CampCalResult<Option<Self>> {
        let (Some(date), Some(time_start)) = (activity.date(), activity.time_start()) else {
            log::debug!(
                "Skipping activity #{ordinal} {:?}: missing date or start time",
                activity.title().unwrap_or_default()
            );
            return Ok(None);
        };
        let time_end = activity.time_end().unwrap_or(time_start);

        let start = parse_local(date, time_start)?;
        let end = parse_local(date, time_end)?;
        let tz = config.timezone.tz()?;

        let meta = &config.calendar;
        let uid = format!(
            "{}-{}-{}-{}@{}",
            meta.uid_prefix,
            date,
            time_token(time_start),
            ordinal,
            meta.uid_domain
        );
        let location = activity.place_id().map(|id| place_name(places, id));

        Ok(Some(CalendarEvent {
            uid,
            dtstamp: utc_stamp(tz, start),
            tzid: config.timezone.tzid.clone(),
            start: start.format("%Y%m%dT%H%M%S").to_string(),
            end: end.format("%Y%m%dT%H%M%S").to_string(),
            summary: normalize_newlines(&decorated_summary(activity)),
            description: normalize_newlines(&compose_description(activity, location)),
            location: normalize_newlines(location.unwrap_or_default()),
            category: activity.track().map(normalize_newlines),
        }))
    }

    /// Convert to an `icalendar` VEVENT. Text values are escaped and folded
    /// by the crate when the calendar is rendered.
    pub fn to_ics_event(&self) -> icalendar::Event {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&self.uid);
        // Without it icalendar stamps the current time
        ics_event.add_property("DTSTAMP", &self.dtstamp);

        add_zoned_property(&mut ics_event, "DTSTART", &self.start, &self.tzid);
        add_zoned_property(&mut ics_event, "DTEND", &self.end, &self.tzid);

        ics_event.summary(&self.summary);
        ics_event.description(&self.description);
        ics_event.location(&self.location);

        if let Some(ref category) = self.category {
            ics_event.add_property("CATEGORIES", category);
        }

        ics_event.add_property("STATUS", "CONFIRMED");
        ics_event.add_property("TRANSP", "OPAQUE");

        ics_event.done()
    }
}

/// Add a local DATE-TIME property carrying a TZID parameter
fn add_zoned_property(ics_event: &mut icalendar::Event, name: &str, value: &str, tzid: &str) {
    let mut prop = Property::new(name, value);
    prop.add_parameter("TZID", tzid);
    ics_event.append_property(prop);
}

/// Track, author, description and location, separated by blank lines.
fn compose_description(activity: &Activity, location: Option<&str>) -> String {
    let parts: Vec<String> = [
        activity.track().map(|t| format!("Track: {t}")),
        activity.author().map(|a| format!("Author: {a}")),
        activity.description().map(|d| format!("Description: {d}")),
        location.map(|l| format!("Location: {l}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    parts.join("\n\n")
}

/// CR LF and lone CR become LF, which is the only line break TEXT values
/// can carry (as `\n`).
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Resolve a local time in `tz` and format it as a UTC DATE-TIME.
/// Times inside a DST gap fall back to treating the local time as UTC.
fn utc_stamp(tz: Tz, local: chrono::NaiveDateTime) -> String {
    let utc = tz
        .from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.naive_utc())
        .unwrap_or(local);

    utc.format("%Y%m%dT%H%M%SZ").to_string()
}
