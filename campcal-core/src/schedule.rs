//! Schedule document model.
//!
//! A schedule is a JSON object with an `activities` array. Activities carry
//! no identity of their own; their position in that array is what the ICS
//! generator uses to build stable UIDs.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::CampCalResult;

/// Root of a schedule document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub places: Vec<Place>,
}

/// A venue that activities refer to by `placeId`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub id: String,
    pub title: Option<String>,
}

/// Human-readable name for a place id: the matching place's title, or the
/// id itself when no place matches or the place has no title.
pub fn place_name<'a>(places: &'a [Place], id: &'a str) -> &'a str {
    places
        .iter()
        .find(|place| place.id == id)
        .and_then(|place| non_empty(&place.title))
        .unwrap_or(id)
}

/// One scheduled item (talk, workshop, meal, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub title: Option<String>,
    pub description: Option<String>,
    /// YYYY-MM-DD
    pub date: Option<String>,
    /// HH:MM, possibly followed by decorative text
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub track: Option<String>,
    pub author: Option<String>,
    pub place_id: Option<String>,
}

/// Treat empty strings the same as missing fields.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Activity {
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    pub fn time_start(&self) -> Option<&str> {
        non_empty(&self.time_start)
    }

    pub fn time_end(&self) -> Option<&str> {
        non_empty(&self.time_end)
    }

    pub fn track(&self) -> Option<&str> {
        non_empty(&self.track)
    }

    pub fn author(&self) -> Option<&str> {
        non_empty(&self.author)
    }

    pub fn place_id(&self) -> Option<&str> {
        non_empty(&self.place_id)
    }

    /// Only activities with both a date and a start time become events.
    pub fn is_schedulable(&self) -> bool {
        self.date().is_some() && self.time_start().is_some()
    }
}

/// Earliest and latest activity date (as written in the schedule).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSpan {
    pub first: String,
    pub last: String,
}

impl Schedule {
    /// Load a schedule from a JSON file.
    pub fn load(path: &Path) -> CampCalResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> CampCalResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Activities paired with their position in the full list, optionally
    /// restricted to one track. Order is preserved.
    pub fn entries(&self, track: Option<&str>) -> Vec<(usize, &Activity)> {
        self.activities
            .iter()
            .enumerate()
            .filter(|(_, activity)| match track {
                Some(label) => activity.track() == Some(label),
                None => true,
            })
            .collect()
    }

    /// Distinct track labels in sorted order.
    pub fn tracks(&self) -> Vec<String> {
        self.activities
            .iter()
            .filter_map(Activity::track)
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Min/max date over activities that have one.
    pub fn date_span(&self) -> Option<DateSpan> {
        let dates = self.activities.iter().filter_map(Activity::date);
        let first = dates.clone().min()?;
        let last = dates.max()?;

        Some(DateSpan {
            first: first.to_string(),
            last: last.to_string(),
        })
    }
}
