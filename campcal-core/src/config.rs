//! Export configuration.
//!
//! Every setting has a default, so a config file is optional. When present it
//! is TOML and only needs the keys that differ from the defaults:
//!
//! ```toml
//! [calendar]
//! name = "Summer Camp"
//! file_prefix = "summer_camp"
//!
//! [timezone]
//! tzid = "Europe/Berlin"
//! ```

use std::path::Path;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{CampCalError, CampCalResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub calendar: CalendarMeta,
    pub timezone: TimezoneConfig,
}

/// Header values and naming used for every generated document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CalendarMeta {
    pub name: String,
    pub description: String,
    pub product_id: String,
    /// Output files are named `{file_prefix}_full.ics` and `{file_prefix}_{track}.ics`
    pub file_prefix: String,
    pub uid_prefix: String,
    pub uid_domain: String,
}

impl Default for CalendarMeta {
    fn default() -> Self {
        CalendarMeta {
            name: "Vas3k Camp 2025".to_string(),
            description: "Vas3k Camp 2025 Schedule".to_string(),
            product_id: "-//Vas3k Camp//Schedule//EN".to_string(),
            file_prefix: "vas3k_camp_2025".to_string(),
            uid_prefix: "vas3k-camp".to_string(),
            uid_domain: "vas3k.club".to_string(),
        }
    }
}

/// The single VTIMEZONE embedded in each document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimezoneConfig {
    /// IANA zone name, used as TZID
    pub tzid: String,
    pub standard: Transition,
    pub daylight: Transition,
}

/// One STANDARD or DAYLIGHT observance.
#[derive(Debug, Clone, Deserialize)]
pub struct Transition {
    pub dtstart: String,
    pub offset_from: String,
    pub offset_to: String,
    pub name: String,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        TimezoneConfig {
            tzid: "Europe/Belgrade".to_string(),
            standard: Transition {
                dtstart: "20241027T030000".to_string(),
                offset_from: "+0200".to_string(),
                offset_to: "+0100".to_string(),
                name: "CET".to_string(),
            },
            daylight: Transition {
                dtstart: "20250330T020000".to_string(),
                offset_from: "+0100".to_string(),
                offset_to: "+0200".to_string(),
                name: "CEST".to_string(),
            },
        }
    }
}

impl TimezoneConfig {
    /// The zone as a chrono-tz timezone.
    pub fn tz(&self) -> CampCalResult<Tz> {
        self.tzid
            .parse::<Tz>()
            .map_err(|_| CampCalError::Config(format!("Unknown timezone '{}'", self.tzid)))
    }
}

impl ExportConfig {
    /// Load config from a TOML file, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> CampCalResult<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    CampCalError::Config(format!(
                        "Could not read config file {}: {e}",
                        path.display()
                    ))
                })?;
                Self::from_toml(&content)?
            }
            None => Self::default(),
        };

        Ok(config)
    }

    pub fn from_toml(content: &str) -> CampCalResult<Self> {
        let config: ExportConfig =
            toml::from_str(content).map_err(|e| CampCalError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CampCalResult<()> {
        self.timezone.tz()?;

        for (key, value) in self.header_values() {
            if value.chars().any(char::is_control) {
                return Err(CampCalError::Config(format!(
                    "{key} must not contain control characters"
                )));
            }
        }

        if self.calendar.file_prefix.trim().is_empty() {
            return Err(CampCalError::Config("file_prefix must not be empty".into()));
        }

        Ok(())
    }

    /// Values written verbatim into document headers, UIDs or filenames
    fn header_values(&self) -> [(&'static str, &str); 15] {
        let meta = &self.calendar;
        let tz = &self.timezone;
        [
            ("calendar.name", meta.name.as_str()),
            ("calendar.description", meta.description.as_str()),
            ("calendar.product_id", meta.product_id.as_str()),
            ("calendar.file_prefix", meta.file_prefix.as_str()),
            ("calendar.uid_prefix", meta.uid_prefix.as_str()),
            ("calendar.uid_domain", meta.uid_domain.as_str()),
            ("timezone.tzid", tz.tzid.as_str()),
            ("timezone.standard.dtstart", tz.standard.dtstart.as_str()),
            ("timezone.standard.offset_from", tz.standard.offset_from.as_str()),
            ("timezone.standard.offset_to", tz.standard.offset_to.as_str()),
            ("timezone.standard.name", tz.standard.name.as_str()),
            ("timezone.daylight.dtstart", tz.daylight.dtstart.as_str()),
            ("timezone.daylight.offset_from", tz.daylight.offset_from.as_str()),
            ("timezone.daylight.offset_to", tz.daylight.offset_to.as_str()),
            ("timezone.daylight.name", tz.daylight.name.as_str()),
        ]
    }

    /// Name of the calendar holding every activity.
    pub fn full_filename(&self) -> String {
        format!("{}_full.ics", self.calendar.file_prefix)
    }
}
