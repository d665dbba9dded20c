//! Calendar document generation.

use icalendar::{Calendar, Property};

use super::event::CalendarEvent;
use crate::config::{ExportConfig, TimezoneConfig, Transition};

/// Generate a complete VCALENDAR document holding `events` in order.
pub fn generate_calendar(events: &[CalendarEvent], config: &ExportConfig) -> String {
    let meta = &config.calendar;

    let mut cal = Calendar::new();
    cal.append_property(Property::new("METHOD", "PUBLISH"));
    cal.append_property(Property::new("X-WR-CALNAME", meta.name.as_str()));
    cal.append_property(Property::new("X-WR-CALDESC", meta.description.as_str()));
    cal.append_property(Property::new("X-WR-TIMEZONE", config.timezone.tzid.as_str()));

    for event in events {
        cal.push(event.to_ics_event());
    }
    let cal = cal.done();

    finish_document(&cal.to_string(), config)
}

/// Post-process the icalendar crate's output
/// - Replace PRODID with the configured product id
/// - Move CALSCALE after PRODID so the header reads in RFC order
/// - Insert the VTIMEZONE block between the header and the first event
fn finish_document(ics: &str, config: &ExportConfig) -> String {
    let mut result = String::with_capacity(ics.len() + 512);
    let mut in_header = false;

    for line in ics.lines() {
        if line == "BEGIN:VCALENDAR" {
            in_header = true;
        } else if in_header && (line.starts_with("BEGIN:") || line == "END:VCALENDAR") {
            push_timezone(&mut result, &config.timezone);
            in_header = false;
        }

        if line.starts_with("PRODID:") {
            push_line(&mut result, &format!("PRODID:{}", config.calendar.product_id));
            push_line(&mut result, "CALSCALE:GREGORIAN");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        push_line(&mut result, line);
    }

    result
}

fn push_line(result: &mut String, line: &str) {
    result.push_str(line);
    result.push_str("\r\n");
}

fn push_timezone(result: &mut String, tz: &TimezoneConfig) {
    push_line(result, "BEGIN:VTIMEZONE");
    push_line(result, &format!("TZID:{}", tz.tzid));
    push_observance(result, "STANDARD", &tz.standard);
    push_observance(result, "DAYLIGHT", &tz.daylight);
    push_line(result, "END:VTIMEZONE");
}

fn push_observance(result: &mut String, kind: &str, transition: &Transition) {
    push_line(result, &format!("BEGIN:{kind}"));
    push_line(result, &format!("DTSTART:{}", transition.dtstart));
    push_line(result, &format!("TZOFFSETFROM:{}", transition.offset_from));
    push_line(result, &format!("TZOFFSETTO:{}", transition.offset_to));
    push_line(result, &format!("TZNAME:{}", transition.name));
    push_line(result, &format!("END:{kind}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{Activity, Place};
    use icalendar::parser::{read_calendar, unfold};

    fn make_activity(title: &str, time: &str) -> Activity {
        Activity {
            title: Some(title.to_string()),
            date: Some("2025-07-10".to_string()),
            time_start: Some(time.to_string()),
            track: Some("Wellness".to_string()),
            ..Default::default()
        }
    }

    fn make_event(ordinal: usize, title: &str, time: &str) -> CalendarEvent {
        build_event(ordinal, &make_activity(title, time), &[])
    }

    fn build_event(ordinal: usize, activity: &Activity, places: &[Place]) -> CalendarEvent {
        CalendarEvent::from_activity(ordinal, activity, places, &ExportConfig::default())
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_envelope_structure() {
        let ics = generate_calendar(&[], &ExportConfig::default());
        let lines: Vec<&str> = ics.lines().collect();

        assert_eq!(
            &lines[..4],
            &[
                "BEGIN:VCALENDAR",
                "VERSION:2.0",
                "PRODID:-//Vas3k Camp//Schedule//EN",
                "CALSCALE:GREGORIAN",
            ],
            "ICS:\n{ics}"
        );
        assert_eq!(lines.last(), Some(&"END:VCALENDAR"));
        assert!(ics.contains("METHOD:PUBLISH\r\n"));
        assert!(ics.contains("X-WR-CALNAME:Vas3k Camp 2025\r\n"));
        assert!(ics.contains("X-WR-CALDESC:Vas3k Camp 2025 Schedule\r\n"));
        assert!(ics.contains("X-WR-TIMEZONE:Europe/Belgrade\r\n"));
        assert!(ics.contains(
            "BEGIN:VTIMEZONE\r\nTZID:Europe/Belgrade\r\nBEGIN:STANDARD\r\nDTSTART:20241027T030000\r\nTZOFFSETFROM:+0200\r\nTZOFFSETTO:+0100\r\nTZNAME:CET\r\nEND:STANDARD\r\n"
        ));
        assert!(ics.contains(
            "BEGIN:DAYLIGHT\r\nDTSTART:20250330T020000\r\nTZOFFSETFROM:+0100\r\nTZOFFSETTO:+0200\r\nTZNAME:CEST\r\nEND:DAYLIGHT\r\nEND:VTIMEZONE\r\nEND:VCALENDAR\r\n"
        ));
        assert!(!ics.contains("ICALENDAR-RS"));
        assert_eq!(ics.matches("CALSCALE").count(), 1);
        assert!(!ics.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn test_timezone_precedes_events() {
        let ics = generate_calendar(&[make_event(0, "Yoga", "08:00")], &ExportConfig::default());

        let header = ics.find("X-WR-TIMEZONE:").unwrap();
        let timezone = ics.find("BEGIN:VTIMEZONE").unwrap();
        let event = ics.find("BEGIN:VEVENT").unwrap();
        assert!(header < timezone && timezone < event, "ICS:\n{ics}");
        assert_eq!(ics.matches("BEGIN:VTIMEZONE").count(), 1);
    }

    #[test]
    fn test_events_in_input_order() {
        let events = vec![
            make_event(0, "Yoga", "08:00"),
            make_event(1, "Meditation", "07:00"),
        ];
        let ics = generate_calendar(&events, &ExportConfig::default());

        let yoga = ics.find("SUMMARY:🧘 Yoga").expect("Missing Yoga");
        let meditation = ics.find("SUMMARY:🧘 Meditation").expect("Missing Meditation");
        assert!(yoga < meditation, "Events reordered. ICS:\n{ics}");
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    }

    #[test]
    fn test_output_parses_with_icalendar() {
        let events = vec![
            make_event(0, "Morning Yoga", "08:00"),
            make_event(3, "Sunset talk, music and a party with a very long title that needs folding", "19:30"),
        ];
        let ics = generate_calendar(&events, &ExportConfig::default());

        let unfolded = unfold(&ics);
        let calendar = read_calendar(&unfolded).expect("Generated ICS should parse");
        let vevents: Vec<_> = calendar
            .components
            .iter()
            .filter(|c| c.name == "VEVENT")
            .collect();
        assert_eq!(vevents.len(), 2, "ICS:\n{ics}");
        assert_eq!(
            calendar.components.iter().filter(|c| c.name == "VTIMEZONE").count(),
            1,
            "ICS:\n{ics}"
        );

        let first = vevents[0];
        assert_eq!(
            first.find_prop("UID").unwrap().val.to_string(),
            "vas3k-camp-2025-07-10-08:00-0@vas3k.club"
        );
        assert_eq!(first.find_prop("DTSTART").unwrap().val.to_string(), "20250710T080000");
        assert_eq!(first.find_prop("SUMMARY").unwrap().val.to_string(), "🧘 Morning Yoga");

        let second = vevents[1];
        assert_eq!(second.find_prop("DTSTART").unwrap().val.to_string(), "20250710T193000");
    }

    #[test]
    fn test_long_lines_are_folded() {
        let mut activity = make_activity("Workshop", "10:00");
        activity.place_id = Some("forest".to_string());
        let places = vec![Place {
            id: "forest".to_string(),
            title: Some("Camp forest clearing behind the second lake, follow the blue flags".to_string()),
        }];
        let ics = generate_calendar(&[build_event(0, &activity, &places)], &ExportConfig::default());

        for line in ics.split("\r\n") {
            assert!(line.len() <= 75, "Line too long ({}): {line}", line.len());
        }
        assert!(ics.contains("\r\nLOCATION:Camp forest"), "ICS:\n{ics}");
        assert!(ics.contains("\r\n "), "Expected a folded line. ICS:\n{ics}");
        assert!(
            unfold(&ics).contains(
                "LOCATION:Camp forest clearing behind the second lake\\, follow the blue flags\r\n"
            ),
            "ICS:\n{ics}"
        );
    }

    #[test]
    fn test_text_is_escaped_in_document() {
        let mut activity = make_activity("Knitting, weaving; more", "08:00");
        activity.track = Some("Food".to_string());
        activity.description = Some("eggs, bacon; c:\\tent".to_string());
        let ics = generate_calendar(&[build_event(0, &activity, &[])], &ExportConfig::default());
        let unfolded = unfold(&ics);

        assert!(unfolded.contains("SUMMARY:Knitting\\, weaving\\; more\r\n"), "ICS:\n{ics}");
        assert!(
            unfolded.contains("DESCRIPTION:Track: Food\\n\\nDescription: eggs\\, bacon\\; c:\\\\tent\r\n"),
            "ICS:\n{ics}"
        );
        assert!(unfolded.contains("DTSTART;TZID=Europe/Belgrade:20250710T080000\r\n"));
        assert!(read_calendar(&unfolded).is_ok(), "ICS:\n{ics}");
    }

    #[test]
    fn test_custom_header_values() {
        let config = ExportConfig::from_toml(
            r#"
            [calendar]
            name = "Summer Meetup"
            product_id = "-//Meetup//Agenda//EN"
            "#,
        )
        .unwrap();
        let ics = generate_calendar(&[], &config);

        assert!(ics.contains("PRODID:-//Meetup//Agenda//EN\r\n"), "ICS:\n{ics}");
        assert!(ics.contains("X-WR-CALNAME:Summer Meetup\r\n"), "ICS:\n{ics}");
    }
}
