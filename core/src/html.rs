// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The website sink: a single self-contained HTML page with the schedule
//! table on top and one section per workshop below it.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::config::{Config, Room, Yearly};
use crate::merge::MergedRecord;
use crate::schedule::{ScheduleEntry, TimeOfDay};
use crate::submission::split_list;

/// Renders the full page: header, schedule table, workshop sections, footer.
pub fn render_page(records: &[MergedRecord], config: &Config) -> String {
    let mut page = String::new();
    page.push_str(&render_header(&config.yearly.event_name));
    page.push_str(&render_schedule_table(records, &config.yearly));
    for record in records {
        if let Some(section) = render_workshop(record, config) {
            page.push_str(&section);
            page.push('\n');
        }
    }
    page.push_str(FOOTER);
    page
}

fn render_header(page_title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n<h1>{}</h1>\n",
        escape(page_title),
        escape(page_title)
    )
}

const FOOTER: &str = "</body>\n</html>\n";

/// The per-day overview table. One row per date, columns for morning,
/// afternoon and whole-day workshops, each workshop linking to its section.
/// Networking events link out to their own page instead.
pub fn render_schedule_table(records: &[MergedRecord], yearly: &Yearly) -> String {
    let mut days: BTreeMap<NaiveDate, [Vec<String>; 3]> = BTreeMap::new();

    for record in records {
        let Some(entry) = record.schedule.as_ref() else {
            continue;
        };
        let Some(date) = entry.date else {
            continue;
        };
        let column = match entry.time_of_day {
            TimeOfDay::Morning => 0,
            TimeOfDay::Afternoon => 1,
            TimeOfDay::AllDay => 2,
            _ => continue,
        };
        let link = if entry.is_networking_event {
            format!(
                "<a href=\"{}\">{}</a>",
                yearly.networking_event_url,
                escape(&entry.title)
            )
        } else {
            format!("<a href=\"#ws{}\">{}</a>", entry.id, escape(&entry.title))
        };
        days.entry(date).or_default()[column].push(link);
    }

    let mut table = String::from(
        "<table class=\"schedule\">\n<tr><th>Date</th><th>Morning</th>\
         <th>Afternoon</th><th>Whole day</th></tr>\n",
    );
    for (date, columns) in &days {
        let _ = write!(table, "<tr><td>{}</td>", long_date(*date));
        for column in columns {
            let _ = write!(table, "<td>{}</td>", column.join("<br>"));
        }
        table.push_str("</tr>\n");
    }
    table.push_str("</table>\n");
    table
}

/// One workshop section, or `None` for networking events and records without
/// a schedule side.
pub fn render_workshop(record: &MergedRecord, config: &Config) -> Option<String> {
    let entry = record.schedule.as_ref()?;
    if entry.is_networking_event {
        return None;
    }

    let title = record
        .submission
        .as_ref()
        .map_or(entry.base_title.trim(), |s| s.title.trim());
    let (room_name, room_url) = room_info(entry, &config.rooms);

    let mut section = format!(
        "<section id=\"ws{}\">\n<h2>{}</h2>\n",
        entry.id,
        escape(title)
    );

    if let Some(date) = entry.date {
        let _ = writeln!(section, "<p>{}</p>", long_date(date));
    }
    if let Some(timeslot) = display_timeslot(entry) {
        let _ = writeln!(section, "<p>{timeslot}</p>");
    }
    if !config.yearly.ics_folder.is_empty() {
        let _ = writeln!(
            section,
            "<p><a rel=\"noreferrer noopener\" target=\"_blank\" \
             href=\"{}{}.ics\">Add to calendar</a></p>",
            config.yearly.ics_folder, entry.id
        );
    }
    match room_url {
        Some(url) => {
            let _ = writeln!(
                section,
                "<p>Room: <a href=\"{url}\">{}</a></p>",
                escape(&room_name)
            );
        }
        None => {
            let _ = writeln!(section, "<p>Room: {}</p>", escape(&room_name));
        }
    }

    if let Some(submission) = record.submission.as_ref() {
        if !submission.description.is_empty() {
            let _ = writeln!(section, "<p>{}</p>", escape(&submission.description));
        }
        section.push_str(&render_list(
            "Learning outcomes",
            &submission.learning_outcomes,
        ));
        if !submission.target_audience.is_empty() {
            let _ = writeln!(
                section,
                "<p>Target audience: {}</p>",
                escape(&submission.target_audience)
            );
        }
        section.push_str(&render_list("Prerequisites", &submission.prerequisites));
        if !submission.materials.is_empty() {
            let _ = writeln!(
                section,
                "<p>Equipment: {}</p>",
                escape(&submission.materials)
            );
        }
    }

    if !entry.main_instructor.is_empty() {
        let mut instructors = escape(&entry.main_instructor);
        if !entry.helper_instructor.is_empty() {
            instructors.push_str(", ");
            instructors.push_str(&escape(&entry.helper_instructor));
        }
        let _ = writeln!(section, "<p>Instructors: {instructors}</p>");
    }

    if config.yearly.registration_open {
        let _ = writeln!(
            section,
            "<p><a href=\"{}\">Register here</a></p>",
            register_link(&config.yearly, title)
        );
    }

    section.push_str("</section>\n");
    Some(section)
}

/// Timeslot for display; a full day shows the two blocks around the lunch
/// break.
pub fn display_timeslot(entry: &ScheduleEntry) -> Option<String> {
    let timeslot = entry.timeslot()?;
    if timeslot == "9:00-16:00" {
        return Some("9:00-12:00 13:00-16:00".to_string());
    }
    Some(timeslot)
}

/// Registration URL: link template around the title with spaces replaced by
/// underscores.
pub fn register_link(yearly: &Yearly, title: &str) -> String {
    format!(
        "{}{}{}",
        yearly.pre_register_link,
        title.replace(' ', "_"),
        yearly.post_register_link
    )
}

/// Display name and map URL for an entry's room. An empty room cell degrades
/// to a fixed notice.
pub fn room_info(entry: &ScheduleEntry, rooms: &BTreeMap<String, Room>) -> (String, Option<String>) {
    let label = entry.room.trim();
    if label.is_empty() {
        return ("No room information available".to_string(), None);
    }
    match rooms.get(label) {
        Some(room) => (room.name.clone(), room.url.clone()),
        None => (label.to_string(), None),
    }
}

/// "Wednesday 04 June 2025" style date heading.
fn long_date(date: NaiveDate) -> String {
    date.format("%A %d %B %Y").to_string()
}

fn render_list(heading: &str, raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let (items, has_header) = split_list(raw);
    let mut out = format!("<p>{heading}:</p>\n");
    let mut items = items.iter();
    if has_header {
        if let Some(header) = items.next() {
            let _ = writeln!(out, "<p>{}</p>", escape(header));
        }
    }
    out.push_str("<ul>\n");
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    use crate::merge::MergedRecord;
    use crate::submission::SubmissionRecord;

    fn config() -> Config {
        let yaml = r#"
paths:
  survey_results: { file_path: inputs/survey.tsv }
  schedule: { file_path: inputs/schedule.tsv }
  output:
    html: out/site.html
    ics_dir: out/ical
    grid_markdown: out/grid.md
    grid_csv: out/grid.csv
    schedule_json: out/schedule.json
yearly:
  event_name: Workshop Week 2026
  ics_folder: https://example.org/ics/
  registration_open: true
  pre_register_link: https://example.org/register?ws=
  networking_event_url: https://example.org/networking
submission_columns:
  id: ID
  title: Title
  description: Description
  outcome: Outcomes
  target: Target
  prerequisite: Prerequisites
  material: Equipment
schedule_columns:
  id: Number
  title: Workshop name
  date: Date
  time: Time
  duration: Duration
  room: Room
  main_instructor: Instructor 1
  helper_instructor: Instructor 2
  max_attendance: Max attendance
merge:
  key: title
  mode: right
rooms:
  R1:
    name: Perl (room 2453)
    url: https://example.org/perl
"#;
        serde_yaml::from_str(yaml).unwrap()
    }

    fn record() -> MergedRecord {
        let mut entry = ScheduleEntry::new("01", "Intro to X");
        entry.date = NaiveDate::from_ymd_opt(2026, 6, 3);
        entry.time_of_day = TimeOfDay::Morning;
        entry.start_time = NaiveTime::from_hms_opt(9, 0, 0);
        entry.end_time = NaiveTime::from_hms_opt(12, 0, 0);
        entry.room = "R1".to_string();
        entry.main_instructor = "Ada".to_string();
        entry.helper_instructor = "Ben".to_string();
        MergedRecord {
            schedule: Some(entry),
            submission: Some(SubmissionRecord {
                id: "7".to_string(),
                title: "Intro to X".to_string(),
                description: "Basics of X".to_string(),
                learning_outcomes: "1. Read X 2. Write X".to_string(),
                target_audience: "Everyone".to_string(),
                prerequisites: String::new(),
                materials: "Laptop".to_string(),
            }),
        }
    }

    #[test]
    fn test_workshop_section_content() {
        let html = render_workshop(&record(), &config()).unwrap();

        assert!(html.contains("id=\"ws01\""));
        assert!(html.contains("<h2>Intro to X</h2>"));
        assert!(html.contains("Wednesday 03 June 2026"));
        assert!(html.contains("9:00-12:00"));
        assert!(html.contains("https://example.org/ics/01.ics"));
        assert!(html.contains("Perl (room 2453)"));
        assert!(html.contains("<li>Read X</li>"));
        assert!(html.contains("Instructors: Ada, Ben"));
        assert!(html.contains("https://example.org/register?ws=Intro_to_X"));
    }

    #[test]
    fn test_full_day_timeslot_splits_around_lunch() {
        let mut entry = ScheduleEntry::new("01", "Intro to X");
        entry.start_time = NaiveTime::from_hms_opt(9, 0, 0);
        entry.end_time = NaiveTime::from_hms_opt(16, 0, 0);
        assert_eq!(
            display_timeslot(&entry).as_deref(),
            Some("9:00-12:00 13:00-16:00")
        );

        entry.end_time = NaiveTime::from_hms_opt(12, 0, 0);
        assert_eq!(display_timeslot(&entry).as_deref(), Some("9:00-12:00"));
    }

    #[test]
    fn test_networking_event_has_no_section_but_is_linked() {
        let mut entry = ScheduleEntry::new("99", "Networking event - Dinner");
        entry.is_networking_event = true;
        entry.date = NaiveDate::from_ymd_opt(2026, 6, 3);
        entry.time_of_day = TimeOfDay::Afternoon;
        let record = MergedRecord {
            schedule: Some(entry),
            submission: None,
        };

        assert!(render_workshop(&record, &config()).is_none());

        let table = render_schedule_table(std::slice::from_ref(&record), &config().yearly);
        assert!(table.contains("https://example.org/networking"));
        assert!(table.contains("Networking event - Dinner"));
    }

    #[test]
    fn test_missing_room_degrades_to_notice() {
        let entry = ScheduleEntry::new("01", "Intro to X");
        let (name, url) = room_info(&entry, &config().rooms);
        assert_eq!(name, "No room information available");
        assert_eq!(url, None);
    }

    #[test]
    fn test_schedule_table_orders_dates() {
        let first = record();
        let mut second = record();
        if let Some(e) = second.schedule.as_mut() {
            e.id = "02".to_string();
            e.date = NaiveDate::from_ymd_opt(2026, 6, 1);
            e.time_of_day = TimeOfDay::AllDay;
        }
        let table = render_schedule_table(&[first, second], &config().yearly);

        let monday = table.find("Monday 01 June 2026").unwrap();
        let wednesday = table.find("Wednesday 03 June 2026").unwrap();
        assert!(monday < wednesday);
    }

    #[test]
    fn test_page_is_assembled_in_order() {
        let page = render_page(&[record()], &config());
        let table = page.find("<table class=\"schedule\">").unwrap();
        let section = page.find("<section id=\"ws01\">").unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(table < section);
        assert!(page.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut r = record();
        if let Some(s) = r.submission.as_mut() {
            s.description = "R & <Bioconductor>".to_string();
        }
        let html = render_workshop(&r, &config()).unwrap();
        assert!(html.contains("R &amp; &lt;Bioconductor&gt;"));
    }
}
