// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use chrono::NaiveTime;
use icalendar::{Calendar, CalendarDateTime, Component, Event, EventLike};

use crate::config::{Room, Yearly};
use crate::datetime::{afternoon_end, morning_start};
use crate::schedule::{ScheduleEntry, aggregate_spans};

/// A calendar invite for one logical workshop, ready to be written as
/// `{id}.ics`.
#[derive(Debug)]
pub struct Invite {
    /// Workshop id with any per-day suffix stripped; doubles as the file
    /// stem.
    pub id: String,

    pub base_title: String,
    pub calendar: Calendar,
}

/// Builds one invite per logical workshop.
///
/// Multi-day workshops get a single invite covering their whole span, not one
/// per day. Networking events are excluded: they are announced on the page,
/// not as downloadable invites. Entries without a date produce no invite.
pub fn build_invites(
    entries: &[ScheduleEntry],
    rooms: &BTreeMap<String, Room>,
    yearly: &Yearly,
) -> Vec<Invite> {
    let workshops: Vec<ScheduleEntry> = entries
        .iter()
        .filter(|e| !e.is_networking_event)
        .cloned()
        .collect();

    aggregate_spans(&workshops)
        .into_iter()
        .filter_map(|span| {
            let entry = workshops.iter().find(|e| e.base_title == span.base_title)?;
            let id = entry.base_id.clone();
            let uid = format!("{}@{}", id, crate::config::APP_NAME);

            let room = rooms.get(entry.room.trim());
            let location = room.map_or(entry.room.trim(), |r| r.name.as_str());

            let mut event = Event::new();
            event
                .uid(&uid)
                .summary(&format!("{}: {}", yearly.event_name, span.base_title))
                .starts(CalendarDateTime::WithTimezone {
                    date_time: span.start,
                    tzid: yearly.timezone.clone(),
                })
                .ends(CalendarDateTime::WithTimezone {
                    date_time: span.end,
                    tzid: yearly.timezone.clone(),
                });
            if !location.is_empty() {
                event.location(location);
            }
            if let Some(description) = describe(&span.start.time(), &span.end.time(), room) {
                event.description(&description);
            }

            let mut calendar = Calendar::new();
            calendar.name(&yearly.event_name).push(event.done());

            Some(Invite {
                id,
                base_title: span.base_title,
                calendar: calendar.done(),
            })
        })
        .collect()
}

/// Invite body: the lunch-break note for full-day workshops, then the route
/// to the room when a map URL is configured.
fn describe(start: &NaiveTime, end: &NaiveTime, room: Option<&Room>) -> Option<String> {
    let mut parts = Vec::new();
    if *start == morning_start() && *end == afternoon_end() {
        parts.push("Break from 12:00 to 13:00".to_string());
    }
    if let Some(url) = room.and_then(|r| r.url.as_deref()) {
        parts.push(format!("How to get to the room:\n{url}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n\n"))
    }
}
