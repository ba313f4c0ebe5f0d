// src/csv.rs
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::data::{Lesson, ScheduleDay};
use crate::engine::{Layout, day_layouts};

pub const HEADERS: [&str; 12] = [
    "Day", "Pair", "Start", "End", "Subject", "Teacher/Groups",
    "Room", "Type", "Week", "Subgroup", "Active", "Url",
];

pub fn headers() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

/* ---------------- Flattening ---------------- */

fn lesson_row(day: &str, l: &Lesson) -> Vec<String> {
    vec![
        s!(day),
        l.period.clone(),
        l.time_start.clone(),
        l.time_end.clone(),
        l.subject.clone(),
        l.display_label(),
        l.room.clone(),
        l.kind.clone(),
        s!(l.week.as_str()),
        l.subgroup.number().map(|n| n.to_string()).unwrap_or_default(),
        s!(if l.active_this_week { "yes" } else { "" }),
        l.url.clone().unwrap_or_default(),
    ]
}

/// One row per lesson, days in order, lessons in day order.
pub fn schedule_rows(days: &[ScheduleDay]) -> Vec<Vec<String>> {
    days.iter()
        .flat_map(|d| d.lessons.iter().map(move |l| lesson_row(&d.name, l)))
        .collect()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Full CSV/TSV text for a schedule.
pub fn to_export_string(days: &[ScheduleDay], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &headers(), sep);
    }
    for r in schedule_rows(days) {
        let _ = write_row(&mut buf, &r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Text listing ---------------- */

const EMPTY_SLOT: &str = "—";

fn slot_line(l: Option<&Lesson>) -> String {
    match l {
        None => s!(EMPTY_SLOT),
        Some(l) => {
            let mut line = l.subject.clone();
            for extra in [l.display_label(), l.room.clone(), l.kind.clone()] {
                if !extra.is_empty() {
                    line.push_str(" | ");
                    line.push_str(&extra);
                }
            }
            if l.active_this_week {
                line.push_str(" *");
            }
            line
        }
    }
}

/// Day / pair / slot listing, one slot per line, `—` for an empty slot.
pub fn to_text(days: &[ScheduleDay]) -> String {
    let mut out = s!();
    for day in days {
        let _ = writeln!(out, "{}", day.name);
        for (group, layout) in day_layouts(day) {
            let times = group
                .lessons
                .first()
                .filter(|l| !l.time_start.is_empty())
                .map(|l| format!(" {}-{}", l.time_start, l.time_end))
                .unwrap_or_default();
            let _ = writeln!(out, "  {}.{} [{:?}]", group.period, times, layout.variant());
            if let Layout::Empty = layout {
                continue;
            }
            for slot in layout.slots() {
                let _ = writeln!(out, "    {}", slot_line(slot));
            }
        }
    }
    out
}
