// src/specs/assemble.rs
//! Schedule day assembler.
//!
//! Folds the classified block stream into days. Running state: the current
//! day (name + lessons), the current pair number and the rows gathered for
//! that pair so far. Rows are turned into lessons once the pair is complete,
//! so priority resolution sees every container under one pair header.
//! Only day headers with text close a day (and reset the pair number), and
//! a day that gathered no lessons is dropped.

use std::mem;

use scraper::ElementRef;

use crate::config::consts::LESSON_ROW_CLASS;
use crate::config::options::VariantConfig;
use crate::core::html::find_all_by_class;
use crate::data::{Lesson, ScheduleDay};
use super::classify::Block;
use super::markers::{self, RowMarker};
use super::{fields, priority};

/// Lesson rows of one container; a container without rows is one row.
pub fn lesson_rows<'a>(container: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let rows = find_all_by_class(container, LESSON_ROW_CLASS);
    if rows.is_empty() { vec![container] } else { rows }
}

/// Marked rows of one container.
pub fn container_rows<'a>(container: ElementRef<'a>) -> Vec<(RowMarker, ElementRef<'a>)> {
    lesson_rows(container)
        .into_iter()
        .map(|row| (markers::read(row), row))
        .collect()
}

/// Lessons of one pair, from the rows of every container under its header.
pub fn pair_lessons(rows: Vec<(RowMarker, ElementRef<'_>)>, period: &str, cfg: &VariantConfig) -> Vec<Lesson> {
    let rows = if cfg.resolve_priority { priority::resolve(rows) } else { rows };

    rows.into_iter()
        .map(|(marker, row)| fields::extract(row, period, &marker, cfg))
        .collect()
}

pub fn assemble<'a>(blocks: impl IntoIterator<Item = Block<'a>>, cfg: &VariantConfig) -> Vec<ScheduleDay> {
    let mut days: Vec<ScheduleDay> = Vec::new();
    let mut day = ScheduleDay::default();
    let mut period = s!();
    let mut pending: Vec<(RowMarker, ElementRef<'a>)> = Vec::new();

    for block in blocks {
        match block {
            Block::DayHeader(name) => {
                if name.is_empty() {
                    continue; // decorative header; keep accumulating
                }
                day.lessons.extend(pair_lessons(mem::take(&mut pending), &period, cfg));
                let done = mem::replace(&mut day, ScheduleDay::new(name));
                flush(&mut days, done, cfg);
                period.clear();
            }
            Block::PeriodHeader(p) => {
                day.lessons.extend(pair_lessons(mem::take(&mut pending), &period, cfg));
                period = p;
            }
            Block::LessonContainer(el) => pending.extend(container_rows(el)),
            Block::Ignorable => {}
        }
    }
    day.lessons.extend(pair_lessons(pending, &period, cfg));
    flush(&mut days, day, cfg);
    days
}

fn flush(days: &mut Vec<ScheduleDay>, mut day: ScheduleDay, cfg: &VariantConfig) {
    if day.is_empty() {
        return;
    }
    if cfg.sort_by_period {
        day.sort_by_period();
    }
    days.push(day);
}
