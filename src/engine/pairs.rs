// src/engine/pairs.rs
use crate::data::{ScheduleDay, period_key};
use super::types::PairGroup;

/// Bucket a day's lessons by pair number.
///
/// Buckets keep the lessons' source order and are ordered by the numeric
/// pair number (non-numeric as 0); equal numbers keep first-seen order.
pub fn group_pairs(day: &ScheduleDay) -> Vec<PairGroup<'_>> {
    let mut groups: Vec<PairGroup<'_>> = Vec::new();
    for lesson in &day.lessons {
        match groups.iter_mut().find(|g| g.period == lesson.period) {
            Some(g) => g.lessons.push(lesson),
            None => groups.push(PairGroup { period: &lesson.period, lessons: vec![lesson] }),
        }
    }
    groups.sort_by_key(|g| period_key(g.period));
    groups
}
