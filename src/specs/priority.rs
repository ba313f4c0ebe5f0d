// src/specs/priority.rs
//! Priority resolver for instructor-facing pages.
//!
//! Those pages sometimes carry the same lesson twice for one pair: once as
//! the aggregate `group_…full` row and again as `sub_…` rows. When an
//! aggregate row exists, it alone describes the pair.

use super::markers::RowMarker;

/// Filter the rows of one pair. Order of the survivors is preserved.
pub fn resolve<T>(rows: Vec<(RowMarker, T)>) -> Vec<(RowMarker, T)> {
    if !rows.iter().any(|(m, _)| m.is_group_full()) {
        return rows;
    }
    let before = rows.len();
    let (kept, dropped): (Vec<_>, Vec<_>) = rows.into_iter().partition(|(m, _)| m.is_group_full());
    if !dropped.is_empty() {
        logd!(
            "Priority: kept {} of {} rows, {} per-subgroup duplicates",
            kept.len(),
            before,
            dropped.iter().filter(|(m, _)| m.is_subgroup_row()).count()
        );
    }
    kept
}
