// src/specs/markers.rs
//! Week / subgroup / current-week inference from a row's marker element.
//!
//! The marker is the first element under the row whose id starts with
//! `group_` or `sub_`, e.g. `<div id="sub_1_chys" class="week_color">`.

use scraper::ElementRef;

use crate::config::consts::*;
use crate::core::html::{class_attr, first_with_id_prefix};
use crate::data::{SubgroupTag, WeekType};

/// Everything derived from one marker element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowMarker {
    /// Raw identifier ("" when the row has no marker).
    pub id: String,
    pub week: WeekType,
    pub subgroup: SubgroupTag,
    pub active_this_week: bool,
}

impl RowMarker {
    /// Pure mapping from identifier + class tokens.
    pub fn from_parts(id: &str, classes: &str) -> Self {
        let week = if id.contains(NUMERATOR_MARK) {
            WeekType::Even
        } else if id.contains(DENOMINATOR_MARK) {
            WeekType::Odd
        } else {
            WeekType::Full
        };

        let subgroup = if id.contains(SUBGROUP_1_MARK) {
            SubgroupTag::Subgroup1
        } else if id.contains(SUBGROUP_2_MARK) {
            SubgroupTag::Subgroup2
        } else {
            SubgroupTag::None
        };

        Self {
            id: s!(id),
            week,
            subgroup,
            active_this_week: classes.contains(WEEK_COLOR_MARK),
        }
    }

    /// Aggregate "whole group, every week" row: `group_…full…`.
    pub fn is_group_full(&self) -> bool {
        self.id.starts_with(GROUP_ID_PREFIX) && self.id.contains(FULL_MARK)
    }

    pub fn is_subgroup_row(&self) -> bool {
        self.id.starts_with(SUB_ID_PREFIX)
    }
}

/// Read the marker of a lesson row. No marker → `(full, none, false)`.
pub fn read(row: ElementRef<'_>) -> RowMarker {
    match first_with_id_prefix(row, &[GROUP_ID_PREFIX, SUB_ID_PREFIX]) {
        Some(el) => RowMarker::from_parts(el.value().id().unwrap_or(""), class_attr(el)),
        None => RowMarker::default(),
    }
}
