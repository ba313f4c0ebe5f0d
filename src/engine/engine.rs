// src/engine/engine.rs
use std::time::Instant;

use scraper::Html;

use crate::config::consts::RESULT_CONTAINER_CLASS;
use crate::config::options::{ScheduleKind, VariantConfig};
use crate::core::html::{self, find_by_class};
use crate::data::ScheduleDay;
use crate::error::ScheduleError;
use crate::specs::{assemble::assemble, classify::classify_children};
use super::layout;
use super::pairs::group_pairs;
use super::types::{Layout, PairGroup};

/// Page text → days, using the stock configuration for `kind`.
pub fn parse_page(doc: &str, kind: ScheduleKind) -> Result<Vec<ScheduleDay>, ScheduleError> {
    parse_with(doc, &VariantConfig::for_kind(kind))
}

/// Raw response bytes → days.
pub fn parse_bytes(bytes: &[u8], kind: ScheduleKind) -> Result<Vec<ScheduleDay>, ScheduleError> {
    let doc = html::parse_page_bytes(bytes)?;
    extract(&doc, &VariantConfig::for_kind(kind))
}

pub fn parse_with(doc: &str, cfg: &VariantConfig) -> Result<Vec<ScheduleDay>, ScheduleError> {
    let t = Instant::now();
    let parsed = html::parse_page(doc)?;
    let out = extract(&parsed, cfg);
    logd!("Engine: parse {} page ({} bytes) in {:?}", cfg.kind, doc.len(), t.elapsed());
    out
}

/// Run classification and assembly over an already parsed document.
pub fn extract(doc: &Html, cfg: &VariantConfig) -> Result<Vec<ScheduleDay>, ScheduleError> {
    let Some(container) = find_by_class(doc.root_element(), RESULT_CONTAINER_CLASS) else {
        loge!("Engine: no .{} on {} page", RESULT_CONTAINER_CLASS, cfg.kind);
        return Err(ScheduleError::NoResultContainer);
    };

    let days = assemble(classify_children(container), cfg);
    if days.is_empty() {
        logd!("Engine: container present but no lessons ({})", cfg.kind);
        return Err(ScheduleError::EmptyResult);
    }

    logd!(
        "Engine: {} days, {} lessons ({})",
        days.len(),
        days.iter().map(|d| d.lessons.len()).sum::<usize>(),
        cfg.kind
    );
    Ok(days)
}

/// Pair groups of a day together with their resolved layout.
pub fn day_layouts(day: &ScheduleDay) -> Vec<(PairGroup<'_>, Layout<'_>)> {
    group_pairs(day)
        .into_iter()
        .map(|g| {
            let l = layout::resolve(&g);
            (g, l)
        })
        .collect()
}
