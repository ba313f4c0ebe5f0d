// src/specs/classify.rs
//! Element classifier.
//!
//! Turns the result container into a flat, document-ordered stream of
//! blocks. Wrapper elements that carry no marker of their own but hold
//! marked elements (`view-grouping`, `view-grouping-content`, …) are
//! expanded in place, so nested and flat page layouts read the same.

use scraper::ElementRef;

use crate::config::consts::{DAY_HEADER_CLASS, LESSON_BLOCK_CLASS, PERIOD_HEADER_TAG};
use crate::core::html::{child_elements, descendant_elements, has_class, is_tag, text_of};

#[derive(Clone, Debug)]
pub enum Block<'a> {
    DayHeader(String),
    PeriodHeader(String),
    LessonContainer(ElementRef<'a>),
    Ignorable,
}

impl Block<'_> {
    pub fn is_ignorable(&self) -> bool {
        matches!(self, Block::Ignorable)
    }
}

/// Classify one element on its own markers.
pub fn classify(el: ElementRef<'_>) -> Block<'_> {
    if has_class(el, DAY_HEADER_CLASS) {
        Block::DayHeader(text_of(el))
    } else if is_tag(el, PERIOD_HEADER_TAG) {
        Block::PeriodHeader(text_of(el))
    } else if has_class(el, LESSON_BLOCK_CLASS) {
        Block::LessonContainer(el)
    } else {
        Block::Ignorable
    }
}

/// Single pass over the container's children, in document order.
pub fn classify_children<'a>(container: ElementRef<'a>) -> Vec<Block<'a>> {
    let mut out = Vec::new();
    for child in child_elements(container) {
        push_flattened(child, &mut out);
    }
    out
}

fn push_flattened<'a>(el: ElementRef<'a>, out: &mut Vec<Block<'a>>) {
    match classify(el) {
        Block::Ignorable if holds_markers(el) => {
            for child in child_elements(el) {
                push_flattened(child, out);
            }
        }
        block => out.push(block),
    }
}

fn holds_markers(el: ElementRef<'_>) -> bool {
    descendant_elements(el)
        .skip(1)
        .any(|d| !classify(d).is_ignorable())
}
