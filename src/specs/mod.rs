// src/specs/mod.rs
//! # Page-reading "specs"
//!
//! Everything that knows *where the ground truth lives in the timetable page*
//! and *how to read it robustly*.
//!
//! ## What lives here
//! - **Classification** of the result container's children into day headers,
//!   pair headers and lesson containers (`classify`).
//! - **Marker inference**: week alternation, subgroup and current-week flag
//!   from the `group_*` / `sub_*` marker element of a row (`markers`).
//! - **Field extraction**: subject / teacher-or-groups / room / type / url
//!   from the row text, per page variant (`fields`).
//! - **Priority resolution** of double-listed rows on instructor pages
//!   (`priority`).
//! - **Assembly** of all of the above into `ScheduleDay`s (`assemble`).
//!
//! ## What does **not** live here
//! - Fetching pages, caching, presentation.
//! - Grouping by pair and layout classification: those work on the
//!   assembled model only (see `engine`).
//!
//! ## Typical call chain
//! ```text
//! engine::parse_page → core::html::parse_page
//!                    → specs::classify::classify_children
//!                    → specs::assemble::assemble
//!                         ↘ markers::read → priority::resolve → fields::extract
//! ```
//!
//! ## Conventions & invariants
//! - Document order is the only ordering this module relies on.
//! - Field extraction never fails; gaps become placeholders.
//! - Week / subgroup tags are decided once, from the marker, and never
//!   recomputed downstream.
pub mod classify;
pub mod markers;
pub mod fields;
pub mod priority;
pub mod assemble;
