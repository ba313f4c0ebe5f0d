// src/engine/mod.rs
//! Pipeline entry points plus the model-only stages: pair grouping and
//! layout classification. Nothing past `engine::extract` touches markup.
pub mod engine;
pub mod layout;
pub mod pairs;
pub mod types;

pub use engine::{day_layouts, extract, parse_bytes, parse_page, parse_with};
pub use pairs::group_pairs;
pub use types::{Layout, LayoutVariant, PairGroup, Slot};
