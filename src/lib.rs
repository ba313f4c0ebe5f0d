// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod specs;
pub mod engine;

pub mod cli;
pub mod csv;
pub mod file;
pub mod params;
pub mod progress;
pub mod runner;

pub use config::{ScheduleKind, VariantConfig};
pub use data::{Lesson, ScheduleDay, SubgroupTag, WeekType};
pub use engine::{Layout, LayoutVariant, PairGroup, day_layouts, group_pairs, parse_bytes, parse_page};
pub use error::ScheduleError;
