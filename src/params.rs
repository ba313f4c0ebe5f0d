// src/params.rs
use std::path::PathBuf;

use crate::config::options::{ExportFormat, ScheduleKind};
use crate::data::SubgroupTag;

#[derive(Clone, Debug)]
pub struct Params {
    pub kind: ScheduleKind,          // which published variant the pages are
    pub format: ExportFormat,        // csv, tsv or text listing
    pub include_headers: bool,       // include headers row in CSV/TSV
    pub subgroup: SubgroupTag,       // None = everything
    pub active_only: bool,           // drop off-week variants
    pub out: Option<PathBuf>,        // None = stdout
    pub log: Option<PathBuf>,        // None = logging off
    pub files: Vec<PathBuf>,         // saved schedule pages
}

impl Params {
    pub fn new() -> Self {
        Self {
            kind: ScheduleKind::Student,
            format: ExportFormat::Csv,
            include_headers: false,
            subgroup: SubgroupTag::None,
            active_only: false,
            out: None,
            log: None,
            files: Vec::new(),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
