// src/config/options.rs
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;

/// Which published schedule a page belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScheduleKind {
    Student,
    StudentExam,
    Teacher,
    TeacherExam,
    /// Postgraduate / remote programmes; days are keyed by date.
    Remote,
}

impl ScheduleKind {
    pub const ALL: [ScheduleKind; 5] = [
        ScheduleKind::Student,
        ScheduleKind::StudentExam,
        ScheduleKind::Teacher,
        ScheduleKind::TeacherExam,
        ScheduleKind::Remote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleKind::Student => "student",
            ScheduleKind::StudentExam => "student-exam",
            ScheduleKind::Teacher => "teacher",
            ScheduleKind::TeacherExam => "teacher-exam",
            ScheduleKind::Remote => "remote",
        }
    }

    /// Instructor-facing pages put the group list where students see a teacher.
    pub fn is_instructor_facing(&self) -> bool {
        matches!(self, ScheduleKind::Teacher | ScheduleKind::TeacherExam)
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lc = s.trim().to_ascii_lowercase();
        ScheduleKind::ALL
            .into_iter()
            .find(|k| k.as_str() == lc)
            .or(match lc.as_str() {
                "postgraduate" | "aspirant" => Some(ScheduleKind::Remote),
                _ => None,
            })
            .ok_or_else(|| format!("Unknown schedule kind: {}", s))
    }
}

/// How the comma-separated detail line of a lesson maps onto fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldLayout {
    /// `instructor, room, type`
    TeacherRoomType,
    /// `instructor, type` (no room)
    TeacherType,
    /// `group, group, …, type-or-time`
    GroupsThenType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeTable {
    Classes,
    Exams,
}

impl TimeTable {
    fn slots(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            TimeTable::Classes => &CLASS_TIMES,
            TimeTable::Exams => &EXAM_TIMES,
        }
    }

    /// Start/end for a period number; unknown periods have no times.
    pub fn lookup(&self, period: u32) -> Option<(&'static str, &'static str)> {
        let idx = usize::try_from(period).ok()?.checked_sub(1)?;
        self.slots().get(idx).copied()
    }
}

/// Strings substituted for empty detail fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholders {
    pub teacher: &'static str,
    pub room: &'static str,
    pub kind: &'static str,
}

/// Everything that differs between the published schedule variants.
/// The pipeline itself is shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantConfig {
    pub kind: ScheduleKind,
    pub layout: FieldLayout,
    pub placeholders: Option<Placeholders>,
    pub resolve_priority: bool,
    pub times: TimeTable,
    pub sort_by_period: bool,
}

impl VariantConfig {
    pub fn for_kind(kind: ScheduleKind) -> Self {
        let student_placeholders = Placeholders {
            teacher: NO_TEACHER,
            room: NO_ROOM,
            kind: NO_TYPE,
        };
        match kind {
            ScheduleKind::Student => Self {
                kind,
                layout: FieldLayout::TeacherRoomType,
                placeholders: Some(student_placeholders),
                resolve_priority: false,
                times: TimeTable::Classes,
                sort_by_period: false,
            },
            ScheduleKind::StudentExam => Self {
                kind,
                layout: FieldLayout::TeacherRoomType,
                placeholders: None,
                resolve_priority: false,
                times: TimeTable::Classes,
                sort_by_period: false,
            },
            ScheduleKind::Teacher => Self {
                kind,
                layout: FieldLayout::GroupsThenType,
                placeholders: None,
                resolve_priority: true,
                times: TimeTable::Classes,
                sort_by_period: true,
            },
            ScheduleKind::TeacherExam => Self {
                kind,
                layout: FieldLayout::GroupsThenType,
                placeholders: None,
                resolve_priority: true,
                times: TimeTable::Exams,
                sort_by_period: true,
            },
            ScheduleKind::Remote => Self {
                kind,
                layout: FieldLayout::TeacherType,
                placeholders: None,
                resolve_priority: false,
                times: TimeTable::Classes,
                sort_by_period: true,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    /// Human-readable day / pair / slot listing.
    Text,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Text => "txt",
        }
    }

    /// Field separator; `None` for the text listing.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Text => None,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(stem, ".", self.format.ext()))
    }

    /// Split user text into dir + stem. A pasted extension is ignored.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
