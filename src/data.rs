// src/data.rs
//
// Schedule model produced by the pipeline.
//
// - Lesson:      one extracted lesson variant; built once, never updated.
// - ScheduleDay: all lessons under one day header, in source order.
//
// Grouping by pair and layout classification are derived views over
// ScheduleDay and live in `engine`.

use std::fmt;

use crate::config::consts::SUBGROUP_SUFFIX;

/// Week alternation of a lesson.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeekType {
    /// Every week.
    #[default]
    Full,
    /// Numerator ("чисельник") weeks.
    Even,
    /// Denominator ("знаменник") weeks.
    Odd,
}

impl WeekType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekType::Full => "full",
            WeekType::Even => "even",
            WeekType::Odd => "odd",
        }
    }

    pub fn alternates(&self) -> bool {
        *self != WeekType::Full
    }
}

impl fmt::Display for WeekType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parallel section of a group. Orthogonal to `WeekType`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SubgroupTag {
    #[default]
    None,
    Subgroup1,
    Subgroup2,
}

impl SubgroupTag {
    pub fn number(&self) -> Option<u8> {
        match self {
            SubgroupTag::None => None,
            SubgroupTag::Subgroup1 => Some(1),
            SubgroupTag::Subgroup2 => Some(2),
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(SubgroupTag::Subgroup1),
            2 => Some(SubgroupTag::Subgroup2),
            _ => None,
        }
    }

    pub fn is_some(&self) -> bool {
        *self != SubgroupTag::None
    }
}

/// One lesson variant of one pair.
///
/// `label` is the instructor on student-facing pages and the group list on
/// instructor-facing ones. It never carries the subgroup suffix; see
/// [`Lesson::display_label`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub period: String,
    pub subject: String,
    pub label: String,
    pub room: String,
    pub kind: String,
    pub time_start: String,
    pub time_end: String,
    pub url: Option<String>,
    pub week: WeekType,
    pub subgroup: SubgroupTag,
    pub active_this_week: bool,
}

impl Lesson {
    /// Numeric ordering key of the pair; non-numeric text sorts as 0.
    pub fn period_key(&self) -> u32 {
        period_key(&self.period)
    }

    /// Label with the legacy `", підгрупа N"` suffix, for presentation only.
    pub fn display_label(&self) -> String {
        match self.subgroup.number() {
            Some(n) => join!(&self.label, SUBGROUP_SUFFIX, &n.to_string()),
            None => self.label.clone(),
        }
    }
}

/// Numeric value of a period header; anything unparsable is 0.
pub fn period_key(period: &str) -> u32 {
    period.trim().parse().unwrap_or(0)
}

/// One day (weekday abbreviation or, on date-keyed pages, a literal date).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleDay {
    pub name: String,
    pub lessons: Vec<Lesson>,
}

impl ScheduleDay {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), lessons: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Stable sort by numeric pair number.
    pub fn sort_by_period(&mut self) {
        self.lessons.sort_by_key(Lesson::period_key);
    }

    /// Lessons visible to one subgroup: its own plus whole-group ones.
    pub fn for_subgroup(&self, tag: SubgroupTag) -> ScheduleDay {
        self.filtered(|l| !l.subgroup.is_some() || l.subgroup == tag)
    }

    /// Lessons that take place this week.
    pub fn active_only(&self) -> ScheduleDay {
        self.filtered(|l| l.week == WeekType::Full || l.active_this_week)
    }

    fn filtered(&self, keep: impl Fn(&Lesson) -> bool) -> ScheduleDay {
        ScheduleDay {
            name: self.name.clone(),
            lessons: self.lessons.iter().filter(|l| keep(l)).cloned().collect(),
        }
    }
}
