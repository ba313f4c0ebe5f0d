// src/config/consts.rs

// Page markers (site-defined; matched exactly)
pub const RESULT_CONTAINER_CLASS: &str = "view-content";
pub const DAY_HEADER_CLASS: &str = "view-grouping-header";
pub const PERIOD_HEADER_TAG: &str = "h3";
pub const LESSON_BLOCK_CLASS: &str = "stud_schedule";
pub const LESSON_ROW_CLASS: &str = "views-row";
pub const LESSON_CONTENT_CLASS: &str = "group_content";

// Marker element identifiers inside a lesson row
pub const GROUP_ID_PREFIX: &str = "group_";
pub const SUB_ID_PREFIX: &str = "sub_";
pub const FULL_MARK: &str = "full";
pub const NUMERATOR_MARK: &str = "chys";
pub const DENOMINATOR_MARK: &str = "znam";
pub const SUBGROUP_1_MARK: &str = "sub_1";
pub const SUBGROUP_2_MARK: &str = "sub_2";
pub const WEEK_COLOR_MARK: &str = "week_color";

// Field fallbacks
pub const UNKNOWN_SUBJECT: &str = "Невідомо";
pub const NO_TEACHER: &str = "Викладача не вказано";
pub const NO_ROOM: &str = "Аудиторію не вказано";
pub const NO_TYPE: &str = "Тип не вказано";

// Legacy presentation suffix for subgroup lessons: ", підгрупа N"
pub const SUBGROUP_SUFFIX: &str = ", підгрупа ";

// Lesson text: components on the detail line are joined with this
pub const FIELD_SEP: &str = ", ";

/// Regular classes. Index = period number - 1.
pub const CLASS_TIMES: [(&str, &str); 8] = [
    ("08:30", "09:50"),
    ("10:05", "11:25"),
    ("11:40", "13:00"),
    ("13:15", "14:35"),
    ("14:50", "16:10"),
    ("16:25", "17:45"),
    ("18:00", "19:20"),
    ("19:30", "20:50"),
];

/// Instructor exam sessions. Index = period number - 1.
pub const EXAM_TIMES: [(&str, &str); 8] = [
    ("08:30", "10:00"),
    ("10:15", "11:45"),
    ("12:00", "13:30"),
    ("13:45", "15:15"),
    ("15:30", "17:00"),
    ("17:15", "18:45"),
    ("19:00", "20:30"),
    ("20:45", "22:15"),
];

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Batch runner
pub const WORKERS: usize = 4;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "schedule";
