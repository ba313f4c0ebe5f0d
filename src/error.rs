// src/error.rs
use thiserror::Error;

/// Terminal outcomes of reading one timetable page.
///
/// None of these are retried by the pipeline. Missing or malformed lesson
/// *fields* are not errors at all: they degrade to placeholder text inside
/// the resulting `Lesson`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The page has no result container (wrong query, error page, …).
    #[error("no data for this request: result container not found")]
    NoResultContainer,

    /// Container present, but nothing survived assembly.
    #[error("no lessons found for this request")]
    EmptyResult,

    /// The bytes could not be read as markup at all.
    #[error("page is not valid markup: {0}")]
    MalformedMarkup(String),
}

impl ScheduleError {
    /// Both "no data" flavours are ordinary, user-facing outcomes.
    pub fn is_no_data(&self) -> bool {
        matches!(self, ScheduleError::NoResultContainer | ScheduleError::EmptyResult)
    }
}
