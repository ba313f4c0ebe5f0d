// src/specs/fields.rs
//! Lesson field extractor.
//!
//! A lesson row reads as
//! ```text
//! Subject<br>
//! part, part, part<br>
//! <a href="…">…</a>
//! ```
//! Line 1 is always the subject. How the comma-separated parts of line 2 map
//! onto fields depends on the page variant (`FieldLayout`). Extraction never
//! fails: anything missing becomes "" or the variant's placeholder.

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use crate::config::consts::{FIELD_SEP, LESSON_CONTENT_CLASS, UNKNOWN_SUBJECT};
use crate::config::options::{FieldLayout, VariantConfig};
use crate::core::html::{find_by_class, first_href, text_with_breaks};
use crate::core::sanitize::content_lines;
use crate::data::{Lesson, period_key};
use super::markers::RowMarker;

// Whole part only: surnames such as "Лабунько" share a stem with the vocabulary.
static RE_ACTIVITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^(?:
            лекці(?:я|ї|йна|йне|йні)? | лекц\.
          | практичн(?:а|е|і|ий|их) | практика | практ\. | пр\.
          | семінар(?:и|ська|ське|ські)? | сем\.
          | лабораторн(?:а|е|і|ий|их) | лаб\.?
          | консультаці(?:я|ї) | конс\.
          | екзамен(?:и)? | екз\. | іспит(?:и)?
          | (?:диф\.?\s*)?залік(?:и)?
          | lectures? | practicals? | practice | seminars? | labs? | laboratory
          | consultations? | exams? | examinations?
        )(?:\s+(?:робота|роботи|заняття|work|class))?$",
    )
    .expect("invalid regex: activity type")
});

static RE_INITIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Lu}\.\s*\p{Lu}\.").expect("invalid regex: initials"));

static RE_TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})\s*[-–—]\s*(\d{1,2}):(\d{2})$")
        .expect("invalid regex: time range")
});

/// Text fields of one lesson, before times and markers are attached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonFields {
    pub subject: String,
    pub label: String,
    pub room: String,
    pub kind: String,
    /// Explicit `HH:MM-HH:MM` from the detail line (instructor pages).
    pub times: Option<(String, String)>,
}

/// Does `s` name an activity type (lecture, lab, exam, …)?
/// The whole trimmed part must be an activity word or abbreviation; a part
/// carrying initials is a person.
pub fn is_activity_type(s: &str) -> bool {
    let s = s.trim();
    !RE_INITIALS.is_match(s) && RE_ACTIVITY.is_match(s)
}

/// `"8:30-9:50"` → `("08:30", "09:50")`
pub fn parse_time_range(s: &str) -> Option<(String, String)> {
    let caps = RE_TIME_RANGE.captures(s.trim())?;
    let hm = |h: &str, m: &str| format!("{:0>2}:{}", h, m);
    Some((hm(&caps[1], &caps[2]), hm(&caps[3], &caps[4])))
}

/// Map visible lines onto fields according to the variant.
pub fn parse_lines(lines: &[String], cfg: &VariantConfig) -> LessonFields {
    let subject = match lines.first() {
        Some(l) if !l.is_empty() => l.clone(),
        _ => s!(UNKNOWN_SUBJECT),
    };

    let parts: Vec<&str> = lines
        .get(1)
        .map(|l| l.split(FIELD_SEP).map(str::trim).collect())
        .unwrap_or_default();

    let mut out = match cfg.layout {
        FieldLayout::TeacherRoomType => teacher_room_type(&parts),
        FieldLayout::TeacherType => teacher_type(&parts),
        FieldLayout::GroupsThenType => groups_then_type(&parts),
    };
    out.subject = subject;

    if let Some(ph) = cfg.placeholders {
        fill(&mut out.label, ph.teacher);
        fill(&mut out.room, ph.room);
        fill(&mut out.kind, ph.kind);
    }
    out
}

/// Build the lesson for one row.
pub fn extract(row: ElementRef<'_>, period: &str, marker: &RowMarker, cfg: &VariantConfig) -> Lesson {
    let content = find_by_class(row, LESSON_CONTENT_CLASS).unwrap_or(row);
    let lines = content_lines(&text_with_breaks(content));
    let fields = parse_lines(&lines, cfg);

    let (time_start, time_end) = match fields.times {
        Some(t) => t,
        None => cfg
            .times
            .lookup(period_key(period))
            .map(|(a, b)| (s!(a), s!(b)))
            .unwrap_or_default(),
    };

    Lesson {
        period: s!(period.trim()),
        subject: fields.subject,
        label: fields.label,
        room: fields.room,
        kind: fields.kind,
        time_start,
        time_end,
        url: first_href(row),
        week: marker.week,
        subgroup: marker.subgroup,
        active_this_week: marker.active_this_week,
    }
}

/* ---------------- layouts ---------------- */

fn part(parts: &[&str], i: usize) -> String {
    parts.get(i).map(|p| s!(*p)).unwrap_or_default()
}

// instructor, room, type; anything past the third part stays with the type
fn teacher_room_type(parts: &[&str]) -> LessonFields {
    LessonFields {
        label: part(parts, 0),
        room: part(parts, 1),
        kind: parts.get(2..).map(|rest| rest.join(FIELD_SEP)).unwrap_or_default(),
        ..Default::default()
    }
}

// instructor(s), type. A lone part is the type only if it looks like one.
fn teacher_type(parts: &[&str]) -> LessonFields {
    match parts {
        [] => LessonFields::default(),
        [only] if is_activity_type(only) => LessonFields { kind: s!(*only), ..Default::default() },
        [only] => LessonFields { label: s!(*only), ..Default::default() },
        [rest @ .., last] => LessonFields {
            label: rest.join(FIELD_SEP),
            kind: s!(*last),
            ..Default::default()
        },
    }
}

// group, group, …, then a type or a time range in last position
fn groups_then_type(parts: &[&str]) -> LessonFields {
    match parts {
        [] => LessonFields::default(),
        [only] => LessonFields { label: s!(*only), ..Default::default() },
        [rest @ .., last] => {
            if let Some(times) = parse_time_range(last) {
                LessonFields { label: rest.join(FIELD_SEP), times: Some(times), ..Default::default() }
            } else if is_activity_type(last) {
                LessonFields { label: rest.join(FIELD_SEP), kind: s!(*last), ..Default::default() }
            } else {
                LessonFields { label: parts.join(FIELD_SEP), ..Default::default() }
            }
        }
    }
}

fn fill(field: &mut String, placeholder: &str) {
    if field.is_empty() {
        *field = s!(placeholder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{NO_ROOM, NO_TEACHER, NO_TYPE};
    use crate::config::options::ScheduleKind;
    use crate::core::html::parse_page;
    use crate::data::{SubgroupTag, WeekType};

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    fn cfg(kind: ScheduleKind) -> VariantConfig {
        VariantConfig::for_kind(kind)
    }

    #[test]
    fn student_detail_line_is_positional() {
        let f = parse_lines(&lines(&["Math", "Smith, 101, Lecture"]), &cfg(ScheduleKind::Student));
        assert_eq!(f.subject, "Math");
        assert_eq!(f.label, "Smith");
        assert_eq!(f.room, "101");
        assert_eq!(f.kind, "Lecture");
    }

    #[test]
    fn student_missing_parts_get_placeholders() {
        let f = parse_lines(&lines(&["Math", "Smith"]), &cfg(ScheduleKind::Student));
        assert_eq!(f.label, "Smith");
        assert_eq!(f.room, NO_ROOM);
        assert_eq!(f.kind, NO_TYPE);

        let f = parse_lines(&lines(&["Math"]), &cfg(ScheduleKind::Student));
        assert_eq!(f.label, NO_TEACHER);
    }

    #[test]
    fn exam_variant_leaves_missing_parts_empty() {
        let f = parse_lines(&lines(&["Math", "Smith"]), &cfg(ScheduleKind::StudentExam));
        assert_eq!(f.label, "Smith");
        assert_eq!(f.room, "");
        assert_eq!(f.kind, "");
    }

    #[test]
    fn empty_content_falls_back_to_unknown_subject() {
        let f = parse_lines(&[], &cfg(ScheduleKind::StudentExam));
        assert_eq!(f.subject, UNKNOWN_SUBJECT);
    }

    #[test]
    fn remote_single_part_is_type_only_if_vocabulary_matches() {
        let remote = cfg(ScheduleKind::Remote);
        let f = parse_lines(&lines(&["Philosophy", "Lecture"]), &remote);
        assert_eq!((f.label.as_str(), f.kind.as_str()), ("", "Lecture"));

        let f = parse_lines(&lines(&["Philosophy", "Коваль О.П."]), &remote);
        assert_eq!((f.label.as_str(), f.kind.as_str()), ("Коваль О.П.", ""));

        let f = parse_lines(&lines(&["Philosophy", "Коваль О.П., Практична"]), &remote);
        assert_eq!((f.label.as_str(), f.kind.as_str()), ("Коваль О.П.", "Практична"));
        assert_eq!(f.room, "");
    }

    #[test]
    fn instructor_groups_then_type() {
        let t = cfg(ScheduleKind::Teacher);
        let f = parse_lines(&lines(&["Math", "ПЗ-21, ПЗ-22, Лабораторна"]), &t);
        assert_eq!(f.label, "ПЗ-21, ПЗ-22");
        assert_eq!(f.kind, "Лабораторна");

        // last part is neither type nor time: everything is the group list
        let f = parse_lines(&lines(&["Math", "ПЗ-21, ПЗ-22"]), &t);
        assert_eq!(f.label, "ПЗ-21, ПЗ-22");
        assert_eq!(f.kind, "");

        let f = parse_lines(&lines(&["Math", "ПЗ-21"]), &t);
        assert_eq!(f.label, "ПЗ-21");
    }

    #[test]
    fn instructor_time_range_overrides_table() {
        let f = parse_lines(&lines(&["Exam", "КН-31, 9:00 - 10:30"]), &cfg(ScheduleKind::TeacherExam));
        assert_eq!(f.label, "КН-31");
        assert_eq!(f.times, Some((s!("09:00"), s!("10:30"))));
        assert_eq!(f.kind, "");
    }

    #[test]
    fn activity_vocabulary() {
        for s in ["Лекція", "практична", "Семінар", "лабораторна", "Консультація", "Екзамен", "LAB", "exam"] {
            assert!(is_activity_type(s), "{s}");
        }
        for s in ["Лаб.", "пр.", "Лабораторна робота", "диф. залік", "Lectures"] {
            assert!(is_activity_type(s), "{s}");
        }
        assert!(!is_activity_type("ПЗ-21"));
        assert!(!is_activity_type("Smith"));
    }

    #[test]
    fn surnames_sharing_a_stem_are_not_activities() {
        for s in ["Лабунько О.П.", "Практиченко", "Екзаменський", "Лекцівський І. І.", "Labov", "Examiner"] {
            assert!(!is_activity_type(s), "{s}");
        }

        let remote = cfg(ScheduleKind::Remote);
        let f = parse_lines(&lines(&["Philosophy", "Лабунько О.П."]), &remote);
        assert_eq!(f.label, "Лабунько О.П.");
        assert_eq!(f.kind, "");

        let f = parse_lines(&lines(&["Philosophy", "ПЗ-21, Практиченко"]), &cfg(ScheduleKind::Teacher));
        assert_eq!(f.label, "ПЗ-21, Практиченко");
        assert_eq!(f.kind, "");
    }

    #[test]
    fn extract_attaches_times_url_and_marker() {
        let html = parse_page(
            r#"<div class="views-row"><div id="sub_1_chys" class="week_color">
                 <div class="group_content">Math<br>Smith, 101, Lecture<br>
                   <span><a href="https://meet.example/abc">https://meet.example/abc</a></span>
                 </div></div></div>"#,
        )
        .unwrap();
        let row = find_by_class(html.root_element(), "views-row").unwrap();
        let marker = RowMarker::from_parts("sub_1_chys", "week_color");
        let lesson = extract(row, " 2 ", &marker, &cfg(ScheduleKind::Student));

        assert_eq!(lesson.period, "2");
        assert_eq!((lesson.time_start.as_str(), lesson.time_end.as_str()), ("10:05", "11:25"));
        assert_eq!(lesson.url.as_deref(), Some("https://meet.example/abc"));
        assert_eq!(lesson.week, WeekType::Even);
        assert_eq!(lesson.subgroup, SubgroupTag::Subgroup1);
        assert!(lesson.active_this_week);
        assert_eq!(lesson.display_label(), "Smith, підгрупа 1");
    }

    #[test]
    fn attribute_text_never_reaches_fields() {
        let html = parse_page(
            r#"<div class="views-row"><div class="group_content"><span title="a>b">Math</span><br>Smith, 101, Lecture</div></div>"#,
        )
        .unwrap();
        let row = find_by_class(html.root_element(), "views-row").unwrap();
        let lesson = extract(row, "1", &RowMarker::default(), &cfg(ScheduleKind::Student));
        assert_eq!(lesson.subject, "Math");
        assert_eq!(lesson.label, "Smith");
        assert_eq!(lesson.kind, "Lecture");
    }

    #[test]
    fn unknown_period_has_no_times() {
        let html = parse_page(r#"<div class="views-row">Math</div>"#).unwrap();
        let row = find_by_class(html.root_element(), "views-row").unwrap();
        let lesson = extract(row, "вечір", &RowMarker::default(), &cfg(ScheduleKind::Student));
        assert_eq!(lesson.time_start, "");
        assert_eq!(lesson.url, None);
        assert_eq!(lesson.subject, "Math");
    }
}
