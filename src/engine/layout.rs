// src/engine/layout.rs
use crate::data::{Lesson, SubgroupTag, WeekType};
use super::types::{Layout, LayoutVariant, PairGroup, Slot};

/// Which variant a pair needs, from two signals:
/// any subgroup tag present, any alternating week present.
pub fn classify(group: &PairGroup<'_>) -> LayoutVariant {
    if group.is_empty() {
        return LayoutVariant::Empty;
    }
    let subgroups = group.lessons.iter().any(|l| l.subgroup.is_some());
    let weeks = group.lessons.iter().any(|l| l.week.alternates());
    match (subgroups, weeks) {
        (true, true) => LayoutVariant::ComplexSplitBySubgroupAndWeek,
        (true, false) => LayoutVariant::SubgroupSplit,
        (false, true) => LayoutVariant::WeekSplit,
        (false, false) => LayoutVariant::Full,
    }
}

/// Classify and fill the slots.
///
/// Each slot takes the first lesson tagged exactly for it; failing that, the
/// first lesson that also covers it (whole group and/or every week). A slot
/// nobody covers stays `None`.
pub fn resolve<'a>(group: &PairGroup<'a>) -> Layout<'a> {
    let pick = |sub: SubgroupTag, week: WeekType| slot(&group.lessons, sub, week);
    match classify(group) {
        LayoutVariant::Empty => Layout::Empty,
        LayoutVariant::Full => Layout::Full(group.lessons[0]),
        LayoutVariant::SubgroupSplit => Layout::SubgroupSplit {
            first: pick(SubgroupTag::Subgroup1, WeekType::Full),
            second: pick(SubgroupTag::Subgroup2, WeekType::Full),
        },
        LayoutVariant::WeekSplit => Layout::WeekSplit {
            even: pick(SubgroupTag::None, WeekType::Even),
            odd: pick(SubgroupTag::None, WeekType::Odd),
        },
        LayoutVariant::ComplexSplitBySubgroupAndWeek => Layout::Complex {
            first_even: pick(SubgroupTag::Subgroup1, WeekType::Even),
            first_odd: pick(SubgroupTag::Subgroup1, WeekType::Odd),
            second_even: pick(SubgroupTag::Subgroup2, WeekType::Even),
            second_odd: pick(SubgroupTag::Subgroup2, WeekType::Odd),
        },
    }
}

fn slot<'a>(lessons: &[&'a Lesson], sub: SubgroupTag, week: WeekType) -> Slot<'a> {
    let exact = |l: &&&'a Lesson| l.subgroup == sub && l.week == week;
    let covers = |l: &&&'a Lesson| {
        (l.subgroup == sub || l.subgroup == SubgroupTag::None)
            && (l.week == week || l.week == WeekType::Full)
    };
    lessons
        .iter()
        .find(exact)
        .or_else(|| lessons.iter().find(covers))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::lesson;

    fn group<'a>(lessons: &'a [Lesson]) -> PairGroup<'a> {
        PairGroup { period: "1", lessons: lessons.iter().collect() }
    }

    #[test]
    fn empty_group_is_empty() {
        let g = PairGroup { period: "1", lessons: Vec::new() };
        assert_eq!(resolve(&g), Layout::Empty);
    }

    #[test]
    fn plain_lesson_is_full_and_first_wins() {
        let mut a = lesson("1", WeekType::Full, SubgroupTag::None);
        a.subject = s!("first");
        let b = lesson("1", WeekType::Full, SubgroupTag::None);
        let ls = [a, b];
        match resolve(&group(&ls)) {
            Layout::Full(l) => assert_eq!(l.subject, "first"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn week_split_is_even_then_odd() {
        let ls = [
            lesson("1", WeekType::Odd, SubgroupTag::None),
            lesson("1", WeekType::Even, SubgroupTag::None),
        ];
        let layout = resolve(&group(&ls));
        assert_eq!(layout.variant(), LayoutVariant::WeekSplit);
        let slots = layout.slots();
        assert_eq!(slots[0].map(|l| l.week), Some(WeekType::Even));
        assert_eq!(slots[1].map(|l| l.week), Some(WeekType::Odd));
    }

    #[test]
    fn single_alternating_lesson_leaves_other_week_empty() {
        let ls = [lesson("1", WeekType::Odd, SubgroupTag::None)];
        match resolve(&group(&ls)) {
            Layout::WeekSplit { even, odd } => {
                assert!(even.is_none());
                assert!(odd.is_some());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn subgroup_split_with_one_side_missing() {
        let ls = [lesson("1", WeekType::Full, SubgroupTag::Subgroup2)];
        let layout = resolve(&group(&ls));
        assert_eq!(layout.variant(), LayoutVariant::SubgroupSplit);
        assert_eq!(layout.empty_slots(), 1);
        assert!(layout.slots()[0].is_none());
    }

    #[test]
    fn complex_split_marks_missing_slots_empty() {
        let ls = [
            lesson("1", WeekType::Even, SubgroupTag::Subgroup1),
            lesson("1", WeekType::Odd, SubgroupTag::Subgroup2),
        ];
        match resolve(&group(&ls)) {
            Layout::Complex { first_even, first_odd, second_even, second_odd } => {
                assert!(first_even.is_some());
                assert!(first_odd.is_none());
                assert!(second_even.is_none());
                assert!(second_odd.is_some());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn every_week_subgroup_lesson_covers_both_weeks_in_complex() {
        let ls = [
            lesson("1", WeekType::Full, SubgroupTag::Subgroup1),
            lesson("1", WeekType::Even, SubgroupTag::Subgroup2),
        ];
        let layout = resolve(&group(&ls));
        assert_eq!(layout.variant(), LayoutVariant::ComplexSplitBySubgroupAndWeek);
        let slots = layout.slots();
        assert!(slots[0].is_some() && slots[1].is_some());
        assert!(slots[2].is_some() && slots[3].is_none());
    }
}
