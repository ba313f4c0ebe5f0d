// src/engine/types.rs
use crate::data::Lesson;

/// Lessons of one day that share a pair number. Derived, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairGroup<'a> {
    pub period: &'a str,
    pub lessons: Vec<&'a Lesson>,
}

impl<'a> PairGroup<'a> {
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutVariant {
    Empty,
    Full,
    SubgroupSplit,
    WeekSplit,
    ComplexSplitBySubgroupAndWeek,
}

impl LayoutVariant {
    /// Number of slots a pair with this variant presents.
    pub fn slot_count(&self) -> usize {
        match self {
            LayoutVariant::Empty => 0,
            LayoutVariant::Full => 1,
            LayoutVariant::SubgroupSplit | LayoutVariant::WeekSplit => 2,
            LayoutVariant::ComplexSplitBySubgroupAndWeek => 4,
        }
    }
}

/// A lesson, or an explicit "nothing here" placeholder.
pub type Slot<'a> = Option<&'a Lesson>;

/// Resolved slots of one pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout<'a> {
    Empty,
    Full(&'a Lesson),
    SubgroupSplit {
        first: Slot<'a>,
        second: Slot<'a>,
    },
    /// Numerator (even) first, then denominator (odd).
    WeekSplit {
        even: Slot<'a>,
        odd: Slot<'a>,
    },
    Complex {
        first_even: Slot<'a>,
        first_odd: Slot<'a>,
        second_even: Slot<'a>,
        second_odd: Slot<'a>,
    },
}

impl<'a> Layout<'a> {
    pub fn variant(&self) -> LayoutVariant {
        match self {
            Layout::Empty => LayoutVariant::Empty,
            Layout::Full(_) => LayoutVariant::Full,
            Layout::SubgroupSplit { .. } => LayoutVariant::SubgroupSplit,
            Layout::WeekSplit { .. } => LayoutVariant::WeekSplit,
            Layout::Complex { .. } => LayoutVariant::ComplexSplitBySubgroupAndWeek,
        }
    }

    /// Slots in presentation order; length always equals `slot_count()`.
    pub fn slots(&self) -> Vec<Slot<'a>> {
        match *self {
            Layout::Empty => Vec::new(),
            Layout::Full(l) => vec![Some(l)],
            Layout::SubgroupSplit { first, second } => vec![first, second],
            Layout::WeekSplit { even, odd } => vec![even, odd],
            Layout::Complex { first_even, first_odd, second_even, second_odd } => {
                vec![first_even, first_odd, second_even, second_odd]
            }
        }
    }

    pub fn empty_slots(&self) -> usize {
        self.slots().iter().filter(|s| s.is_none()).count()
    }
}
