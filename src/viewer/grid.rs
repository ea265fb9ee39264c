use std::cmp::Ordering;

use crate::events::Event;

/// Grid sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    /// Original catalogue position.
    #[default]
    Index,
    /// Title, case-insensitive.
    Alphabetical,
    /// Numeric difficulty.
    Difficulty,
}

impl SortBy {
    /// Label shown in the grid title.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Index => "Index",
            Self::Alphabetical => "A-Z",
            Self::Difficulty => "Difficulty",
        }
    }

    /// Cycle to the next key (for the grid's sort shortcut).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Index => Self::Alphabetical,
            Self::Alphabetical => Self::Difficulty,
            Self::Difficulty => Self::Index,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Arrow glyph for the direction.
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Title comparison approximating a root-locale collation: letters compare
/// case-insensitively first, and only then does lowercase sort before
/// uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

/// Original indices of `events` in display order. Ties keep catalogue order
/// in both directions.
pub fn sort_events(events: &[Event], by: SortBy, order: SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..events.len()).collect();
    indices.sort_by(|&a, &b| {
        let ordering = match by {
            SortBy::Index => a.cmp(&b),
            SortBy::Alphabetical => locale_compare(events[a].title, events[b].title),
            SortBy::Difficulty => events[a].difficulty.value().cmp(&events[b].difficulty.value()),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    indices
}

/// Memoizes [`sort_events`] on the sort key and order.
#[derive(Debug)]
pub struct GridSorter<'a> {
    events: &'a [Event],
    key: Option<(SortBy, SortOrder)>,
    cached: Vec<usize>,
    recomputed: usize,
}

impl<'a> GridSorter<'a> {
    /// Sorter over `events` with nothing cached yet.
    pub const fn new(events: &'a [Event]) -> Self {
        Self { events, key: None, cached: Vec::new(), recomputed: 0 }
    }

    /// Display order for `(by, order)`, recomputed only when the key changes.
    pub fn order(&mut self, by: SortBy, order: SortOrder) -> &[usize] {
        if self.key != Some((by, order)) {
            self.cached = sort_events(self.events, by, order);
            self.key = Some((by, order));
            self.recomputed += 1;
        }
        &self.cached
    }

    /// The catalogue being sorted.
    pub const fn events(&self) -> &'a [Event] {
        self.events
    }

    /// How many times the order has been recomputed.
    #[cfg(test)]
    pub const fn recompute_count(&self) -> usize {
        self.recomputed
    }
}
