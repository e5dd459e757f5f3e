//! Sorting and paging for the 30-day usage tables.
//!
//! DESIGN
//! ======
//! Event and property usage rows share one shape (a name plus two counters),
//! so both tables sort through the [`UsageRow`] trait. Descending order is
//! the ascending comparator reversed, and sorting is stable, so rows that
//! compare equal keep their input order in either direction.

#[cfg(test)]
#[path = "usage_table_test.rs"]
mod usage_table_test;

use std::cmp::Ordering;

use crate::net::types::{EventUsage, PropertyUsage};
use crate::util::collate::locale_compare;

/// A row of a usage table.
pub trait UsageRow {
    /// Event name or property key.
    fn name(&self) -> &str;
    /// Occurrences in the last 30 days.
    fn volume(&self) -> u64;
    /// Queries referencing the row in the last 30 days.
    fn usage_count(&self) -> u64;
}

impl UsageRow for EventUsage {
    fn name(&self) -> &str {
        &self.event
    }
    fn volume(&self) -> u64 {
        self.volume
    }
    fn usage_count(&self) -> u64 {
        self.usage_count
    }
}

impl UsageRow for PropertyUsage {
    fn name(&self) -> &str {
        &self.key
    }
    fn volume(&self) -> u64 {
        self.volume
    }
    fn usage_count(&self) -> u64 {
        self.usage_count
    }
}

/// Sortable columns of a usage table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageColumn {
    Name,
    Volume,
    Queries,
}

/// Sort direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header indicator glyph.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Column plus direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub column: UsageColumn,
    pub direction: SortDirection,
}

/// Sort state of one table. `None` means rows render in input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSort {
    pub active: Option<SortOrder>,
}

impl Default for TableSort {
    /// Name column, ascending.
    fn default() -> Self {
        Self {
            active: Some(SortOrder {
                column: UsageColumn::Name,
                direction: SortDirection::Ascending,
            }),
        }
    }
}

impl TableSort {
    /// Apply a header click: ascending, then descending, then unsorted.
    /// A click on a different column starts that column at ascending.
    pub fn click(&mut self, column: UsageColumn) {
        self.active = match self.active {
            Some(SortOrder { column: current, direction }) if current == column => match direction {
                SortDirection::Ascending => Some(SortOrder {
                    column,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortOrder {
                column,
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Direction shown on `column`'s header, if it is the active sort.
    #[must_use]
    pub fn direction_of(&self, column: UsageColumn) -> Option<SortDirection> {
        self.active
            .filter(|order| order.column == column)
            .map(|order| order.direction)
    }
}

/// Ascending comparator for `column`, including the metric tie-breaks.
pub fn compare<T: UsageRow>(a: &T, b: &T, column: UsageColumn) -> Ordering {
    match column {
        UsageColumn::Name => locale_compare(a.name(), b.name()),
        UsageColumn::Volume => a
            .volume()
            .cmp(&b.volume())
            .then_with(|| a.usage_count().cmp(&b.usage_count())),
        UsageColumn::Queries => a
            .usage_count()
            .cmp(&b.usage_count())
            .then_with(|| a.volume().cmp(&b.volume())),
    }
}

/// Rows in display order for `sort`.
pub fn sorted_rows<T: UsageRow>(rows: &[T], sort: TableSort) -> Vec<&T> {
    let mut out: Vec<&T> = rows.iter().collect();
    if let Some(order) = sort.active {
        out.sort_by(|a, b| {
            let cmp = compare(*a, *b, order.column);
            match order.direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
    }
    out
}

/// Number of pages for `total` rows; an empty table still has one page.
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Rows on zero-based `page`. Out-of-range pages are empty.
pub fn page_slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return rows;
    }
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}
