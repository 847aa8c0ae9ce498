//! Sort/filter projection and dashboard aggregates.
//!
//! # Responsibility
//! - Produce the ordered, filtered row list for the table view.
//! - Recompute dashboard aggregates from the unfiltered collection.
//!
//! # Invariants
//! - Sorting is stable: ties preserve prior relative (insertion) order.
//! - Filtering runs after sorting and does not reorder survivors.
//! - Aggregates always cover the full collection, never the filtered view.

use crate::model::activity::{Activity, Category};
use crate::search::matcher::Matcher;

/// Column the table view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Duration,
    DueDate,
    Tag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort selection with header-toggle semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// Initial view: soonest work at the bottom, matching the original
    /// due-date-descending default.
    fn default() -> Self {
        Self {
            key: SortKey::DueDate,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Selecting the active key flips direction; a new key resets to
    /// ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Per-category slice of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagShare {
    pub category: Category,
    pub count: usize,
    /// Share of total, rounded to the nearest whole percent. Rounds
    /// independently per category; the three shares need not sum to 100.
    pub percent: u32,
}

/// Dashboard statistics over the unfiltered, unsorted full collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub total: usize,
    /// Average duration rounded to the nearest whole minute; 0 when empty.
    pub average_duration: u32,
    /// Record with the chronologically soonest due date; ties go to the
    /// earlier collection position.
    pub next_due: Option<Activity>,
    /// Shares for the three fixed categories in dashboard order.
    pub tag_shares: [TagShare; 3],
}

/// Ordered, filtered rows plus dashboard aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub rows: Vec<Activity>,
    pub aggregates: Aggregates,
}

/// Projects the collection for display.
///
/// Rows are sorted by `sort`, then filtered by `matcher` when one is
/// active. Aggregates ignore both sort and matcher.
pub fn project(collection: &[Activity], sort: SortState, matcher: Option<&Matcher>) -> Projection {
    let mut rows: Vec<Activity> = collection.to_vec();
    rows.sort_by(|a, b| {
        let ordering = match sort.key {
            SortKey::Title => compare_text(&a.title, &b.title),
            SortKey::Duration => a.duration.cmp(&b.duration),
            SortKey::DueDate => a.due_date.cmp(&b.due_date),
            SortKey::Tag => compare_text(&a.tag, &b.tag),
        };
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    if let Some(matcher) = matcher {
        rows.retain(|activity| matcher.matches_activity(activity));
    }

    Projection {
        rows,
        aggregates: aggregate(collection),
    }
}

/// Computes dashboard aggregates over the full collection.
pub fn aggregate(collection: &[Activity]) -> Aggregates {
    let total = collection.len();

    let average_duration = if total == 0 {
        0
    } else {
        let sum: u64 = collection.iter().map(|a| u64::from(a.duration)).sum();
        round_ratio(sum as f64, total as f64)
    };

    // min_by_key keeps the first of equal keys, which is exactly the
    // collection-order tie-break the dashboard wants.
    let next_due = collection.iter().min_by_key(|a| a.due_date).cloned();

    let tag_shares = Category::ALL.map(|category| {
        let count = collection
            .iter()
            .filter(|a| a.tag == category.label())
            .count();
        let percent = if total == 0 {
            0
        } else {
            round_ratio(count as f64 * 100.0, total as f64)
        };
        TagShare {
            category,
            count,
            percent,
        }
    });

    Aggregates {
        total,
        average_duration,
        next_due,
        tag_shares,
    }
}

/// Case-insensitive lexicographic text comparison with a raw tie-break,
/// approximating locale-aware collation without a collation table.
fn compare_text(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn round_ratio(numerator: f64, denominator: f64) -> u32 {
    (numerator / denominator).round() as u32
}

#[cfg(test)]
mod tests {
    use super::{compare_text, SortDirection, SortKey, SortState};
    use std::cmp::Ordering;

    #[test]
    fn toggle_flips_same_key_and_resets_new_key() {
        let mut sort = SortState::default();
        assert_eq!(sort.key, SortKey::DueDate);
        assert_eq!(sort.direction, SortDirection::Descending);

        sort.toggle(SortKey::DueDate);
        assert_eq!(sort.direction, SortDirection::Ascending);

        sort.toggle(SortKey::Duration);
        assert_eq!(sort.key, SortKey::Duration);
        assert_eq!(sort.direction, SortDirection::Ascending);

        sort.toggle(SortKey::Duration);
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn text_comparison_ignores_case_first() {
        assert_eq!(compare_text("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_text("Beta", "alpha"), Ordering::Greater);
    }
}
