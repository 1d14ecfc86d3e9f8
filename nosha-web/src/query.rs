//! Search, filter, sort and pagination over in-memory lists.
//!
//! Every list page (requests, products, services) drives its rows through
//! one [`ListQuery`]. The displayed set is always
//! `paginate(sort(filter(source)))` — a deterministic function of the query
//! state and the untouched source slice.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Filter value that disables a dimension.
pub const ALL: &str = "All";

/// Sort polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite polarity.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Typed sort key value. The comparator follows the declared type: text is
/// case-insensitive lexicographic, numbers are numeric, dates chronological.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Case-insensitive text.
    Text(String),
    /// Numeric value; compared with `total_cmp`.
    Number(f64),
    /// Calendar date.
    Date(NaiveDate),
}

impl SortValue {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            // Mixed types only happen on a misdeclared key; keep source order.
            _ => Ordering::Equal,
        }
    }
}

/// A row the query engine can search, filter and sort.
pub trait Listed {
    /// Text fields matched by the free-text search.
    fn search_fields(&self) -> Vec<String>;

    /// Value of a categorical dimension, if the row carries it.
    fn dimension(&self, name: &str) -> Option<String>;

    /// Typed value for a sort key.
    fn sort_value(&self, key: &str) -> SortValue;
}

/// One page of query results, borrowed from the source slice.
#[derive(Debug, PartialEq)]
pub struct PageView<'a, T> {
    /// Rows visible on the current page, in display order.
    pub rows: Vec<&'a T>,
    /// Total rows after filtering (before pagination).
    pub total: usize,
    /// The page actually shown, after clamping.
    pub page: usize,
    /// Number of pages the filtered set spans (at least 1).
    pub page_count: usize,
}

/// The search/filter/sort/pagination state of one list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    search_term: String,
    filters: BTreeMap<&'static str, String>,
    sort_key: Option<&'static str>,
    direction: SortDirection,
    page: usize,
    page_size: usize,
}

impl ListQuery {
    /// Default state: no search, no filters, source order, first page.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            search_term: String::new(),
            filters: BTreeMap::new(),
            sort_key: None,
            direction: SortDirection::Ascending,
            page: 1,
            page_size,
        }
    }

    /// Current free-text search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replace the search term and return to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Set a categorical filter. The [`ALL`] sentinel clears the dimension.
    pub fn set_filter(&mut self, dimension: &'static str, value: impl Into<String>) {
        let value = value.into();
        if value == ALL {
            self.filters.remove(dimension);
        } else {
            self.filters.insert(dimension, value);
        }
        self.page = 1;
    }

    /// Active value for a dimension ([`ALL`] when unset).
    #[must_use]
    pub fn filter(&self, dimension: &str) -> &str {
        self.filters.get(dimension).map_or(ALL, String::as_str)
    }

    /// Sort by a key, or flip direction when the key is already active.
    pub fn toggle_sort(&mut self, key: &'static str) {
        if self.sort_key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.sort_key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Set sort key and direction explicitly.
    #[allow(dead_code)]
    pub fn set_sort(&mut self, key: &'static str, direction: SortDirection) {
        self.sort_key = Some(key);
        self.direction = direction;
    }

    /// Active sort key and direction, if sorting is on.
    #[must_use]
    #[allow(dead_code)]
    pub fn sort(&self) -> Option<(&'static str, SortDirection)> {
        self.sort_key.map(|key| (key, self.direction))
    }

    /// Jump to a page; clamped against the result count on the next apply.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Currently requested page.
    #[must_use]
    #[allow(dead_code)]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    #[must_use]
    #[allow(dead_code)]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn matches<T: Listed>(&self, row: &T) -> bool {
        let needle = self.search_term.trim().to_lowercase();
        let search_hit = needle.is_empty()
            || row
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));

        search_hit
            && self
                .filters
                .iter()
                .all(|(dimension, wanted)| row.dimension(dimension).as_deref() == Some(wanted))
    }

    /// Run the query over `source`.
    ///
    /// The source is never mutated; rows are borrowed in display order.
    /// When filtering shrinks the result set below the requested page, the
    /// page is clamped to the last non-empty one. The clamp is recorded on
    /// the query, so repeated applications agree; callers holding a stale
    /// page number get the same clamped view on every apply.
    pub fn apply<'a, T: Listed>(&mut self, source: &'a [T]) -> PageView<'a, T> {
        let mut rows: Vec<&T> = source.iter().filter(|row| self.matches(*row)).collect();

        if let Some(key) = self.sort_key {
            // sort_by is stable, so ties keep their source order.
            rows.sort_by(|a, b| {
                let ordering = a.sort_value(key).compare(&b.sort_value(key));
                match self.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let total = rows.len();
        let page_count = total.div_ceil(self.page_size).max(1);
        self.page = self.page.clamp(1, page_count);

        let start = (self.page - 1) * self.page_size;
        let rows = rows
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        PageView {
            rows,
            total,
            page: self.page,
            page_count,
        }
    }
}

/// Bulk-action checkbox state, independent of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeSet<u64>,
}

impl Selection {
    /// Toggle one row.
    pub fn toggle(&mut self, id: u64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Add the given rows to the selection. Callers pass the
    /// currently-visible page, not the whole filtered set; rows selected on
    /// other pages stay selected.
    pub fn select_page(&mut self, ids: impl IntoIterator<Item = u64>) {
        self.selected.extend(ids);
    }

    /// Remove the given rows, leaving selections made elsewhere intact.
    pub fn deselect_page(&mut self, ids: impl IntoIterator<Item = u64>) {
        for id in ids {
            self.selected.remove(&id);
        }
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Whether a row is selected.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: u64,
        name: String,
        status: &'static str,
        price: f64,
        date: NaiveDate,
    }

    impl Listed for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.name.clone(), self.id.to_string()]
        }

        fn dimension(&self, name: &str) -> Option<String> {
            (name == "status").then(|| self.status.to_string())
        }

        fn sort_value(&self, key: &str) -> SortValue {
            match key {
                "price" => SortValue::Number(self.price),
                "date" => SortValue::Date(self.date),
                _ => SortValue::Text(self.name.clone()),
            }
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Teddy Bear XL".into(), status: "Pending", price: 30.0, date: date(10) },
            Row { id: 2, name: "Plush Bunny".into(), status: "Approved", price: 10.0, date: date(9) },
            Row { id: 3, name: "Soft Elephant".into(), status: "Shipped", price: 20.0, date: date(8) },
            Row { id: 4, name: "Teddy Bear Small".into(), status: "Pending", price: 20.0, date: date(7) },
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let source = rows();
        let mut query = ListQuery::new(10);
        query.set_search_term("teddy");
        let page = query.apply(&source);
        assert_eq!(page.total, 2);
        assert_eq!(page.rows[0].id, 1);
        assert_eq!(page.rows[1].id, 4);
    }

    #[test]
    fn search_matches_id_as_text() {
        let source = rows();
        let mut query = ListQuery::new(10);
        query.set_search_term("3");
        let page = query.apply(&source);
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].id, 3);
    }

    #[test]
    fn filter_is_exact_and_all_clears_it() {
        let source = rows();
        let mut query = ListQuery::new(10);
        query.set_filter("status", "Pending");
        assert_eq!(query.apply(&source).total, 2);

        query.set_filter("status", ALL);
        assert_eq!(query.apply(&source).total, 4);
        assert_eq!(query.filter("status"), ALL);
    }

    #[test]
    fn numeric_sort_both_directions() {
        let source = rows();
        let mut query = ListQuery::new(10);
        query.set_sort("price", SortDirection::Ascending);
        let prices: Vec<f64> = query.apply(&source).rows.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![10.0, 20.0, 20.0, 30.0]);

        query.set_sort("price", SortDirection::Descending);
        let prices: Vec<f64> = query.apply(&source).rows.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![30.0, 20.0, 20.0, 10.0]);
    }

    #[test]
    fn equal_keys_keep_source_order() {
        let source = rows();
        let mut query = ListQuery::new(10);
        query.set_sort("price", SortDirection::Ascending);
        let ids: Vec<u64> = query.apply(&source).rows.iter().map(|r| r.id).collect();
        // Rows 3 and 4 tie on price; 3 precedes 4 in the source.
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn date_sort_is_chronological() {
        let source = rows();
        let mut query = ListQuery::new(10);
        query.set_sort("date", SortDirection::Ascending);
        let ids: Vec<u64> = query.apply(&source).rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn text_sort_ignores_case() {
        let mut source = rows();
        source[0].name = "teddy bear xl".into();
        let mut query = ListQuery::new(10);
        query.set_sort("name", SortDirection::Ascending);
        let ids: Vec<u64> = query.apply(&source).rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn repeated_application_is_identical() {
        let source = rows();
        let mut query = ListQuery::new(2);
        query.set_search_term("e");
        query.set_sort("price", SortDirection::Descending);
        query.set_page(2);

        let first: Vec<u64> = query.apply(&source).rows.iter().map(|r| r.id).collect();
        let second: Vec<u64> = query.apply(&source).rows.iter().map(|r| r.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn page_clamps_when_filter_shrinks_results() {
        let source = rows();
        let mut query = ListQuery::new(2);
        query.set_page(2);
        assert_eq!(query.apply(&source).page, 2);

        // Narrow to two matches: page 2 no longer exists.
        query.set_search_term("teddy");
        query.set_page(2);
        let page = query.apply(&source);
        assert_eq!(page.total, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 2);
    }

    #[test]
    fn out_of_range_page_clamps_on_every_apply() {
        let source = rows();
        let mut query = ListQuery::new(2);
        query.set_page(9);
        assert_eq!(query.apply(&source).page, 2);

        // The source shrinking (a deletion) clamps again on the next apply.
        let fewer = &source[..1];
        let page = query.apply(fewer);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn empty_result_set_still_reports_one_page() {
        let source = rows();
        let mut query = ListQuery::new(2);
        query.set_search_term("no such product");
        let page = query.apply(&source);
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 1);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn pagination_slices_in_order() {
        let source = rows();
        let mut query = ListQuery::new(3);
        let first = query.apply(&source);
        assert_eq!(first.rows.len(), 3);
        assert_eq!(first.page_count, 2);

        query.set_page(2);
        let second = query.apply(&source);
        assert_eq!(second.rows.len(), 1);
        assert_eq!(second.rows[0].id, 4);
    }

    #[test]
    fn changing_search_resets_to_first_page() {
        let source = rows();
        let mut query = ListQuery::new(2);
        query.set_page(2);
        query.set_search_term("bear");
        assert_eq!(query.page(), 1);
        let _ = query.apply(&source);
    }

    #[test]
    fn selection_is_independent_of_query() {
        let source = rows();
        let mut query = ListQuery::new(2);
        let mut selection = Selection::default();

        let page = query.apply(&source);
        selection.select_page(page.rows.iter().map(|r| r.id));
        assert_eq!(selection.len(), 2);
        assert!(selection.contains(1));
        assert!(!selection.contains(4));

        // Narrowing the query does not disturb the selection.
        query.set_search_term("elephant");
        let _ = query.apply(&source);
        assert_eq!(selection.len(), 2);

        selection.toggle(1);
        assert!(!selection.contains(1));
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn deselecting_one_page_keeps_the_rest() {
        let source = rows();
        let mut query = ListQuery::new(2);
        let mut selection = Selection::default();

        selection.select_page(query.apply(&source).rows.iter().map(|r| r.id));
        query.set_page(2);
        let second: Vec<u64> = query.apply(&source).rows.iter().map(|r| r.id).collect();
        selection.select_page(second.iter().copied());
        assert_eq!(selection.len(), 4);

        selection.deselect_page(second);
        assert_eq!(selection.len(), 2);
        assert!(selection.contains(1));
        assert!(selection.contains(2));
        assert!(!selection.contains(3));
    }
}
