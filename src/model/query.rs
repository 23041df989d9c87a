//! Query engine for the campaign table
//!
//! A pure, synchronous pipeline over an in-memory row collection:
//! search filter -> status filter -> stable sort -> paginate.
//! The engine holds no state of its own; `QueryState` is owned by the
//! caller and mutated only through the operations defined here.

use super::campaign::{Campaign, SortField, Status};
use std::cmp::Ordering;

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(&self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Arrow glyph shown in the active column header
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Status filter applied before sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Statuses",
            StatusFilter::Only(status) => status.name(),
        }
    }

    fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Caller-held search/filter/sort/pagination parameters
///
/// Fields are private so that state changes go through the engine's
/// operations. Note that changing the search term or status filter does
/// NOT reset the page; a caller left past the end of a shrunken result
/// set sees an empty page until it navigates.
#[derive(Debug, Clone)]
pub struct QueryState {
    search_term: String,
    status_filter: StatusFilter,
    sort_field: SortField,
    sort_direction: SortDirection,
    page: usize,
    page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    /// Create a state with defaults: sort by campaign name ascending,
    /// all statuses, empty search, page 1.
    ///
    /// `page_size` of zero is a caller contract violation and is coerced
    /// to the default; config loading rejects it before it gets here.
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            sort_field: SortField::Name,
            sort_direction: SortDirection::Asc,
            page: 1,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Select a sort column: same column flips direction, a new column
    /// starts ascending. The page is left alone since re-sorting does
    /// not change the result count.
    pub fn set_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flip();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Replace the search term. Does not reset the page.
    pub fn set_search(&mut self, term: String) {
        self.search_term = term;
    }

    /// Replace the status filter. Does not reset the page.
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Jump to a page. Pages are 1-indexed; clamping against the result's
    /// `total_pages` is the caller's job.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the page size. Zero is ignored; the current first page is
    /// shown again since old page numbers are meaningless afterwards.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.page_size = page_size;
        self.page = 1;
    }
}

/// One page of results plus pagination metadata
#[derive(Debug)]
pub struct QueryResult<'a> {
    pub page_rows: Vec<&'a Campaign>,
    pub total_count: usize,
    pub total_pages: usize,
}

/// The filtered and sorted row list before pagination
///
/// This is what the CSV export consumes: "export all matching rows",
/// not just the visible page.
pub fn filtered_sorted<'a>(rows: &'a [Campaign], state: &QueryState) -> Vec<&'a Campaign> {
    let term = state.search_term.to_lowercase();

    let mut matched: Vec<&Campaign> = rows
        .iter()
        .filter(|row| term.is_empty() || row.name.to_lowercase().contains(&term))
        .filter(|row| state.status_filter.matches(row.status))
        .collect();

    // Vec::sort_by is stable, so equal keys keep their input order
    matched.sort_by(|a, b| {
        let ordering = compare(a, b, state.sort_field);
        match state.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    matched
}

/// Run the full pipeline and slice out the requested page
///
/// `total_pages` has a floor of 1 so pagination controls always have a
/// valid page to display. A `page` past the end yields an empty slice.
pub fn query<'a>(rows: &'a [Campaign], state: &QueryState) -> QueryResult<'a> {
    let matched = filtered_sorted(rows, state);
    let total_count = matched.len();
    let total_pages = total_count.div_ceil(state.page_size).max(1);

    let start = (state.page - 1).saturating_mul(state.page_size);
    let end = (start + state.page_size).min(total_count);
    let page_rows = if start < total_count {
        matched[start..end].to_vec()
    } else {
        Vec::new()
    };

    QueryResult {
        page_rows,
        total_count,
        total_pages,
    }
}

/// Compare two rows on a single column
///
/// Text columns compare as strings, numeric columns numerically. An
/// incomparable float pair (NaN) is treated as equal, which leaves the
/// pair in input order under the stable sort.
pub fn compare(a: &Campaign, b: &Campaign, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Status => a.status.name().cmp(b.status.name()),
        SortField::Budget => cmp_f64(a.budget, b.budget),
        SortField::Spent => cmp_f64(a.spent, b.spent),
        SortField::Clicks => a.clicks.cmp(&b.clicks),
        SortField::Conversions => a.conversions.cmp(&b.conversions),
        SortField::Roas => cmp_f64(a.roas, b.roas),
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, status: Status, budget: f64) -> Campaign {
        Campaign {
            id: id.to_string(),
            name: name.to_string(),
            status,
            budget,
            spent: budget / 2.0,
            clicks: 1000,
            conversions: 100,
            ctr: 2.5,
            cpc: 1.2,
            roas: 3.0,
            date: "6/1/2024".to_string(),
        }
    }

    fn twelve_rows() -> Vec<Campaign> {
        let names = [
            "Summer Sale 2024",
            "Brand Awareness Q4",
            "Product Launch",
            "Holiday Special",
            "Back to School",
            "Black Friday",
            "New Year Campaign",
            "Spring Collection",
            "Customer Retention",
            "Lead Generation",
            "Mobile App Install",
            "Video Campaign",
        ];
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let status = Status::all()[i % 3];
                row(&format!("campaign-{}", i + 1), name, status, 10_000.0 + i as f64)
            })
            .collect()
    }

    #[test]
    fn test_no_filter_matches_everything() {
        let rows = twelve_rows();
        let state = QueryState::default();
        let result = query(&rows, &state);
        assert_eq!(result.total_count, rows.len());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let rows = twelve_rows();
        let mut state = QueryState::default();
        state.set_search("campaign".to_string());
        state.set_status_filter(StatusFilter::Only(Status::Active));

        let first: Vec<String> = filtered_sorted(&rows, &state)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        // Re-applying the same filters changes nothing
        state.set_search("campaign".to_string());
        state.set_status_filter(StatusFilter::Only(Status::Active));
        let second: Vec<String> = filtered_sorted(&rows, &state)
            .iter()
            .map(|r| r.id.clone())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let rows = twelve_rows();
        let mut state = QueryState::default();
        state.set_search("summer".to_string());

        let result = query(&rows, &state);
        assert_eq!(result.total_count, 1);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page_rows[0].name, "Summer Sale 2024");
    }

    #[test]
    fn test_search_does_not_match_other_fields() {
        let rows = twelve_rows();
        let mut state = QueryState::default();
        // Every row has status text containing "a" (Active/Paused) but the
        // term only runs against the campaign name
        state.set_search("6/1/2024".to_string());
        assert_eq!(query(&rows, &state).total_count, 0);
    }

    #[test]
    fn test_status_filter_counts() {
        let mut rows = Vec::new();
        for i in 0..4 {
            rows.push(row(&format!("a{}", i), "A", Status::Active, 1.0));
        }
        for i in 0..5 {
            rows.push(row(&format!("p{}", i), "P", Status::Paused, 1.0));
        }
        for i in 0..3 {
            rows.push(row(&format!("c{}", i), "C", Status::Completed, 1.0));
        }

        let mut state = QueryState::default();
        state.set_status_filter(StatusFilter::Only(Status::Active));
        assert_eq!(query(&rows, &state).total_count, 4);

        state.set_status_filter(StatusFilter::Only(Status::Paused));
        assert_eq!(query(&rows, &state).total_count, 5);

        state.set_status_filter(StatusFilter::Only(Status::Completed));
        assert_eq!(query(&rows, &state).total_count, 3);
    }

    #[test]
    fn test_pagination_splits_twelve_rows() {
        let rows = twelve_rows();
        let mut state = QueryState::new(10);

        let page1 = query(&rows, &state);
        assert_eq!(page1.page_rows.len(), 10);
        assert_eq!(page1.total_pages, 2);

        state.set_page(2);
        let page2 = query(&rows, &state);
        assert_eq!(page2.page_rows.len(), 2);

        // The engine does not clamp: past the end is an empty page
        state.set_page(3);
        let page3 = query(&rows, &state);
        assert!(page3.page_rows.is_empty());
        assert_eq!(page3.total_pages, 2);
    }

    #[test]
    fn test_pages_partition_the_filtered_set() {
        let rows = twelve_rows();
        let mut state = QueryState::new(5);

        let full: Vec<String> = filtered_sorted(&rows, &state)
            .iter()
            .map(|r| r.id.clone())
            .collect();

        let total_pages = query(&rows, &state).total_pages;
        let mut stitched = Vec::new();
        for page in 1..=total_pages {
            state.set_page(page);
            for row in query(&rows, &state).page_rows {
                stitched.push(row.id.clone());
            }
        }

        assert_eq!(stitched, full);
    }

    #[test]
    fn test_empty_result_still_has_one_page() {
        let rows = twelve_rows();
        let mut state = QueryState::default();
        state.set_search("no such campaign".to_string());

        let result = query(&rows, &state);
        assert_eq!(result.total_count, 0);
        assert_eq!(result.total_pages, 1);
        assert!(result.page_rows.is_empty());
    }

    #[test]
    fn test_sort_budget_descending() {
        let rows = twelve_rows();
        let mut state = QueryState::default();
        state.set_sort(SortField::Budget);
        state.set_sort(SortField::Budget); // second select flips to Desc
        assert_eq!(state.sort_direction(), SortDirection::Desc);

        let result = query(&rows, &state);
        for pair in result.page_rows.windows(2) {
            assert!(pair[0].budget >= pair[1].budget);
        }
    }

    #[test]
    fn test_sort_name_ascending_by_default() {
        let rows = twelve_rows();
        let state = QueryState::default();
        let result = query(&rows, &state);
        for pair in result.page_rows.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[test]
    fn test_stable_sort_keeps_input_order_on_ties() {
        // All budgets equal: sorting by budget must not reorder
        let rows: Vec<Campaign> = (0..6)
            .map(|i| row(&format!("r{}", i), &format!("n{}", i), Status::Active, 100.0))
            .collect();
        let mut state = QueryState::default();
        state.set_sort(SortField::Budget);

        let sorted: Vec<String> = filtered_sorted(&rows, &state)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        let input: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_set_sort_flip_flip_is_identity() {
        let mut state = QueryState::default();
        state.set_sort(SortField::Clicks);
        let direction = state.sort_direction();

        state.set_sort(SortField::Clicks);
        state.set_sort(SortField::Clicks);
        assert_eq!(state.sort_direction(), direction);
        assert_eq!(state.sort_field(), SortField::Clicks);
    }

    #[test]
    fn test_new_sort_field_starts_ascending() {
        let mut state = QueryState::default();
        state.set_sort(SortField::Roas);
        state.set_sort(SortField::Roas);
        assert_eq!(state.sort_direction(), SortDirection::Desc);

        state.set_sort(SortField::Spent);
        assert_eq!(state.sort_field(), SortField::Spent);
        assert_eq!(state.sort_direction(), SortDirection::Asc);
    }

    #[test]
    fn test_filter_does_not_reset_page() {
        let rows = twelve_rows();
        let mut state = QueryState::new(10);
        state.set_page(2);
        state.set_search("Summer".to_string());

        // Page 2 of a one-page result comes back empty
        let result = query(&rows, &state);
        assert_eq!(state.page(), 2);
        assert_eq!(result.total_pages, 1);
        assert!(result.page_rows.is_empty());
    }

    #[test]
    fn test_nan_compares_equal() {
        let mut a = row("a", "A", Status::Active, f64::NAN);
        let b = row("b", "B", Status::Active, 5.0);
        assert_eq!(compare(&a, &b, SortField::Budget), Ordering::Equal);
        a.budget = 1.0;
        assert_eq!(compare(&a, &b, SortField::Budget), Ordering::Less);
    }

    #[test]
    fn test_zero_page_size_falls_back_to_default() {
        let state = QueryState::new(0);
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_set_page_size_resets_page_and_ignores_zero() {
        let mut state = QueryState::new(10);
        state.set_page(3);
        state.set_page_size(25);
        assert_eq!(state.page_size(), 25);
        assert_eq!(state.page(), 1);
        state.set_page_size(0);
        assert_eq!(state.page_size(), 25);
    }
}
