//! Filter, sort and paginate a course collection for display.
//!
//! Everything here is a pure function of its inputs: the collection is only
//! borrowed and never reordered in place. [`QueryState`] carries the mutable
//! side of a query and enforces the reset-to-first-page rule.

use crate::core::{Course, Pagination, Query, SortDirection, SortKey};
use serde::Serialize;
use std::ops::Range;

/// The slice of a catalog to render, plus paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage<'a> {
    pub courses: Vec<&'a Course>,
    pub pagination: Pagination,
    /// Number of courses that survived filtering, across all pages.
    pub total_matches: usize,
}

impl CatalogPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Keep courses whose name or course number contains the search term,
/// ignoring case. A blank term keeps everything.
pub fn filter_courses<'a>(courses: &'a [Course], search_term: &str) -> Vec<&'a Course> {
    let needle = search_term.trim().to_lowercase();
    if needle.is_empty() {
        return courses.iter().collect();
    }

    courses
        .iter()
        .filter(|course| {
            course.name.to_lowercase().contains(&needle)
                || course.course_number.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Stable sort by `key`. Equal keys keep their input order in both directions.
pub fn sort_courses<'a>(
    mut courses: Vec<&'a Course>,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a Course> {
    if key != SortKey::None {
        courses.sort_by(|a, b| direction.apply(key.compare(a, b)));
    }
    courses
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Index range of `page` (1-based) within a sequence of `len` items.
/// Pages past the end yield an empty range.
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

pub fn paginate<'s, T>(items: &'s [T], page: usize, page_size: usize) -> &'s [T] {
    &items[page_range(page, page_size, items.len())]
}

pub fn previous_page(page: usize) -> usize {
    page.saturating_sub(1).max(1)
}

/// Move forward one page, never past `total_pages`. With no pages at all the
/// current page is returned unchanged.
pub fn next_page(page: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        return page;
    }
    page.saturating_add(1).min(total_pages)
}

/// Run filter, sort and paginate, in that order.
pub fn view<'a>(courses: &'a [Course], query: &Query) -> CatalogPage<'a> {
    let matched = sort_courses(
        filter_courses(courses, &query.search_term),
        query.sort_key,
        query.sort_direction,
    );
    page_of(&matched, query.page, query.page_size)
}

/// Paginate an already filtered and sorted sequence.
pub fn page_of<'a>(matched: &[&'a Course], page: usize, page_size: usize) -> CatalogPage<'a> {
    let total_pages = total_pages(matched.len(), page_size);
    let courses = paginate(matched, page, page_size).to_vec();

    tracing::debug!(
        matched = matched.len(),
        page,
        total_pages,
        shown = courses.len(),
        "catalog view computed"
    );

    CatalogPage {
        courses,
        pagination: Pagination {
            current_page: page.max(1),
            total_pages,
        },
        total_matches: matched.len(),
    }
}

/// A query being edited by the user.
///
/// Changing the search term or the sort always sends the user back to page 1,
/// so a page number never outlives the result set it was chosen against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    query: Query,
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: Query::new(page_size.max(1)),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.query.page
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.query.page = 1;
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.query.sort_key = key;
        self.query.sort_direction = direction;
        self.query.page = 1;
    }

    /// Header-click behaviour: the active key flips direction, a new key
    /// starts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        let direction = if self.query.sort_key == key {
            self.query.sort_direction.flipped()
        } else {
            SortDirection::Ascending
        };
        self.set_sort(key, direction);
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.query.page = next_page(self.query.page, total_pages);
    }

    pub fn previous_page(&mut self) {
        self.query.page = previous_page(self.query.page);
    }

    /// Pull a stale page back inside `[1, max(total_pages, 1)]`.
    /// Returns true when the page had to move.
    pub fn clamp_to(&mut self, total_pages: usize) -> bool {
        let clamped = self.query.page.clamp(1, total_pages.max(1));
        let moved = clamped != self.query.page;
        self.query.page = clamped;
        moved
    }
}
