use crate::core::catalog_view::{
    filter_courses, page_of, sort_courses, total_pages, CatalogPage, QueryState,
};
use crate::core::enrollment::EnrollmentStore;
use crate::core::{CatalogSnapshot, Course, CourseSource, SortDirection, SortKey};
use crate::utils::error::{CatalogError, Result};
use std::fmt;
use std::str::FromStr;

/// What the catalog panel should show while the feed is outstanding.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Loaded(CatalogSnapshot),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MatchKey {
    version: u64,
    search_term: String,
    sort_key: SortKey,
    sort_direction: SortDirection,
}

#[derive(Debug, Clone)]
struct MatchCache {
    key: MatchKey,
    matched: Vec<Course>,
}

/// A single user's browsing session: the loaded catalog, the query being
/// edited and the enrolled courses.
///
/// The catalog view and the enrollment store never see each other; the
/// session only hands each of them the data they need.
#[derive(Debug)]
pub struct CatalogSession {
    state: LoadState,
    query: QueryState,
    enrollment: EnrollmentStore,
    versions: u64,
    cache: Option<MatchCache>,
}

impl CatalogSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            state: LoadState::Loading,
            query: QueryState::new(page_size),
            enrollment: EnrollmentStore::new(),
            versions: 0,
            cache: None,
        }
    }

    /// Fetch the catalog. Failures are recorded in the load state, never
    /// returned, so the session always has something to display.
    pub async fn load(&mut self, source: &dyn CourseSource) {
        self.state = LoadState::Loading;
        self.cache = None;

        match source.fetch_courses().await {
            Ok(courses) => {
                let count = courses.len();
                self.set_courses(courses);
                if let Some(snapshot) = self.snapshot() {
                    tracing::info!(
                        fetched_at = %snapshot.fetched_at.to_rfc3339(),
                        version = snapshot.version,
                        "Loaded {} courses from {}",
                        count,
                        source.describe()
                    );
                }
            }
            Err(e) => {
                tracing::error!(
                    retryable = e.is_retryable(),
                    "Error fetching courses from {}: {}",
                    source.describe(),
                    e
                );
                self.state = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn set_courses(&mut self, courses: Vec<Course>) {
        self.versions += 1;
        self.cache = None;
        self.state = LoadState::Loaded(CatalogSnapshot::new(courses, self.versions));
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&CatalogSnapshot> {
        match &self.state {
            LoadState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryState {
        &mut self.query
    }

    pub fn enrollment(&self) -> &EnrollmentStore {
        &self.enrollment
    }

    /// Filter and sort the loaded catalog, reusing the previous result while
    /// neither the catalog nor the search/sort inputs changed. Returns the
    /// number of matches.
    fn refresh_matches(&mut self) -> usize {
        let LoadState::Loaded(snapshot) = &self.state else {
            self.cache = None;
            return 0;
        };

        let query = self.query.query();
        let key = MatchKey {
            version: snapshot.version,
            search_term: query.search_term.clone(),
            sort_key: query.sort_key,
            sort_direction: query.sort_direction,
        };

        if let Some(cache) = &self.cache {
            if cache.key == key {
                return cache.matched.len();
            }
        }

        let matched: Vec<Course> = sort_courses(
            filter_courses(&snapshot.courses, &key.search_term),
            key.sort_key,
            key.sort_direction,
        )
        .into_iter()
        .cloned()
        .collect();
        tracing::debug!("Recomputed {} matching courses", matched.len());

        let count = matched.len();
        self.cache = Some(MatchCache { key, matched });
        count
    }

    pub fn total_pages(&mut self) -> usize {
        let matches = self.refresh_matches();
        total_pages(matches, self.query.query().page_size)
    }

    /// The page to render, or `None` while loading or after a failed load.
    /// A page left stale by a shrinking result set is pulled back in range.
    pub fn visible_page(&mut self) -> Option<CatalogPage<'_>> {
        let pages = self.total_pages();
        if self.query.clamp_to(pages) {
            tracing::warn!("Requested page out of range, showing page {}", self.query.page());
        }

        let cache = self.cache.as_ref()?;
        let matched: Vec<&Course> = cache.matched.iter().collect();
        let query = self.query.query();
        Some(page_of(&matched, query.page, query.page_size))
    }

    pub fn next_page(&mut self) {
        let pages = self.total_pages();
        self.query.next_page(pages);
    }

    pub fn previous_page(&mut self) {
        self.query.previous_page();
    }

    /// Enroll the catalog course with this number.
    pub fn enroll_by_number(&mut self, course_number: &str) -> Result<()> {
        let course = self
            .snapshot()
            .and_then(|s| s.find(course_number))
            .cloned()
            .ok_or_else(|| CatalogError::CourseNotFound {
                course_number: course_number.to_string(),
            })?;
        self.enrollment.enroll(course)
    }

    pub fn drop_by_number(&mut self, course_number: &str) -> Result<usize> {
        self.enrollment.drop_course(course_number)
    }

    pub fn apply(&mut self, action: &EnrollmentAction) -> Result<()> {
        match action {
            EnrollmentAction::Enroll(number) => self.enroll_by_number(number),
            EnrollmentAction::Drop(number) => self.drop_by_number(number).map(|_| ()),
        }
    }
}

/// A scripted enroll or drop, written `enroll:CS101` or `drop:CS101`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentAction {
    Enroll(String),
    Drop(String),
}

impl FromStr for EnrollmentAction {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (verb, number) = s.split_once(':').ok_or_else(|| {
            CatalogError::invalid_argument("action", format!("expected verb:course, got '{}'", s))
        })?;
        let number = number.trim();
        if number.is_empty() {
            return Err(CatalogError::invalid_argument(
                "action",
                "course number is missing",
            ));
        }

        match verb.trim().to_ascii_lowercase().as_str() {
            "enroll" | "add" => Ok(Self::Enroll(number.to_string())),
            "drop" | "remove" => Ok(Self::Drop(number.to_string())),
            other => Err(CatalogError::invalid_argument(
                "action",
                format!("unknown action '{}', expected enroll or drop", other),
            )),
        }
    }
}

impl fmt::Display for EnrollmentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enroll(number) => write!(f, "enroll:{}", number),
            Self::Drop(number) => write!(f, "drop:{}", number),
        }
    }
}
