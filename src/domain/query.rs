use crate::domain::model::Course;
use crate::utils::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Column a catalog view can be ordered by. Names match the feed's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    None,
    CourseNumber,
    Name,
    Trimester,
    SemesterCredits,
    ClockHours,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::None,
        SortKey::CourseNumber,
        SortKey::Name,
        SortKey::Trimester,
        SortKey::SemesterCredits,
        SortKey::ClockHours,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::CourseNumber => "courseNumber",
            SortKey::Name => "name",
            SortKey::Trimester => "trimester",
            SortKey::SemesterCredits => "semesterCredits",
            SortKey::ClockHours => "clockHours",
        }
    }

    /// Ascending three-way comparison of two courses on this key.
    ///
    /// Numeric keys compare coerced values; text keys compare case-folded.
    /// `SortKey::None` treats every pair as equal.
    pub fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::CourseNumber => folded_cmp(&a.course_number, &b.course_number),
            SortKey::Name => folded_cmp(&a.name, &b.name),
            SortKey::Trimester => folded_cmp(&a.trimester, &b.trimester),
            SortKey::SemesterCredits => a.semester_credits.numeric_cmp(&b.semester_credits),
            SortKey::ClockHours => a.clock_hours.numeric_cmp(&b.clock_hours),
        }
    }
}

fn folded_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .or_else(|| match wanted.to_ascii_lowercase().as_str() {
                "" => Some(SortKey::None),
                "course_number" | "number" => Some(SortKey::CourseNumber),
                "semester_credits" | "credits" => Some(SortKey::SemesterCredits),
                "clock_hours" | "hours" => Some(SortKey::ClockHours),
                _ => None,
            })
            .ok_or_else(|| {
                CatalogError::invalid_argument(
                    "sort_key",
                    format!(
                        "unknown sort key '{}', expected one of: {}",
                        s,
                        Self::ALL.map(|k| k.as_str()).join(", ")
                    ),
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(CatalogError::invalid_argument(
                "sort_direction",
                format!("unknown direction '{}', expected asc or desc", s),
            )),
        }
    }
}

/// Parameters selecting the visible slice of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub search_term: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Query {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_key: SortKey::None,
            sort_direction: SortDirection::Ascending,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.total_pages > 0 && self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parses_feed_names_and_aliases() {
        assert_eq!("courseNumber".parse::<SortKey>().unwrap(), SortKey::CourseNumber);
        assert_eq!("semestercredits".parse::<SortKey>().unwrap(), SortKey::SemesterCredits);
        assert_eq!("hours".parse::<SortKey>().unwrap(), SortKey::ClockHours);
        assert_eq!("none".parse::<SortKey>().unwrap(), SortKey::None);
        assert!("instructor".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_direction_parse_and_apply() {
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
    }

    #[test]
    fn test_text_keys_compare_case_folded() {
        let a = Course::new("cs101", "algebra", "Fall", "3", "45");
        let b = Course::new("CS102", "Biology", "fall", "3", "45");
        assert_eq!(SortKey::Name.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::CourseNumber.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::Trimester.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_numeric_keys_compare_as_numbers() {
        let small = Course::new("A", "A", "Fall", "9", "45");
        let large = Course::new("B", "B", "Fall", "10", "100");
        assert_eq!(SortKey::SemesterCredits.compare(&small, &large), Ordering::Less);
        assert_eq!(SortKey::ClockHours.compare(&large, &small), Ordering::Greater);
    }

    #[test]
    fn test_pagination_flags() {
        let empty = Pagination { current_page: 1, total_pages: 0 };
        assert!(!empty.has_next());
        assert!(!empty.has_previous());

        let middle = Pagination { current_page: 2, total_pages: 3 };
        assert!(middle.has_next());
        assert!(middle.has_previous());
    }
}
