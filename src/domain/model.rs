use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One catalog entry as delivered by the course feed.
///
/// Field names follow the feed's camelCase keys. Text fields tolerate numbers,
/// booleans and `null` so a sloppy feed still decodes; a missing
/// `courseNumber` decodes to an empty string and is rejected later by the
/// enrollment store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, deserialize_with = "lenient_string")]
    pub trimester: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub course_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_value")]
    pub semester_credits: CourseValue,
    #[serde(default, deserialize_with = "lenient_value")]
    pub clock_hours: CourseValue,
}

impl Course {
    pub fn new(
        course_number: impl Into<String>,
        name: impl Into<String>,
        trimester: impl Into<String>,
        semester_credits: impl Into<CourseValue>,
        clock_hours: impl Into<CourseValue>,
    ) -> Self {
        Self {
            trimester: trimester.into(),
            course_number: course_number.into(),
            name: name.into(),
            semester_credits: semester_credits.into(),
            clock_hours: clock_hours.into(),
        }
    }
}

/// A numeric course attribute kept in the shape it arrived in.
///
/// Feeds send credits and hours either as JSON numbers or as strings such as
/// `"3"`. The raw form is preserved for display; [`CourseValue::as_number`]
/// coerces on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseValue {
    Number(f64),
    Text(String),
}

impl CourseValue {
    /// Numbers pass through; text is trimmed and parsed. Empty, non-numeric,
    /// NaN and infinite values have no numeric reading.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Total order used for sorting: values without a numeric reading sort
    /// before every number and compare equal to each other.
    pub fn numeric_cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl Default for CourseValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for CourseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CourseValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for CourseValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for CourseValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CourseValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_value<'de, D>(deserializer: D) -> std::result::Result<CourseValue, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => CourseValue::default(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) => CourseValue::Number(f),
            None => CourseValue::Text(n.to_string()),
        },
        serde_json::Value::String(s) => CourseValue::Text(s),
        other => CourseValue::Text(other.to_string()),
    })
}

/// A fully decoded course collection as handed to the catalog view.
///
/// `version` changes whenever the collection is replaced so derived views can
/// be cached against it.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub courses: Vec<Course>,
    pub fetched_at: DateTime<Utc>,
    pub version: u64,
}

impl CatalogSnapshot {
    pub fn new(courses: Vec<Course>, version: u64) -> Self {
        Self {
            courses,
            fetched_at: Utc::now(),
            version,
        }
    }

    pub fn find(&self, course_number: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|c| c.course_number == course_number)
    }
}
