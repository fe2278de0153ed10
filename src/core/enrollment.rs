use crate::core::Course;
use crate::utils::error::{CatalogError, Result};

/// The courses a user has enrolled in during one session, in enrollment order.
///
/// Membership is keyed by course number. Enrolling a course twice keeps both
/// entries; dropping that number removes them all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentStore {
    courses: Vec<Course>,
}

impl EnrollmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enroll(&mut self, course: Course) -> Result<()> {
        require_course_number(&course.course_number)?;

        if self.is_enrolled(&course.course_number) {
            tracing::warn!(
                course_number = %course.course_number,
                "course enrolled more than once"
            );
        }

        tracing::debug!(course_number = %course.course_number, "enrolled");
        self.courses.push(course);
        Ok(())
    }

    /// Remove every entry for `course_number` and return how many went.
    /// An unknown number is not an error.
    pub fn drop_course(&mut self, course_number: &str) -> Result<usize> {
        require_course_number(course_number)?;

        let before = self.courses.len();
        self.courses.retain(|c| c.course_number != course_number);
        let removed = before - self.courses.len();

        tracing::debug!(course_number, removed, "dropped");
        Ok(removed)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn count(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn is_enrolled(&self, course_number: &str) -> bool {
        self.courses.iter().any(|c| c.course_number == course_number)
    }
}

fn require_course_number(course_number: &str) -> Result<()> {
    if course_number.trim().is_empty() {
        return Err(CatalogError::invalid_argument(
            "course_number",
            "course number is missing or blank",
        ));
    }
    Ok(())
}
