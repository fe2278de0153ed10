use crate::core::{Course, CourseSource};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Reads the course feed from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileCourseSource {
    path: PathBuf,
}

impl FileCourseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CourseSource for FileCourseSource {
    async fn fetch_courses(&self) -> Result<Vec<Course>> {
        tracing::debug!("Reading courses from: {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;
        let courses: Vec<Course> = serde_json::from_slice(&data)?;
        Ok(courses)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
