use crate::domain::model::Course;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where the raw course collection comes from. Implementations either return
/// the fully decoded collection or an error; partial data is never returned.
#[async_trait]
pub trait CourseSource: Send + Sync {
    async fn fetch_courses(&self) -> Result<Vec<Course>>;

    /// Human-readable location used in log lines.
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> &str;
    fn page_size(&self) -> usize;
    fn request_timeout(&self) -> Option<Duration>;
}
