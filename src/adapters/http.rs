use crate::core::{Course, CourseSource};
use crate::utils::error::{CatalogError, Result};
use reqwest::Client;
use std::time::Duration;

/// Fetches the course feed (typically `/api/courses.json`) over HTTP.
pub struct HttpCourseSource {
    endpoint: String,
    client: Client,
}

impl HttpCourseSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl CourseSource for HttpCourseSource {
    async fn fetch_courses(&self) -> Result<Vec<Course>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(CatalogError::FetchStatus {
                status: status.as_u16(),
            });
        }

        // Decode from text so a malformed body surfaces as a JSON error rather
        // than a transport error.
        let body = response.text().await?;
        let courses: Vec<Course> = serde_json::from_str(&body)?;
        tracing::debug!("Decoded {} courses", courses.len());
        Ok(courses)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
