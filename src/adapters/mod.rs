// Adapters layer: concrete course sources (http, local file).

pub mod file;
pub mod http;

pub use file::FileCourseSource;
pub use http::HttpCourseSource;

use crate::core::CourseSource;
use crate::utils::error::Result;
use crate::utils::validation::is_remote_source;
use std::time::Duration;

/// Pick a source for `location`: http(s) URLs are fetched, anything else is
/// read as a file path.
pub fn source_for(location: &str, timeout: Option<Duration>) -> Result<Box<dyn CourseSource>> {
    if is_remote_source(location) {
        let source = match timeout {
            Some(timeout) => HttpCourseSource::with_timeout(location, timeout)?,
            None => HttpCourseSource::new(location),
        };
        Ok(Box::new(source))
    } else {
        Ok(Box::new(FileCourseSource::new(location)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_picks_by_scheme() {
        let remote = source_for("https://example.com/api/courses.json", None).unwrap();
        assert_eq!(remote.describe(), "https://example.com/api/courses.json");

        let local = source_for("./courses.json", Some(Duration::from_secs(1))).unwrap();
        assert_eq!(local.describe(), "./courses.json");
    }
}
