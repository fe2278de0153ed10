pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_SOURCE: &str = "http://localhost:3000/api/courses.json";

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use super::DEFAULT_SOURCE;
    use crate::app::{EnrollmentAction, OutputFormat};
    use crate::core::{ConfigProvider, SortDirection, SortKey, DEFAULT_PAGE_SIZE};
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_path, validate_positive_number, validate_range, validate_source, Validate,
    };
    use clap::Parser;
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "course-catalog")]
    #[command(about = "Browse a course catalog and build a class schedule")]
    pub struct CliConfig {
        /// Course feed: an http(s) URL or a local JSON file
        #[arg(long)]
        pub source: Option<String>,

        /// Optional TOML configuration file; flags override its values
        #[arg(short, long)]
        pub config: Option<String>,

        /// Filter by course name or number (case-insensitive substring)
        #[arg(short, long, default_value = "")]
        pub search: String,

        /// Sort column: courseNumber, name, trimester, semesterCredits, clockHours or none
        #[arg(long)]
        pub sort: Option<SortKey>,

        #[arg(long, help = "Sort in descending order")]
        pub descending: bool,

        /// 1-based page number
        #[arg(short, long, default_value = "1")]
        pub page: usize,

        #[arg(long)]
        pub page_size: Option<usize>,

        /// enroll:<courseNumber> or drop:<courseNumber>; repeatable, applied in order
        #[arg(short, long = "action")]
        pub actions: Vec<EnrollmentAction>,

        /// Output format: table, csv or json
        #[arg(short, long, default_value = "table")]
        pub format: OutputFormat,

        #[arg(long)]
        pub timeout_seconds: Option<u64>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl CliConfig {
        /// Fill every value not given on the command line from `file`.
        pub fn merge_file(&mut self, file: &TomlConfig) -> Result<()> {
            if self.source.is_none() {
                self.source = Some(file.source.endpoint.clone());
            }
            if self.page_size.is_none() {
                self.page_size = file.catalog.as_ref().and_then(|c| c.page_size);
            }
            if self.timeout_seconds.is_none() {
                self.timeout_seconds = file.source.timeout_seconds;
            }
            if self.sort.is_none() {
                self.sort = file.default_sort()?;
                if !self.descending {
                    self.descending = file.default_direction()? == SortDirection::Descending;
                }
            }
            if let Some(logging) = &file.logging {
                self.verbose |= logging.verbose.unwrap_or(false);
                self.log_json |= logging.json.unwrap_or(false);
            }
            Ok(())
        }

        pub fn sort_direction(&self) -> SortDirection {
            if self.descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn source(&self) -> &str {
            self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
        }

        fn page_size(&self) -> usize {
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
        }

        fn request_timeout(&self) -> Option<Duration> {
            self.timeout_seconds.map(Duration::from_secs)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_source("source", self.source())?;
            validate_positive_number("page_size", self.page_size(), 1)?;
            validate_positive_number("page", self.page, 1)?;
            if let Some(timeout) = self.timeout_seconds {
                validate_range("timeout_seconds", timeout, 1, 300)?;
            }
            if let Some(path) = &self.config {
                validate_path("config", path)?;
            }
            Ok(())
        }
    }

}
