pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{source_for, FileCourseSource, HttpCourseSource};
pub use crate::app::{CatalogSession, EnrollmentAction, LoadState, OutputFormat};
pub use crate::core::catalog_view::{view, CatalogPage, QueryState};
pub use crate::core::enrollment::EnrollmentStore;
pub use crate::core::{Course, CourseValue, Query, SortDirection, SortKey};
pub use crate::utils::error::{CatalogError, Result};
