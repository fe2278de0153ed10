pub mod catalog_view;
pub mod enrollment;

pub use crate::domain::model::{CatalogSnapshot, Course, CourseValue};
pub use crate::domain::ports::{ConfigProvider, CourseSource};
pub use crate::domain::query::{Pagination, Query, SortDirection, SortKey, DEFAULT_PAGE_SIZE};
pub use crate::utils::error::Result;
