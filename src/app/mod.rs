pub mod render;
pub mod session;

pub use render::OutputFormat;
pub use session::{CatalogSession, EnrollmentAction, LoadState};
