//! Command implementations.

pub mod analyze;
pub mod batch;
pub mod findings;
pub mod patterns;
pub mod tag;

pub use self::analyze::execute_analyze;
pub use self::batch::execute_batch;
pub use self::findings::execute_findings;
pub use self::patterns::execute_patterns;
pub use self::tag::execute_tag;
