//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the analysis core and the
//! collaborators around it. Implementations live in other crates.

use crate::Page;

/// Trait for supplying the page text of one document
///
/// Implemented by the outer layer (distiller-cli reads page dumps and page
/// text caches). A source that cannot produce readable text must report an
/// error here; the analysis core is never handed a malformed page.
pub trait PageSource {
    /// Error type for page acquisition
    type Error;

    /// Human-readable name of the document
    fn document_name(&self) -> &str;

    /// Load all pages, ordered by page number
    fn pages(&self) -> Result<Vec<Page>, Self::Error>;
}
