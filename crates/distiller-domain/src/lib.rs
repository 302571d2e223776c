//! Distiller Domain Layer
//!
//! This crate contains the domain model shared by every other Distiller crate.
//! It has ZERO external dependencies and defines the values that flow through
//! the audit report analysis pipeline, plus the trait boundary to the
//! collaborator that supplies page text.
//!
//! ## Key Concepts
//!
//! - **Page**: the extracted text of one page of an audit report
//! - **Entity**: a labeled span of one page's text (audit number, header, ...)
//! - **Audit number**: a `YYYY-NNN` finding identifier, always copied from text
//! - **Audit record**: the finding and corrective action plan data found for
//!   one audit number on one page
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and validation only
//! - Text analysis lives in `distiller-nlp` and `distiller-extractor`
//! - Page acquisition and persistence live outside the core

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod audit_number;
pub mod entity;
pub mod label;
pub mod page;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use audit_number::AuditNumber;
pub use entity::Entity;
pub use label::Label;
pub use page::Page;
pub use record::{AuditRecord, FieldMap, FieldValue};
