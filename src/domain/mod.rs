//! Domain models for section imports
//!
//! This module contains pure domain objects: what is being imported, which
//! files were found and placed, and how an import ended.

pub mod request;
pub mod resource;
pub mod result;
pub mod section;

pub use request::ImportRequest;
pub use resource::{CopiedFile, CopyOutcome, LocatedFile, ResourceKind};
pub use result::{FailureStage, ImportFailure, ImportResult, PatchOutcome, PatchReport, PatchStep};
pub use section::SectionName;
