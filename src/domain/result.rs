//! Import outcome types
//!
//! An import either completes every step or stops at the first failing one.
//! Steps that completed before the failure are kept in the result so the
//! caller can tell the user what is already in place.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use super::{CopiedFile, ResourceKind};
use crate::error::ImportError;

/// Result of a single text patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The line was written
    Applied,
    /// The line was already there; the file was not rewritten
    AlreadyPresent,
}

/// The aggregator patches run after all copies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatchStep {
    /// Export line appended to the script index
    ScriptIndex,
    /// Registration line inserted into the script registry
    ScriptRegistry,
    /// Import line inserted into the style registry
    StyleRegistry,
}

impl PatchStep {
    /// Kind whose import requires this patch
    pub fn kind(self) -> ResourceKind {
        match self {
            PatchStep::ScriptIndex | PatchStep::ScriptRegistry => ResourceKind::Script,
            PatchStep::StyleRegistry => ResourceKind::Stylesheet,
        }
    }
}

impl fmt::Display for PatchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PatchStep::ScriptIndex => "script index",
            PatchStep::ScriptRegistry => "script registry",
            PatchStep::StyleRegistry => "style registry",
        })
    }
}

/// A patch that completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub step: PatchStep,
    pub path: PathBuf,
    pub outcome: PatchOutcome,
}

/// Where an import stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// The request itself was rejected before touching any file
    Request,
    /// Locating or copying this kind failed
    Copy(ResourceKind),
    /// This aggregator patch failed
    Patch(PatchStep),
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureStage::Request => f.write_str("request validation"),
            FailureStage::Copy(kind) => write!(f, "{kind} import"),
            FailureStage::Patch(step) => write!(f, "{step} update"),
        }
    }
}

/// The failing stage together with its cause
#[derive(Debug)]
pub struct ImportFailure {
    pub stage: FailureStage,
    pub error: ImportError,
}

/// Outcome of one import
#[derive(Debug, Default)]
pub struct ImportResult {
    /// Kinds whose file was located and copied
    pub succeeded: BTreeSet<ResourceKind>,

    /// Files placed into the target, in processing order
    pub copied: Vec<CopiedFile>,

    /// Patches that completed, in processing order
    pub patches: Vec<PatchReport>,

    /// First failure, if any; later steps were not attempted
    pub failure: Option<ImportFailure>,
}

impl ImportResult {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Whether `kind` was placed into the target
    #[cfg(test)]
    pub fn imported(&self, kind: ResourceKind) -> bool {
        self.succeeded.contains(&kind)
    }

    /// Record a failure at `stage`
    pub(crate) fn fail(&mut self, stage: FailureStage, error: ImportError) {
        self.failure = Some(ImportFailure { stage, error });
    }

    /// Convert into a plain `Result`, keeping the failure's error
    pub fn into_result(self) -> Result<Self, ImportFailure> {
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(self),
        }
    }
}
