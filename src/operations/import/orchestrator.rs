//! Main orchestrator for the import operation
//! Coordinates locate, copy and patch steps and records where an import stops

use normpath::PathExt;

use super::plan::plan_patches;
use crate::config::Layout;
use crate::domain::{FailureStage, ImportRequest, ImportResult, PatchReport};
use crate::error::{Result, request as request_error};
use crate::installer::{Copier, Locator};
use crate::ui::ImportReporter;

/// Imports one section from a source project into a target project
pub struct ImportOperation<'a> {
    layout: &'a Layout,
    reporter: &'a mut dyn ImportReporter,
}

impl<'a> ImportOperation<'a> {
    pub fn new(layout: &'a Layout, reporter: &'a mut dyn ImportReporter) -> Self {
        Self { layout, reporter }
    }

    /// Run the import, stopping at the first failing step
    ///
    /// Files copied before a failure stay in place.
    pub fn execute(&mut self, request: &ImportRequest) -> ImportResult {
        let mut result = ImportResult::default();
        self.reporter.import_started(request);

        if let Err(e) = validate_request(request) {
            result.fail(FailureStage::Request, e);
        } else if self.import_resources(request, &mut result) {
            self.apply_patches(request, &mut result);
        }

        self.reporter.import_finished(&result);
        result
    }

    /// Locate and copy every requested kind; `false` once one fails
    fn import_resources(&mut self, request: &ImportRequest, result: &mut ImportResult) -> bool {
        let locator = Locator::new(self.layout);
        let copier = Copier::new(self.layout);

        for kind in request.requested_kinds() {
            let copied = locator
                .locate(kind, &request.name, request.source_root())
                .and_then(|located| copier.copy(&located, request.target_root()));

            match copied {
                Ok(copied) => {
                    self.reporter.resource_copied(&copied);
                    result.succeeded.insert(kind);
                    result.copied.push(copied);
                }
                Err(e) => {
                    result.fail(FailureStage::Copy(kind), e);
                    return false;
                }
            }
        }
        true
    }

    fn apply_patches(&mut self, request: &ImportRequest, result: &mut ImportResult) {
        for planned in plan_patches(self.layout, request, request.target_root()) {
            match planned.target.apply() {
                Ok(outcome) => {
                    let report = PatchReport {
                        step: planned.step,
                        path: planned.target.file_path,
                        outcome,
                    };
                    self.reporter.patch_applied(&report);
                    result.patches.push(report);
                }
                Err(e) => {
                    result.fail(FailureStage::Patch(planned.step), e);
                    return;
                }
            }
        }
    }
}

/// Both roots must be existing, distinct directories
fn validate_request(request: &ImportRequest) -> Result<()> {
    let source = request
        .source_root()
        .normalize()
        .map_err(|_| request_error::invalid(format!(
            "source project not found: {}",
            request.source_root().display()
        )))?;
    let target = request
        .target_root()
        .normalize()
        .map_err(|_| request_error::invalid(format!(
            "target project not found: {}",
            request.target_root().display()
        )))?;

    if !source.as_path().is_dir() {
        return Err(request_error::invalid(format!(
            "source project is not a directory: {}",
            request.source_root().display()
        )));
    }
    if !target.as_path().is_dir() {
        return Err(request_error::invalid(format!(
            "target project is not a directory: {}",
            request.target_root().display()
        )));
    }
    if source.as_path() == target.as_path() {
        return Err(request_error::invalid(
            "source and target projects are the same directory",
        ));
    }
    Ok(())
}
