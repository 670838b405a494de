//! Aggregator lines generated for an imported section

use std::path::Path;

use crate::config::Layout;
use crate::domain::{ImportRequest, PatchStep};
use crate::installer::PatchTarget;

/// A patch scheduled for one step of the import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPatch {
    pub step: PatchStep,
    pub target: PatchTarget,
}

/// `export { default as Hero } from './hero';`
pub fn export_line(name: &str, symbol: &str) -> String {
    format!("export {{ default as {symbol} }} from './{name}';")
}

/// `  sectionsManager.registerSection('hero', Sections.Hero);`
pub fn register_line(name: &str, symbol: &str) -> String {
    format!("  sectionsManager.registerSection('{name}', Sections.{symbol});")
}

/// `@import 'sections/hero';`
pub fn style_import_line(name: &str) -> String {
    format!("@import 'sections/{name}';")
}

/// Patches to run for `request`, in execution order
///
/// A step is only planned when the kind feeding it takes part in the import.
pub fn plan_patches(layout: &Layout, request: &ImportRequest, target_root: &Path) -> Vec<PlannedPatch> {
    let name = request.name.as_str();
    let symbol = request.name.symbol();

    [
        PatchStep::ScriptIndex,
        PatchStep::ScriptRegistry,
        PatchStep::StyleRegistry,
    ]
    .into_iter()
    .filter(|step| request.includes(step.kind()))
    .map(|step| {
        let target = match step {
            PatchStep::ScriptIndex => PatchTarget::append(
                target_root.join(&layout.script_index),
                export_line(name, &symbol),
            ),
            PatchStep::ScriptRegistry => PatchTarget::insert_after(
                target_root.join(&layout.script_registry),
                layout.script_anchor.as_str(),
                register_line(name, &symbol),
            ),
            PatchStep::StyleRegistry => PatchTarget::insert_after(
                target_root.join(&layout.style_registry),
                layout.style_anchor.as_str(),
                style_import_line(name),
            ),
        };
        PlannedPatch { step, target }
    })
    .collect()
}
