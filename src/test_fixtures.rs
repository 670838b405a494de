//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides helper functions to create common test environments
//! (temp directories, source projects holding a section, target projects with
//! registries) with a single function call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_source_project, create_target_project};
//!
//! #[test]
//! fn my_test() {
//!     let source = create_source_project("hero");
//!     let target = create_target_project();
//! }
//! ```

use tempfile::TempDir;

use crate::config::DEFAULT_ANCHOR;

/// Script registry content of a fresh target project
pub fn script_registry_content() -> String {
    format!(
        "import SectionsManager from './sections_manager';\n\
         import * as Sections from './sections';\n\
         \n\
         const sectionsManager = new SectionsManager();\n\
         \n  {DEFAULT_ANCHOR}\n\
         \n\
         sectionsManager.start();\n"
    )
}

/// Style registry content of a fresh target project
pub fn style_registry_content() -> String {
    format!("@import 'base';\n\n{DEFAULT_ANCHOR}\n\n@import 'theme';\n")
}

/// Script index content of a fresh target project
pub const SCRIPT_INDEX_CONTENT: &str = "export { default as Footer } from './footer';\n";

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples and creates those files.
/// Paths are relative to the provided base directory.
///
/// # Example
///
/// ```ignore
/// let temp = create_temp_dir();
/// create_test_files(&temp, &[
///     ("app/views/sections/hero.liquid", "<section></section>"),
///     ("app/assets/javascripts/sections/hero.js", "export default {}"),
/// ]);
/// ```
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Create a source project holding one file of every kind for `name`.
///
/// # Panics
///
/// Panics if any file cannot be created.
#[must_use]
pub fn create_source_project(name: &str) -> TempDir {
    let temp = create_temp_dir();
    let template = format!("app/views/sections/{name}.liquid");
    let script = format!("app/assets/javascripts/sections/{name}.js");
    let stylesheet = format!("app/assets/stylesheets/sections/{name}.scss");
    create_test_files(
        &temp,
        &[
            (template.as_str(), "<section class=\"hero\">{{ section.title }}</section>\n"),
            (script.as_str(), "export default class {\n  onLoad() {}\n}\n"),
            (stylesheet.as_str(), ".hero {\n  color: red;\n}\n"),
        ],
    );
    temp
}

/// Create a target project with the three aggregator files in place.
///
/// # Panics
///
/// Panics if any file cannot be created.
#[must_use]
pub fn create_target_project() -> TempDir {
    let temp = create_temp_dir();
    let script_registry = script_registry_content();
    let style_registry = style_registry_content();
    create_test_files(
        &temp,
        &[
            ("app/assets/javascripts/sections/index.js", SCRIPT_INDEX_CONTENT),
            ("app/assets/javascripts/app.js", script_registry.as_str()),
            ("app/assets/stylesheets/app.scss", style_registry.as_str()),
        ],
    );
    temp
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[
                ("app/views/sections/a.liquid", "a"),
                ("app/views/sections/b.liquid", "b"),
            ],
        );

        let content = std::fs::read_to_string(temp.path().join("app/views/sections/a.liquid"))
            .expect("Failed to read");
        assert_eq!(content, "a");
        assert!(temp.path().join("app/views/sections/b.liquid").exists());
    }

    #[test]
    fn test_create_target_project_has_anchors() {
        let temp = create_target_project();
        let app_js = std::fs::read_to_string(temp.path().join("app/assets/javascripts/app.js"))
            .expect("Failed to read");
        let app_scss = std::fs::read_to_string(temp.path().join("app/assets/stylesheets/app.scss"))
            .expect("Failed to read");

        assert!(app_js.contains(DEFAULT_ANCHOR));
        assert!(app_scss.contains(DEFAULT_ANCHOR));
    }
}
