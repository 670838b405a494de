//! Common test utilities for section-import integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Marker line the default registries anchor on
pub const ANCHOR: &str = "// Register sections here. DO NOT REMOVE OR UPDATE THIS LINE";

pub const SCRIPT_INDEX: &str = "app/assets/javascripts/sections/index.js";
pub const SCRIPT_REGISTRY: &str = "app/assets/javascripts/app.js";
pub const STYLE_REGISTRY: &str = "app/assets/stylesheets/app.scss";

/// A project directory for integration tests
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create an empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a source project holding one file of every kind for `name`
    #[allow(dead_code)]
    pub fn with_section(name: &str) -> Self {
        let project = Self::new();
        project.write_file(
            &format!("app/views/sections/{name}.liquid"),
            "<section>{{ section.settings.title }}</section>\n",
        );
        project.write_file(
            &format!("app/assets/javascripts/sections/{name}.js"),
            "export default class {\n  onLoad() {}\n}\n",
        );
        project.write_file(
            &format!("app/assets/stylesheets/sections/{name}.scss"),
            ".section {\n  display: block;\n}\n",
        );
        project
    }

    /// Create a target project with the three aggregator files in place
    #[allow(dead_code)]
    pub fn with_registries() -> Self {
        let project = Self::new();
        project.write_file(SCRIPT_INDEX, "export { default as Footer } from './footer';\n");
        project.write_file(
            SCRIPT_REGISTRY,
            &format!(
                "import * as Sections from './sections';\n\nconst sectionsManager = new SectionsManager();\n  {ANCHOR}\n\nsectionsManager.start();\n"
            ),
        );
        project.write_file(
            STYLE_REGISTRY,
            &format!("@import 'base';\n{ANCHOR}\n@import 'theme';\n"),
        );
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled binary, isolated from the caller's layout environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn section_import_cmd() -> Command {
    let mut cmd = Command::cargo_bin("section-import").expect("binary should be built");
    cmd.env_remove("SECTION_IMPORT_CONFIG");
    cmd
}

/// Line right after the first line containing `anchor`
#[allow(dead_code)]
pub fn line_after_anchor(content: &str, anchor: &str) -> Option<String> {
    let mut lines = content.lines();
    lines.find(|line| line.contains(anchor))?;
    lines.next().map(str::to_string)
}
