//! Section file discovery
//!
//! This module handles:
//! - Building the per-kind file name glob for a section
//! - Listing the direct children of the kind's directory (no recursion)
//! - Requiring exactly one match; zero or several matches are errors

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::Layout;
use crate::domain::{LocatedFile, ResourceKind, SectionName};
use crate::error::{Result, fs as fs_error, locate};

/// Resolves a section name to its single source file per kind
pub struct Locator<'a> {
    layout: &'a Layout,
}

impl<'a> Locator<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }

    /// Directory searched for `kind` under `root`
    pub fn directory_for(&self, kind: ResourceKind, root: &Path) -> PathBuf {
        root.join(self.layout.dir_for(kind))
    }

    /// Locate the one file of `kind` for `name` under `root`
    pub fn locate(&self, kind: ResourceKind, name: &SectionName, root: &Path) -> Result<LocatedFile> {
        let directory = self.directory_for(kind, root);
        let pattern = kind.file_pattern(name.as_str());
        let glob =
            Glob::new(&pattern).map_err(|e| locate::invalid_pattern(&pattern, e.to_string()))?;

        let mut matches = matching_files(&directory, &glob)?;

        match matches.len() {
            0 => Err(locate::not_found(
                kind,
                directory.display().to_string(),
                pattern,
            )),
            1 => {
                let (absolute_path, file_name) = matches.remove(0);
                Ok(LocatedFile {
                    kind,
                    absolute_path,
                    file_name,
                })
            }
            _ => Err(locate::ambiguous(
                kind,
                directory.display().to_string(),
                pattern,
                matches.into_iter().map(|(_, file_name)| file_name).collect(),
            )),
        }
    }
}

/// Check if a glob pattern matches a bare file name
fn matches_file_name(glob: &Glob<'_>, file_name: &OsStr) -> bool {
    glob.matched(&CandidatePath::from(Path::new(file_name))).is_some()
}

/// Regular files directly inside `directory` whose name matches `glob`, sorted by name
///
/// A missing directory has no matches. Names that are not valid UTF-8 still
/// count and are reported lossily.
fn matching_files(directory: &Path, glob: &Glob<'_>) -> Result<Vec<(PathBuf, String)>> {
    if !directory.is_dir() {
        return Ok(Vec::new());
    }

    let mut matches = Vec::new();
    let entries = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in entries {
        let entry = entry.map_err(|e| {
            fs_error::read_failed(directory.display().to_string(), e.to_string())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if matches_file_name(glob, entry.file_name()) {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            matches.push((entry.into_path(), file_name));
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use crate::test_fixtures::{create_temp_dir, create_test_files};

    fn hero() -> SectionName {
        SectionName::parse("hero").unwrap()
    }

    #[test]
    fn test_locate_single_template() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[
                ("app/views/sections/hero.liquid", "<div></div>"),
                ("app/views/sections/footer.liquid", "<footer></footer>"),
            ],
        );
        let layout = Layout::default();

        let located = Locator::new(&layout)
            .locate(ResourceKind::Template, &hero(), temp.path())
            .unwrap();

        assert_eq!(located.kind, ResourceKind::Template);
        assert_eq!(located.file_name, "hero.liquid");
        assert_eq!(
            located.absolute_path,
            temp.path().join("app/views/sections/hero.liquid")
        );
    }

    #[test]
    fn test_locate_accepts_chained_extensions() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[
                ("app/views/sections/hero.liquid.haml", "x"),
                ("app/assets/javascripts/sections/hero.js.coffee", "x"),
                ("app/assets/stylesheets/sections/hero.sass", "x"),
            ],
        );
        let layout = Layout::default();
        let locator = Locator::new(&layout);

        assert_eq!(
            locator
                .locate(ResourceKind::Template, &hero(), temp.path())
                .unwrap()
                .file_name,
            "hero.liquid.haml"
        );
        assert_eq!(
            locator
                .locate(ResourceKind::Script, &hero(), temp.path())
                .unwrap()
                .file_name,
            "hero.js.coffee"
        );
        assert_eq!(
            locator
                .locate(ResourceKind::Stylesheet, &hero(), temp.path())
                .unwrap()
                .file_name,
            "hero.sass"
        );
    }

    #[test]
    fn test_locate_ignores_other_prefixes_and_extensions() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[
                ("app/assets/stylesheets/sections/hero.less", "x"),
                ("app/assets/stylesheets/sections/superhero.scss", "x"),
                ("app/assets/stylesheets/sections/hero-banner.scss", "x"),
            ],
        );
        let layout = Layout::default();

        let err = Locator::new(&layout)
            .locate(ResourceKind::Stylesheet, &hero(), temp.path())
            .unwrap_err();
        assert!(matches!(
            err,
            ImportError::ResourceNotFound {
                kind: ResourceKind::Stylesheet,
                ..
            }
        ));
    }

    #[test]
    fn test_locate_missing_directory_is_not_found() {
        let temp = create_temp_dir();
        let layout = Layout::default();

        let err = Locator::new(&layout)
            .locate(ResourceKind::Script, &hero(), temp.path())
            .unwrap_err();
        match err {
            ImportError::ResourceNotFound { kind, pattern, .. } => {
                assert_eq!(kind, ResourceKind::Script);
                assert_eq!(pattern, "hero.js*");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_locate_ambiguous_never_picks_first() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[
                ("app/assets/stylesheets/sections/hero.scss", "x"),
                ("app/assets/stylesheets/sections/hero.css", "x"),
            ],
        );
        let layout = Layout::default();

        let err = Locator::new(&layout)
            .locate(ResourceKind::Stylesheet, &hero(), temp.path())
            .unwrap_err();
        match err {
            ImportError::AmbiguousResource { candidates, .. } => {
                assert_eq!(candidates, vec!["hero.css", "hero.scss"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_locate_is_not_recursive() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("app/views/sections/nested/hero.liquid", "x")]);
        let layout = Layout::default();

        let err = Locator::new(&layout)
            .locate(ResourceKind::Template, &hero(), temp.path())
            .unwrap_err();
        assert!(matches!(err, ImportError::ResourceNotFound { .. }));
    }

    #[test]
    fn test_locate_skips_directories_named_like_a_match() {
        let temp = create_temp_dir();
        std::fs::create_dir_all(temp.path().join("app/views/sections/hero.liquid.d")).unwrap();
        create_test_files(&temp, &[("app/views/sections/hero.liquid", "x")]);
        let layout = Layout::default();

        let located = Locator::new(&layout)
            .locate(ResourceKind::Template, &hero(), temp.path())
            .unwrap();
        assert_eq!(located.file_name, "hero.liquid");
    }

    #[test]
    fn test_locate_uses_layout_directories() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("theme/sections/hero.liquid", "x")]);
        let layout = Layout {
            templates_dir: PathBuf::from("theme/sections"),
            ..Layout::default()
        };

        let located = Locator::new(&layout)
            .locate(ResourceKind::Template, &hero(), temp.path())
            .unwrap();
        assert_eq!(located.absolute_path, temp.path().join("theme/sections/hero.liquid"));
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_counts_non_utf8_names_as_candidates() {
        use std::os::unix::ffi::OsStrExt;

        let temp = create_temp_dir();
        create_test_files(&temp, &[("app/assets/javascripts/sections/hero.js", "x")]);
        let odd = OsStr::from_bytes(b"hero.js\xff");
        std::fs::write(
            temp.path().join("app/assets/javascripts/sections").join(odd),
            "y",
        )
        .unwrap();
        let layout = Layout::default();

        let err = Locator::new(&layout)
            .locate(ResourceKind::Script, &hero(), temp.path())
            .unwrap_err();
        match err {
            ImportError::AmbiguousResource { candidates, .. } => {
                assert_eq!(candidates, vec!["hero.js", "hero.js\u{fffd}"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_keeps_non_utf8_path_of_single_match() {
        use std::os::unix::ffi::OsStrExt;

        let temp = create_temp_dir();
        let dir = temp.path().join("app/views/sections");
        std::fs::create_dir_all(&dir).unwrap();
        let odd = OsStr::from_bytes(b"hero.liquid\xfe");
        std::fs::write(dir.join(odd), "x").unwrap();
        let layout = Layout::default();

        let located = Locator::new(&layout)
            .locate(ResourceKind::Template, &hero(), temp.path())
            .unwrap();
        assert_eq!(located.absolute_path, dir.join(odd));
    }
}
