//! Version command implementation

use std::fmt::Write as _;

use crate::config::{CONFIG_ENV, LAYOUT_FILE_NAME, Layout};
use crate::domain::ResourceKind;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_report());
    Ok(())
}

/// Version line followed by the layout the importer falls back to
fn version_report() -> String {
    let layout = Layout::default();
    let mut report = format!(
        "section-import {} ({})\n\nLayout:\n  Project file: {}\n  Override: --config or {}\n",
        env!("CARGO_PKG_VERSION"),
        build_profile(),
        LAYOUT_FILE_NAME,
        CONFIG_ENV,
    );
    for kind in ResourceKind::ALL {
        let _ = writeln!(
            report,
            "  {}: {}/{}",
            kind,
            layout.dir_for(kind).display(),
            kind.file_pattern("<name>")
        );
    }
    report
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
