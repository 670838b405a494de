//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::CONFIG_ENV;
use crate::domain::ResourceKind;

/// section-import - copy a theme section between projects
///
/// Imports a section's template, script and stylesheet from one project into
/// another and registers it in the target's aggregator files.
#[derive(Parser, Debug)]
#[command(
    name = "section-import",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Import theme sections from another project",
    long_about = "section-import copies a named section (liquid template, javascript module, \
                  stylesheet) from a source project into a target project and registers it in \
                  the target's script index, script registry and style registry.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  section-import import hero ../other-theme\n    \
                  section-import import hero_banner ../other-theme ./my-theme\n    \
                  section-import import hero ../other-theme --resources template,stylesheet\n    \
                  section-import completions --shell zsh"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a section from another project
    Import(ImportArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the import command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Import into the current directory:\n    section-import import hero ../other-theme\n\n\
                   Import into another project:\n    section-import import hero ../other-theme ./my-theme\n\n\
                   Import only some resources:\n    section-import import hero ../other-theme --resources script,stylesheet\n\n\
                   Use a custom layout file:\n    section-import import hero ../other-theme --config layout.yaml")]
pub struct ImportArgs {
    /// Section name (e.g. hero, hero_banner)
    pub name: String,

    /// Root directory of the project to import from
    pub source: PathBuf,

    /// Root directory of the project to import into (defaults to current directory)
    pub target: Option<PathBuf>,

    /// Import only these resources (template, script, stylesheet)
    #[arg(long, short = 'r', value_name = "KIND", value_delimiter = ',')]
    pub resources: Vec<ResourceKind>,

    /// Layout file (defaults to <TARGET>/.section-import.yaml when present)
    #[arg(long, short = 'c', value_name = "FILE", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    section-import completions --shell bash > ~/.bash_completion.d/section-import\n\n\
                  Generate zsh completions:\n    section-import completions --shell zsh > ~/.zfunc/_section-import\n\n\
                  Generate fish completions:\n    section-import completions --shell fish > ~/.config/fish/completions/section-import.fish\n\n\
                  Generate PowerShell completions:\n    section-import completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: Shell,
}
