//! Import command implementation

use crate::cli::ImportArgs;
use crate::config::{FileLayoutSource, LayoutSource};
use crate::domain::{ImportRequest, ImportResult, SectionName};
use crate::error::Result;
use crate::operations::ImportOperation;
use crate::ui::{ConsoleReporter, ImportReporter, SilentReporter};

/// Run the import command
pub fn run(args: ImportArgs, verbose: bool, quiet: bool) -> Result<()> {
    let name = SectionName::parse(&args.name)?;
    let target = match args.target {
        Some(target) => target,
        None => std::env::current_dir()?,
    };
    let request = ImportRequest::new(name, args.source, target).with_kinds(args.resources);
    let layout_source = FileLayoutSource::new(args.config);

    let mut reporter: Box<dyn ImportReporter> = if quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new(verbose))
    };

    import_with(&request, &layout_source, reporter.as_mut())?;
    Ok(())
}

/// Resolve the layout for the request's target and run the import
///
/// The first failing step becomes the returned error.
pub fn import_with(
    request: &ImportRequest,
    layout_source: &dyn LayoutSource,
    reporter: &mut dyn ImportReporter,
) -> Result<ImportResult> {
    let layout = layout_source.load(request.target_root())?;
    ImportOperation::new(&layout, reporter)
        .execute(request)
        .into_result()
        .map_err(|failure| failure.error)
}
