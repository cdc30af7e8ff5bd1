use crate::args::GenerateArgs;
use anyhow::{Context, Result};
use tidal::config::TidalConfig;
use tidal::generate::generate;

/// Runs the generator with CLI arguments layered over the loaded configuration.
///
/// # Errors
/// Returns an error if discovery, package resolution or writing the output fails.
pub(crate) fn run(args: GenerateArgs, config: TidalConfig) -> Result<()> {
    let migrations = args.migrations.unwrap_or(config.migrations);
    let output = args.output.unwrap_or(config.output);
    let package = args.package.or(config.package);

    let report = generate(&migrations, &output, package.as_deref()).with_context(|| {
        format!("Failed to generate {} from {}", output.display(), migrations.display())
    })?;

    println!(
        "Generated {} ({} migrations, package {})",
        report.output.display(),
        report.migrations,
        report.package
    );
    Ok(())
}
