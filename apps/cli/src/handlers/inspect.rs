use crate::args::InspectArgs;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use tidal::Migration;
use tidal::loader;

/// Prints the header fields and requested sections of one migration source.
///
/// # Errors
/// Returns an error if the file cannot be loaded or its descriptor cannot be read.
pub(crate) fn run(args: &InspectArgs) -> Result<()> {
    let migration = loader::open(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    print!("{}", describe(&migration, args.up, args.down)?);
    Ok(())
}

fn describe(migration: &Migration, up: bool, down: bool) -> Result<String> {
    let info = migration.info()?;
    let modified = info.modified.map_or_else(|| "unset".to_owned(), |t| t.to_rfc3339());
    let package = migration.package()?;

    let mut out = String::new();
    writeln!(out, "name:     {}", info.name)?;
    writeln!(out, "revision: {}", migration.revision())?;
    writeln!(out, "modified: {modified}")?;
    writeln!(out, "package:  {}", if package.is_empty() { "-" } else { package })?;

    if up {
        write!(out, "\n-- migrate: up\n{}", migration.up()?)?;
    }
    if down {
        write!(out, "\n-- migrate: down\n{}", migration.down()?)?;
    }
    Ok(out)
}
