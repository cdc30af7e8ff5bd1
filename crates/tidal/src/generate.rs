//! Emits Rust source that embeds migrations as compressed descriptor data.
//!
//! The generated file exposes `PACKAGE` and a `register` function that feeds every
//! embedded descriptor into a [`crate::Registry`] at its revision:
//!
//! ```rust,ignore
//! let mut registry = tidal::Registry::new();
//! my_app::migrations::register(&mut registry)?;
//! ```

use crate::error::{Result, TidalError, TidalErrorExt};
use crate::loader;
use crate::migration::Migration;
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Summary of a [`generate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub package: String,
    pub migrations: usize,
    pub output: PathBuf,
}

/// Generates the embedding source for all migrations in `migrations_dir`.
///
/// When `package` is `None` it is taken from the `-- package:` directives, or failing
/// that from the output location (see [`determine_package`]).
///
/// # Errors
/// Any loader error, [`TidalError::PackageConflict`] when the package cannot be decided,
/// and [`TidalError::Io`] when the output cannot be written.
#[instrument(
    skip_all,
    fields(source = %migrations_dir.as_ref().display(), output = %output.as_ref().display())
)]
pub fn generate(
    migrations_dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
    package: Option<&str>,
) -> Result<GenerateReport> {
    let migrations_dir = migrations_dir.as_ref();
    let output = output.as_ref();

    let migrations = loader::discover(migrations_dir)?;

    let package = match package {
        Some(p) if !p.is_empty() => p.to_owned(),
        _ => determine_package(&migrations, output)?,
    };

    let source = render(&migrations_dir.display().to_string(), &package, &migrations)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(format!("Creating {}", parent.display()))?;
    }
    fs::write(output, source).context(format!("Writing {}", output.display()))?;

    info!(package, count = migrations.len(), "Generated migration descriptors");

    Ok(GenerateReport { package, migrations: migrations.len(), output: output.to_path_buf() })
}

/// Decides which package the generated code belongs to.
///
/// 1. The single distinct `-- package:` value declared by the migrations.
/// 2. Otherwise the name of the directory the output file is written into.
/// 3. If that is the current directory, the name of the working directory.
///
/// # Errors
/// Returns [`TidalError::PackageConflict`] if migrations name different packages or no
/// name can be found at all, and propagates descriptor errors.
pub fn determine_package(migrations: &[Migration], output: &Path) -> Result<String> {
    let mut names = BTreeSet::new();
    for m in migrations {
        let name = m.package().context(format!("Reading package of {m}"))?;
        if !name.is_empty() {
            names.insert(name.to_owned());
        }
    }

    if names.len() > 1 {
        let listed = names.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
        return Err(TidalError::PackageConflict {
            message: format!(
                "discovered {} unique package names ({listed}), please specify the package",
                names.len()
            )
            .into(),
            context: None,
        });
    }
    if let Some(name) = names.pop_first() {
        return Ok(name);
    }

    let parent = output.parent().and_then(|p| p.file_name()).and_then(|n| n.to_str());
    if let Some(dir) = parent.filter(|d| !d.is_empty() && *d != ".") {
        return Ok(dir.to_owned());
    }

    std::env::current_dir()
        .ok()
        .and_then(|wd| wd.file_name().and_then(|n| n.to_str()).map(str::to_owned))
        .ok_or_else(|| TidalError::PackageConflict {
            message: format!(
                "could not determine package from {} migrations and '{}'",
                migrations.len(),
                output.display()
            )
            .into(),
            context: None,
        })
}

/// Renders the generated Rust source. `migrations` must already be in revision order.
///
/// # Errors
/// Returns [`TidalError::Format`] if writing to the buffer fails.
pub fn render(source: &str, package: &str, migrations: &[Migration]) -> Result<String> {
    let mut w = String::new();
    writeln!(w, "// Code generated by tidal. DO NOT EDIT.")?;
    writeln!(w, "// source: {source}\n")?;

    writeln!(w, "/// Package the embedded migrations belong to.")?;
    writeln!(w, "pub const PACKAGE: &str = \"{}\";\n", escape_str(package))?;

    writeln!(w, "/// Registers every embedded migration, in revision order.")?;
    writeln!(w, "///")?;
    writeln!(w, "/// # Errors")?;
    writeln!(w, "/// Fails on malformed data or a revision that is already registered.")?;
    writeln!(
        w,
        "pub fn register(registry: &mut tidal::Registry) -> Result<(), tidal::TidalError> {{"
    )?;
    for m in migrations {
        writeln!(
            w,
            "    registry.register_descriptor(tidal::Revision::new({rev}), REVISION_{rev})?;",
            rev = m.revision()
        )?;
    }
    writeln!(w, "    Ok(())")?;
    writeln!(w, "}}")?;

    for m in migrations {
        writeln!(w)?;
        writeln!(w, "// {}", m.name())?;
        writeln!(w, "static REVISION_{}: &[u8] = {};", m.revision(), m.descriptor().repr())?;
    }

    Ok(w)
}

fn escape_str(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
