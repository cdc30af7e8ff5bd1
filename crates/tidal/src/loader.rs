//! Reads migration sources from disk.
//!
//! Source files are named `<revision>_<name>.sql` (a dash works as the separator too),
//! e.g. `0001_create_users.sql`. The numeric prefix becomes the [`Revision`].

use crate::descriptor::Descriptor;
use crate::error::{Result, TidalError, TidalErrorExt};
use crate::migration::{Migration, Revision};
use regex::Regex;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, instrument};
use walkdir::WalkDir;

const SQL_EXTENSION: &str = "sql";

static FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)[_-](.+)\.sql$").expect("filename pattern compiles"));

/// Splits a source file name into its revision and migration name.
///
/// ```rust
/// use tidal::{Revision, loader::parse_filename};
///
/// let (revision, name) = parse_filename("0007_add_index.sql")?;
/// assert_eq!(revision, Revision::new(7));
/// assert_eq!(name, "add_index");
/// # Ok::<(), tidal::TidalError>(())
/// ```
///
/// # Errors
/// Returns [`TidalError::InvalidFilename`] when the name does not match
/// `<digits>_<name>.sql` or the revision overflows.
pub fn parse_filename(file_name: &str) -> Result<(Revision, String)> {
    let invalid = || TidalError::InvalidFilename {
        message: format!("expected '<revision>_<name>.sql', got '{file_name}'").into(),
        context: None,
    };

    let caps = FILENAME_RE.captures(file_name).ok_or_else(invalid)?;
    let revision = caps[1].parse::<u64>().map_err(|_| invalid())?;

    Ok((Revision::new(revision), caps[2].to_owned()))
}

/// Loads a single source file into a [`Migration`].
///
/// The descriptor is named after the file name so it stays identifiable once embedded.
///
/// # Errors
/// Returns [`TidalError::InvalidFilename`] for badly named files, [`TidalError::Io`]
/// if the file cannot be opened, and [`TidalError::Codec`] if compressing it fails.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn open(path: impl AsRef<Path>) -> Result<Migration> {
    let path = path.as_ref();
    let file_name = path.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        TidalError::InvalidFilename {
            message: format!("'{}' has no UTF-8 file name", path.display()).into(),
            context: None,
        }
    })?;
    let (revision, name) = parse_filename(file_name)?;

    let file = File::open(path).context(format!("Opening {}", path.display()))?;
    let descriptor = Descriptor::new(BufReader::new(file), file_name)
        .context(format!("Packing {}", path.display()))?;

    debug!(%revision, name, size = descriptor.len(), "Loaded migration");
    Ok(Migration::new(revision, name, descriptor))
}

/// Loads every `*.sql` file directly inside `dir`, sorted by revision.
///
/// # Errors
/// Returns [`TidalError::NoMigrations`] if the directory holds no `*.sql` files,
/// [`TidalError::DuplicateRevision`] if two files share a revision, and any error of
/// [`open`].
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn discover(dir: impl AsRef<Path>) -> Result<Vec<Migration>> {
    let dir = dir.as_ref();
    let mut migrations = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| TidalError::Io {
            source: e.into(),
            context: Some(format!("Scanning {}", dir.display()).into()),
        })?;

        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().is_none_or(|ext| ext != SQL_EXTENSION)
        {
            continue;
        }
        migrations.push(open(path)?);
    }

    if migrations.is_empty() {
        return Err(TidalError::NoMigrations {
            message: format!("no *.{SQL_EXTENSION} files in '{}'", dir.display()).into(),
            context: None,
        });
    }

    migrations.sort_by_key(Migration::revision);
    if let Some(pair) = migrations.windows(2).find(|w| w[0].revision() == w[1].revision()) {
        return Err(TidalError::DuplicateRevision {
            revision: pair[0].revision(),
            context: Some(format!("'{}' and '{}'", pair[0].name(), pair[1].name()).into()),
        });
    }

    Ok(migrations)
}
