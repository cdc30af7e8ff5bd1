use crate::migration::Revision;
use std::borrow::Cow;

/// Convenience alias used throughout the crate.
pub type Result<T, E = TidalError> = std::result::Result<T, E>;

/// A specialized [`TidalError`] enum of this crate.
///
/// Every variant carries an optional human readable `context` that is appended to the
/// message, see [`TidalErrorExt::context`].
#[derive(Debug, thiserror::Error)]
pub enum TidalError {
    /// The compressor could not be initialized, fed, or flushed while building a descriptor.
    #[error("Descriptor encoding failed{}: {source}", format_context(.context))]
    Codec { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The bytes are not a valid gzip envelope.
    #[error("Malformed descriptor{}: {source}", format_context(.context))]
    MalformedDescriptor { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Reading the decompressed payload failed part way through.
    #[error("Descriptor scan failed{}: {source}", format_context(.context))]
    Scan { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Another migration already occupies this revision.
    #[error("Duplicate migration revision{}: {revision}", format_context(.context))]
    DuplicateRevision { revision: Revision, context: Option<Cow<'static, str>> },

    /// A migration source file name does not carry a numeric revision prefix.
    #[error("Invalid migration filename{}: {message}", format_context(.context))]
    InvalidFilename { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A migrations directory has no `*.sql` files in it.
    #[error("No migrations found{}: {message}", format_context(.context))]
    NoMigrations { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Migrations disagree about the package they belong to.
    #[error("Conflicting package directives{}: {message}", format_context(.context))]
    PackageConflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Filesystem failures while loading sources or writing generated code.
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Rendering generated source failed.
    #[error("Formatting failure{}: {source}", format_context(.context))]
    Format { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    /// Configuration could not be loaded or deserialized.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Attaches context to fallible results on their way into a [`TidalError`].
pub trait TidalErrorExt<T> {
    /// Sets the context of the error, converting it into a [`TidalError`] when needed.
    ///
    /// # Errors
    /// Returns the original error, with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> TidalErrorExt<T> for Result<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                TidalError::Codec { context: c, .. }
                | TidalError::MalformedDescriptor { context: c, .. }
                | TidalError::Scan { context: c, .. }
                | TidalError::DuplicateRevision { context: c, .. }
                | TidalError::InvalidFilename { context: c, .. }
                | TidalError::NoMigrations { context: c, .. }
                | TidalError::PackageConflict { context: c, .. }
                | TidalError::Io { context: c, .. }
                | TidalError::Format { context: c, .. }
                | TidalError::Config { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> TidalErrorExt<T> for Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| TidalError::Io { source, context: Some(context.into()) })
    }
}

impl<T> TidalErrorExt<T> for Result<T, std::fmt::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| TidalError::Format { source, context: Some(context.into()) })
    }
}

impl<T> TidalErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| TidalError::Config { source, context: Some(context.into()) })
    }
}

impl From<std::io::Error> for TidalError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

impl From<std::fmt::Error> for TidalError {
    fn from(source: std::fmt::Error) -> Self {
        Self::Format { source, context: None }
    }
}

impl From<config::ConfigError> for TidalError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}
