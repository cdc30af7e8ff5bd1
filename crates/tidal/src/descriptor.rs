//! Gzip envelope around a single migration script.
//!
//! A [`Descriptor`] is what gets embedded into application binaries. The script text is
//! stored compressed at the best compression level, and the gzip header carries the
//! identity of the migration: the original file name and the time it was packed.
//! Everything is decompressed on demand, which is cheap enough for data that is read
//! once at startup.

use crate::directive::{self, Directive, Section};
use crate::error::{Result, TidalError};
use chrono::{DateTime, Utc};
use flate2::bufread::GzDecoder;
use flate2::{Compression, GzBuilder};
use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::io::{self, BufRead, BufReader, Read};
use std::ops::ControlFlow;
use tracing::debug;

/// Bytes per row in [`Descriptor::repr`].
const REPR_ROW_WIDTH: usize = 16;

/// Identity metadata read from a descriptor's gzip header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorInfo {
    /// The name the descriptor was built with, usually the source file name.
    pub name: String,
    /// Packing time; `None` when the header leaves the timestamp unset.
    pub modified: Option<DateTime<Utc>>,
}

/// The compressed bytes of one migration script.
///
/// Holds either borrowed `'static` data (generated code embeds descriptors as byte
/// statics) or an owned buffer produced by [`Descriptor::new`].
///
/// # Example
///
/// ```rust
/// use tidal::Descriptor;
///
/// let sql = "-- package: accounts\n-- migrate: up\nCREATE TABLE a (id int);\n-- migrate: down\nDROP TABLE a;\n";
/// let descriptor = Descriptor::new(sql.as_bytes(), "0001_accounts.sql")?;
///
/// assert_eq!(descriptor.info()?.name, "0001_accounts.sql");
/// assert_eq!(descriptor.package()?, "accounts");
/// assert_eq!(descriptor.up()?, "CREATE TABLE a (id int);\n");
/// assert_eq!(descriptor.down()?, "DROP TABLE a;\n");
/// # Ok::<(), tidal::TidalError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Descriptor(Cow<'static, [u8]>);

impl Descriptor {
    /// Compresses an uncompressed migration script into a new descriptor.
    ///
    /// The `name` is mandatory: it is the only identity an embedded descriptor has, so it
    /// is written into the gzip header together with the current UTC time.
    ///
    /// # Errors
    /// Returns [`TidalError::Codec`] if the name is empty or contains a NUL byte, if the
    /// clock is outside the range a gzip header can store, or if reading `src` or
    /// flushing the compressor fails.
    pub fn new<R: Read>(mut src: R, name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(codec_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "descriptor name must not be empty",
            )));
        }
        if name.contains('\0') {
            return Err(codec_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "descriptor name must not contain NUL bytes",
            )));
        }

        let mtime = u32::try_from(Utc::now().timestamp()).map_err(|_| {
            codec_error(io::Error::other("current time does not fit a gzip header"))
        })?;

        let mut encoder =
            GzBuilder::new().filename(name).mtime(mtime).write(Vec::new(), Compression::best());
        io::copy(&mut src, &mut encoder).map_err(codec_error)?;
        let bytes = encoder.finish().map_err(codec_error)?;

        debug!(name, size = bytes.len(), "Descriptor encoded");
        Ok(Self(Cow::Owned(bytes)))
    }

    /// Wraps embedded descriptor data without copying it.
    #[must_use]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self(Cow::Borrowed(bytes))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_owned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads the name and timestamp from the gzip header without inflating the payload.
    ///
    /// # Errors
    /// Returns [`TidalError::MalformedDescriptor`] if the bytes are not a gzip envelope.
    pub fn info(&self) -> Result<DescriptorInfo> {
        let decoder = self.decoder()?;
        let header = decoder.header().ok_or_else(|| malformed_error(invalid_header()))?;

        let name = header
            .filename()
            .map(|n| String::from_utf8_lossy(n).into_owned())
            .unwrap_or_default();
        let modified = match header.mtime() {
            0 => None,
            secs => DateTime::from_timestamp(i64::from(secs), 0),
        };

        Ok(DescriptorInfo { name, modified })
    }

    /// Returns the identifier of the first `-- package: <identifier>` line, or an empty
    /// string when the script declares no package.
    ///
    /// # Errors
    /// Returns [`TidalError::MalformedDescriptor`] for an invalid envelope and
    /// [`TidalError::Scan`] if the payload cannot be read to the matching line.
    pub fn package(&self) -> Result<String> {
        let mut package = String::new();
        self.scan(|line| match directive::package_name(line) {
            Some(name) => {
                package = name.to_owned();
                ControlFlow::Break(())
            },
            None => ControlFlow::Continue(()),
        })?;
        Ok(package)
    }

    /// Returns every line under `-- migrate: up` directives, directive lines excluded.
    ///
    /// # Errors
    /// Same as [`Descriptor::package`].
    pub fn up(&self) -> Result<String> {
        self.section(Directive::Up)
    }

    /// Returns every line under `-- migrate: down` directives, directive lines excluded.
    ///
    /// # Errors
    /// Same as [`Descriptor::package`].
    pub fn down(&self) -> Result<String> {
        self.section(Directive::Down)
    }

    /// Renders the compressed bytes as a Rust slice literal for generated code.
    ///
    /// ```rust
    /// use tidal::Descriptor;
    ///
    /// let empty = Descriptor::from_static(&[]);
    /// assert_eq!(empty.repr(), "&[\n\t// 0 bytes of compressed descriptor data\n]");
    /// ```
    #[must_use]
    pub fn repr(&self) -> String {
        let bytes = self.as_bytes();
        let mut out = String::with_capacity(bytes.len() * 6 + 64);

        out.push_str("&[\n");
        let _ = write!(out, "\t// {} bytes of compressed descriptor data", bytes.len());

        for row in bytes.chunks(REPR_ROW_WIDTH) {
            out.push_str("\n\t");
            for (i, byte) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "0x{byte:02x},");
            }
        }

        out.push_str("\n]");
        out
    }

    fn section(&self, target: Directive) -> Result<String> {
        let mut section = Section::new(target);
        self.scan(|line| {
            section.feed(line);
            ControlFlow::Continue(())
        })?;
        Ok(section.finish())
    }

    fn scan(&self, mut visit: impl FnMut(&str) -> ControlFlow<()>) -> Result<()> {
        let reader = BufReader::new(self.decoder()?);
        for line in reader.lines() {
            let line = line.map_err(|source| TidalError::Scan { source, context: None })?;
            if visit(&line).is_break() {
                break;
            }
        }
        Ok(())
    }

    /// Opens a decoder, failing early when the gzip header does not parse.
    fn decoder(&self) -> Result<GzDecoder<&[u8]>> {
        let mut decoder = GzDecoder::new(self.as_bytes());
        if decoder.header().is_some() {
            return Ok(decoder);
        }

        // The decoder keeps the header error until the first read.
        let source = match decoder.read(&mut [0u8; 1]) {
            Err(e) => e,
            Ok(_) => invalid_header(),
        };
        Err(malformed_error(source))
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Descriptor").field(&format_args!("{} bytes", self.len())).finish()
    }
}

impl AsRef<[u8]> for Descriptor {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for Descriptor {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Cow::Owned(bytes))
    }
}

impl From<&'static [u8]> for Descriptor {
    fn from(bytes: &'static [u8]) -> Self {
        Self::from_static(bytes)
    }
}

const fn codec_error(source: io::Error) -> TidalError {
    TidalError::Codec { source, context: None }
}

const fn malformed_error(source: io::Error) -> TidalError {
    TidalError::MalformedDescriptor { source, context: None }
}

fn invalid_header() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "invalid gzip header")
}
