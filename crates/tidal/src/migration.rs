use crate::descriptor::{Descriptor, DescriptorInfo};
use crate::error::Result;
use std::fmt;
use std::sync::OnceLock;

/// Ordering key of a migration. Unique within a [`crate::Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Revision(u64);

impl Revision {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Revision {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A [`Descriptor`] bound to the revision it runs at.
#[derive(Debug, Clone)]
pub struct Migration {
    revision: Revision,
    name: String,
    descriptor: Descriptor,
    package: OnceLock<String>,
}

impl Migration {
    pub fn new(revision: Revision, name: impl Into<String>, descriptor: Descriptor) -> Self {
        Self { revision, name: name.into(), descriptor, package: OnceLock::new() }
    }

    #[must_use]
    pub const fn revision(&self) -> Revision {
        self.revision
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Package declared by the script; parsed on first use and cached afterwards.
    ///
    /// # Errors
    /// Propagates [`Descriptor::package`] failures. Failures are not cached.
    pub fn package(&self) -> Result<&str> {
        if let Some(package) = self.package.get() {
            return Ok(package);
        }
        let package = self.descriptor.package()?;
        Ok(self.package.get_or_init(|| package))
    }

    /// # Errors
    /// See [`Descriptor::up`].
    pub fn up(&self) -> Result<String> {
        self.descriptor.up()
    }

    /// # Errors
    /// See [`Descriptor::down`].
    pub fn down(&self) -> Result<String> {
        self.descriptor.down()
    }

    /// # Errors
    /// See [`Descriptor::info`].
    pub fn info(&self) -> Result<DescriptorInfo> {
        self.descriptor.info()
    }
}

impl fmt::Display for Migration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.revision, self.name)
    }
}
