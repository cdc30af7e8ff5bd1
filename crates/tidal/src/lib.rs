//! # Tidal
//!
//! Versioned SQL migrations compiled into the application binary.
//!
//! Each migration script is packed into a [`Descriptor`]: a gzip envelope whose header
//! names the migration and records when it was packed. The script itself stays opaque
//! text, sliced at runtime into its `up` and `down` halves by comment directives:
//!
//! ```sql
//! -- package: accounts
//! -- migrate: up
//! CREATE TABLE users (id integer PRIMARY KEY);
//! -- migrate: down
//! DROP TABLE users;
//! ```
//!
//! A [`Registry`] collects the migrations an application knows about, ordered by
//! [`Revision`] with no duplicates.
//!
//! ## Key Features
//! - **Self-describing data**: name and timestamp travel in the gzip header, so embedded
//!   bytes need no side tables.
//! - **Ordered registry**: sorted insertion with duplicate revision rejection.
//! - **Code generation**: [`generate::generate`] turns a directory of `*.sql` files into
//!   Rust source that registers every descriptor.
//!
//! ## Example
//!
//! ```rust
//! use tidal::{Descriptor, Registry, Revision, TidalError};
//!
//! let sql = "-- migrate: up\nCREATE TABLE t (id int);\n-- migrate: down\nDROP TABLE t;\n";
//! let descriptor = Descriptor::new(sql.as_bytes(), "0001_create_t.sql")?;
//!
//! let mut registry = Registry::new();
//! registry.register_descriptor(Revision::new(1), descriptor.into_bytes())?;
//!
//! for migration in &registry {
//!     assert_eq!(migration.name(), "0001_create_t.sql");
//!     assert_eq!(migration.up()?, "CREATE TABLE t (id int);\n");
//! }
//! # Ok::<(), TidalError>(())
//! ```

pub mod config;
mod descriptor;
pub mod directive;
mod error;
pub mod generate;
pub mod loader;
mod migration;
mod registry;

pub use descriptor::{Descriptor, DescriptorInfo};
pub use error::{Result, TidalError, TidalErrorExt};
pub use migration::{Migration, Revision};
pub use registry::{Registry, SharedRegistry};
