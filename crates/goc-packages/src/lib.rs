//! # goc-packages
//!
//! Package metadata for goc staging.
//!
//! The staging core never parses build output itself. It asks a
//! [`PackageLister`] for the packages under a directory and reads the few
//! fields it cares about (root, module directory) from [`Package`].
//!
//! - [`GoListLister`] — shells out to `go list -json ./...`.
//! - [`StaticLister`] — returns a fixed list; used by tests and embedders
//!   that already have metadata in hand.

pub mod error;
pub mod lister;
pub mod package;

pub use error::ListError;
pub use lister::{decode_stream, GoListLister, PackageLister, StaticLister};
pub use package::{ModuleInfo, Package};
