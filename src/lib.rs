//! Catalog, filtering and location handling for the art grants directory.
//!
//! The grant catalog is compiled into the binary by the build script, so
//! everything here works on `'static` data and never touches the disk.

pub mod constants;
pub mod criteria;
pub mod grant_filter;
pub mod models;
pub mod repository;
pub mod route;
pub mod slug;
