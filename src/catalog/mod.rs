//! Catalog assembly and the unified lookup/sort facade.
//!
//! ## Flow
//!
//! ```text
//! loader -> build() -> Catalog { tree, list, index } -> CatalogFacade
//! ```
//!
//! ## Components
//!
//! - [`build`] / [`CatalogBuilder`]: Feed one record sequence into all three structures
//! - [`Catalog`]: The populated structures as a unit
//! - [`CatalogFacade`]: Owned state answering sort/find/benchmark requests
//! - [`digest`]: SHA-256 over sorted views, for cross-structure checks

pub mod builder;
pub mod digest;
pub mod facade;

pub use builder::{build, Catalog, CatalogBuilder};
pub use digest::digest_hex;
pub use facade::CatalogFacade;
