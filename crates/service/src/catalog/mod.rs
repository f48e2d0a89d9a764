//! Catalog module: three-layer architecture (domain, repository, service).
//!
//! Everything the HTTP layer needs to list, read, create, patch, delete and
//! summarise salon services lives here.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::CatalogService;
