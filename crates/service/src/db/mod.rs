//! Query functions over the `services` table.
//!
//! Generic over `ConnectionTrait` so callers decide the transaction scope.

pub mod salon_service_store;
