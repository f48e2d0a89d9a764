pub mod errors;
pub mod db;
pub mod salon_service;

#[cfg(test)]
mod tests;
