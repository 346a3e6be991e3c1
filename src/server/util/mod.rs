//! Utility helpers for server operations.

#[cfg(test)]
pub mod test;
