//! Shared helpers.

#[cfg(test)]
pub(crate) mod testing;
