//! Path-based operations, split into focused modules.

mod browse;
mod download;
mod upload;
mod utils;

#[cfg(test)]
pub(crate) mod stub;

pub use browse::DirectoryListing;
