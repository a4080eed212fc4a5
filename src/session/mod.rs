//! The authenticated session passed to every operation.

mod session;

pub use session::Session;
