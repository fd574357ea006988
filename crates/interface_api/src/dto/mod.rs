//! Request and response bodies

pub mod receipt;
pub mod session;
