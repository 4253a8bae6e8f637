pub mod error;
pub mod pagination;

#[cfg(feature = "ssr")]
pub mod client;
