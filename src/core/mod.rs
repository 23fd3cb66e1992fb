//! Core domain logic: session lifecycle, HTTP gateway, event catalog

#[cfg(feature = "ssr")]
pub mod config;
pub mod events;
pub mod http;
#[cfg(feature = "ssr")]
pub mod proxy;
pub mod session;
#[cfg(test)]
mod tests;
