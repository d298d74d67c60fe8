//! PIX payment relay
//!
//! Accepts PIX payment requests from a storefront, forwards them to the payment
//! gateway, and reports order lifecycle events to a marketing-attribution service.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::gateways;
pub use modules::orders;
pub use modules::payments;
pub use modules::tracking;
