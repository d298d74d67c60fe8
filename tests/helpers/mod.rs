// Test Helper Modules
//
// Shared infrastructure for the integration tests.
// The gateway and tracking services are simulated by real HTTP servers
// (actix-test) so the relay exercises its actual reqwest clients.
//
// Usage:
//   #[macro_use]
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code, unused_macros)]

/// Initialize the relay routes as an in-process actix service
macro_rules! init_relay {
    ($relay:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($relay.service.clone())
                .configure(|cfg| {
                    pix_relay::payments::configure(cfg, $crate::helpers::BASE_PATH)
                }),
        )
        .await
    };
}

pub mod assertions;

pub use assertions::*;
pub use test_data::*;
pub use test_server::*;
