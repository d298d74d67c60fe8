// Tracking (marketing attribution) module

pub mod models;
pub mod services;

pub use models::{TrackingContext, TrackingOrder, TrackingStatus};
pub use services::{TrackingClient, TrackingNotifier};
