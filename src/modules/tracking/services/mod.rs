pub mod tracking_client;

pub use tracking_client::{TrackingClient, TrackingNotifier};
