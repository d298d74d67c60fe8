// Orders module

pub mod models;
pub mod repositories;

pub use models::{GeneratePixRequest, Item, Order, TrackingParameters};
pub use repositories::{InMemoryOrderStore, OrderStore};
