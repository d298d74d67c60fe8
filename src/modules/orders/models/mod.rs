mod order;

pub use order::{GeneratePixRequest, Item, Order, TrackingParameters, MISSING_ORDER_FIELDS_MESSAGE};
