mod tracking_order;

pub use tracking_order::{
    TrackingCommission, TrackingContext, TrackingCustomer, TrackingOrder, TrackingProduct,
    TrackingStatus,
};
