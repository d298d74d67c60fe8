pub mod gateway_trait;
pub mod ghost;

pub use gateway_trait::{
    GatewayReply, PaymentReport, PixCharge, PixGateway, APPROVED_STATUS,
};
pub use ghost::{GhostClient, PurchasePayload};
