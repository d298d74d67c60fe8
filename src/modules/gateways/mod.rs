pub mod services;

pub use services::{
    GatewayReply, GhostClient, PaymentReport, PixCharge, PixGateway, APPROVED_STATUS,
};
