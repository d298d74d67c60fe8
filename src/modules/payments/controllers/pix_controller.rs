use actix_web::{web, HttpResponse};

use super::super::models::{CheckPaymentQuery, CheckPaymentResponse, GeneratePixResponse};
use super::super::services::PaymentService;
use crate::core::error::AppError;
use crate::middleware::error_handler::{json_config, query_config};
use crate::modules::orders::GeneratePixRequest;

/// Generate a PIX charge for the storefront checkout
/// POST {base}/api/gerar-pix
pub async fn generate_pix(
    service: web::Data<PaymentService>,
    body: web::Json<GeneratePixRequest>,
) -> Result<HttpResponse, AppError> {
    let charge = service.generate_pix(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(GeneratePixResponse::from(charge)))
}

/// Report the gateway status of a transaction
/// GET {base}/api/check-payment?id=<id>
pub async fn check_payment(
    service: web::Data<PaymentService>,
    query: web::Query<CheckPaymentQuery>,
) -> Result<HttpResponse, AppError> {
    let report = service.check_payment(query.into_inner().id).await?;

    Ok(HttpResponse::Ok().json(CheckPaymentResponse::from(report)))
}

/// Configure payment routes under the storefront path prefix
pub fn configure(cfg: &mut web::ServiceConfig, base_path: &str) {
    cfg.service(
        web::scope(base_path)
            .app_data(json_config())
            .app_data(query_config())
            .route("/api/gerar-pix", web::post().to(generate_pix))
            .route("/api/check-payment", web::get().to(check_payment)),
    );
}
