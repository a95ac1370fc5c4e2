use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

use crate::domain::page::{ListResult, PageRequest};
use crate::errors::{json_error_handler, path_error_handler, query_error_handler, AppError};
use crate::state::AppState;

pub mod client_orders;
pub mod clients;
pub mod items;
pub mod orders;

pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

// ── Shared extractors ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page number. Defaults to 0.
    #[serde(default)]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub page: i64,
    /// Rows per page. Defaults to 10, maximum 100.
    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub size: i64,
}

fn default_size() -> i64 {
    10
}

impl PageParams {
    pub fn into_request(self) -> Result<PageRequest, AppError> {
        let params = validated(self)?;
        Ok(PageRequest::new(params.page, params.size)?)
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct IdPath {
    /// Resource id, starting at 1.
    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    pub id: i64,
}

impl IdPath {
    pub fn into_id(self) -> Result<i64, AppError> {
        Ok(validated(self)?.id)
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

pub(crate) fn validated<T: Validate>(value: T) -> Result<T, AppError> {
    value.validate()?;
    Ok(value)
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// A page of rows as a JSON array, with the total row count in a header.
pub(crate) fn list_response<T, R>(result: ListResult<T>) -> HttpResponse
where
    R: Serialize + From<T>,
{
    let total = result.total;
    let body: Vec<R> = result.items.into_iter().map(R::from).collect();
    HttpResponse::Ok()
        .insert_header((TOTAL_COUNT_HEADER, total.to_string()))
        .json(body)
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Resource not found".to_string()))
}

// ── Routing ──────────────────────────────────────────────────────────────────

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(state.clients.clone())
        .app_data(state.items.clone())
        .app_data(state.orders.clone())
        .app_data(state.client_orders.clone())
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/clients")
                        .route("", web::get().to(clients::list_clients))
                        .route("", web::post().to(clients::create_client))
                        .route("/{id}", web::get().to(clients::get_client))
                        .route("/{id}", web::put().to(clients::update_client))
                        .route("/{id}", web::delete().to(clients::delete_client))
                        .route(
                            "/{client_id}/orders",
                            web::get().to(client_orders::list_client_orders),
                        )
                        .route(
                            "/{client_id}/orders",
                            web::post().to(client_orders::create_client_order),
                        )
                        .route(
                            "/{client_id}/orders/{order_id}",
                            web::get().to(client_orders::get_client_order),
                        )
                        .route(
                            "/{client_id}/orders/{order_id}",
                            web::put().to(client_orders::update_client_order),
                        )
                        .route(
                            "/{client_id}/orders/{order_id}",
                            web::delete().to(client_orders::delete_client_order),
                        ),
                )
                .service(
                    web::scope("/items")
                        .route("", web::get().to(items::list_items))
                        .route("", web::post().to(items::create_item))
                        .route("/{id}", web::get().to(items::get_item))
                        .route("/{id}", web::put().to(items::update_item))
                        .route("/{id}", web::delete().to(items::delete_item)),
                )
                .service(
                    web::scope("/orders")
                        .route("", web::get().to(orders::list_orders))
                        .route("", web::post().to(orders::create_order))
                        .route("/{id}", web::get().to(orders::get_order))
                        .route("/{id}", web::put().to(orders::update_order))
                        .route("/{id}", web::delete().to(orders::delete_order)),
                ),
        );
}
