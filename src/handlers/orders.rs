use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::clients::ClientResponse;
use super::items::ItemResponse;
use super::{list_response, IdPath, PageParams};
use crate::domain::order::{OrderInput, OrderView};
use crate::errors::{AppError, ErrorBody};
use crate::state::Orders;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[schema(example = 1)]
    pub client_id: i64,
    #[schema(example = 4)]
    pub item_id: i64,
    #[schema(value_type = String, format = Date, example = "2025-10-04")]
    pub purchase_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2025-10-10")]
    pub delivery_date: NaiveDate,
}

impl From<OrderRequest> for OrderInput {
    fn from(req: OrderRequest) -> Self {
        OrderInput {
            client_id: req.client_id,
            item_id: req.item_id,
            purchase_date: req.purchase_date,
            delivery_date: req.delivery_date,
        }
    }
}

/// An order with its client and item embedded.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[schema(example = 10)]
    pub id: i64,
    pub client: ClientResponse,
    pub item: ItemResponse,
    #[schema(value_type = String, format = Date, example = "2025-10-04")]
    pub purchase_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2025-10-10")]
    pub delivery_date: NaiveDate,
}

impl From<OrderView> for OrderResponse {
    fn from(o: OrderView) -> Self {
        OrderResponse {
            id: o.id,
            client: o.client.into(),
            item: o.item.into(),
            purchase_date: o.purchase_date,
            delivery_date: o.delivery_date,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/v1/orders
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    params(PageParams),
    responses(
        (status = 200, description = "A page of orders", body = Vec<OrderResponse>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    service: web::Data<Orders>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let page = query.into_inner().into_request()?;

    let result = web::block(move || service.list_orders(page)).await??;

    Ok(list_response::<_, OrderResponse>(result))
}

/// GET /api/v1/orders/{id}
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    params(IdPath),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    service: web::Data<Orders>,
    path: web::Path<IdPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner().into_id()?;

    let order = web::block(move || service.get_order(id)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// POST /api/v1/orders
///
/// Both `clientId` and `itemId` must exist; the 404 names whichever does not.
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 404, description = "Client or item not found", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    service: web::Data<Orders>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let input = OrderInput::from(body.into_inner());

    let order = web::block(move || service.create_order(input)).await??;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// PUT /api/v1/orders/{id}
#[utoipa::path(
    put,
    path = "/api/v1/orders/{id}",
    params(IdPath),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 404, description = "Order, client or item not found", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn update_order(
    service: web::Data<Orders>,
    path: web::Path<IdPath>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner().into_id()?;
    let input = OrderInput::from(body.into_inner());

    let order = web::block(move || service.update_order(id, input)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// DELETE /api/v1/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{id}",
    params(IdPath),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    service: web::Data<Orders>,
    path: web::Path<IdPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner().into_id()?;

    web::block(move || service.delete_order(id)).await??;

    Ok(HttpResponse::NoContent().finish())
}
