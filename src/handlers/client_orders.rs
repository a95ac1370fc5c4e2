use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::orders::OrderResponse;
use super::{list_response, validated, PageParams};
use crate::domain::order::ClientOrderInput;
use crate::errors::{AppError, ErrorBody};
use crate::state::ClientOrders;

// ── Path parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ClientPath {
    /// Owning client id, starting at 1.
    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    pub client_id: i64,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ClientOrderPath {
    /// Owning client id, starting at 1.
    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    pub client_id: i64,
    /// Order id, starting at 1.
    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    pub order_id: i64,
}

// ── Request DTO ──────────────────────────────────────────────────────────────

/// Order body for the client-scoped routes; the client comes from the path.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientOrderRequest {
    #[schema(example = 3)]
    pub item_id: i64,
    #[schema(value_type = String, format = Date, example = "2025-10-04")]
    pub purchase_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2025-10-10")]
    pub delivery_date: NaiveDate,
}

impl From<ClientOrderRequest> for ClientOrderInput {
    fn from(req: ClientOrderRequest) -> Self {
        ClientOrderInput {
            item_id: req.item_id,
            purchase_date: req.purchase_date,
            delivery_date: req.delivery_date,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/v1/clients/{client_id}/orders
///
/// 404 when the client itself is unknown; 200 with `[]` when it has no orders.
#[utoipa::path(
    get,
    path = "/api/v1/clients/{client_id}/orders",
    params(ClientPath, PageParams),
    responses(
        (status = 200, description = "A page of the client's orders", body = Vec<OrderResponse>),
        (status = 400, description = "Invalid client id or pagination", body = ErrorBody),
        (status = 404, description = "Client not found", body = ErrorBody),
    ),
    tag = "Client orders"
)]
pub async fn list_client_orders(
    service: web::Data<ClientOrders>,
    path: web::Path<ClientPath>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let client_id = validated(path.into_inner())?.client_id;
    let page = query.into_inner().into_request()?;

    let result = web::block(move || service.list_client_orders(client_id, page)).await??;

    Ok(list_response::<_, OrderResponse>(result))
}

/// GET /api/v1/clients/{client_id}/orders/{order_id}
#[utoipa::path(
    get,
    path = "/api/v1/clients/{client_id}/orders/{order_id}",
    params(ClientOrderPath),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 403, description = "Order belongs to another client", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "Client orders"
)]
pub async fn get_client_order(
    service: web::Data<ClientOrders>,
    path: web::Path<ClientOrderPath>,
) -> Result<HttpResponse, AppError> {
    let ClientOrderPath {
        client_id,
        order_id,
    } = validated(path.into_inner())?;

    let order = web::block(move || service.get_client_order(client_id, order_id)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// POST /api/v1/clients/{client_id}/orders
#[utoipa::path(
    post,
    path = "/api/v1/clients/{client_id}/orders",
    params(ClientPath),
    request_body = ClientOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 404, description = "Client or item not found", body = ErrorBody),
    ),
    tag = "Client orders"
)]
pub async fn create_client_order(
    service: web::Data<ClientOrders>,
    path: web::Path<ClientPath>,
    body: web::Json<ClientOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let client_id = validated(path.into_inner())?.client_id;
    let input = ClientOrderInput::from(body.into_inner());

    let order = web::block(move || service.create_client_order(client_id, input)).await??;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// PUT /api/v1/clients/{client_id}/orders/{order_id}
///
/// Replaces the item and both dates; the owning client is never changed.
#[utoipa::path(
    put,
    path = "/api/v1/clients/{client_id}/orders/{order_id}",
    params(ClientOrderPath),
    request_body = ClientOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 403, description = "Order belongs to another client", body = ErrorBody),
        (status = 404, description = "Order or item not found", body = ErrorBody),
    ),
    tag = "Client orders"
)]
pub async fn update_client_order(
    service: web::Data<ClientOrders>,
    path: web::Path<ClientOrderPath>,
    body: web::Json<ClientOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let ClientOrderPath {
        client_id,
        order_id,
    } = validated(path.into_inner())?;
    let input = ClientOrderInput::from(body.into_inner());

    let order =
        web::block(move || service.update_client_order(client_id, order_id, input)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// DELETE /api/v1/clients/{client_id}/orders/{order_id}
#[utoipa::path(
    delete,
    path = "/api/v1/clients/{client_id}/orders/{order_id}",
    params(ClientOrderPath),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 403, description = "Order belongs to another client", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "Client orders"
)]
pub async fn delete_client_order(
    service: web::Data<ClientOrders>,
    path: web::Path<ClientOrderPath>,
) -> Result<HttpResponse, AppError> {
    let ClientOrderPath {
        client_id,
        order_id,
    } = validated(path.into_inner())?;

    web::block(move || service.delete_client_order(client_id, order_id)).await??;

    Ok(HttpResponse::NoContent().finish())
}
