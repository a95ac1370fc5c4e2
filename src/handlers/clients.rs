use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{list_response, not_blank, validated, IdPath, PageParams};
use crate::domain::client::{Client, ClientInput};
use crate::errors::{AppError, ErrorBody};
use crate::state::Clients;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Body of client create and update requests. Updates replace every field.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClientRequest {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Daniel Vargas")]
    pub name: String,
    #[schema(example = "Street 5")]
    pub address: Option<String>,
    #[validate(range(min = 1, message = "must be greater than 0"))]
    #[schema(example = 23)]
    pub age: i32,
}

impl From<ClientRequest> for ClientInput {
    fn from(req: ClientRequest) -> Self {
        ClientInput {
            name: req.name,
            address: req.address,
            age: req.age,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Daniel Vargas")]
    pub name: String,
    #[schema(example = "Street 5")]
    pub address: Option<String>,
    #[schema(example = 23)]
    pub age: i32,
}

impl From<Client> for ClientResponse {
    fn from(c: Client) -> Self {
        ClientResponse {
            id: c.id,
            name: c.name,
            address: c.address,
            age: c.age,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/v1/clients
#[utoipa::path(
    get,
    path = "/api/v1/clients",
    params(PageParams),
    responses(
        (status = 200, description = "A page of clients", body = Vec<ClientResponse>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn list_clients(
    service: web::Data<Clients>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let page = query.into_inner().into_request()?;

    let result = web::block(move || service.list_clients(page)).await??;

    Ok(list_response::<_, ClientResponse>(result))
}

/// GET /api/v1/clients/{id}
#[utoipa::path(
    get,
    path = "/api/v1/clients/{id}",
    params(IdPath),
    responses(
        (status = 200, description = "Client found", body = ClientResponse),
        (status = 404, description = "Client not found", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn get_client(
    service: web::Data<Clients>,
    path: web::Path<IdPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner().into_id()?;

    let client = web::block(move || service.get_client(id)).await??;

    Ok(HttpResponse::Ok().json(ClientResponse::from(client)))
}

/// POST /api/v1/clients
#[utoipa::path(
    post,
    path = "/api/v1/clients",
    request_body = ClientRequest,
    responses(
        (status = 201, description = "Client created", body = ClientResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn create_client(
    service: web::Data<Clients>,
    body: web::Json<ClientRequest>,
) -> Result<HttpResponse, AppError> {
    let input = ClientInput::from(validated(body.into_inner())?);

    let client = web::block(move || service.create_client(input)).await??;

    Ok(HttpResponse::Created().json(ClientResponse::from(client)))
}

/// PUT /api/v1/clients/{id}
#[utoipa::path(
    put,
    path = "/api/v1/clients/{id}",
    params(IdPath),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Client updated", body = ClientResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Client not found", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn update_client(
    service: web::Data<Clients>,
    path: web::Path<IdPath>,
    body: web::Json<ClientRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner().into_id()?;
    let input = ClientInput::from(validated(body.into_inner())?);

    let client = web::block(move || service.update_client(id, input)).await??;

    Ok(HttpResponse::Ok().json(ClientResponse::from(client)))
}

/// DELETE /api/v1/clients/{id}
///
/// Refused with 409 while the client still has orders.
#[utoipa::path(
    delete,
    path = "/api/v1/clients/{id}",
    params(IdPath),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found", body = ErrorBody),
        (status = 409, description = "Client still has orders", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn delete_client(
    service: web::Data<Clients>,
    path: web::Path<IdPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner().into_id()?;

    web::block(move || service.delete_client(id)).await??;

    Ok(HttpResponse::NoContent().finish())
}
