use actix_web::{web, HttpResponse};
use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{list_response, not_blank, validated, IdPath, PageParams};
use crate::domain::item::{Item, ItemInput};
use crate::errors::{AppError, ErrorBody};
use crate::state::Items;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Body of item create and update requests. `price` may be a JSON number or a decimal string.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ItemRequest {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "iPhone 15")]
    pub name: String,
    #[schema(example = "The latest iPhone")]
    pub description: Option<String>,
    #[validate(custom(function = "positive"))]
    #[serde(deserialize_with = "decimal_from_text")]
    #[schema(value_type = String, example = "3000")]
    pub price: BigDecimal,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalText {
    Number(serde_json::Number),
    Text(String),
}

/// Builds the decimal from the text form of a JSON number or string, not from its binary value.
fn decimal_from_text<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match DecimalText::deserialize(deserializer)? {
        DecimalText::Number(n) => n.to_string(),
        DecimalText::Text(s) => s,
    };
    BigDecimal::from_str(text.trim())
        .map_err(|_| serde::de::Error::custom(format!("invalid decimal '{text}'")))
}

fn positive(price: &BigDecimal) -> Result<(), ValidationError> {
    if *price <= BigDecimal::zero() {
        let mut err = ValidationError::new("positive");
        err.message = Some("must be greater than 0".into());
        return Err(err);
    }
    Ok(())
}

impl From<ItemRequest> for ItemInput {
    fn from(req: ItemRequest) -> Self {
        ItemInput {
            name: req.name,
            description: req.description,
            price: req.price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    #[schema(example = 2)]
    pub id: i64,
    #[schema(example = "iPhone 15")]
    pub name: String,
    #[schema(example = "The latest iPhone")]
    pub description: Option<String>,
    /// Decimal price as a string to avoid floating-point issues, e.g. "3000"
    #[schema(example = "3000")]
    pub price: String,
}

impl From<Item> for ItemResponse {
    fn from(i: Item) -> Self {
        ItemResponse {
            id: i.id,
            name: i.name,
            description: i.description,
            price: i.price.to_string(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/v1/items
///
/// An empty page is a 200 with `[]`.
#[utoipa::path(
    get,
    path = "/api/v1/items",
    params(PageParams),
    responses(
        (status = 200, description = "A page of items", body = Vec<ItemResponse>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorBody),
    ),
    tag = "Items"
)]
pub async fn list_items(
    service: web::Data<Items>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let page = query.into_inner().into_request()?;

    let result = web::block(move || service.list_items(page)).await??;

    Ok(list_response::<_, ItemResponse>(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{id}",
    params(IdPath),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorBody),
    ),
    tag = "Items"
)]
pub async fn get_item(
    service: web::Data<Items>,
    path: web::Path<IdPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner().into_id()?;

    let item = web::block(move || service.get_item(id)).await??;

    Ok(HttpResponse::Ok().json(ItemResponse::from(item)))
}

#[utoipa::path(
    post,
    path = "/api/v1/items",
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
    ),
    tag = "Items"
)]
pub async fn create_item(
    service: web::Data<Items>,
    body: web::Json<ItemRequest>,
) -> Result<HttpResponse, AppError> {
    let input = ItemInput::from(validated(body.into_inner())?);

    let item = web::block(move || service.create_item(input)).await??;

    Ok(HttpResponse::Created().json(ItemResponse::from(item)))
}

#[utoipa::path(
    put,
    path = "/api/v1/items/{id}",
    params(IdPath),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Item not found", body = ErrorBody),
    ),
    tag = "Items"
)]
pub async fn update_item(
    service: web::Data<Items>,
    path: web::Path<IdPath>,
    body: web::Json<ItemRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner().into_id()?;
    let input = ItemInput::from(validated(body.into_inner())?);

    let item = web::block(move || service.update_item(id, input)).await??;

    Ok(HttpResponse::Ok().json(ItemResponse::from(item)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/items/{id}",
    params(IdPath),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorBody),
        (status = 409, description = "Item is referenced by orders", body = ErrorBody),
    ),
    tag = "Items"
)]
pub async fn delete_item(
    service: web::Data<Items>,
    path: web::Path<IdPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner().into_id()?;

    web::block(move || service.delete_item(id)).await??;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn price_accepts_numbers_and_strings() {
        let from_number: ItemRequest =
            serde_json::from_str(r#"{"name":"iPhone 15","price":3000}"#).unwrap();
        let from_string: ItemRequest =
            serde_json::from_str(r#"{"name":"iPhone 15","price":"3000"}"#).unwrap();

        assert_eq!(from_number.price, BigDecimal::from(3000));
        assert_eq!(from_string.price, from_number.price);
        assert!(from_number.description.is_none());
    }

    #[test]
    fn fractional_json_number_keeps_its_written_digits() {
        let req: ItemRequest =
            serde_json::from_str(r#"{"name":"Cable","price":19.99}"#).unwrap();

        assert_eq!(req.price, BigDecimal::from_str("19.99").unwrap());

        let resp = ItemResponse::from(Item {
            id: 1,
            name: req.name,
            description: req.description,
            price: req.price,
        });
        assert_eq!(resp.price, "19.99");
    }

    #[test]
    fn non_numeric_price_text_is_rejected() {
        let err = serde_json::from_str::<ItemRequest>(r#"{"name":"Cable","price":"cheap"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid decimal 'cheap'"), "{err}");
    }

    #[test]
    fn zero_and_negative_prices_are_rejected() {
        for price in ["0", "-1.50"] {
            let req = ItemRequest {
                name: "Cable".to_string(),
                description: None,
                price: BigDecimal::from_str(price).unwrap(),
            };
            let err = validated(req).unwrap_err();
            assert!(
                matches!(err, AppError::Validation(ref m) if m == "price: must be greater than 0"),
                "{price}: {err:?}"
            );
        }
    }

    #[test]
    fn response_renders_price_as_decimal_string() {
        let resp = ItemResponse::from(Item {
            id: 1,
            name: "Cable".to_string(),
            description: None,
            price: BigDecimal::from_str("9.99").unwrap(),
        });
        assert_eq!(resp.price, "9.99");
    }
}
