use utoipa::OpenApi;

use crate::errors::ErrorBody;
use crate::handlers::client_orders::{self, ClientOrderRequest};
use crate::handlers::clients::{self, ClientRequest, ClientResponse};
use crate::handlers::items::{self, ItemRequest, ItemResponse};
use crate::handlers::orders::{self, OrderRequest, OrderResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop API",
        description = "Clients, items and the orders that link them"
    ),
    paths(
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::delete_order,
        client_orders::list_client_orders,
        client_orders::get_client_order,
        client_orders::create_client_order,
        client_orders::update_client_order,
        client_orders::delete_client_order,
    ),
    components(schemas(
        ClientRequest,
        ClientResponse,
        ItemRequest,
        ItemResponse,
        OrderRequest,
        OrderResponse,
        ClientOrderRequest,
        ErrorBody,
    )),
    tags(
        (name = "Clients", description = "Client management"),
        (name = "Items", description = "Catalog items"),
        (name = "Orders", description = "Orders across all clients"),
        (name = "Client orders", description = "Orders scoped to one owning client"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/v1/clients",
            "/api/v1/clients/{id}",
            "/api/v1/clients/{client_id}/orders",
            "/api/v1/clients/{client_id}/orders/{order_id}",
            "/api/v1/items",
            "/api/v1/items/{id}",
            "/api/v1/orders",
            "/api/v1/orders/{id}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
        assert_eq!(doc.info.title, "Shop API");
    }
}
