use crate::domain::client::Client;
use crate::domain::errors::DomainError;
use crate::domain::item::Item;
use crate::domain::ports::{ClientRepository, ItemRepository};

pub mod client_order_service;
pub mod client_service;
pub mod item_service;
pub mod order_service;

pub use client_order_service::ClientOrderService;
pub use client_service::ClientService;
pub use item_service::ItemService;
pub use order_service::OrderService;

/// Loads the client an order refers to, or fails naming the missing id.
pub(crate) fn resolve_client<C: ClientRepository>(
    clients: &C,
    client_id: i64,
) -> Result<Client, DomainError> {
    clients
        .find_by_id(client_id)?
        .ok_or_else(|| DomainError::client_not_found(client_id))
}

/// Loads the item an order refers to, or fails naming the missing id.
pub(crate) fn resolve_item<I: ItemRepository>(
    items: &I,
    item_id: i64,
) -> Result<Item, DomainError> {
    items
        .find_by_id(item_id)?
        .ok_or_else(|| DomainError::item_not_found(item_id))
}
