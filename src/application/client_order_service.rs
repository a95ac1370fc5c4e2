use crate::domain::errors::DomainError;
use crate::domain::order::{ClientOrderInput, Order, OrderView};
use crate::domain::page::{ListResult, PageRequest};
use crate::domain::ports::{ClientRepository, ItemRepository, OrderRepository};

use super::{resolve_client, resolve_item};

/// Orders addressed through the client that owns them.
///
/// Every single-order operation re-checks ownership against the stored row:
/// an order that exists under another client is `Forbidden`, an order that
/// does not exist at all is `NotFound`.
pub struct ClientOrderService<C, I, O> {
    clients: C,
    items: I,
    orders: O,
}

impl<C, I, O> ClientOrderService<C, I, O>
where
    C: ClientRepository,
    I: ItemRepository,
    O: OrderRepository,
{
    pub fn new(clients: C, items: I, orders: O) -> Self {
        Self {
            clients,
            items,
            orders,
        }
    }

    /// A known client without orders yields an empty page; an unknown client is `NotFound`.
    pub fn list_client_orders(
        &self,
        client_id: i64,
        page: PageRequest,
    ) -> Result<ListResult<OrderView>, DomainError> {
        if !self.clients.exists(client_id)? {
            return Err(DomainError::client_not_found(client_id));
        }
        self.orders.list_by_client(client_id, page)
    }

    pub fn get_client_order(&self, client_id: i64, order_id: i64) -> Result<OrderView, DomainError> {
        let view = self
            .orders
            .find_view(order_id)?
            .ok_or_else(|| DomainError::order_not_found(order_id))?;

        if !view.is_owned_by(client_id) {
            return Err(rejected(order_id, client_id));
        }
        Ok(view)
    }

    pub fn create_client_order(
        &self,
        client_id: i64,
        input: ClientOrderInput,
    ) -> Result<OrderView, DomainError> {
        let client = resolve_client(&self.clients, client_id)?;
        let item = resolve_item(&self.items, input.item_id)?;

        let order = self.orders.create(&input.for_client(client_id))?;
        Ok(OrderView::assemble(order, client, item))
    }

    /// Replaces the item and both dates. The owning client never changes here.
    pub fn update_client_order(
        &self,
        client_id: i64,
        order_id: i64,
        input: ClientOrderInput,
    ) -> Result<OrderView, DomainError> {
        let existing = self.owned_order(client_id, order_id)?;
        let item = resolve_item(&self.items, input.item_id)?;
        let client = resolve_client(&self.clients, existing.client_id)?;

        let order = self
            .orders
            .update(order_id, &input.for_client(existing.client_id))?
            .ok_or_else(|| DomainError::order_not_found(order_id))?;
        Ok(OrderView::assemble(order, client, item))
    }

    pub fn delete_client_order(&self, client_id: i64, order_id: i64) -> Result<(), DomainError> {
        self.owned_order(client_id, order_id)?;

        if self.orders.delete(order_id)? {
            Ok(())
        } else {
            Err(DomainError::order_not_found(order_id))
        }
    }

    fn owned_order(&self, client_id: i64, order_id: i64) -> Result<Order, DomainError> {
        let order = self
            .orders
            .find_by_id(order_id)?
            .ok_or_else(|| DomainError::order_not_found(order_id))?;

        if !order.is_owned_by(client_id) {
            return Err(rejected(order_id, client_id));
        }
        Ok(order)
    }
}

fn rejected(order_id: i64, client_id: i64) -> DomainError {
    log::warn!("client {client_id} attempted to access order {order_id} owned by another client");
    DomainError::order_not_owned(order_id, client_id)
}
