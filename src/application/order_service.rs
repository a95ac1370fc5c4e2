use crate::domain::errors::DomainError;
use crate::domain::order::{OrderInput, OrderView};
use crate::domain::page::{ListResult, PageRequest};
use crate::domain::ports::{ClientRepository, ItemRepository, OrderRepository};

use super::{resolve_client, resolve_item};

/// Orders addressed by their own id, independent of any client scope.
pub struct OrderService<C, I, O> {
    clients: C,
    items: I,
    orders: O,
}

impl<C, I, O> OrderService<C, I, O>
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

    pub fn list_orders(&self, page: PageRequest) -> Result<ListResult<OrderView>, DomainError> {
        self.orders.list(page)
    }

    pub fn get_order(&self, id: i64) -> Result<OrderView, DomainError> {
        self.orders
            .find_view(id)?
            .ok_or_else(|| DomainError::order_not_found(id))
    }

    /// Both references are resolved before anything is written.
    pub fn create_order(&self, input: OrderInput) -> Result<OrderView, DomainError> {
        let client = resolve_client(&self.clients, input.client_id)?;
        let item = resolve_item(&self.items, input.item_id)?;

        let order = self.orders.create(&input)?;
        Ok(OrderView::assemble(order, client, item))
    }

    pub fn update_order(&self, id: i64, input: OrderInput) -> Result<OrderView, DomainError> {
        if self.orders.find_by_id(id)?.is_none() {
            return Err(DomainError::order_not_found(id));
        }
        let client = resolve_client(&self.clients, input.client_id)?;
        let item = resolve_item(&self.items, input.item_id)?;

        let order = self
            .orders
            .update(id, &input)?
            .ok_or_else(|| DomainError::order_not_found(id))?;
        Ok(OrderView::assemble(order, client, item))
    }

    pub fn delete_order(&self, id: i64) -> Result<(), DomainError> {
        if self.orders.delete(id)? {
            Ok(())
        } else {
            Err(DomainError::order_not_found(id))
        }
    }
}
