use chrono::NaiveDate;

use super::client::Client;
use super::item::Item;

/// An order row with bare foreign keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    pub item_id: i64,
    pub purchase_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderInput {
    pub client_id: i64,
    pub item_id: i64,
    pub purchase_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

/// Order fields a client may change on one of its own orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOrderInput {
    pub item_id: i64,
    pub purchase_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

impl ClientOrderInput {
    pub fn for_client(self, client_id: i64) -> OrderInput {
        OrderInput {
            client_id,
            item_id: self.item_id,
            purchase_date: self.purchase_date,
            delivery_date: self.delivery_date,
        }
    }
}

/// An order with its client and item resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderView {
    pub id: i64,
    pub client: Client,
    pub item: Item,
    pub purchase_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

impl OrderView {
    pub fn assemble(order: Order, client: Client, item: Item) -> Self {
        debug_assert_eq!(order.client_id, client.id);
        debug_assert_eq!(order.item_id, item.id);
        Self {
            id: order.id,
            client,
            item,
            purchase_date: order.purchase_date,
            delivery_date: order.delivery_date,
        }
    }

    pub fn is_owned_by(&self, client_id: i64) -> bool {
        self.client.id == client_id
    }
}

impl Order {
    pub fn is_owned_by(&self, client_id: i64) -> bool {
        self.client_id == client_id
    }
}
