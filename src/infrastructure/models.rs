use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::client::{Client, ClientInput};
use crate::domain::item::{Item, ItemInput};
use crate::domain::order::{Order, OrderInput, OrderView};
use crate::schema::{clients, items, orders};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = clients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ClientRow {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub age: i32,
}

/// Column values for inserts and full-replace updates. `None` writes NULL.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = clients)]
#[diesel(treat_none_as_null = true)]
pub struct ClientValues<'a> {
    pub name: &'a str,
    pub address: Option<&'a str>,
    pub age: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = items)]
#[diesel(treat_none_as_null = true)]
pub struct ItemValues<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: &'a BigDecimal,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i64,
    pub client_id: i64,
    pub item_id: i64,
    pub purchase_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = orders)]
pub struct OrderValues {
    pub client_id: i64,
    pub item_id: i64,
    pub purchase_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

// ── Row <-> domain conversions ───────────────────────────────────────────────

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Client {
            id: row.id,
            name: row.name,
            address: row.address,
            age: row.age,
        }
    }
}

impl<'a> From<&'a ClientInput> for ClientValues<'a> {
    fn from(input: &'a ClientInput) -> Self {
        ClientValues {
            name: &input.name,
            address: input.address.as_deref(),
            age: input.age,
        }
    }
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
        }
    }
}

impl<'a> From<&'a ItemInput> for ItemValues<'a> {
    fn from(input: &'a ItemInput) -> Self {
        ItemValues {
            name: &input.name,
            description: input.description.as_deref(),
            price: &input.price,
        }
    }
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: row.id,
            client_id: row.client_id,
            item_id: row.item_id,
            purchase_date: row.purchase_date,
            delivery_date: row.delivery_date,
        }
    }
}

impl From<&OrderInput> for OrderValues {
    fn from(input: &OrderInput) -> Self {
        OrderValues {
            client_id: input.client_id,
            item_id: input.item_id,
            purchase_date: input.purchase_date,
            delivery_date: input.delivery_date,
        }
    }
}

/// Shape of the `orders ⋈ clients ⋈ items` join.
pub type OrderJoinRow = (OrderRow, ClientRow, ItemRow);

pub fn into_view((order, client, item): OrderJoinRow) -> OrderView {
    OrderView::assemble(order.into(), client.into(), item.into())
}
