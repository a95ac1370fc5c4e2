use diesel::prelude::*;
use diesel::result::Error as DieselError;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderInput, OrderView};
use crate::domain::page::{ListResult, PageRequest};
use crate::domain::ports::OrderRepository;
use crate::schema::{clients, items, orders};

use super::foreign_key_violation;
use super::models::{into_view, ClientRow, ItemRow, OrderJoinRow, OrderRow, OrderValues};

/// Maps a foreign-key failure on insert/update to the reference that vanished.
fn missing_reference(err: DieselError, input: &OrderInput) -> DomainError {
    match foreign_key_violation(&err) {
        Some(constraint) if constraint.contains("item") => DomainError::item_not_found(input.item_id),
        Some(_) => DomainError::client_not_found(input.client_id),
        None => err.into(),
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(&self, input: &OrderInput) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(orders::table)
            .values(&OrderValues::from(input))
            .returning(OrderRow::as_returning())
            .get_result(&mut conn)
            .map_err(|e| missing_reference(e, input))?;

        Ok(row.into())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = orders::table
            .find(id)
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Order::from))
    }

    fn find_view(&self, id: i64) -> Result<Option<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = orders::table
            .inner_join(clients::table)
            .inner_join(items::table)
            .filter(orders::id.eq(id))
            .select((
                OrderRow::as_select(),
                ClientRow::as_select(),
                ItemRow::as_select(),
            ))
            .first::<OrderJoinRow>(&mut conn)
            .optional()?;

        Ok(row.map(into_view))
    }

    fn list(&self, page: PageRequest) -> Result<ListResult<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let total: i64 = orders::table.count().get_result(conn)?;

            let rows = orders::table
                .inner_join(clients::table)
                .inner_join(items::table)
                .select((
                    OrderRow::as_select(),
                    ClientRow::as_select(),
                    ItemRow::as_select(),
                ))
                .order(orders::id.asc())
                .limit(page.size())
                .offset(page.offset())
                .load::<OrderJoinRow>(conn)?;

            Ok(ListResult {
                items: rows.into_iter().map(into_view).collect(),
                total,
            })
        })
    }

    fn list_by_client(
        &self,
        client_id: i64,
        page: PageRequest,
    ) -> Result<ListResult<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let total: i64 = orders::table
                .filter(orders::client_id.eq(client_id))
                .count()
                .get_result(conn)?;

            let rows = orders::table
                .inner_join(clients::table)
                .inner_join(items::table)
                .filter(orders::client_id.eq(client_id))
                .select((
                    OrderRow::as_select(),
                    ClientRow::as_select(),
                    ItemRow::as_select(),
                ))
                .order(orders::id.asc())
                .limit(page.size())
                .offset(page.offset())
                .load::<OrderJoinRow>(conn)?;

            Ok(ListResult {
                items: rows.into_iter().map(into_view).collect(),
                total,
            })
        })
    }

    fn update(&self, id: i64, input: &OrderInput) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::update(orders::table.find(id))
            .set(&OrderValues::from(input))
            .returning(OrderRow::as_returning())
            .get_result(&mut conn)
            .optional()
            .map_err(|e| missing_reference(e, input))?;

        Ok(row.map(Order::from))
    }

    fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::delete(orders::table.find(id)).execute(&mut conn)?;

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::DieselOrderRepository;
    use crate::db::DbPool;
    use crate::domain::client::{Client, ClientInput};
    use crate::domain::errors::DomainError;
    use crate::domain::item::Item;
    use crate::domain::order::OrderInput;
    use crate::domain::page::PageRequest;
    use crate::domain::ports::{ClientRepository, ItemRepository, OrderRepository};
    use crate::infrastructure::test_support::{sample_item, setup_db};
    use crate::infrastructure::{DieselClientRepository, DieselItemRepository};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, day).expect("valid date")
    }

    fn seed(pool: &DbPool, name: &str) -> (Client, Item) {
        let client = DieselClientRepository::new(pool.clone())
            .create(&ClientInput {
                name: name.to_string(),
                address: None,
                age: 30,
            })
            .expect("client create failed");
        let item = DieselItemRepository::new(pool.clone())
            .create(&sample_item("Keyboard", "59.90"))
            .expect("item create failed");
        (client, item)
    }

    fn order_for(client: &Client, item: &Item) -> OrderInput {
        OrderInput {
            client_id: client.id,
            item_id: item.id,
            purchase_date: date(4),
            delivery_date: date(10),
        }
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn find_view_embeds_client_and_item() {
        let (_container, pool) = setup_db().await;
        let (client, item) = seed(&pool, "Daniel Vargas");
        let repo = DieselOrderRepository::new(pool);

        let order = repo.create(&order_for(&client, &item)).expect("create failed");
        let view = repo
            .find_view(order.id)
            .expect("find failed")
            .expect("order should exist");

        assert_eq!(view.id, order.id);
        assert_eq!(view.client, client);
        assert_eq!(view.item, item);
        assert_eq!(view.purchase_date, date(4));
        assert_eq!(view.delivery_date, date(10));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn find_returns_none_for_unknown_id() {
        let (_container, pool) = setup_db().await;
        let repo = DieselOrderRepository::new(pool);

        assert!(repo.find_by_id(42).expect("find failed").is_none());
        assert!(repo.find_view(42).expect("find failed").is_none());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn create_with_dangling_item_reports_the_item() {
        let (_container, pool) = setup_db().await;
        let (client, item) = seed(&pool, "Alice");
        let repo = DieselOrderRepository::new(pool);

        let mut input = order_for(&client, &item);
        input.item_id = item.id + 1000;
        let err = repo.create(&input).expect_err("insert should fail");

        match err {
            DomainError::NotFound(msg) => assert!(msg.contains("Item"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn list_by_client_only_returns_that_clients_orders() {
        let (_container, pool) = setup_db().await;
        let (alice, item) = seed(&pool, "Alice");
        let (bob, _) = seed(&pool, "Bob");
        let repo = DieselOrderRepository::new(pool);

        for _ in 0..3 {
            repo.create(&order_for(&alice, &item)).expect("create failed");
        }
        repo.create(&order_for(&bob, &item)).expect("create failed");

        let page = repo
            .list_by_client(alice.id, PageRequest::new(0, 2).unwrap())
            .expect("list failed");
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        assert!(page.items.iter().all(|o| o.client.id == alice.id));

        let empty = repo
            .list_by_client(bob.id + 1000, PageRequest::new(0, 10).unwrap())
            .expect("list failed");
        assert_eq!(empty.total, 0);
        assert!(empty.items.is_empty());

        let all = repo.list(PageRequest::new(0, 10).unwrap()).expect("list failed");
        assert_eq!(all.total, 4);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn update_replaces_references_and_dates() {
        let (_container, pool) = setup_db().await;
        let (alice, item) = seed(&pool, "Alice");
        let (bob, other_item) = seed(&pool, "Bob");
        let repo = DieselOrderRepository::new(pool);
        let order = repo.create(&order_for(&alice, &item)).expect("create failed");

        let updated = repo
            .update(
                order.id,
                &OrderInput {
                    client_id: bob.id,
                    item_id: other_item.id,
                    purchase_date: date(12),
                    delivery_date: date(20),
                },
            )
            .expect("update failed")
            .expect("order should exist");

        assert_eq!(updated.client_id, bob.id);
        assert_eq!(updated.item_id, other_item.id);
        assert_eq!(updated.purchase_date, date(12));
        assert_eq!(updated.delivery_date, date(20));
        assert!(repo
            .update(order.id + 1000, &order_for(&alice, &item))
            .expect("update failed")
            .is_none());
    }
}
