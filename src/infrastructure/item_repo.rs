use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::item::{Item, ItemInput};
use crate::domain::page::{ListResult, PageRequest};
use crate::domain::ports::ItemRepository;
use crate::schema::items;

use super::foreign_key_violation;
use super::models::{ItemRow, ItemValues};

#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ItemRepository for DieselItemRepository {
    fn create(&self, input: &ItemInput) -> Result<Item, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(items::table)
            .values(&ItemValues::from(input))
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = items::table
            .find(id)
            .select(ItemRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Item::from))
    }

    fn list(&self, page: PageRequest) -> Result<ListResult<Item>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let total: i64 = items::table.count().get_result(conn)?;

            let rows = items::table
                .select(ItemRow::as_select())
                .order(items::id.asc())
                .limit(page.size())
                .offset(page.offset())
                .load(conn)?;

            Ok(ListResult {
                items: rows.into_iter().map(Item::from).collect(),
                total,
            })
        })
    }

    fn update(&self, id: i64, input: &ItemInput) -> Result<Option<Item>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::update(items::table.find(id))
            .set(&ItemValues::from(input))
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .optional()?;

        Ok(row.map(Item::from))
    }

    fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        match diesel::delete(items::table.find(id)).execute(&mut conn) {
            Ok(affected) => Ok(affected > 0),
            Err(e) if foreign_key_violation(&e).is_some() => Err(DomainError::Conflict(format!(
                "Item {id} is still referenced by orders and cannot be deleted"
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
