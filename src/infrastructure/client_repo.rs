use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::client::{Client, ClientInput};
use crate::domain::errors::DomainError;
use crate::domain::page::{ListResult, PageRequest};
use crate::domain::ports::ClientRepository;
use crate::schema::clients;

use super::foreign_key_violation;
use super::models::{ClientRow, ClientValues};

#[derive(Clone)]
pub struct DieselClientRepository {
    pool: DbPool,
}

impl DieselClientRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ClientRepository for DieselClientRepository {
    fn create(&self, input: &ClientInput) -> Result<Client, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(clients::table)
            .values(&ClientValues::from(input))
            .returning(ClientRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Client>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = clients::table
            .find(id)
            .select(ClientRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Client::from))
    }

    fn exists(&self, id: i64) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let found = diesel::select(diesel::dsl::exists(clients::table.find(id)))
            .get_result(&mut conn)?;

        Ok(found)
    }

    fn list(&self, page: PageRequest) -> Result<ListResult<Client>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let total: i64 = clients::table.count().get_result(conn)?;

            let rows = clients::table
                .select(ClientRow::as_select())
                .order(clients::id.asc())
                .limit(page.size())
                .offset(page.offset())
                .load(conn)?;

            Ok(ListResult {
                items: rows.into_iter().map(Client::from).collect(),
                total,
            })
        })
    }

    fn update(&self, id: i64, input: &ClientInput) -> Result<Option<Client>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::update(clients::table.find(id))
            .set(&ClientValues::from(input))
            .returning(ClientRow::as_returning())
            .get_result(&mut conn)
            .optional()?;

        Ok(row.map(Client::from))
    }

    fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        match diesel::delete(clients::table.find(id)).execute(&mut conn) {
            Ok(affected) => Ok(affected > 0),
            Err(e) if foreign_key_violation(&e).is_some() => Err(DomainError::Conflict(format!(
                "Client {id} still has orders and cannot be deleted"
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
