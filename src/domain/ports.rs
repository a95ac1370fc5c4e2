use super::client::{Client, ClientInput};
use super::errors::DomainError;
use super::item::{Item, ItemInput};
use super::order::{Order, OrderInput, OrderView};
use super::page::{ListResult, PageRequest};

#[cfg_attr(test, mockall::automock)]
pub trait ClientRepository: Send + Sync + 'static {
    fn create(&self, input: &ClientInput) -> Result<Client, DomainError>;
    fn find_by_id(&self, id: i64) -> Result<Option<Client>, DomainError>;
    fn exists(&self, id: i64) -> Result<bool, DomainError>;
    fn list(&self, page: PageRequest) -> Result<ListResult<Client>, DomainError>;
    /// Overwrites every mutable column. Returns `None` when no row has `id`.
    fn update(&self, id: i64, input: &ClientInput) -> Result<Option<Client>, DomainError>;
    /// Returns `false` when no row has `id`.
    fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ItemRepository: Send + Sync + 'static {
    fn create(&self, input: &ItemInput) -> Result<Item, DomainError>;
    fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError>;
    fn list(&self, page: PageRequest) -> Result<ListResult<Item>, DomainError>;
    fn update(&self, id: i64, input: &ItemInput) -> Result<Option<Item>, DomainError>;
    fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait OrderRepository: Send + Sync + 'static {
    fn create(&self, input: &OrderInput) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;
    /// Loads the order joined with its client and item.
    fn find_view(&self, id: i64) -> Result<Option<OrderView>, DomainError>;
    fn list(&self, page: PageRequest) -> Result<ListResult<OrderView>, DomainError>;
    fn list_by_client(
        &self,
        client_id: i64,
        page: PageRequest,
    ) -> Result<ListResult<OrderView>, DomainError>;
    fn update(&self, id: i64, input: &OrderInput) -> Result<Option<Order>, DomainError>;
    fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
