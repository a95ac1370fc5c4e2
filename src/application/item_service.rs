use crate::domain::errors::DomainError;
use crate::domain::item::{Item, ItemInput};
use crate::domain::page::{ListResult, PageRequest};
use crate::domain::ports::ItemRepository;

use super::resolve_item;

pub struct ItemService<R> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// An empty page is returned as-is, same as for clients and orders.
    pub fn list_items(&self, page: PageRequest) -> Result<ListResult<Item>, DomainError> {
        self.repo.list(page)
    }

    pub fn get_item(&self, id: i64) -> Result<Item, DomainError> {
        resolve_item(&self.repo, id)
    }

    pub fn create_item(&self, input: ItemInput) -> Result<Item, DomainError> {
        self.repo.create(&input)
    }

    pub fn update_item(&self, id: i64, input: ItemInput) -> Result<Item, DomainError> {
        self.repo
            .update(id, &input)?
            .ok_or_else(|| DomainError::item_not_found(id))
    }

    pub fn delete_item(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.delete(id)? {
            Ok(())
        } else {
            Err(DomainError::item_not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::ports::MockItemRepository;

    fn iphone() -> Item {
        Item {
            id: 2,
            name: "iPhone 15".to_string(),
            description: None,
            price: BigDecimal::from(3000),
        }
    }

    #[test]
    fn empty_item_page_is_returned_without_error() {
        let mut repo = MockItemRepository::new();
        repo.expect_list()
            .with(eq(PageRequest::new(0, 10).unwrap()))
            .returning(|_| Ok(ListResult::empty()));
        let service = ItemService::new(repo);

        let page = service.list_items(PageRequest::new(0, 10).unwrap()).unwrap();

        assert!(page.items.is_empty());
    }

    #[test]
    fn get_item_returns_the_row() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_id()
            .with(eq(2))
            .returning(|_| Ok(Some(iphone())));
        let service = ItemService::new(repo);

        assert_eq!(service.get_item(2).unwrap(), iphone());
    }

    #[test]
    fn update_and_delete_of_missing_item_are_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));
        repo.expect_delete().returning(|_| Ok(false));
        let service = ItemService::new(repo);
        let input = ItemInput {
            name: "x".to_string(),
            description: None,
            price: BigDecimal::from(1),
        };

        assert!(matches!(
            service.update_item(9, input),
            Err(DomainError::NotFound(ref m)) if m == "Item not found with id 9"
        ));
        assert!(matches!(
            service.delete_item(9),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn repository_failures_propagate() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(DomainError::Internal("pool timed out".to_string())));
        let service = ItemService::new(repo);

        assert!(matches!(service.get_item(1), Err(DomainError::Internal(_))));
    }
}
