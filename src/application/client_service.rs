use crate::domain::client::{Client, ClientInput};
use crate::domain::errors::DomainError;
use crate::domain::page::{ListResult, PageRequest};
use crate::domain::ports::ClientRepository;

use super::resolve_client;

pub struct ClientService<R> {
    repo: R,
}

impl<R: ClientRepository> ClientService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_clients(&self, page: PageRequest) -> Result<ListResult<Client>, DomainError> {
        self.repo.list(page)
    }

    pub fn get_client(&self, id: i64) -> Result<Client, DomainError> {
        resolve_client(&self.repo, id)
    }

    pub fn create_client(&self, input: ClientInput) -> Result<Client, DomainError> {
        self.repo.create(&input)
    }

    pub fn update_client(&self, id: i64, input: ClientInput) -> Result<Client, DomainError> {
        self.repo
            .update(id, &input)?
            .ok_or_else(|| DomainError::client_not_found(id))
    }

    /// Fails with `Conflict` while any order still references the client.
    pub fn delete_client(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.delete(id)? {
            Ok(())
        } else {
            Err(DomainError::client_not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::ports::MockClientRepository;

    fn daniel() -> Client {
        Client {
            id: 1,
            name: "Daniel Vargas".to_string(),
            address: Some("Street 5".to_string()),
            age: 23,
        }
    }

    fn input() -> ClientInput {
        ClientInput {
            name: "Daniel Vargas".to_string(),
            address: Some("Street 5".to_string()),
            age: 23,
        }
    }

    #[test]
    fn create_returns_the_stored_client() {
        let mut repo = MockClientRepository::new();
        repo.expect_create()
            .withf(|i| i.name == "Daniel Vargas" && i.age == 23)
            .times(1)
            .returning(|_| Ok(daniel()));
        let service = ClientService::new(repo);

        let client = service.create_client(input()).unwrap();

        assert_eq!(client, daniel());
    }

    #[test]
    fn get_unknown_client_is_not_found() {
        let mut repo = MockClientRepository::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .returning(|_| Ok(None));
        let service = ClientService::new(repo);

        let err = service.get_client(5).unwrap_err();

        assert!(matches!(err, DomainError::NotFound(ref m) if m == "Client not found with id 5"));
    }

    #[test]
    fn update_of_missing_client_is_not_found() {
        let mut repo = MockClientRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));
        let service = ClientService::new(repo);

        let err = service.update_client(8, input()).unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn update_passes_every_field_through() {
        let mut repo = MockClientRepository::new();
        repo.expect_update()
            .withf(|id, i| *id == 1 && i.address.is_none() && i.age == 40 && i.name == "New")
            .returning(|id, i| {
                Ok(Some(Client {
                    id,
                    name: i.name.clone(),
                    address: i.address.clone(),
                    age: i.age,
                }))
            });
        let service = ClientService::new(repo);

        let updated = service
            .update_client(
                1,
                ClientInput {
                    name: "New".to_string(),
                    address: None,
                    age: 40,
                },
            )
            .unwrap();

        assert_eq!(updated.address, None);
        assert_eq!(updated.age, 40);
    }

    #[test]
    fn delete_of_missing_client_is_not_found() {
        let mut repo = MockClientRepository::new();
        repo.expect_delete().with(eq(3)).returning(|_| Ok(false));
        let service = ClientService::new(repo);

        assert!(matches!(
            service.delete_client(3),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn delete_blocked_by_orders_surfaces_conflict() {
        let mut repo = MockClientRepository::new();
        repo.expect_delete()
            .returning(|id| Err(DomainError::Conflict(format!("Client {id} still has orders"))));
        let service = ClientService::new(repo);

        assert!(matches!(
            service.delete_client(3),
            Err(DomainError::Conflict(_))
        ));
    }

    #[test]
    fn empty_page_is_not_an_error() {
        let mut repo = MockClientRepository::new();
        repo.expect_list().returning(|_| Ok(ListResult::empty()));
        let service = ClientService::new(repo);

        let page = service.list_clients(PageRequest::new(4, 10).unwrap()).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }
}
