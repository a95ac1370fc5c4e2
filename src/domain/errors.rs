use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn client_not_found(id: i64) -> Self {
        DomainError::NotFound(format!("Client not found with id {id}"))
    }

    pub fn item_not_found(id: i64) -> Self {
        DomainError::NotFound(format!("Item not found with id {id}"))
    }

    pub fn order_not_found(id: i64) -> Self {
        DomainError::NotFound(format!("Order not found with id {id}"))
    }

    pub fn order_not_owned(order_id: i64, client_id: i64) -> Self {
        DomainError::Forbidden(format!(
            "Order {order_id} does not belong to client {client_id}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_missing_id() {
        assert_eq!(
            DomainError::client_not_found(7).to_string(),
            "Client not found with id 7"
        );
        assert_eq!(
            DomainError::item_not_found(9).to_string(),
            "Item not found with id 9"
        );
        assert_eq!(
            DomainError::order_not_found(3).to_string(),
            "Order not found with id 3"
        );
    }

    #[test]
    fn ownership_message_names_order_and_client() {
        let err = DomainError::order_not_owned(4, 2);
        assert!(matches!(err, DomainError::Forbidden(_)));
        assert_eq!(err.to_string(), "Order 4 does not belong to client 2");
    }
}
