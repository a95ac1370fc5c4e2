use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::errors::DomainError;

pub mod client_repo;
pub mod item_repo;
pub mod models;
pub mod order_repo;

#[cfg(test)]
pub(crate) mod test_support;

pub use client_repo::DieselClientRepository;
pub use item_repo::DieselItemRepository;
pub use order_repo::DieselOrderRepository;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<DieselError> for DomainError {
    fn from(e: DieselError) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Name of the violated foreign key, when `err` is a foreign-key violation.
pub(crate) fn foreign_key_violation(err: &DieselError) -> Option<&str> {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            Some(info.constraint_name().unwrap_or_default())
        }
        _ => None,
    }
}
