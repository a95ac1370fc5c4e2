use super::errors::DomainError;

/// Zero-based page request whose row offset always fits in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
    offset: i64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Result<Self, DomainError> {
        let offset = page.checked_mul(size).ok_or_else(|| {
            DomainError::InvalidInput(format!("page: {page} is out of range for size {size}"))
        })?;
        Ok(Self { page, size, offset })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

#[derive(Debug, Clone)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total: i64,
}

#[cfg(test)]
impl<T> ListResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(PageRequest::new(0, 10).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3, 25).unwrap().offset(), 75);
    }

    #[test]
    fn offset_past_i64_is_invalid_input() {
        let err = PageRequest::new(100_000_000_000_000_000, 100).unwrap_err();
        match err {
            DomainError::InvalidInput(msg) => {
                assert_eq!(msg, "page: 100000000000000000 is out of range for size 100")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
