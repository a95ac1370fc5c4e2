#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub age: i32,
}

/// Mutable client attributes. Used for both inserts and full-replace updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInput {
    pub name: String,
    pub address: Option<String>,
    pub age: i32,
}
