pub mod client;
pub mod errors;
pub mod item;
pub mod order;
pub mod page;
pub mod ports;
