pub mod age;
pub mod draft;
pub mod filter;
pub mod store;
