pub mod catalog;
pub mod memory;
pub mod models;
pub mod seed;
pub mod store;
