pub mod index;
pub mod models;
pub mod plan;
