pub mod health;
pub mod sales;

pub use sales::{SalesQuery, apply_filters};
