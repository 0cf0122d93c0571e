pub mod activity;
pub mod types;
