pub mod adapters;
pub mod configuration;
pub mod core;
pub mod seed_data;
pub mod utils;
