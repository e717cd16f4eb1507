pub mod api;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod services;
