pub mod api;
pub mod config;
pub mod proxy;
pub mod state;
