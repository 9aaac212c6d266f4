pub mod app;
pub mod cache;
pub mod clients;
pub mod config;
pub mod error;
pub mod resolver;
pub mod routes;
pub mod services;
pub mod state;
pub mod testing_utils;
