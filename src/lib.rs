pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod favorites;
pub mod keepalive;
pub mod recipes;
pub mod state;
