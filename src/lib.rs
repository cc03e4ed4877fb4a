pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod infrastructure;
pub mod models;
