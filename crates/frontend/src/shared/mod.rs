pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod dom_validator;
pub mod icons;
pub mod state;
pub mod update_loader;
