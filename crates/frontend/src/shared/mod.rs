pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod features;
pub mod icons;
pub mod settings;
pub mod theme;
