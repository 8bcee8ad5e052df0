pub mod browser;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod notifications;
