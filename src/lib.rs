pub mod components;
pub mod constants;
pub mod data;
pub mod geocode;
pub mod logging;
pub mod models;
pub mod projection;
pub mod theme;

pub use components::app::App;
