pub mod hit_detection;
pub mod pin_renderer;
pub mod route_renderer;
mod renderer;

pub use renderer::render_map;
