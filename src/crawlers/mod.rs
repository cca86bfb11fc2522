pub mod crawler;
pub mod web;

pub use crawler::Renderer;
pub use web::WebDriverRenderer;
