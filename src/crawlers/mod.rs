pub mod crawler;
pub mod web;

pub use crawler::{PageSource, StaticSource};
pub use web::WebSource;
