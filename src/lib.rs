pub mod app;
pub mod assets;
pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod renderer;
pub mod sim;

pub use app::run;
pub use config::Config;
pub use error::{GameError, Result};
