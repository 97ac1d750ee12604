mod app;
mod effects;
mod logging;
mod widgets;

pub use app::{run_app, AppError};
