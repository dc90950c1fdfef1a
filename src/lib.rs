pub mod app;
pub mod attendance;
pub mod classify;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod members;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;
pub mod visitors;
pub mod week;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{DocumentStore, JsonStore};
