pub mod app;
pub mod checkin;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod goals;
pub mod handlers;
pub mod mock_data;
pub mod models;
pub mod stats;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use dashboard::{Dashboard, DashboardEvent};
pub use state::AppState;
