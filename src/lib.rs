pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod increment;
pub mod models;
pub mod refresh;
pub mod scheduler;
pub mod surface;
pub mod terminal;
pub mod time_format;
pub mod ui;

pub use api::ApiClient;
pub use app::dashboard;
pub use config::DashboardConfig;
pub use errors::ApiError;
pub use scheduler::RefreshScheduler;
pub use surface::{MemorySurface, Surface};
