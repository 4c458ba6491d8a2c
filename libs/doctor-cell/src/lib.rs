pub mod handlers;
pub mod router;
pub mod models;
pub mod seed;
pub mod services;

// Re-export all models and services for external use
pub use models::*;
pub use services::*;
pub use router::doctor_routes;
