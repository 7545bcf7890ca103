// Infrastructure layer (shared components)
pub mod config;
pub mod error;
pub mod metrics;

// Domain layer (business logic)
pub mod dispatch;
pub mod notifier;
pub mod phone;
pub mod renderer;
pub mod template;

// Application layer
pub mod api;
pub mod server;
