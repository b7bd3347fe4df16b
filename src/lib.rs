// AnimalDex Web - server-rendered frontend for the AnimalDex catalog

// Wire records and canvas records
pub mod models;

// Core types and primitives
pub mod core;

// API access and session storage
pub mod infrastructure;

// Page controllers
pub mod views;

// Hand-authored static content
pub mod content;

// HTML and SVG rendering
pub mod render;

// HTTP routes
pub mod web;

// Common utilities
pub mod app_state;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use app_state::AppState;
pub use error::{AppError, AppResult};
