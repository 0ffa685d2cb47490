pub mod app;
pub mod conjugation;
pub mod data;
pub mod judge;
pub mod model;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::DrillApp;
