pub mod error;
pub mod loader;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod projector;
pub mod report;
