pub mod analytics;
pub mod history;
pub mod recommendation;
pub mod score;
pub mod severity;
pub mod trend;
