pub mod dashboard;
pub mod export;
pub mod health;
pub mod questionnaires;
pub mod sessions;
