//! zentrack-core
//!
//! Pure domain types shared by the ZenTrack crates: severity and stress
//! classification, score results, therapy recommendations, the rolling
//! trend series and score-history analytics. No I/O happens here.

pub mod error;
pub mod models;
