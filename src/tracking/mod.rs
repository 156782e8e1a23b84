//! Dashboard computations: per-day aggregation, feedback text, goal
//! progress, medication adherence and appointment timelines.

pub mod adherence;
pub mod aggregator;
pub mod appointments;
pub mod dashboards;
pub mod feedback;
pub mod goal_progress;
pub mod validation;
pub mod windows;
