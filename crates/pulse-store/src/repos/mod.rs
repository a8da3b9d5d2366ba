//! Repository modules for the ConceptPulse tables.
//!
//! Each module adds methods to `PulseStore` via `impl PulseStore` blocks.

pub mod attempt;
pub mod learning;
pub mod mastery;
pub mod profile;
pub mod question;
pub mod timetable;
pub mod topic;
pub mod weak_spot;
