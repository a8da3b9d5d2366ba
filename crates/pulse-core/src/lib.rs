//! # pulse-core
//!
//! Core types and error types for ConceptPulse.
//!
//! This crate provides the foundational types shared across all ConceptPulse crates:
//! - Entity structs mirroring datastore rows (attempts, topics, weak spots, etc.)
//! - Enums for weak-spot severity and learning formats
//! - Attempt aggregation (accuracy, mean time, mean confidence)
//! - Per-attempt mastery scoring
//! - Report and response types returned by the functions
//! - Cross-cutting error types

pub mod aggregate;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod mastery;
pub mod responses;
