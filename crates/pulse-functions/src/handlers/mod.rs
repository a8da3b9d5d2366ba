//! One module per function. Each exposes a request type and `run`.

pub mod analyze_weakspots;
pub mod generate_learning;
pub mod generate_mindmap;
pub mod generate_questions;
pub mod generate_recall_drill;
pub mod generate_timetable;
pub mod process_ocr;
pub mod submit_attempt;
