//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`, `strum`, `thiserror`).
//! Keep it lean: no I/O, networking, or heavy logic, only data and simple helpers.

pub mod config;
pub mod constants;
pub mod mapping;
pub mod objects;
pub mod verticals;
