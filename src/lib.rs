//! Attendance & Leave Eligibility Engine
//!
//! This crate implements the attendance and leave rules of an HR
//! administration system: daily status resolution (holiday / leave /
//! week-off / attendance-derived), a clock-in/clock-out state machine
//! with calendar gating, reconciliation of shifts abandoned across a
//! day boundary, and the leave ledger mutated when a request is
//! approved.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
