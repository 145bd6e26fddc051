//! Payroll and Coverage Aggregation Engine
//!
//! This crate resolves effective-dated hourly wages, turns shift records into
//! worked hours and monthly salary totals, and compares staffing requirements
//! against actual assignments to report coverage shortages.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;
pub mod store;
