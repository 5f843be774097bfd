//! Software Advisor - Guided software selection
//!
//! A multi-step wizard collects weighted requirements per business process,
//! and a scoring engine ranks candidate applications against them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
