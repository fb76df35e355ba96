//! Business rules for the transportation operations dashboard backend.
//!
//! The crate is organized as one module per workflow (document lifecycle,
//! compliance intake, notification fan-out), each exposing its domain
//! model, a repository trait describing the managed-backend contract, a
//! service facade, and an axum router builder. Everything that reads or
//! writes tenant data takes an explicit [`tenancy::OrgContext`].

pub mod backend;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod tenancy;
pub mod workflows;
