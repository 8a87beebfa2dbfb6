//! Settlement Engine for Colombian statutory employment benefits
//!
//! This crate computes a liquidación: the severance (cesantías), severance
//! interest, service bonus (prima de servicios) and vacation pay owed for a
//! work period, split by calendar year against a table of statutory minimum
//! wages and transport allowances. It also exposes the calculation over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
