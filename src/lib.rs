//! Net salary engine for the Tierra del Fuego public administration.
//!
//! This crate computes the breakdown of a monthly salary (remunerative
//! items, non-remunerative items, deductions and net total) from a small
//! set of figures, and serves it over HTTP together with the historical
//! monthly table for the year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
