//! Server application core modules.
//!
//! This module contains the consent hub backend: configuration and startup, SeaORM repositories
//! for consent and collection point data, the services that compose, batch and enrich consent
//! queries, and the atomic collection point writer.

#![warn(missing_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
