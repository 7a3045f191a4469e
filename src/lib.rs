//! Club Registry - Club membership registration
//!
//! This crate implements a single-user membership record store: members are
//! registered, listed, searched, deleted and exported, and the whole roster
//! is persisted as one JSON document after every change.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
