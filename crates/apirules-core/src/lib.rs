//! Core types, model loading, and configuration for apirules.
//!
//! This crate provides the foundational data structures used across all apirules crates:
//! - [`types`] - Type kinds, declarations, members, and error types
//! - [`graph`] - The [`TypeGraph`](graph::TypeGraph) arena that owns every declaration
//! - [`loader`] - Decoding a JSON type model into a `TypeGraph`
//! - [`config`] - Configuration loading from `.apirules/apirules.json`

pub mod config;
pub mod graph;
pub mod loader;
pub mod types;
