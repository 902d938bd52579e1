//! SEOScope Core
//!
//! Shared types for the SEOScope analysis client.
//!
//! This crate contains:
//! - Domain types: task identity and lifecycle status
//! - DTOs: payloads exchanged with the analysis backend over HTTP+JSON

pub mod domain;
pub mod dto;
