//! Core domain entities and gateway traits.

pub mod entities;
pub mod gateways;
