//! # IO Layer
//!
//! Interface adapters between the outside world and the domain layer.
//! Currently REST only.

pub mod rest;
