//! Infrastructure layer
//!
//! Concrete implementations of the domain traits: the wire DTOs of the
//! Chat API and the HTTP gateway that speaks it.

pub mod dto;
pub mod gateway;
