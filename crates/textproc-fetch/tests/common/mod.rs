//! Common test utilities.
//!
//! This module provides a local stand-in for the TextService and helpers
//! for reaching unbound ports.

pub mod server;
