//! Authentication primitives: JWT access-token validation.

pub mod jwt;
