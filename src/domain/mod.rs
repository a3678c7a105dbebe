//! # Domain Layer
//!
//! Core domain types. Everything here is pure and in-process: no I/O, no
//! shared mutable state.

pub mod value_objects;
