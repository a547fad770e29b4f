//!
//! Traits Module
//!
//! Core traits used at the extension points of the comparison engine.
//!
//! - [`mask_generator`]: Defines the strategy trait implemented once per lexeme type.

pub mod mask_generator;
