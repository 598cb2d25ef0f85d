//! # Utilities
//!
//! Stateless helpers over numbers and text.
//!
//! | Module | Helpers |
//! |--------|---------|
//! | [`math`] | `sum`, `average`, `max`, `min`, parity, `factorial`, `is_prime` |
//! | [`strings`] | `capitalize`, `truncate`, `camel_to_kebab`, palindromes, counting |

pub mod math;
pub mod strings;

pub use math::MathError;
