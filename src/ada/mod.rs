//! Ada source generation.
//!
//! - [`ident`] — SPDX id → enumeration literal, plus validation of the result.
//! - [`literal`] — quoting of display strings as Ada string literals.
//! - [`emit`] — renders a complete `SPDX.<Registry>` package specification.

pub mod emit;
pub mod ident;
pub mod literal;
