//! Report rendering for a generation run.
//!
//! - [`terminal`] — colored summary table; respects `--verbose` / `--quiet`.

pub mod terminal;
