//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, currently
//! per-request trace correlation.

pub mod trace;

pub use trace::Trace;
