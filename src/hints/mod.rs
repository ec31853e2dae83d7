//! Three-tier hint system.
//!
//! Hints are requested through `GameEngine::request_hint`; this module
//! holds the stage machine and the structured results the UI renders.

pub mod result;
pub(crate) mod tiers;

pub use result::{Hint, HintRefusal, HintResult};
