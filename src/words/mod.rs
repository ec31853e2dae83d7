//! Word list and category table.
//!
//! The bank is static data: the engine draws target words from it and the
//! first hint tier looks up the target word's category.

pub mod bank;

pub use bank::{WordBank, WordEntry};
