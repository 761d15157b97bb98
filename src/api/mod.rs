//! Public API for stagetime.
//!
//! This module contains all user-facing types and functions.
//! Most users should only interact with types from this module.

pub mod aggregate;
pub mod clock;
pub mod grid;
pub mod layout;
pub mod report;
pub mod scope;
pub mod stage;
pub mod variant;
