//! Internal helpers.

pub(crate) mod time;
