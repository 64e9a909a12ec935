//! Small shared helpers.

pub mod plural;
