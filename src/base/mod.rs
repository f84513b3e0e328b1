//! Low-level helpers shared by the rest of the crate.

pub mod bits;
