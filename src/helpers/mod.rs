pub(crate) mod combine_global;
pub(crate) mod common;
pub(crate) mod joining;
pub(crate) mod keyed;
pub(crate) mod ordering;
pub(crate) mod stdlib;

// Only re-export files with top-level functions
pub use stdlib::*;
