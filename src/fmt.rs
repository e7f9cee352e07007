//! Logging shim
//!
//! Routes the crate's log lines to `defmt` when the `defmt` feature is
//! enabled and compiles them to nothing otherwise, so the core behaves
//! identically with the debug sink disabled.

#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, info};

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "defmt"))]
macro_rules! info {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "defmt"))]
pub(crate) use debug;

#[cfg(not(feature = "defmt"))]
pub(crate) use info;
