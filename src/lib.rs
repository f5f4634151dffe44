#![doc = include_str!("../README.md")]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
mod catch;
mod convert;
mod optional;
mod outcome;
mod private;

pub mod iter;
pub mod trace;

#[cfg(feature = "std")]
pub use catch::Panicked;
pub use optional::Optional;
pub use outcome::Outcome;
pub use trace::Trace;

/// Re-exports the two sum types, for glob importing.
pub mod prelude {
    pub use crate::optional::Optional::{self, Absent, Present};
    pub use crate::Outcome;
}

#[cfg(all(test, feature = "std"))]
mod laws;
