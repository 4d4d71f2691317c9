//! Traits shared between the texfmt crates, implementable with `#![no_std]`
#![no_std]

mod macro_traits;
pub use macro_traits::*;
