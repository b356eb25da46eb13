//! Wrapping integer exponentiation for fixed-width signed integers.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

mod pow;

pub use pow::{int64_pow, int_pow};
