//! The BSNumber crate provides exact arithmetic for computational geometry.
//!
//! [`BSNumber`] is a binary scientific number: an odd unsigned integer of any
//! length scaled by a power of two. Every finite [`f32`] and [`f64`] converts
//! to one exactly, and addition, subtraction, and multiplication of them never
//! round. [`BSRational`] pairs two of them to add exact division. Together
//! they let geometric predicates such as orientation and in-circle tests
//! compute the true sign of an expression where floating point would round it
//! to the wrong answer.
//!
//! The word storage behind both types is chosen by a type parameter
//! implementing [`UInteger`]. [`UIntegerAp32`] grows on demand, and
//! [`UIntegerFp32`] holds a fixed number of words without allocating, failing
//! with an error when a result would need more.
//!
//! [`IeeeBinary`] gives bit-level access to IEEE 754 binary formats, including
//! a software [`Binary16`].
//!
//! # Examples
//!
//! ```
//! use bsnumber::{BSNumberAp, BSRationalAp};
//!
//! let big   = BSNumberAp::try_from(1e20_f64).unwrap();
//! let one   = BSNumberAp::one();
//! let total = &(&one + &big) - &big;
//! assert_eq!(total, one);
//!
//! let third = BSRationalAp::from_ratio(1_i32, 3_i32).unwrap();
//! let sixth = BSRationalAp::from_ratio(1_i32, 6_i32).unwrap();
//! assert_eq!(third + sixth, BSRationalAp::from_ratio(1_i32, 2_i32).unwrap());
//! ```
//!



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_precision_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::float_cmp,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod ieee;
mod number;
mod rational;
mod uinteger;



//		Packages

pub use errors::{ArithmeticError, ConversionError};
pub use ieee::{Binary16, Binary32, Binary64, FloatClass, IeeeBinary};
pub use number::{Abs, BSNumber, BSNumberAp, BSNumberFp, abs};
pub use rational::{BSRational, BSRationalAp, BSRationalFp};
pub use uinteger::{UInteger, UIntegerAp32, UIntegerFp32};

//	The storage capacity of UIntegerFp32 is given as a type-level length
pub use typenum;
