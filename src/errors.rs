//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ArithmeticError															
/// Represents all possible failures of an exact arithmetic operation.
///
/// None of these are transient. An operation that fails will fail again with
/// the same operands, so the only remedy is to change the storage backend or
/// the inputs.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// Fixed-capacity word storage cannot hold the number of words required
	/// by the result.
	#[error("Capacity exceeded: {required} words required, {capacity} available")]
	CapacityExceeded {
		/// The number of 32-bit words the result needs.
		required: usize,
		
		/// The number of 32-bit words the storage can hold.
		capacity: usize,
	},
	
	/// A rational was divided by zero, or constructed with a zero denominator.
	#[error("Division by zero")]
	DivideByZero,
	
	/// The binary exponent of a result does not fit in 32 bits.
	#[error("Exponent overflow")]
	ExponentOverflow,
}

//		ConversionError															
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// Storage or exponent limits were hit while building the value.
	#[error("Arithmetic error: {0}")]
	Arithmetic(#[from] ArithmeticError),
	
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value contains a character that is not valid at its
	/// position.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// The incoming value does not follow the expected layout.
	#[error("Invalid format")]
	InvalidFormat,
	
	/// The incoming floating-point value is a NaN or an infinity, neither of
	/// which has an exact representation.
	#[error("Value is not finite")]
	NonFinite,
}
