//! Exact binary scientific numbers of arbitrary precision.

//	Exponent arithmetic is checked explicitly wherever it can leave the i32
//	range, and bit-position arithmetic is done in i64 where it cannot overflow.
#![allow(clippy::arithmetic_side_effects, reason = "Exponent arithmetic is range-checked or widened")]



//		Modules

#[cfg(test)]
#[path = "tests/number.rs"]
mod tests;



//		Packages

use crate::{
	errors::{ArithmeticError, ConversionError},
	ieee::{Binary32, Binary64, IeeeBinary},
	uinteger::{UInteger, UIntegerAp32, UIntegerFp32},
};
use core::{
	cmp::Ordering,
	fmt::{Display, Formatter, self},
	iter::{Product, Sum},
	marker::PhantomData,
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use tracing::{debug, trace};



//		Type aliases

/// A [`BSNumber`] backed by storage that grows on demand.
pub type BSNumberAp = BSNumber<UIntegerAp32>;

/// A [`BSNumber`] backed by storage for at most `N` 32-bit words.
pub type BSNumberFp<N> = BSNumber<UIntegerFp32<N>>;



//		Traits

//		Abs																		
/// Absolute value, for generic code that runs on both exact and native
/// numbers.
pub trait Abs {
	//		abs																	
	/// Returns the magnitude, with the sign forced non-negative.
	#[must_use]
	fn abs(&self) -> Self;
}

//󰭅		Abs for f32																
impl Abs for f32 {
	//		abs																	
	fn abs(&self) -> Self {
		Self::abs(*self)
	}
}

//󰭅		Abs for f64																
impl Abs for f64 {
	//		abs																	
	fn abs(&self) -> Self {
		Self::abs(*self)
	}
}



//		Structs

//		BSNumber																
/// An exact binary scientific number.
///
/// A non-zero value is `sign × bits × 2^biased_exponent`, where `bits` is an
/// odd unsigned integer of arbitrary length held in the word storage `U`.
/// Equivalently, it is `sign × 1.f × 2^exponent()` with `exponent() =
/// biased_exponent + num_bits - 1`, which is the form IEEE 754 uses.
///
/// # Exactness
///
/// Addition, subtraction, and multiplication never round. The result of each
/// operation is the exact mathematical result, and the number of bits grows as
/// needed. Division is deliberately not provided, as the quotient of two
/// binary fractions is in general not a binary fraction; use
/// [`BSRational`](crate::BSRational) for that.
///
/// # Representation
///
/// Every value has exactly one representation. Zero has a sign of zero, a
/// biased exponent of zero, and no bits. Every other value has a sign of `-1`
/// or `1` and an odd, trimmed mantissa, so all trailing zero bits are absorbed
/// into the exponent. Equality and hashing can therefore compare fields
/// directly.
///
/// # Storage
///
/// With [`UIntegerAp32`] storage the mantissa grows without limit. With
/// [`UIntegerFp32`] storage, an operation whose exact result does not fit
/// fails with [`ArithmeticError::CapacityExceeded`]; the fallible methods
/// ([`try_add()`](BSNumber::try_add()) and friends) report this, while the
/// operators panic. Only the final result counts: addition and subtraction
/// align their operands in temporary growable storage, so a cancelling
/// subtraction succeeds whenever its difference fits.
///
/// # Conversion
///
/// Construction from [`i32`], [`u32`], [`i64`], [`u64`], [`f32`], and [`f64`]
/// is lossless for every finite input, and is implemented through [`TryFrom`]
/// as storage limits or non-finite input can make it fail. Conversion back to
/// [`f32`] and [`f64`] rounds to nearest with ties to even.
///
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BSNumber<U: UInteger> {
	/// `-1`, `0`, or `1`.
	sign:            i8,
	
	/// The power of two applied to `bits`.
	biased_exponent: i32,
	
	/// The number of significant bits in `bits`.
	num_bits:        u32,
	
	/// The odd mantissa, least-significant word first.
	bits:            U,
}

//󰭅		BSNumber																
impl<U: UInteger> BSNumber<U> {
	//		Constructors														
	
	//		from_binary															
	/// Creates a number from any IEEE 754 binary encoding, exactly.
	///
	/// Subnormal inputs are normalised, so the result is independent of how
	/// the input was encoded.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::NonFinite`] for NaNs and infinities, and
	/// [`ConversionError::Arithmetic`] if the storage cannot hold the
	/// significand.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Biased exponents have at most 15 bits")]
	#[expect(clippy::cast_possible_wrap,       reason = "Biased exponents have at most 15 bits")]
	pub fn from_binary<const NUM_BITS: u32, const PRECISION: u32>(
		value: IeeeBinary<NUM_BITS, PRECISION>,
	) -> Result<Self, ConversionError> {
		if !value.is_finite() {
			debug!(?value, "Rejected non-finite input");
			return Err(ConversionError::NonFinite);
		}
		let sign = if value.is_sign_minus() { -1 } else { 1 };
		let (mantissa, exponent) = if value.biased() == 0 {
			(value.trailing(), IeeeBinary::<NUM_BITS, PRECISION>::MIN_SUB_EXPONENT)
		} else {
			(
				value.trailing() | IeeeBinary::<NUM_BITS, PRECISION>::SUP_TRAILING,
				value.biased() as i32
					- IeeeBinary::<NUM_BITS, PRECISION>::EXPONENT_BIAS
					- IeeeBinary::<NUM_BITS, PRECISION>::NUM_TRAILING_BITS as i32,
			)
		};
		Ok(Self::from_mantissa(sign, mantissa, exponent)?)
	}
	
	//		from_parts															
	/// Creates a number from its raw representation, as returned by
	/// [`sign()`](BSNumber::sign()),
	/// [`biased_exponent()`](BSNumber::biased_exponent()), and the words of
	/// [`bits()`](BSNumber::bits()).
	///
	/// # Errors
	///
	/// Returns [`ConversionError::InvalidFormat`] unless the parts are already
	/// in the unique form: zero as a sign of zero with no exponent and no
	/// words, and anything else as a sign of `-1` or `1` with an odd mantissa
	/// that has no leading zero words.
	///
	pub fn from_parts(sign: i8, biased_exponent: i32, words: &[u32]) -> Result<Self, ConversionError> {
		match (sign, words.first(), words.last()) {
			(0, None, None) if biased_exponent == 0                        => return Ok(Self::zero()),
			(-1 | 1, Some(&low), Some(&high)) if low & 1 == 1 && high != 0 => {},
			_                                                              => return Err(ConversionError::InvalidFormat),
		}
		let mut bits = U::with_len(words.len())?;
		bits.words_mut().copy_from_slice(words);
		Ok(Self::from_raw(sign, biased_exponent, bits)?)
	}
	
	//		one																	
	/// The number one.
	#[expect(clippy::expect_used, reason = "Every backend can hold at least one word")]
	#[must_use]
	pub fn one() -> Self {
		Self::from_mantissa(1, 1, 0).expect("One always fits")
	}
	
	//		zero																
	/// The number zero.
	#[must_use]
	pub fn zero() -> Self {
		Self::default()
	}
	
	//		Public methods														
	
	//		abs																	
	/// Returns the magnitude, with the sign forced non-negative.
	#[must_use]
	pub fn abs(&self) -> Self {
		let mut result = self.clone();
		result.sign    = result.sign.abs();
		result
	}
	
	//		biased_exponent														
	/// The power of two applied to the odd mantissa.
	#[must_use]
	pub const fn biased_exponent(&self) -> i32 {
		self.biased_exponent
	}
	
	//		bits																
	/// The odd mantissa. This is empty for zero.
	#[must_use]
	pub const fn bits(&self) -> &U {
		&self.bits
	}
	
	//		exponent															
	/// The exponent of the leading bit, i.e. the `e` for which the magnitude
	/// lies in `[2^e, 2^(e+1))`. Zero reports an exponent of zero.
	#[must_use]
	pub const fn exponent(&self) -> i32 {
		if self.sign == 0 {
			0
		} else {
			//	Guaranteed to fit by construction
			self.biased_exponent.saturating_add_unsigned(self.num_bits) - 1
		}
	}
	
	//		frexp																
	/// Splits the number into a mantissa with magnitude in `[1/2, 1)` and a
	/// power of two, so that `self == mantissa × 2^exponent`. Zero splits into
	/// zero and zero.
	#[must_use]
	pub fn frexp(&self) -> (Self, i32) {
		if self.sign == 0 {
			return (Self::zero(), 0);
		}
		let mut mantissa         = self.clone();
		mantissa.biased_exponent = 0_i32.saturating_sub_unsigned(self.num_bits);
		(mantissa, self.exponent() + 1)
	}
	
	//		from_json															
	/// Parses a number from JSON.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is not a valid number representation.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		is_zero																
	/// Whether the number is zero.
	#[must_use]
	pub const fn is_zero(&self) -> bool {
		self.sign == 0
	}
	
	//		ldexp																
	/// Multiplies the number by `2^power`, exactly.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::ExponentOverflow`] if the resulting exponent
	/// does not fit in 32 bits.
	///
	pub fn ldexp(&self, power: i32) -> Result<Self, ArithmeticError> {
		if self.sign == 0 {
			return Ok(Self::zero());
		}
		let biased = self.biased_exponent.checked_add(power).ok_or(ArithmeticError::ExponentOverflow)?;
		Self::from_raw(self.sign, biased, self.bits.clone())
	}
	
	//		num_bits															
	/// The number of significant bits in the mantissa. This is zero for zero.
	#[must_use]
	pub const fn num_bits(&self) -> u32 {
		self.num_bits
	}
	
	//		sign																
	/// The sign: `-1`, `0`, or `1`.
	#[must_use]
	pub const fn sign(&self) -> i8 {
		self.sign
	}
	
	//		to_binary															
	/// Rounds the number to the nearest value in an IEEE 754 binary format,
	/// with ties to even.
	///
	/// Magnitudes beyond the largest finite value of the format become an
	/// infinity of the same sign, and magnitudes that round below the smallest
	/// subnormal become a zero of the same sign.
	///
	#[expect(clippy::cast_sign_loss, reason = "Rounded quantum is never below the subnormal exponent")]
	#[must_use]
	pub fn to_binary<const NUM_BITS: u32, const PRECISION: u32>(&self) -> IeeeBinary<NUM_BITS, PRECISION> {
		if self.sign == 0 {
			return IeeeBinary::from_encoding(IeeeBinary::<NUM_BITS, PRECISION>::POS_ZERO);
		}
		let sign_mask = if self.sign < 0 { IeeeBinary::<NUM_BITS, PRECISION>::SIGN_MASK } else { 0 };
		let exponent  = i64::from(self.exponent());
		if exponent > i64::from(IeeeBinary::<NUM_BITS, PRECISION>::MAX_EXPONENT) {
			trace!(exponent, "Rounded to infinity");
			return IeeeBinary::from_encoding(sign_mask | IeeeBinary::<NUM_BITS, PRECISION>::POS_INFINITY);
		}
		
		//	The quantum is the weight of the least-significant bit the result can
		//	keep: the normal spacing for this binade, floored at the subnormal one
		let min_sub  = i64::from(IeeeBinary::<NUM_BITS, PRECISION>::MIN_SUB_EXPONENT);
		let quantum  = (exponent - i64::from(PRECISION - 1)).max(min_sub);
		let shift    = quantum - i64::from(self.biased_exponent);
		let num_bits = i64::from(self.num_bits);
		let rounded  = if shift <= 0 {
			//	Fits exactly, as the value spans no more than PRECISION bits
			self.bits.bits_at(0, self.num_bits) << shift.unsigned_abs()
		} else if shift > num_bits {
			//	Less than half a quantum
			0
		} else {
			//	The mantissa is odd, so any dropped bit below the round bit is the
			//	sticky bit that breaks a tie
			#[expect(clippy::cast_possible_truncation, reason = "At most PRECISION bits are kept")]
			let kept   = self.bits.bits_at(shift, (num_bits - shift) as u32);
			let round  = self.bits.bits_at(shift - 1, 1) == 1;
			let sticky = shift >= 2;
			if round && (sticky || kept & 1 == 1) { kept + 1 } else { kept }
		};
		
		//	A carry out of the rounded significand moves into the exponent field,
		//	which is exactly the next binade, up to and including infinity
		let magnitude = (((quantum - min_sub) as u64) << (PRECISION - 1)) + rounded;
		let magnitude = magnitude.min(IeeeBinary::<NUM_BITS, PRECISION>::POS_INFINITY);
		IeeeBinary::from_encoding(sign_mask | magnitude)
	}
	
	//		to_f32																
	/// Rounds the number to the nearest [`f32`], with ties to even.
	#[must_use]
	pub fn to_f32(&self) -> f32 {
		f32::from(self.to_binary::<32, 24>())
	}
	
	//		to_f64																
	/// Rounds the number to the nearest [`f64`], with ties to even.
	#[must_use]
	pub fn to_f64(&self) -> f64 {
		f64::from(self.to_binary::<64, 53>())
	}
	
	//		to_json																
	/// Serialises the number to JSON.
	///
	/// # Errors
	///
	/// Returns an error if serialisation fails.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
	
	//		try_add																
	/// Exact addition.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::CapacityExceeded`] if the storage cannot
	/// hold the aligned operands or the sum, or
	/// [`ArithmeticError::ExponentOverflow`] if the exponent leaves the 32-bit
	/// range.
	///
	pub fn try_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		self.combine(rhs, rhs.sign)
	}
	
	//		try_mul																
	/// Exact multiplication.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::CapacityExceeded`] if the storage cannot
	/// hold the product, or [`ArithmeticError::ExponentOverflow`] if the
	/// exponent leaves the 32-bit range.
	///
	pub fn try_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		if self.sign == 0 || rhs.sign == 0 {
			return Ok(Self::zero());
		}
		let biased = self.biased_exponent
			.checked_add(rhs.biased_exponent)
			.ok_or(ArithmeticError::ExponentOverflow)?
		;
		//	The product of two odd numbers is odd, so no normalisation is needed
		Self::from_raw(self.sign * rhs.sign, biased, self.bits.product(&rhs.bits)?)
	}
	
	//		try_sub																
	/// Exact subtraction.
	///
	/// Cancellation is captured exactly: the result may have far fewer bits
	/// than either operand, and equal operands give exactly zero.
	///
	/// # Errors
	///
	/// As for [`try_add()`](BSNumber::try_add()).
	///
	pub fn try_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		self.combine(rhs, -rhs.sign)
	}
	
	//		Private methods														
	
	//		align																
	/// Copies both mantissas into scratch storage, shifting the one with the
	/// larger biased exponent left so that both share the smaller biased
	/// exponent, which is returned with them.
	///
	/// The aligned operands can be much wider than the result of adding or
	/// subtracting them, so they are not held in `U`. Only the normalised
	/// result is checked against the capacity of the storage.
	///
	fn align(&self, other: &Self) -> Result<(i32, UIntegerAp32, UIntegerAp32), ArithmeticError> {
		let exponent = self.biased_exponent.min(other.biased_exponent);
		let aligned  = |value: &Self| -> Result<UIntegerAp32, ArithmeticError> {
			let shift = u32::try_from(i64::from(value.biased_exponent) - i64::from(exponent))
				.map_err(|_| ArithmeticError::ExponentOverflow)?
			;
			UIntegerAp32::from(value.bits.words().to_vec()).shifted_left(shift)
		};
		Ok((exponent, aligned(self)?, aligned(other)?))
	}
	
	//		combine																
	/// Adds `rhs` with its sign replaced by `rhs_sign`, which is how both
	/// addition and subtraction are carried out.
	fn combine(&self, rhs: &Self, rhs_sign: i8) -> Result<Self, ArithmeticError> {
		if rhs_sign == 0 {
			return Ok(self.clone());
		}
		if self.sign == 0 {
			let mut result = rhs.clone();
			result.sign    = rhs_sign;
			return Ok(result);
		}
		let (sign, exponent, magnitude) = if self.sign == rhs_sign {
			let (exponent, lhs_bits, rhs_bits) = self.align(rhs)?;
			(self.sign, exponent, lhs_bits.sum(&rhs_bits)?)
		} else {
			match self.compare_magnitude(rhs) {
				Ordering::Equal   => return Ok(Self::zero()),
				Ordering::Greater => {
					let (exponent, lhs_bits, rhs_bits) = self.align(rhs)?;
					(self.sign, exponent, lhs_bits.difference(&rhs_bits)?)
				},
				Ordering::Less    => {
					let (exponent, lhs_bits, rhs_bits) = self.align(rhs)?;
					(rhs_sign, exponent, rhs_bits.difference(&lhs_bits)?)
				},
			}
		};
		Self::from_storage(sign, exponent, magnitude)
	}
	
	//		compare_magnitude													
	/// Compares the magnitudes of two non-zero numbers.
	///
	/// Numbers with different leading exponents are ordered by exponent. For
	/// equal exponents the mantissas are compared from the most significant
	/// bit down, 32 bits at a time, reading both as if aligned at the top.
	///
	fn compare_magnitude(&self, other: &Self) -> Ordering {
		match self.exponent().cmp(&other.exponent()) {
			Ordering::Equal => {},
			unequal         => return unequal,
		}
		let chunks = i64::from(self.num_bits.max(other.num_bits).div_ceil(32));
		for chunk in 1..=chunks {
			let lhs = self.bits.bits_at(i64::from(self.num_bits) - 32 * chunk, 32);
			let rhs = other.bits.bits_at(i64::from(other.num_bits) - 32 * chunk, 32);
			match lhs.cmp(&rhs) {
				Ordering::Equal => {},
				unequal         => return unequal,
			}
		}
		Ordering::Equal
	}
	
	//		from_mantissa														
	/// Creates a number from a sign and a 64-bit mantissa scaled by
	/// `2^exponent`. The mantissa does not need to be odd.
	fn from_mantissa(sign: i8, mantissa: u64, exponent: i32) -> Result<Self, ArithmeticError> {
		if mantissa == 0 {
			return Ok(Self::zero());
		}
		let shift  = mantissa.trailing_zeros();
		let biased = exponent.checked_add_unsigned(shift).ok_or(ArithmeticError::ExponentOverflow)?;
		Self::from_raw(sign, biased, U::from_u64(mantissa >> shift)?)
	}
	
	//		from_raw															
	/// Assembles a number from a mantissa that is already odd and trimmed, or
	/// empty for zero. Checks that the leading exponent fits in 32 bits.
	pub(crate) fn from_raw(sign: i8, biased_exponent: i32, bits: U) -> Result<Self, ArithmeticError> {
		if bits.is_empty() || sign == 0 {
			return Ok(Self::zero());
		}
		debug_assert!(bits[0] & 1 == 1, "Mantissa must be odd");
		let num_bits = bits.bit_len();
		_ = biased_exponent.checked_add_unsigned(num_bits).ok_or(ArithmeticError::ExponentOverflow)?;
		Ok(Self { sign, biased_exponent, num_bits, bits })
	}
	
	//		from_storage														
	/// Assembles a number from an arbitrary mantissa in scratch storage scaled
	/// by `2^exponent`, absorbing trailing zero bits into the exponent. The
	/// mantissa is only copied into `U` once it is odd and trimmed.
	fn from_storage(sign: i8, exponent: i32, mut scratch: UIntegerAp32) -> Result<Self, ArithmeticError> {
		scratch.trim();
		let shift    = scratch.shift_right_to_odd();
		let biased   = exponent.checked_add_unsigned(shift).ok_or(ArithmeticError::ExponentOverflow)?;
		let mut bits = U::with_len(scratch.len())?;
		bits.words_mut().copy_from_slice(scratch.words());
		Self::from_raw(sign, biased, bits)
	}
}

//󰭅		Abs																		
impl<U: UInteger> Abs for BSNumber<U> {
	//		abs																	
	fn abs(&self) -> Self {
		Self::abs(self)
	}
}

//󰭅		Add																		
impl<U: UInteger> Add for BSNumber<U> {
	type Output = Self;
	
	//		add																	
	fn add(self, rhs: Self) -> Self::Output {
		&self + &rhs
	}
}

//󰭅		Add<&>																	
impl<U: UInteger> Add for &BSNumber<U> {
	type Output = BSNumber<U>;
	
	//		add																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add(self, rhs: Self) -> Self::Output {
		self.try_add(rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		AddAssign																
impl<U: UInteger> AddAssign for BSNumber<U> {
	//		add_assign															
	fn add_assign(&mut self, rhs: Self) {
		*self = &*self + &rhs;
	}
}

//󰭅		AddAssign<&>															
impl<U: UInteger> AddAssign<&Self> for BSNumber<U> {
	//		add_assign															
	fn add_assign(&mut self, rhs: &Self) {
		*self = &*self + rhs;
	}
}

//󰭅		Deserialize																
impl<'de, U: UInteger> Deserialize<'de> for BSNumber<U> {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			deserializer.deserialize_str(NumberVisitor::<U>(PhantomData))
		} else {
			let (sign, biased_exponent, words) = <(i8, i32, Vec<u32>)>::deserialize(deserializer)?;
			Self::from_parts(sign, biased_exponent, &words).map_err(D::Error::custom)
		}
	}
}

//󰭅		Display																	
impl<U: UInteger> Display for BSNumber<U> {
	//		fmt																	
	/// Writes the exact value as a hexadecimal odd mantissa and a power of two,
	/// e.g. `-0x3p-2` for -0.75. Zero is written as `0`.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.sign == 0 {
			return write!(f, "0");
		}
		if self.sign < 0 {
			write!(f, "-")?;
		}
		write!(f, "0x")?;
		let mut words = self.bits.words().iter().rev();
		if let Some(top) = words.next() {
			write!(f, "{top:x}")?;
		}
		for word in words {
			write!(f, "{word:08x}")?;
		}
		write!(f, "p{:+}", self.biased_exponent)
	}
}

//󰭅		FromStr																	
impl<U: UInteger> FromStr for BSNumber<U> {
	type Err = ConversionError;
	
	//		from_str															
	/// Parses the form written by [`Display`], i.e. an optional sign, `0x`, a
	/// hexadecimal mantissa, `p`, and a decimal power of two. Both prefix and
	/// separator may be upper case. The mantissa
	/// does not need to be odd. A bare `0` is also accepted.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		let (sign, rest) = match s.strip_prefix('-') {
			Some(rest) => (-1, rest),
			None       => (1, s.strip_prefix('+').unwrap_or(s)),
		};
		if rest == "0" {
			return Ok(Self::zero());
		}
		let rest               = rest
			.strip_prefix("0x")
			.or_else(|| rest.strip_prefix("0X"))
			.ok_or(ConversionError::InvalidFormat)?
		;
		let (digits, exponent) = rest.split_once(['p', 'P']).ok_or(ConversionError::InvalidFormat)?;
		if digits.is_empty() {
			return Err(ConversionError::InvalidFormat);
		}
		if let Some(invalid) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
			return Err(ConversionError::InvalidDigit(invalid));
		}
		let exponent = exponent.parse::<i32>().map_err(|_| ConversionError::InvalidFormat)?;
		let digits   = digits.trim_start_matches('0');
		let mut bits = UIntegerAp32::with_len(digits.len().div_ceil(8))?;
		for (word, chunk) in bits.words_mut().iter_mut().zip(digits.as_bytes().rchunks(8)) {
			let chunk = core::str::from_utf8(chunk).map_err(|_| ConversionError::InvalidFormat)?;
			*word     = u32::from_str_radix(chunk, 16).map_err(|_| ConversionError::InvalidFormat)?;
		}
		Ok(Self::from_storage(sign, exponent, bits)?)
	}
}

//󰭅		Mul																		
impl<U: UInteger> Mul for BSNumber<U> {
	type Output = Self;
	
	//		mul																	
	fn mul(self, rhs: Self) -> Self::Output {
		&self * &rhs
	}
}

//󰭅		Mul<&>																	
impl<U: UInteger> Mul for &BSNumber<U> {
	type Output = BSNumber<U>;
	
	//		mul																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn mul(self, rhs: Self) -> Self::Output {
		self.try_mul(rhs).expect("Attempt to multiply overflowed")
	}
}

//󰭅		MulAssign																
impl<U: UInteger> MulAssign for BSNumber<U> {
	//		mul_assign															
	fn mul_assign(&mut self, rhs: Self) {
		*self = &*self * &rhs;
	}
}

//󰭅		MulAssign<&>															
impl<U: UInteger> MulAssign<&Self> for BSNumber<U> {
	//		mul_assign															
	fn mul_assign(&mut self, rhs: &Self) {
		*self = &*self * rhs;
	}
}

//󰭅		Neg																		
impl<U: UInteger> Neg for BSNumber<U> {
	type Output = Self;
	
	//		neg																	
	fn neg(mut self) -> Self::Output {
		self.sign = -self.sign;
		self
	}
}

//󰭅		Neg<&>																	
impl<U: UInteger> Neg for &BSNumber<U> {
	type Output = BSNumber<U>;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		-self.clone()
	}
}

//󰭅		Ord																		
impl<U: UInteger> Ord for BSNumber<U> {
	//		cmp																	
	fn cmp(&self, other: &Self) -> Ordering {
		match self.sign.cmp(&other.sign) {
			Ordering::Equal => {},
			unequal         => return unequal,
		}
		match self.sign {
			0               => Ordering::Equal,
			1               => self.compare_magnitude(other),
			_               => other.compare_magnitude(self),
		}
	}
}

//󰭅		PartialOrd																
impl<U: UInteger> PartialOrd for BSNumber<U> {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product																	
impl<U: UInteger> Product for BSNumber<U> {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::one(), |acc, x| &acc * &x)
	}
}

//󰭅		Product<&>																
impl<'a, U: UInteger> Product<&'a Self> for BSNumber<U> {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::one(), |acc, x| &acc * x)
	}
}

//󰭅		Serialize																
impl<U: UInteger> Serialize for BSNumber<U> {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			serializer.collect_str(self)
		} else {
			(self.sign, self.biased_exponent, self.bits.words()).serialize(serializer)
		}
	}
}

//󰭅		Sub																		
impl<U: UInteger> Sub for BSNumber<U> {
	type Output = Self;
	
	//		sub																	
	fn sub(self, rhs: Self) -> Self::Output {
		&self - &rhs
	}
}

//󰭅		Sub<&>																	
impl<U: UInteger> Sub for &BSNumber<U> {
	type Output = BSNumber<U>;
	
	//		sub																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: Self) -> Self::Output {
		self.try_sub(rhs).expect("Attempt to subtract overflowed")
	}
}

//󰭅		SubAssign																
impl<U: UInteger> SubAssign for BSNumber<U> {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: Self) {
		*self = &*self - &rhs;
	}
}

//󰭅		SubAssign<&>															
impl<U: UInteger> SubAssign<&Self> for BSNumber<U> {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: &Self) {
		*self = &*self - rhs;
	}
}

//󰭅		Sum																		
impl<U: UInteger> Sum for BSNumber<U> {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| &acc + &x)
	}
}

//󰭅		Sum<&>																	
impl<'a, U: UInteger> Sum<&'a Self> for BSNumber<U> {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, x| &acc + x)
	}
}

//󰭅		TryFrom: f32 -> BSNumber												
impl<U: UInteger> TryFrom<f32> for BSNumber<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: f32) -> Result<Self, Self::Error> {
		Self::from_binary(Binary32::from(v))
	}
}

//󰭅		TryFrom: f64 -> BSNumber												
impl<U: UInteger> TryFrom<f64> for BSNumber<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: f64) -> Result<Self, Self::Error> {
		Self::from_binary(Binary64::from(v))
	}
}

//󰭅		TryFrom: i32 -> BSNumber												
impl<U: UInteger> TryFrom<i32> for BSNumber<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i32) -> Result<Self, Self::Error> {
		Self::try_from(i64::from(v))
	}
}

//󰭅		TryFrom: i64 -> BSNumber												
impl<U: UInteger> TryFrom<i64> for BSNumber<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i64) -> Result<Self, Self::Error> {
		let sign = if v < 0 { -1 } else { 1 };
		Ok(Self::from_mantissa(sign, v.unsigned_abs(), 0)?)
	}
}

//󰭅		TryFrom: u32 -> BSNumber												
impl<U: UInteger> TryFrom<u32> for BSNumber<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u32) -> Result<Self, Self::Error> {
		Self::try_from(u64::from(v))
	}
}

//󰭅		TryFrom: u64 -> BSNumber												
impl<U: UInteger> TryFrom<u64> for BSNumber<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u64) -> Result<Self, Self::Error> {
		Ok(Self::from_mantissa(1, v, 0)?)
	}
}



//		Visitors

//		NumberVisitor															
/// A visitor for parsing numbers from their text form.
struct NumberVisitor<U>(PhantomData<U>);

//󰭅		Visitor																	
impl<U: UInteger> Visitor<'_> for NumberVisitor<U> {
	type Value = BSNumber<U>;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a binary scientific number such as \"-0x3p-2\"")
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}



//		Functions

//		abs																		
/// Returns the absolute value of an exact or native number.
///
/// This mirrors `abs()` on the primitive float types, so that generic code
/// can be written once for both.
///
#[must_use]
pub fn abs<T: Abs>(value: &T) -> T {
	value.abs()
}
