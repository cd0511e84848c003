//! Bit-level encoding and decoding of IEEE 754 binary interchange formats.

//	All constants and masks are derived from the format parameters, which are
//	validated at compile time, so the shifts and subtractions below cannot go
//	out of range for any format that compiles.
#![allow(clippy::arithmetic_side_effects, reason = "Format parameters are validated at compile time")]



//		Modules

#[cfg(test)]
#[path = "tests/ieee.rs"]
mod tests;



//		Packages

use core::{
	fmt::{Debug, Formatter, self},
	ops::Neg,
};



//		Type aliases

/// IEEE 754 binary16, also known as half precision.
pub type Binary16 = IeeeBinary<16, 11>;

/// IEEE 754 binary32, the layout of [`f32`].
pub type Binary32 = IeeeBinary<32, 24>;

/// IEEE 754 binary64, the layout of [`f64`].
pub type Binary64 = IeeeBinary<64, 53>;



//		Enums

//		FloatClass																
/// The IEEE 754 classification of an encoding.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FloatClass {
	/// Negative infinity.
	NegativeInfinity,
	
	/// A negative normal number.
	NegativeNormal,
	
	/// A negative subnormal number.
	NegativeSubnormal,
	
	/// Negative zero.
	NegativeZero,
	
	/// Positive zero.
	PositiveZero,
	
	/// A positive subnormal number.
	PositiveSubnormal,
	
	/// A positive normal number.
	PositiveNormal,
	
	/// Positive infinity.
	PositiveInfinity,
	
	/// A NaN with the quiet bit set.
	QuietNaN,
	
	/// A NaN with the quiet bit clear.
	SignalingNaN,
}

//󰭅		FloatClass																
impl FloatClass {
	//		is_finite															
	/// Whether the class denotes a finite number, including zero.
	#[must_use]
	pub const fn is_finite(self) -> bool {
		!self.is_infinite() && !self.is_nan()
	}
	
	//		is_infinite															
	/// Whether the class is either infinity.
	#[must_use]
	pub const fn is_infinite(self) -> bool {
		matches!(self, Self::NegativeInfinity | Self::PositiveInfinity)
	}
	
	//		is_nan																
	/// Whether the class is either kind of NaN.
	#[must_use]
	pub const fn is_nan(self) -> bool {
		matches!(self, Self::QuietNaN | Self::SignalingNaN)
	}
	
	//		is_normal															
	/// Whether the class is a normal number of either sign.
	#[must_use]
	pub const fn is_normal(self) -> bool {
		matches!(self, Self::NegativeNormal | Self::PositiveNormal)
	}
	
	//		is_subnormal														
	/// Whether the class is a subnormal number of either sign.
	#[must_use]
	pub const fn is_subnormal(self) -> bool {
		matches!(self, Self::NegativeSubnormal | Self::PositiveSubnormal)
	}
	
	//		is_zero																
	/// Whether the class is a zero of either sign.
	#[must_use]
	pub const fn is_zero(self) -> bool {
		matches!(self, Self::NegativeZero | Self::PositiveZero)
	}
}



//		Structs

//		IeeeBinary																
/// An encoding in an IEEE 754 binary interchange format.
///
/// The format is given by its total width in bits and its precision, i.e. the
/// number of significand bits including the implicit leading bit. The
/// exponent field takes the remaining bits after the sign bit and the
/// trailing significand. Any format up to 64 bits wide with at least two and
/// at most fifteen exponent bits is supported; anything else fails to
/// compile.
///
/// The encoding is stored in the low bits of a [`u64`], with all higher bits
/// zero. Conversions to and from the native float types are provided for
/// [`Binary32`] and [`Binary64`] and are pure bit reinterpretations.
///
/// # Layout
///
/// ```text
/// | sign (1) | biased exponent (NUM_BITS - PRECISION) | trailing (PRECISION - 1) |
/// ```
///
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct IeeeBinary<const NUM_BITS: u32, const PRECISION: u32>(u64);

//󰭅		IeeeBinary																
impl<const NUM_BITS: u32, const PRECISION: u32> IeeeBinary<NUM_BITS, PRECISION> {
	//		Public constants													
	/// Total number of bits in the encoding.
	pub const NUM_ENCODING_BITS: u32 = NUM_BITS;
	
	/// Number of bits in the biased exponent field.
	pub const NUM_EXPONENT_BITS: u32 = NUM_BITS - PRECISION;
	
	/// Number of significand bits, including the implicit leading bit.
	pub const NUM_SIGNIFICAND_BITS: u32 = PRECISION;
	
	/// Number of bits in the trailing significand field.
	pub const NUM_TRAILING_BITS: u32 = PRECISION - 1;
	
	/// The exponent bias, e.g. 127 for binary32.
	pub const EXPONENT_BIAS: i32 = (1_i32 << (Self::NUM_EXPONENT_BITS - 1)) - 1;
	
	/// The all-ones biased exponent used by infinities and NaNs.
	pub const MAX_BIASED_EXPONENT: u64 = (1_u64 << Self::NUM_EXPONENT_BITS) - 1;
	
	/// Exponent of the smallest subnormal, e.g. -149 for binary32.
	pub const MIN_SUB_EXPONENT: i32 = Self::MIN_EXPONENT - Self::NUM_TRAILING_BITS as i32;
	
	/// Exponent of the smallest normal, e.g. -126 for binary32.
	pub const MIN_EXPONENT: i32 = 1 - Self::EXPONENT_BIAS;
	
	/// Exponent of the largest normal, e.g. 127 for binary32.
	pub const MAX_EXPONENT: i32 = Self::EXPONENT_BIAS;
	
	/// Position of the sign bit.
	pub const SIGN_SHIFT: u32 = NUM_BITS - 1;
	
	/// Mask selecting the sign bit.
	pub const SIGN_MASK: u64 = 1_u64 << Self::SIGN_SHIFT;
	
	/// Mask selecting everything but the sign bit.
	pub const NOT_SIGN_MASK: u64 = Self::SIGN_MASK - 1;
	
	/// Mask selecting all bits of the encoding.
	pub const ENCODING_MASK: u64 = Self::SIGN_MASK | Self::NOT_SIGN_MASK;
	
	/// Mask selecting the biased exponent field.
	pub const BIASED_EXPONENT_MASK: u64 = Self::MAX_BIASED_EXPONENT << Self::NUM_TRAILING_BITS;
	
	/// Mask selecting the trailing significand field.
	pub const TRAILING_MASK: u64 = (1_u64 << Self::NUM_TRAILING_BITS) - 1;
	
	/// The trailing bit that distinguishes quiet from signaling NaNs.
	pub const NAN_QUIET_MASK: u64 = 1_u64 << (Self::NUM_TRAILING_BITS - 1);
	
	/// The trailing bits available for a NaN payload.
	pub const NAN_PAYLOAD_MASK: u64 = Self::TRAILING_MASK >> 1;
	
	/// The largest trailing significand.
	pub const MAX_TRAILING: u64 = Self::TRAILING_MASK;
	
	/// The implicit leading bit of a normal significand, as an integer.
	pub const SUP_TRAILING: u64 = 1_u64 << Self::NUM_TRAILING_BITS;
	
	/// Encoding of positive zero.
	pub const POS_ZERO: u64 = 0;
	
	/// Encoding of negative zero.
	pub const NEG_ZERO: u64 = Self::SIGN_MASK;
	
	/// Encoding of the smallest positive subnormal.
	pub const MIN_SUBNORMAL: u64 = 1;
	
	/// Encoding of the largest positive subnormal.
	pub const MAX_SUBNORMAL: u64 = Self::TRAILING_MASK;
	
	/// Encoding of the smallest positive normal.
	pub const MIN_NORMAL: u64 = Self::SUP_TRAILING;
	
	/// Encoding of the largest positive finite number.
	pub const MAX_NORMAL: u64 = Self::BIASED_EXPONENT_MASK - 1;
	
	/// Encoding of positive infinity.
	pub const POS_INFINITY: u64 = Self::BIASED_EXPONENT_MASK;
	
	/// Encoding of negative infinity.
	pub const NEG_INFINITY: u64 = Self::SIGN_MASK | Self::BIASED_EXPONENT_MASK;
	
	/// Encoding of the default quiet NaN.
	pub const QUIET_NAN: u64 = Self::BIASED_EXPONENT_MASK | Self::NAN_QUIET_MASK;
	
	//		Private constants													
	/// Compile-time check of the format parameters.
	const VALID_FORMAT: () = assert!(
		NUM_BITS <= 64 && PRECISION >= 2 && NUM_BITS >= PRECISION + 2 && NUM_BITS - PRECISION <= 15,
		"Unsupported IEEE binary format"
	);
	
	//		Constructors														
	
	//		from_encoding														
	/// Creates a value from its raw encoding.
	///
	/// Bits above [`NUM_ENCODING_BITS`](Self::NUM_ENCODING_BITS) are ignored.
	///
	#[must_use]
	pub const fn from_encoding(encoding: u64) -> Self {
		let () = Self::VALID_FORMAT;
		Self(encoding & Self::ENCODING_MASK)
	}
	
	//		from_parts															
	/// Packs a sign, biased exponent, and trailing significand.
	///
	/// No rounding takes place; each field is masked to its width.
	///
	/// # Parameters
	///
	/// * `sign`     - `1` for negative, `0` for positive.
	/// * `biased`   - The biased exponent field.
	/// * `trailing` - The trailing significand field.
	///
	#[must_use]
	pub const fn from_parts(sign: u64, biased: u64, trailing: u64) -> Self {
		Self::from_encoding(
			((sign & 1) << Self::SIGN_SHIFT)
			| ((biased & Self::MAX_BIASED_EXPONENT) << Self::NUM_TRAILING_BITS)
			| (trailing & Self::TRAILING_MASK)
		)
	}
	
	//		Public methods														
	
	//		biased																
	/// The biased exponent field.
	#[must_use]
	pub const fn biased(self) -> u64 {
		(self.0 & Self::BIASED_EXPONENT_MASK) >> Self::NUM_TRAILING_BITS
	}
	
	//		classify															
	/// Determines which IEEE 754 class the encoding belongs to.
	#[must_use]
	pub const fn classify(self) -> FloatClass {
		let negative = self.is_sign_minus();
		let biased   = self.biased();
		let trailing = self.trailing();
		if biased == 0 {
			match (trailing == 0, negative) {
				(true,  true)  => FloatClass::NegativeZero,
				(true,  false) => FloatClass::PositiveZero,
				(false, true)  => FloatClass::NegativeSubnormal,
				(false, false) => FloatClass::PositiveSubnormal,
			}
		} else if biased < Self::MAX_BIASED_EXPONENT {
			if negative { FloatClass::NegativeNormal } else { FloatClass::PositiveNormal }
		} else if trailing == 0 {
			if negative { FloatClass::NegativeInfinity } else { FloatClass::PositiveInfinity }
		} else if trailing & Self::NAN_QUIET_MASK != 0 {
			FloatClass::QuietNaN
		} else {
			FloatClass::SignalingNaN
		}
	}
	
	//		encoding															
	/// The raw encoding.
	#[must_use]
	pub const fn encoding(self) -> u64 {
		self.0
	}
	
	//		is_finite															
	/// Whether the encoding denotes a finite number, including zero.
	#[must_use]
	pub const fn is_finite(self) -> bool {
		self.biased() < Self::MAX_BIASED_EXPONENT
	}
	
	//		is_infinite															
	/// Whether the encoding denotes either infinity.
	#[must_use]
	pub const fn is_infinite(self) -> bool {
		self.0 & Self::NOT_SIGN_MASK == Self::POS_INFINITY
	}
	
	//		is_nan																
	/// Whether the encoding denotes a NaN of either kind.
	#[must_use]
	pub const fn is_nan(self) -> bool {
		self.0 & Self::NOT_SIGN_MASK > Self::POS_INFINITY
	}
	
	//		is_normal															
	/// Whether the encoding denotes a normal number.
	#[must_use]
	pub const fn is_normal(self) -> bool {
		let biased = self.biased();
		biased > 0 && biased < Self::MAX_BIASED_EXPONENT
	}
	
	//		is_sign_minus														
	/// Whether the sign bit is set. This includes negative zero and NaNs with
	/// the sign bit set.
	#[must_use]
	pub const fn is_sign_minus(self) -> bool {
		self.0 & Self::SIGN_MASK != 0
	}
	
	//		is_signaling_nan													
	/// Whether the encoding denotes a signaling NaN.
	#[must_use]
	pub const fn is_signaling_nan(self) -> bool {
		self.is_nan() && self.0 & Self::NAN_QUIET_MASK == 0
	}
	
	//		is_subnormal														
	/// Whether the encoding denotes a subnormal number.
	#[must_use]
	pub const fn is_subnormal(self) -> bool {
		self.biased() == 0 && self.trailing() != 0
	}
	
	//		is_zero																
	/// Whether the encoding denotes a zero of either sign.
	#[must_use]
	pub const fn is_zero(self) -> bool {
		self.0 & Self::NOT_SIGN_MASK == 0
	}
	
	//		next_down															
	/// The largest encoding that compares less than this one.
	///
	/// Steps across the zero, subnormal, normal, and infinity boundaries, so
	/// the next value down from `+0` is the negative smallest subnormal and the
	/// next value down from `-MAX_NORMAL` is negative infinity. NaNs are
	/// returned quieted.
	///
	#[must_use]
	pub const fn next_down(self) -> Self {
		if self.is_nan() {
			return Self(self.0 | Self::NAN_QUIET_MASK);
		}
		self.negate().next_up().negate()
	}
	
	//		next_up																
	/// The smallest encoding that compares greater than this one.
	///
	/// Steps across the zero, subnormal, normal, and infinity boundaries, so
	/// the next value up from either zero is the smallest subnormal and the
	/// next value up from `MAX_NORMAL` is positive infinity. NaNs are returned
	/// quieted.
	///
	#[must_use]
	pub const fn next_up(self) -> Self {
		match self.classify() {
			FloatClass::QuietNaN | FloatClass::SignalingNaN => Self(self.0 | Self::NAN_QUIET_MASK),
			FloatClass::PositiveInfinity                    => self,
			FloatClass::NegativeInfinity                    => Self(Self::SIGN_MASK | Self::MAX_NORMAL),
			FloatClass::NegativeZero | FloatClass::PositiveZero => Self(Self::MIN_SUBNORMAL),
			FloatClass::PositiveSubnormal | FloatClass::PositiveNormal => Self(self.0 + 1),
			FloatClass::NegativeSubnormal | FloatClass::NegativeNormal => Self(self.0 - 1),
		}
	}
	
	//		negate																
	/// Flips the sign bit. This is exact for every encoding, including zeros,
	/// infinities, and NaNs.
	#[must_use]
	pub const fn negate(self) -> Self {
		Self(self.0 ^ Self::SIGN_MASK)
	}
	
	//		parts																
	/// Splits the encoding into sign, biased exponent, and trailing
	/// significand.
	#[must_use]
	pub const fn parts(self) -> (u64, u64, u64) {
		(self.sign(), self.biased(), self.trailing())
	}
	
	//		sign																
	/// The sign bit, `1` for negative and `0` for positive.
	#[must_use]
	pub const fn sign(self) -> u64 {
		self.0 >> Self::SIGN_SHIFT
	}
	
	//		trailing															
	/// The trailing significand field.
	#[must_use]
	pub const fn trailing(self) -> u64 {
		self.0 & Self::TRAILING_MASK
	}
}

//󰭅		Binary16																
impl IeeeBinary<16, 11> {
	//		Private constants													
	/// Encoding of the magnitude 2^-25 in binary32. This is half of the
	/// smallest binary16 subnormal; anything up to and including it rounds to
	/// zero, as the tie goes to the even candidate zero.
	const F32_HALF_MIN_SUBNORMAL: u64 = 0x3300_0000;
	
	/// Encoding of the magnitude 2^-24 in binary32, the smallest binary16
	/// subnormal. Anything between the half-way point and this rounds up to it.
	const F32_MIN_SUBNORMAL: u64 = 0x3380_0000;
	
	/// Encoding of the magnitude 2^-14 in binary32, the smallest binary16
	/// normal. Below this the result is rounded through the subnormal range.
	const F32_MIN_NORMAL: u64 = 0x3880_0000;
	
	/// Encoding of the magnitude 65520 in binary32. This is half-way between
	/// the largest binary16 normal, 65504, and 2^16. The tie goes to the even
	/// candidate, which is infinity.
	const F32_INFINITY_THRESHOLD: u64 = 0x477F_F000;
	
	//		from_binary32														
	/// Narrows a binary32 value, rounding to nearest with ties to even.
	///
	/// Magnitudes are rounded to zero, to the smallest subnormal, through the
	/// subnormal range, through the normal range, or to infinity, according to
	/// the half-way thresholds between representable binary16 values. NaNs
	/// keep their sign and the top bits of their payload, and are quieted.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Exponents of binary32 fit in i32")]
	#[expect(clippy::cast_possible_wrap,       reason = "Exponents of binary32 fit in i32")]
	#[expect(clippy::cast_sign_loss,           reason = "Exponents are within range in each branch")]
	#[must_use]
	pub const fn from_binary32(value: Binary32) -> Self {
		let magnitude = value.encoding() & Binary32::NOT_SIGN_MASK;
		let shift     = Binary32::NUM_TRAILING_BITS - Self::NUM_TRAILING_BITS;
		let result    = if value.is_nan() {
			Self::BIASED_EXPONENT_MASK
			| Self::NAN_QUIET_MASK
			| ((value.trailing() >> shift) & Self::NAN_PAYLOAD_MASK)
		} else if magnitude <= Self::F32_HALF_MIN_SUBNORMAL {
			Self::POS_ZERO
		} else if magnitude < Self::F32_MIN_SUBNORMAL {
			Self::MIN_SUBNORMAL
		} else if magnitude < Self::F32_MIN_NORMAL {
			//	The result is the significand scaled to units of the smallest
			//	subnormal, 2^-24, which is a right shift of 14 to 23 bits
			let exponent    = value.biased() as i32 - Binary32::EXPONENT_BIAS;
			let significand = value.trailing() | Binary32::SUP_TRAILING;
			round_to_nearest_even(significand, (Self::MIN_SUB_EXPONENT - exponent + Binary32::NUM_TRAILING_BITS as i32) as u32)
		} else if magnitude < Self::F32_INFINITY_THRESHOLD {
			//	A carry out of the rounded significand moves into the exponent
			//	field, which is exactly the next binade
			let exponent    = value.biased() as i32 - Binary32::EXPONENT_BIAS;
			let significand = value.trailing() | Binary32::SUP_TRAILING;
			(((exponent - Self::MIN_EXPONENT) as u64) << Self::NUM_TRAILING_BITS) + round_to_nearest_even(significand, shift)
		} else {
			Self::POS_INFINITY
		};
		Self::from_encoding((value.sign() << Self::SIGN_SHIFT) | result)
	}
	
	//		to_binary32															
	/// Widens to binary32. Every binary16 value is exactly representable, so
	/// no rounding takes place. NaNs keep their sign, quiet bit, and payload.
	#[expect(clippy::cast_possible_wrap, reason = "Exponents of binary16 fit in i32")]
	#[expect(clippy::cast_sign_loss,     reason = "Rebiased exponents are positive")]
	#[must_use]
	pub const fn to_binary32(self) -> Binary32 {
		let shift    = Binary32::NUM_TRAILING_BITS - Self::NUM_TRAILING_BITS;
		let sign     = self.sign();
		let trailing = self.trailing();
		match self.classify() {
			FloatClass::NegativeZero | FloatClass::PositiveZero => Binary32::from_parts(sign, 0, 0),
			FloatClass::NegativeInfinity | FloatClass::PositiveInfinity
			| FloatClass::QuietNaN | FloatClass::SignalingNaN => {
				Binary32::from_parts(sign, Binary32::MAX_BIASED_EXPONENT, trailing << shift)
			},
			FloatClass::NegativeNormal | FloatClass::PositiveNormal => {
				let biased = self.biased() as i32 - Self::EXPONENT_BIAS + Binary32::EXPONENT_BIAS;
				Binary32::from_parts(sign, biased as u64, trailing << shift)
			},
			FloatClass::NegativeSubnormal | FloatClass::PositiveSubnormal => {
				//	Normalise so that the leading bit becomes the implicit bit
				let width    = 64 - trailing.leading_zeros();
				let exponent = Self::MIN_SUB_EXPONENT + width as i32 - 1;
				let biased   = exponent + Binary32::EXPONENT_BIAS;
				let fraction = (trailing << (Binary32::NUM_TRAILING_BITS + 1 - width)) & Binary32::TRAILING_MASK;
				Binary32::from_parts(sign, biased as u64, fraction)
			},
		}
	}
}

//󰭅		Debug																	
impl<const NUM_BITS: u32, const PRECISION: u32> Debug for IeeeBinary<NUM_BITS, PRECISION> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let (sign, biased, trailing) = self.parts();
		write!(f, "IeeeBinary::<{NUM_BITS}, {PRECISION}>({sign}, 0x{biased:x}, 0x{trailing:x})")
	}
}

//󰭅		From: f32 -> Binary16													
impl From<f32> for Binary16 {
	//		from																
	fn from(value: f32) -> Self {
		Self::from_binary32(Binary32::from(value))
	}
}

//󰭅		From: f32 -> Binary32													
impl From<f32> for Binary32 {
	//		from																
	fn from(value: f32) -> Self {
		Self::from_encoding(u64::from(value.to_bits()))
	}
}

//󰭅		From: f64 -> Binary64													
impl From<f64> for Binary64 {
	//		from																
	fn from(value: f64) -> Self {
		Self::from_encoding(value.to_bits())
	}
}

//󰭅		From: Binary16 -> f32													
impl From<Binary16> for f32 {
	//		from																
	fn from(value: Binary16) -> Self {
		Self::from(value.to_binary32())
	}
}

//󰭅		From: Binary32 -> f32													
impl From<Binary32> for f32 {
	//		from																
	#[expect(clippy::cast_possible_truncation, reason = "Encoding is masked to 32 bits")]
	fn from(value: Binary32) -> Self {
		Self::from_bits(value.encoding() as u32)
	}
}

//󰭅		From: Binary64 -> f64													
impl From<Binary64> for f64 {
	//		from																
	fn from(value: Binary64) -> Self {
		Self::from_bits(value.encoding())
	}
}

//󰭅		Neg																		
impl<const NUM_BITS: u32, const PRECISION: u32> Neg for IeeeBinary<NUM_BITS, PRECISION> {
	type Output = Self;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		self.negate()
	}
}



//		Functions

//		round_to_nearest_even													
/// Shifts `value` right by `shift` bits, rounding to nearest with ties to
/// even.
const fn round_to_nearest_even(value: u64, shift: u32) -> u64 {
	if shift == 0 {
		return value;
	}
	if shift > 64 {
		return 0;
	}
	let kept      = if shift == 64 { 0 } else { value >> shift };
	let remainder = if shift == 64 { value } else { value & ((1_u64 << shift) - 1) };
	let half      = 1_u64 << (shift - 1);
	if remainder > half || (remainder == half && kept & 1 == 1) {
		kept + 1
	} else {
		kept
	}
}
