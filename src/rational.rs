//! Exact rational numbers built on binary scientific numbers.



//		Modules

#[cfg(test)]
#[path = "tests/rational.rs"]
mod tests;



//		Packages

use crate::{
	errors::{ArithmeticError, ConversionError},
	number::{Abs, BSNumber},
	uinteger::{UInteger, UIntegerAp32, UIntegerFp32},
};
use core::{
	cmp::Ordering,
	fmt::{Display, Formatter, self},
	iter::{Product, Sum},
	marker::PhantomData,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
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

/// A [`BSRational`] backed by storage that grows on demand.
pub type BSRationalAp = BSRational<UIntegerAp32>;

/// A [`BSRational`] backed by storage for at most `N` 32-bit words per
/// component.
pub type BSRationalFp<N> = BSRational<UIntegerFp32<N>>;



//		Structs

//		BSRational																
/// An exact rational number, held as a quotient of two [`BSNumber`]s.
///
/// All four arithmetic operations are exact. Results are never reduced to
/// lowest terms, so the same value can be held by many numerator and
/// denominator pairs; equality and ordering compare values, not pairs. The
/// numerator and denominator grow with each operation, and a long chain of
/// operations can therefore need a lot of storage.
/// [`normalized()`](BSRational::normalized()) removes the cheap part of that
/// growth.
///
/// The denominator is never zero. Either component may be negative.
///
/// Conversion to [`f32`] and [`f64`] is the one inexact operation: each
/// component is rounded, and the results are divided in floating point.
///
/// # Panics
///
/// The arithmetic operators panic where the corresponding `try_*` method
/// would return an error, and `/` panics on division by zero. Comparison
/// through [`PartialEq`], [`PartialOrd`], and [`Ord`] cross-multiplies, so
/// with [`UIntegerFp32`] storage it panics if a cross product does not fit.
/// Use [`try_cmp()`](BSRational::try_cmp()) to get
/// [`ArithmeticError::CapacityExceeded`] instead.
///
#[derive(Clone, Debug)]
pub struct BSRational<U: UInteger> {
	/// The dividend.
	numerator:   BSNumber<U>,
	
	/// The divisor, never zero.
	denominator: BSNumber<U>,
}

//󰭅		BSRational																
impl<U: UInteger> BSRational<U> {
	//		Constructors														
	
	//		from_ratio															
	/// Creates a rational from two native numbers.
	///
	/// # Errors
	///
	/// Returns an error if either input cannot be converted exactly, or
	/// [`ArithmeticError::DivideByZero`] if the denominator is zero.
	///
	pub fn from_ratio<T>(numerator: T, denominator: T) -> Result<Self, ConversionError>
	where
		BSNumber<U>: TryFrom<T, Error = ConversionError>,
	{
		Ok(Self::new(BSNumber::try_from(numerator)?, BSNumber::try_from(denominator)?)?)
	}
	
	//		new																	
	/// Creates a rational from a numerator and a denominator.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivideByZero`] if the denominator is zero.
	///
	pub fn new(numerator: BSNumber<U>, denominator: BSNumber<U>) -> Result<Self, ArithmeticError> {
		if denominator.is_zero() {
			debug!("Rejected zero denominator");
			return Err(ArithmeticError::DivideByZero);
		}
		Ok(Self { numerator, denominator })
	}
	
	//		one																	
	/// The number one.
	#[must_use]
	pub fn one() -> Self {
		Self { numerator: BSNumber::one(), denominator: BSNumber::one() }
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
		Self { numerator: self.numerator.abs(), denominator: self.denominator.abs() }
	}
	
	//		denominator															
	/// The divisor.
	#[must_use]
	pub const fn denominator(&self) -> &BSNumber<U> {
		&self.denominator
	}
	
	//		from_json															
	/// Parses a rational from JSON.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is not a valid rational representation.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		is_zero																
	/// Whether the value is zero.
	#[must_use]
	pub const fn is_zero(&self) -> bool {
		self.numerator.is_zero()
	}
	
	//		ldexp																
	/// Multiplies the value by `2^power`, exactly.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::ExponentOverflow`] if the numerator's
	/// exponent leaves the 32-bit range.
	///
	pub fn ldexp(&self, power: i32) -> Result<Self, ArithmeticError> {
		Ok(Self { numerator: self.numerator.ldexp(power)?, denominator: self.denominator.clone() })
	}
	
	//		normalized															
	/// Returns the same value with the denominator reduced to a positive odd
	/// integer.
	///
	/// The denominator's sign and power of two are moved into the numerator.
	/// This is exact, costs no multiplication, and keeps the denominator from
	/// accumulating powers of two across many operations. No common odd
	/// factors are removed.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::ExponentOverflow`] if the numerator's
	/// exponent leaves the 32-bit range.
	///
	pub fn normalized(&self) -> Result<Self, ArithmeticError> {
		let power     = self.denominator.biased_exponent().checked_neg().ok_or(ArithmeticError::ExponentOverflow)?;
		let numerator = self.numerator.ldexp(power)?;
		let numerator = if self.denominator.sign() < 0 { -numerator } else { numerator };
		Ok(Self {
			numerator,
			denominator: BSNumber::from_raw(1, 0, self.denominator.bits().clone())?,
		})
	}
	
	//		numerator															
	/// The dividend.
	#[must_use]
	pub const fn numerator(&self) -> &BSNumber<U> {
		&self.numerator
	}
	
	//		recip																
	/// Returns the reciprocal.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivideByZero`] if the value is zero.
	///
	pub fn recip(&self) -> Result<Self, ArithmeticError> {
		Self::new(self.denominator.clone(), self.numerator.clone())
	}
	
	//		sign																
	/// The sign of the value: `-1`, `0`, or `1`.
	#[must_use]
	pub const fn sign(&self) -> i8 {
		self.numerator.sign() * self.denominator.sign()
	}
	
	//		to_f32																
	/// Converts to the nearest [`f32`] quotient of the rounded components.
	///
	/// This is not correctly rounded, and a quotient of two finite values can
	/// overflow or become NaN when a component lies outside the [`f32`] range.
	///
	#[must_use]
	pub fn to_f32(&self) -> f32 {
		let value = self.numerator.to_f32() / self.denominator.to_f32();
		if !value.is_finite() {
			trace!(rational = %self, value, "Lossy conversion to f32 is not finite");
		}
		value
	}
	
	//		to_f64																
	/// Converts to the nearest [`f64`] quotient of the rounded components.
	///
	/// As for [`to_f32()`](BSRational::to_f32()).
	///
	#[must_use]
	pub fn to_f64(&self) -> f64 {
		let value = self.numerator.to_f64() / self.denominator.to_f64();
		if !value.is_finite() {
			trace!(rational = %self, value, "Lossy conversion to f64 is not finite");
		}
		value
	}
	
	//		to_json																
	/// Serialises the rational to JSON.
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
	/// Returns [`ArithmeticError::CapacityExceeded`] or
	/// [`ArithmeticError::ExponentOverflow`] if a component result cannot be
	/// represented.
	///
	pub fn try_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		if self.denominator == rhs.denominator {
			return Ok(Self {
				numerator:   self.numerator.try_add(&rhs.numerator)?,
				denominator: self.denominator.clone(),
			});
		}
		Ok(Self {
			numerator:   self.numerator.try_mul(&rhs.denominator)?.try_add(&rhs.numerator.try_mul(&self.denominator)?)?,
			denominator: self.denominator.try_mul(&rhs.denominator)?,
		})
	}
	
	//		try_cmp																
	/// Compares two rationals by value.
	///
	/// Values with different signs compare without any arithmetic. Otherwise
	/// the numerators are compared directly when the denominators are equal,
	/// and cross-multiplied when they are not.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::CapacityExceeded`] or
	/// [`ArithmeticError::ExponentOverflow`] if a cross product cannot be
	/// represented.
	///
	pub fn try_cmp(&self, other: &Self) -> Result<Ordering, ArithmeticError> {
		match self.sign().cmp(&other.sign()) {
			Ordering::Equal => {},
			unequal         => return Ok(unequal),
		}
		if self.is_zero() {
			return Ok(Ordering::Equal);
		}
		if self.denominator == other.denominator {
			let ordering = self.numerator.cmp(&other.numerator);
			return Ok(if self.denominator.sign() < 0 { ordering.reverse() } else { ordering });
		}
		let lhs = self.numerator.try_mul(&other.denominator)?;
		let rhs = other.numerator.try_mul(&self.denominator)?;
		//	Cross-multiplying scales both sides by the product of the denominators,
		//	whose sign may flip the comparison
		Ok(if self.denominator.sign() == other.denominator.sign() {
			lhs.cmp(&rhs)
		} else {
			rhs.cmp(&lhs)
		})
	}
	
	//		try_div																
	/// Exact division.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivideByZero`] if `rhs` is zero, and
	/// otherwise as for [`try_mul()`](BSRational::try_mul()).
	///
	pub fn try_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		if rhs.is_zero() {
			debug!(dividend = %self, "Division by zero");
			return Err(ArithmeticError::DivideByZero);
		}
		Ok(Self {
			numerator:   self.numerator.try_mul(&rhs.denominator)?,
			denominator: self.denominator.try_mul(&rhs.numerator)?,
		})
	}
	
	//		try_mul																
	/// Exact multiplication.
	///
	/// # Errors
	///
	/// As for [`try_add()`](BSRational::try_add()).
	///
	pub fn try_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		Ok(Self {
			numerator:   self.numerator.try_mul(&rhs.numerator)?,
			denominator: self.denominator.try_mul(&rhs.denominator)?,
		})
	}
	
	//		try_sub																
	/// Exact subtraction.
	///
	/// # Errors
	///
	/// As for [`try_add()`](BSRational::try_add()).
	///
	pub fn try_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		if self.denominator == rhs.denominator {
			return Ok(Self {
				numerator:   self.numerator.try_sub(&rhs.numerator)?,
				denominator: self.denominator.clone(),
			});
		}
		Ok(Self {
			numerator:   self.numerator.try_mul(&rhs.denominator)?.try_sub(&rhs.numerator.try_mul(&self.denominator)?)?,
			denominator: self.denominator.try_mul(&rhs.denominator)?,
		})
	}
}

//󰭅		Abs																		
impl<U: UInteger> Abs for BSRational<U> {
	//		abs																	
	fn abs(&self) -> Self {
		Self::abs(self)
	}
}

//󰭅		Add																		
impl<U: UInteger> Add for BSRational<U> {
	type Output = Self;
	
	//		add																	
	fn add(self, rhs: Self) -> Self::Output {
		&self + &rhs
	}
}

//󰭅		Add<&>																	
impl<U: UInteger> Add for &BSRational<U> {
	type Output = BSRational<U>;
	
	//		add																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add(self, rhs: Self) -> Self::Output {
		self.try_add(rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		AddAssign																
impl<U: UInteger> AddAssign for BSRational<U> {
	//		add_assign															
	fn add_assign(&mut self, rhs: Self) {
		*self = &*self + &rhs;
	}
}

//󰭅		AddAssign<&>															
impl<U: UInteger> AddAssign<&Self> for BSRational<U> {
	//		add_assign															
	fn add_assign(&mut self, rhs: &Self) {
		*self = &*self + rhs;
	}
}

//󰭅		Default																	
impl<U: UInteger> Default for BSRational<U> {
	//		default																
	fn default() -> Self {
		Self { numerator: BSNumber::zero(), denominator: BSNumber::one() }
	}
}

//󰭅		Deserialize																
impl<'de, U: UInteger> Deserialize<'de> for BSRational<U> {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			deserializer.deserialize_str(RationalVisitor::<U>(PhantomData))
		} else {
			let (numerator, denominator) = <(BSNumber<U>, BSNumber<U>)>::deserialize(deserializer)?;
			Self::new(numerator, denominator).map_err(D::Error::custom)
		}
	}
}

//󰭅		Display																	
impl<U: UInteger> Display for BSRational<U> {
	//		fmt																	
	/// Writes the numerator and denominator separated by `/`, e.g.
	/// `0x1p+0/0x3p+0` for one third.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.numerator, self.denominator)
	}
}

//󰭅		Div																		
impl<U: UInteger> Div for BSRational<U> {
	type Output = Self;
	
	//		div																	
	fn div(self, rhs: Self) -> Self::Output {
		&self / &rhs
	}
}

//󰭅		Div<&>																	
impl<U: UInteger> Div for &BSRational<U> {
	type Output = BSRational<U>;
	
	//		div																	
	#[expect(clippy::panic, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: Self) -> Self::Output {
		match self.try_div(rhs) {
			Ok(quotient)                       => quotient,
			Err(ArithmeticError::DivideByZero) => panic!("Attempt to divide by zero"),
			Err(_)                             => panic!("Attempt to divide overflowed"),
		}
	}
}

//󰭅		DivAssign																
impl<U: UInteger> DivAssign for BSRational<U> {
	//		div_assign															
	fn div_assign(&mut self, rhs: Self) {
		*self = &*self / &rhs;
	}
}

//󰭅		DivAssign<&>															
impl<U: UInteger> DivAssign<&Self> for BSRational<U> {
	//		div_assign															
	fn div_assign(&mut self, rhs: &Self) {
		*self = &*self / rhs;
	}
}

//󰭅		Eq																		
impl<U: UInteger> Eq for BSRational<U> {}

//󰭅		From: BSNumber -> BSRational											
impl<U: UInteger> From<BSNumber<U>> for BSRational<U> {
	//		from																
	fn from(numerator: BSNumber<U>) -> Self {
		Self { numerator, denominator: BSNumber::one() }
	}
}

//󰭅		FromStr																	
impl<U: UInteger> FromStr for BSRational<U> {
	type Err = ConversionError;
	
	//		from_str															
	/// Parses the form written by [`Display`]. A bare number is taken to have
	/// a denominator of one.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.split_once('/') {
			Some((numerator, denominator)) => Ok(Self::new(numerator.parse()?, denominator.parse()?)?),
			None                           => Ok(Self::from(s.parse::<BSNumber<U>>()?)),
		}
	}
}

//󰭅		Mul																		
impl<U: UInteger> Mul for BSRational<U> {
	type Output = Self;
	
	//		mul																	
	fn mul(self, rhs: Self) -> Self::Output {
		&self * &rhs
	}
}

//󰭅		Mul<&>																	
impl<U: UInteger> Mul for &BSRational<U> {
	type Output = BSRational<U>;
	
	//		mul																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn mul(self, rhs: Self) -> Self::Output {
		self.try_mul(rhs).expect("Attempt to multiply overflowed")
	}
}

//󰭅		MulAssign																
impl<U: UInteger> MulAssign for BSRational<U> {
	//		mul_assign															
	fn mul_assign(&mut self, rhs: Self) {
		*self = &*self * &rhs;
	}
}

//󰭅		MulAssign<&>															
impl<U: UInteger> MulAssign<&Self> for BSRational<U> {
	//		mul_assign															
	fn mul_assign(&mut self, rhs: &Self) {
		*self = &*self * rhs;
	}
}

//󰭅		Neg																		
impl<U: UInteger> Neg for BSRational<U> {
	type Output = Self;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		Self { numerator: -self.numerator, denominator: self.denominator }
	}
}

//󰭅		Neg<&>																	
impl<U: UInteger> Neg for &BSRational<U> {
	type Output = BSRational<U>;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		-self.clone()
	}
}

//󰭅		Ord																		
impl<U: UInteger> Ord for BSRational<U> {
	//		cmp																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn cmp(&self, other: &Self) -> Ordering {
		self.try_cmp(other).expect("Attempt to compare overflowed")
	}
}

//󰭅		PartialEq																
impl<U: UInteger> PartialEq for BSRational<U> {
	//		eq																	
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

//󰭅		PartialOrd																
impl<U: UInteger> PartialOrd for BSRational<U> {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product																	
impl<U: UInteger> Product for BSRational<U> {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::one(), |acc, x| &acc * &x)
	}
}

//󰭅		Product<&>																
impl<'a, U: UInteger> Product<&'a Self> for BSRational<U> {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::one(), |acc, x| &acc * x)
	}
}

//󰭅		Serialize																
impl<U: UInteger> Serialize for BSRational<U> {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			serializer.collect_str(self)
		} else {
			(&self.numerator, &self.denominator).serialize(serializer)
		}
	}
}

//󰭅		Sub																		
impl<U: UInteger> Sub for BSRational<U> {
	type Output = Self;
	
	//		sub																	
	fn sub(self, rhs: Self) -> Self::Output {
		&self - &rhs
	}
}

//󰭅		Sub<&>																	
impl<U: UInteger> Sub for &BSRational<U> {
	type Output = BSRational<U>;
	
	//		sub																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: Self) -> Self::Output {
		self.try_sub(rhs).expect("Attempt to subtract overflowed")
	}
}

//󰭅		SubAssign																
impl<U: UInteger> SubAssign for BSRational<U> {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: Self) {
		*self = &*self - &rhs;
	}
}

//󰭅		SubAssign<&>															
impl<U: UInteger> SubAssign<&Self> for BSRational<U> {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: &Self) {
		*self = &*self - rhs;
	}
}

//󰭅		Sum																		
impl<U: UInteger> Sum for BSRational<U> {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| &acc + &x)
	}
}

//󰭅		Sum<&>																	
impl<'a, U: UInteger> Sum<&'a Self> for BSRational<U> {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, x| &acc + x)
	}
}

//󰭅		TryFrom: f32 -> BSRational												
impl<U: UInteger> TryFrom<f32> for BSRational<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: f32) -> Result<Self, Self::Error> {
		Ok(Self::from(BSNumber::try_from(v)?))
	}
}

//󰭅		TryFrom: f64 -> BSRational												
impl<U: UInteger> TryFrom<f64> for BSRational<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: f64) -> Result<Self, Self::Error> {
		Ok(Self::from(BSNumber::try_from(v)?))
	}
}

//󰭅		TryFrom: i32 -> BSRational												
impl<U: UInteger> TryFrom<i32> for BSRational<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i32) -> Result<Self, Self::Error> {
		Ok(Self::from(BSNumber::try_from(v)?))
	}
}

//󰭅		TryFrom: i64 -> BSRational												
impl<U: UInteger> TryFrom<i64> for BSRational<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i64) -> Result<Self, Self::Error> {
		Ok(Self::from(BSNumber::try_from(v)?))
	}
}

//󰭅		TryFrom: u32 -> BSRational												
impl<U: UInteger> TryFrom<u32> for BSRational<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u32) -> Result<Self, Self::Error> {
		Ok(Self::from(BSNumber::try_from(v)?))
	}
}

//󰭅		TryFrom: u64 -> BSRational												
impl<U: UInteger> TryFrom<u64> for BSRational<U> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u64) -> Result<Self, Self::Error> {
		Ok(Self::from(BSNumber::try_from(v)?))
	}
}



//		Visitors

//		RationalVisitor															
/// A visitor for parsing rationals from their text form.
struct RationalVisitor<U>(PhantomData<U>);

//󰭅		Visitor																	
impl<U: UInteger> Visitor<'_> for RationalVisitor<U> {
	type Value = BSRational<U>;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a rational such as \"0x1p+0/0x3p+0\"")
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}
