//! Word storage for the mantissas of binary scientific numbers.

//	Word-level loops index into storage whose length was set just before
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Lengths are established before indexing"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Carry and borrow arithmetic is the point of this module")]



//		Modules

#[cfg(test)]
#[path = "tests/uinteger.rs"]
mod tests;



//		Packages

use crate::errors::ArithmeticError;
use core::{
	cmp::Ordering,
	fmt::{Debug, Formatter, self},
	hash::{Hash, Hasher},
	ops::{Index, IndexMut},
};
use generic_array::{ArrayLength, GenericArray};
use tracing::debug;



//		Traits

//		UInteger																
/// Storage for the bit pattern of an unsigned integer of arbitrary size.
///
/// The value is held as a sequence of 32-bit words in little-endian order, so
/// word `0` is the least significant. Implementations only need to provide
/// the storage primitives; the word-level arithmetic used by
/// [`BSNumber`](crate::BSNumber) is supplied by the trait.
///
/// # Normal form
///
/// All provided operations expect their operands to be trimmed, i.e. the most
/// significant word is non-zero, or the sequence is empty for zero. They also
/// return trimmed results.
///
/// # Indexing
///
/// Indexes beyond [`len()`](UInteger::len()) are a caller error. Backends are
/// only required to check them against the logical length in debug builds, so
/// fixed-capacity storage may hand back a spare zero word in release builds.
///
pub trait UInteger
where
	Self: Clone + Debug + Default + Eq + Hash + Index<usize, Output = u32> + IndexMut<usize>,
{
	/// The maximum number of words the storage can hold, or [`None`] if it can
	/// grow without limit.
	const CAPACITY: Option<usize>;
	
	//		with_len															
	/// Creates storage holding `len` zeroed words.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::CapacityExceeded`] if `len` words cannot be
	/// held.
	///
	fn with_len(len: usize) -> Result<Self, ArithmeticError>;
	
	//		resize																
	/// Changes the number of words, zero-filling any new words.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::CapacityExceeded`] if `len` words cannot be
	/// held. The storage is left unchanged in that case.
	///
	fn resize(&mut self, len: usize) -> Result<(), ArithmeticError>;
	
	//		words																
	/// The words currently in use, least significant first.
	fn words(&self) -> &[u32];
	
	//		words_mut															
	/// Mutable access to the words currently in use.
	fn words_mut(&mut self) -> &mut [u32];
	
	//		back																
	/// The most significant word, if any.
	fn back(&self) -> Option<u32> {
		self.words().last().copied()
	}
	
	//		bit_len																
	/// The number of significant bits, assuming the storage is trimmed.
	#[expect(clippy::cast_possible_truncation, reason = "Word counts are far below 2^27")]
	fn bit_len(&self) -> u32 {
		self.back().map_or(0, |top| (self.len() as u32 - 1) * 32 + (32 - top.leading_zeros()))
	}
	
	//		bits_at																
	/// Reads `count` bits starting at bit position `lo`.
	///
	/// Bits outside the stored words, including negative positions, read as
	/// zero. This allows callers to read a window that is aligned to the most
	/// significant bit of a value without shifting the whole value first.
	///
	/// # Parameters
	///
	/// * `lo`    - The position of the lowest bit to read.
	/// * `count` - The number of bits to read, at most 64.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Values are bounded by the checks above each cast")]
	#[expect(clippy::cast_sign_loss,           reason = "Negative positions are handled first")]
	fn bits_at(&self, lo: i64, count: u32) -> u64 {
		debug_assert!(count <= 64, "Cannot read more than 64 bits at once");
		if count == 0 {
			return 0;
		}
		if lo < 0 {
			let pad = lo.unsigned_abs();
			if pad >= u64::from(count) {
				return 0;
			}
			return self.bits_at(0, count - pad as u32) << pad;
		}
		let words  = self.words();
		let first  = (lo / 32) as usize;
		let offset = (lo % 32) as u32;
		let mut window = 0_u128;
		for k in 0..3 {
			if let Some(&word) = words.get(first + k) {
				window |= u128::from(word) << (32 * k);
			}
		}
		let mask = if count == 64 { u64::MAX } else { (1_u64 << count) - 1 };
		((window >> offset) as u64) & mask
	}
	
	//		compare																
	/// Compares two trimmed values numerically.
	fn compare(&self, other: &Self) -> Ordering {
		let (a, b) = (self.words(), other.words());
		a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
	}
	
	//		difference															
	/// Subtracts `other` from `self`, which must be the larger value.
	///
	/// # Errors
	///
	/// Never fails for a valid backend, as the result is no longer than `self`,
	/// but the allocation goes through [`with_len()`](UInteger::with_len()).
	///
	#[expect(clippy::cast_possible_truncation, reason = "Results are below 2^32")]
	fn difference(&self, other: &Self) -> Result<Self, ArithmeticError> {
		debug_assert!(self.compare(other) != Ordering::Less, "Subtraction would underflow");
		let (a, b)     = (self.words(), other.words());
		let mut result = Self::with_len(a.len())?;
		let mut borrow = 0_u64;
		for (i, &word) in a.iter().enumerate() {
			let subtrahend = u64::from(b.get(i).copied().unwrap_or(0)) + borrow;
			let minuend    = u64::from(word);
			if minuend >= subtrahend {
				result[i] = (minuend - subtrahend) as u32;
				borrow    = 0;
			} else {
				result[i] = ((1_u64 << 32) + minuend - subtrahend) as u32;
				borrow    = 1;
			}
		}
		result.trim();
		Ok(result)
	}
	
	//		from_u64															
	/// Creates trimmed storage for a 64-bit value.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::CapacityExceeded`] if the value needs more
	/// words than can be held.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Splitting into words")]
	fn from_u64(value: u64) -> Result<Self, ArithmeticError> {
		let (low, high) = (value as u32, (value >> 32) as u32);
		let len         = if high != 0 { 2 } else { usize::from(low != 0) };
		let mut result  = Self::with_len(len)?;
		if len > 0 {
			result[0] = low;
		}
		if len > 1 {
			result[1] = high;
		}
		Ok(result)
	}
	
	//		is_empty															
	/// Whether no words are in use, i.e. the value is zero.
	fn is_empty(&self) -> bool {
		self.words().is_empty()
	}
	
	//		len																	
	/// The number of words in use.
	fn len(&self) -> usize {
		self.words().len()
	}
	
	//		product																
	/// Multiplies two values.
	///
	/// With fixed-capacity storage the result is first attempted in one word
	/// less than the worst case, which is enough whenever the top word of the
	/// full product would be zero.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::CapacityExceeded`] if the product needs more
	/// words than can be held.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Splitting into words")]
	fn product(&self, other: &Self) -> Result<Self, ArithmeticError> {
		let (a, b) = (self.words(), other.words());
		if a.is_empty() || b.is_empty() {
			return Ok(Self::default());
		}
		let full = a.len() + b.len();
		let len  = match Self::CAPACITY {
			Some(capacity) if full > capacity => full - 1,
			_                                 => full,
		};
		let mut result = Self::with_len(len)?;
		for (i, &x) in a.iter().enumerate() {
			let mut carry = 0_u64;
			for (j, &y) in b.iter().enumerate() {
				let term      = u64::from(x) * u64::from(y) + u64::from(result[i + j]) + carry;
				result[i + j] = term as u32;
				carry         = term >> 32;
			}
			if i + b.len() < len {
				result[i + b.len()] = carry as u32;
			} else if carry != 0 {
				debug!(required = full, capacity = len, "Product does not fit in word storage");
				return Err(ArithmeticError::CapacityExceeded { required: full, capacity: len });
			}
		}
		result.trim();
		Ok(result)
	}
	
	//		shift_right_to_odd													
	/// Shifts the value right until it is odd, returning the shift amount.
	///
	/// Zero is left untouched and reports a shift of zero.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Word counts are far below 2^27")]
	fn shift_right_to_odd(&mut self) -> u32 {
		let Some(first) = self.words().iter().position(|&word| word != 0) else {
			return 0;
		};
		let bit_shift = self[first].trailing_zeros();
		let len       = self.len();
		let words     = self.words_mut();
		for i in 0..len - first {
			let low  = words[i + first] >> bit_shift;
			let high = if bit_shift > 0 && i + first + 1 < len {
				words[i + first + 1] << (32 - bit_shift)
			} else {
				0
			};
			words[i] = low | high;
		}
		//	Shrinking can never fail
		_ = self.resize(len - first);
		self.trim();
		first as u32 * 32 + bit_shift
	}
	
	//		shifted_left														
	/// Returns the value shifted left by `shift` bits.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::CapacityExceeded`] if the shifted value
	/// needs more words than can be held.
	///
	fn shifted_left(&self, shift: u32) -> Result<Self, ArithmeticError> {
		let words = self.words();
		let Some(&top) = words.last() else {
			return Ok(Self::default());
		};
		let word_shift = (shift / 32) as usize;
		let bit_shift  = shift % 32;
		let spill      = bit_shift > 0 && (top >> (32 - bit_shift)) != 0;
		let mut result = Self::with_len(words.len() + word_shift + usize::from(spill))?;
		if bit_shift == 0 {
			result.words_mut()[word_shift..].copy_from_slice(words);
		} else {
			let mut carry = 0_u32;
			for (i, &word) in words.iter().enumerate() {
				result[word_shift + i] = (word << bit_shift) | carry;
				carry                  = word >> (32 - bit_shift);
			}
			if spill {
				result[word_shift + words.len()] = carry;
			}
		}
		Ok(result)
	}
	
	//		sum																	
	/// Adds two values.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::CapacityExceeded`] if a carry out of the top
	/// word cannot be stored.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Splitting into words")]
	fn sum(&self, other: &Self) -> Result<Self, ArithmeticError> {
		let (long, short) = if self.len() >= other.len() {
			(self.words(), other.words())
		} else {
			(other.words(), self.words())
		};
		let mut result = Self::with_len(long.len())?;
		let mut carry  = 0_u64;
		for (i, &word) in long.iter().enumerate() {
			let total = u64::from(word) + u64::from(short.get(i).copied().unwrap_or(0)) + carry;
			result[i] = total as u32;
			carry     = total >> 32;
		}
		if carry != 0 {
			result.resize(long.len() + 1)?;
			result[long.len()] = 1;
		}
		Ok(result)
	}
	
	//		trim																
	/// Drops leading zero words.
	fn trim(&mut self) {
		let len = self.words().iter().rposition(|&word| word != 0).map_or(0, |top| top + 1);
		//	Shrinking can never fail
		_ = self.resize(len);
	}
}



//		Structs

//		UIntegerAp32															
/// Word storage that grows on demand.
///
/// This is the simplest backend and the right choice whenever an upper bound
/// on the precision a computation needs is not known in advance.
///
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct UIntegerAp32(Vec<u32>);

//󰭅		From: Vec<u32> -> UIntegerAp32											
impl From<Vec<u32>> for UIntegerAp32 {
	//		from																
	fn from(mut words: Vec<u32>) -> Self {
		while words.last() == Some(&0) {
			_ = words.pop();
		}
		Self(words)
	}
}

//󰭅		Index																	
impl Index<usize> for UIntegerAp32 {
	type Output = u32;
	
	//		index																
	fn index(&self, index: usize) -> &Self::Output {
		&self.0[index]
	}
}

//󰭅		IndexMut																
impl IndexMut<usize> for UIntegerAp32 {
	//		index_mut															
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.0[index]
	}
}

//󰭅		UInteger																
impl UInteger for UIntegerAp32 {
	const CAPACITY: Option<usize> = None;
	
	//		with_len															
	fn with_len(len: usize) -> Result<Self, ArithmeticError> {
		Ok(Self(vec![0; len]))
	}
	
	//		resize																
	fn resize(&mut self, len: usize) -> Result<(), ArithmeticError> {
		self.0.resize(len, 0);
		Ok(())
	}
	
	//		words																
	fn words(&self) -> &[u32] {
		&self.0
	}
	
	//		words_mut															
	fn words_mut(&mut self) -> &mut [u32] {
		&mut self.0
	}
}

//		UIntegerFp32															
/// Word storage with a fixed capacity and no heap allocation.
///
/// The capacity is given in 32-bit words as a [`typenum`] unsigned, e.g.
/// `UIntegerFp32<U16>` holds up to 512 bits. This is the right choice when the
/// largest bit width an algorithm produces is known, which can be found by
/// profiling the algorithm with [`UIntegerAp32`] first.
///
/// Any operation that would need more words than the capacity fails with
/// [`ArithmeticError::CapacityExceeded`] instead of truncating.
///
#[derive(Clone, Default)]
pub struct UIntegerFp32<N: ArrayLength> {
	/// The backing array. Words at and beyond `len` are always zero.
	words: GenericArray<u32, N>,
	
	/// The number of words in use.
	len:   usize,
}

//󰭅		UIntegerFp32															
impl<N: ArrayLength> UIntegerFp32<N> {
	/// Compile-time check that at least one word can be stored.
	const NOT_EMPTY: () = assert!(N::USIZE > 0, "Fixed-capacity storage needs at least one word");
}

//󰭅		Debug																	
impl<N: ArrayLength> Debug for UIntegerFp32<N> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "UIntegerFp32<{}>({:?})", N::USIZE, self.words())
	}
}

//󰭅		Eq																		
impl<N: ArrayLength> Eq for UIntegerFp32<N> {}

//󰭅		Hash																	
impl<N: ArrayLength> Hash for UIntegerFp32<N> {
	//		hash																
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.words().hash(state);
	}
}

//󰭅		Index																	
impl<N: ArrayLength> Index<usize> for UIntegerFp32<N> {
	type Output = u32;
	
	//		index																
	fn index(&self, index: usize) -> &Self::Output {
		debug_assert!(index < self.len, "Word index {index} out of range");
		&self.words[index]
	}
}

//󰭅		IndexMut																
impl<N: ArrayLength> IndexMut<usize> for UIntegerFp32<N> {
	//		index_mut															
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		debug_assert!(index < self.len, "Word index {index} out of range");
		&mut self.words[index]
	}
}

//󰭅		PartialEq																
impl<N: ArrayLength> PartialEq for UIntegerFp32<N> {
	//		eq																	
	fn eq(&self, other: &Self) -> bool {
		self.words() == other.words()
	}
}

//󰭅		UInteger																
impl<N: ArrayLength> UInteger for UIntegerFp32<N> {
	const CAPACITY: Option<usize> = Some(N::USIZE);
	
	//		with_len															
	fn with_len(len: usize) -> Result<Self, ArithmeticError> {
		let mut result = Self::default();
		result.resize(len)?;
		Ok(result)
	}
	
	//		resize																
	fn resize(&mut self, len: usize) -> Result<(), ArithmeticError> {
		let () = Self::NOT_EMPTY;
		if len > N::USIZE {
			debug!(required = len, capacity = N::USIZE, "Word storage capacity exceeded");
			return Err(ArithmeticError::CapacityExceeded { required: len, capacity: N::USIZE });
		}
		if len < self.len {
			self.words[len..self.len].fill(0);
		}
		self.len = len;
		Ok(())
	}
	
	//		words																
	fn words(&self) -> &[u32] {
		&self.words[..self.len]
	}
	
	//		words_mut															
	fn words_mut(&mut self) -> &mut [u32] {
		&mut self.words[..self.len]
	}
}
