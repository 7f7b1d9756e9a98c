//! Custom arbitrary-precision integer type.

//	These lint checks are unnecessary in this module because:
//	  1. Every index is either guarded by an explicit length check or derived
//	     from the digit counts of the operands.
//	  2. Using .get() everywhere would add runtime checks and make the digit
//	     walks more verbose with .unwrap()s.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indexing is always guarded by the surrounding length logic"
)]

//	This lint check is unnecessary in this module because these arithmetic
//	operations are essential parts of our algorithms, and their bounds are
//	established by the widened accumulator types. We also want to emulate the
//	Rust standard library behaviour.
#![allow(clippy::arithmetic_side_effects, reason = "Carries are contained by the widened accumulator types")]



//		Modules

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages

use crate::errors::{ConversionError, ParseError};
use crate::fft::{self, Complex};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
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
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Structs

//		Integer
/// A signed integer of arbitrary length.
///
/// This type provides an integer whose range is bounded only by available
/// memory. It follows standard Rust integer behaviour wherever that behaviour
/// still makes sense for an unbounded type:
///
///   1. Addition, subtraction, and multiplication never overflow; the value
///      simply grows.
///   2. Division and remainder by zero panic, as with the standard integer
///      types. The [`checked_div()`](Integer::checked_div()),
///      [`checked_rem()`](Integer::checked_rem()), and
///      [`checked_divmod()`](Integer::checked_divmod()) methods return
///      [`None`] instead.
///
/// Division truncates toward zero, and the remainder takes the sign of the
/// dividend, matching the standard `/` and `%` operators.
///
/// # Internal representation
///
/// The value is stored as a sign flag plus a sequence of eight-bit digits in
/// little-endian order (least-significant digit first), mirroring how the
/// common CPU architectures and Rust's primitive integers lay out their
/// bytes. The digit sequence is kept in canonical form: it never carries
/// leading zero digits, a zero value is the empty sequence, and zero is never
/// negative. Methods that expose the digits (like [`data()`](Integer::data())
/// and the base-256 conversions) present them most-significant-first, which
/// is the natural order for comparison and printing.
///
/// Negative values are stored as their positive magnitude with the sign flag
/// set. Bitwise operators therefore act on the magnitude and pass the sign
/// through; they are not two's-complement operations. Programs that need a
/// fixed-width two's-complement bit pattern should use
/// [`twos_complement()`](Integer::twos_complement()).
///
/// # Arithmetic
///
/// Two multiplication algorithms are used, chosen by operand size: schoolbook
/// digit multiplication for small operands, and FFT-based polynomial
/// multiplication for large ones. With eight-bit digits and an `f64`
/// transform the FFT stays exact for every operand length that fits in
/// memory. Division is a bit-serial long division.
///
/// # Conversion
///
/// This type can be converted to and from any of the following types:
///
///   - [`i8`], [`i16`], [`i32`], [`i64`], [`isize`]
///   - [`u8`], [`u16`], [`u32`], [`u64`], [`usize`]
///   - [`bool`], [`char`]
///
/// Conversion in is always lossless, so [`From`] is implemented. Conversion
/// out is potentially lossy, so [`TryFrom`] is implemented universally, and
/// the [`as_u64()`](Integer::as_u64()) and [`as_i64()`](Integer::as_i64())
/// methods provide the truncating (modular) conversion for callers that want
/// it. Callers needing a range check first can consult
/// [`bits()`](Integer::bits()).
///
/// Text conversion supports bases 2 to 10 and 16, and base 256 reads and
/// writes raw octets, most-significant-first. Base-256 input is always taken
/// as non-negative; callers negate the result if they need to.
///
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Integer {
	/// Sign flag. `true` if and only if the value is strictly negative.
	sign:  bool,

	/// Magnitude digits, least-significant first, with no trailing zeros.
	value: Vec<u8>,
}

//󰭅		Integer
impl Integer {
	//		Private constants
	/// Digit characters for bases up to 16.
	const DIGIT_CHARS: [u8; 16] = *b"0123456789abcdef";

	/// Operand size, in digits, at which multiplication switches from the
	/// schoolbook loop to the FFT path.
	const FFT_THRESHOLD: usize = 64;

	//		Constructors

	//		new
	/// Creates a new [`Integer`] with a value of zero.
	#[must_use]
	pub const fn new() -> Self {
		Self { sign: false, value: Vec::new() }
	}

	//		from_digits
	/// Creates an [`Integer`] from a most-significant-first digit sequence
	/// and a sign.
	///
	/// The input is normalised on entry: leading zero digits are dropped, and
	/// a zero magnitude forces the sign to positive.
	///
	/// # Parameters
	///
	/// * `digits` - The magnitude digits, most-significant first.
	/// * `sign`   - `true` for a negative value.
	///
	#[must_use]
	pub fn from_digits(digits: &[u8], sign: bool) -> Self {
		let mut result = Self { sign, value: digits.iter().rev().copied().collect() };
		result.trim();
		result
	}

	//		from_radix
	/// Parses an [`Integer`] from a byte string in the given base.
	///
	/// Bases 2 to 10 accept ASCII decimal digits with a value below the base.
	/// Base 16 accepts upper- and lower-case hexadecimal digits. Base 256
	/// treats each byte as one digit of the magnitude, most-significant
	/// first, and always produces a non-negative value: callers negate the
	/// result if a sign is carried out of band. Empty input parses to zero.
	///
	/// # Parameters
	///
	/// * `input` - The bytes to parse.
	/// * `base`  - The base to parse in: 2 to 10, 16, or 256.
	///
	/// # Errors
	///
	/// Returns an error if the base is unsupported or a byte is outside the
	/// digit range for the base.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Base is at most ten in the arm that casts")]
	pub fn from_radix(input: &[u8], base: u16) -> Result<Self, ParseError> {
		match base {
			2..=10 => {
				let mut result = Self::new();
				for &byte in input {
					if !byte.is_ascii_digit() || u16::from(byte - b'0') >= base {
						return Err(ParseError::NonDigit(char::from(byte)));
					}
					Self::mag_mul_add(&mut result.value, base as u8, byte - b'0');
				}
				Ok(result)
			}
			16     => {
				let mut result = Self::new();
				for &byte in input {
					let digit = match byte {
						b'0'..=b'9' => byte - b'0',
						b'a'..=b'f' => byte - b'a' + 10,
						b'A'..=b'F' => byte - b'A' + 10,
						other       => return Err(ParseError::NonHexDigit(char::from(other))),
					};
					Self::mag_mul_add(&mut result.value, 16, digit);
				}
				Ok(result)
			}
			256    => {
				let mut result = Self { sign: false, value: input.iter().rev().copied().collect() };
				result.trim();
				Ok(result)
			}
			other  => Err(ParseError::UnsupportedBase(other)),
		}
	}

	//		from_str_radix
	/// Parses an [`Integer`] from a string in the given base.
	///
	/// This is a convenience over [`from_radix()`](Integer::from_radix()) for
	/// string input; the same bases and error conditions apply.
	///
	/// # Parameters
	///
	/// * `input` - The string to parse.
	/// * `base`  - The base to parse in: 2 to 10, 16, or 256.
	///
	/// # Errors
	///
	/// Returns an error if the base is unsupported or a character is outside
	/// the digit range for the base.
	///
	pub fn from_str_radix(input: &str, base: u16) -> Result<Self, ParseError> {
		Self::from_radix(input.as_bytes(), base)
	}

	//		Public methods

	//		abs
	/// The absolute value.
	#[must_use]
	pub fn abs(&self) -> Self {
		Self { sign: false, value: self.value.clone() }
	}

	//		as_i64
	/// Represents the value as a signed 64-bit integer.
	///
	/// The magnitude is truncated modulo 2^64 and then negated if the value
	/// is negative. Callers that need a range check should consult
	/// [`bits()`](Integer::bits()) first, or use the [`TryFrom`]
	/// implementations.
	///
	#[expect(clippy::cast_possible_wrap, reason = "Wrapping is the documented contract")]
	#[must_use]
	pub fn as_i64(&self) -> i64 {
		let magnitude = self.as_u64() as i64;
		if self.sign { magnitude.wrapping_neg() } else { magnitude }
	}

	//		as_u64
	/// Represents the magnitude as an unsigned 64-bit integer.
	///
	/// The digits are folded most-significant-first, truncating modulo 2^64.
	/// The sign is ignored.
	///
	#[must_use]
	pub fn as_u64(&self) -> u64 {
		let mut result = 0_u64;
		for &digit in self.value.iter().rev() {
			result = (result << 8_i32) | u64::from(digit);
		}
		result
	}

	//		bit
	/// Gets the value of a specific bit of the magnitude.
	///
	/// The sign is ignored. Returns `false` if the position is beyond the
	/// magnitude.
	///
	/// # Parameters
	///
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Bounded by the length check above the cast")]
	#[must_use]
	pub fn bit(&self, pos: u64) -> bool {
		if pos / 8 >= self.value.len() as u64 {
			return false;
		}
		(self.value[(pos / 8) as usize] >> (pos % 8)) & 1 == 1
	}

	//		bits
	/// The position of the highest set bit of the magnitude, plus one.
	///
	/// Returns zero for a zero value.
	///
	#[must_use]
	pub fn bits(&self) -> u64 {
		Self::mag_bits(&self.value)
	}

	//		bytes
	/// The number of octets needed to hold the magnitude.
	///
	/// With eight-bit digits this is the same as
	/// [`digits()`](Integer::digits()).
	///
	#[must_use]
	pub fn bytes(&self) -> usize {
		self.value.len()
	}

	//		checked_div
	/// Checked division.
	///
	/// Computes `self / rhs`, returning [`None`] if `rhs` is zero. The
	/// quotient truncates toward zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
		self.checked_divmod(rhs).map(|(quotient, _)| quotient)
	}

	//		checked_divmod
	/// Checked division returning both quotient and remainder.
	///
	/// Computes `self / rhs` and `self % rhs` in one pass, returning [`None`]
	/// if `rhs` is zero. The quotient truncates toward zero and is negative
	/// when exactly one operand is negative; the remainder takes the sign of
	/// `self`. The identity `self = quotient * rhs + remainder` always holds,
	/// with the remainder strictly smaller than `rhs` in magnitude.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_divmod(&self, rhs: &Self) -> Option<(Self, Self)> {
		if rhs.is_zero() {
			return None;
		}

		let (quotient_digits, remainder_digits) = Self::mag_divmod(&self.value, &rhs.value);

		let mut quotient  = Self { sign: self.sign != rhs.sign, value: quotient_digits };
		let mut remainder = Self { sign: self.sign,             value: remainder_digits };
		quotient.trim();
		remainder.trim();
		Some((quotient, remainder))
	}

	//		checked_rem
	/// Checked remainder.
	///
	/// Computes `self % rhs`, returning [`None`] if `rhs` is zero. The
	/// remainder takes the sign of `self`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
		self.checked_divmod(rhs).map(|(_, remainder)| remainder)
	}

	//		data
	/// A copy of the magnitude digits, most-significant first.
	#[must_use]
	pub fn data(&self) -> Vec<u8> {
		self.value.iter().rev().copied().collect()
	}

	//		digits
	/// The number of digits in the magnitude.
	///
	/// Returns zero for a zero value.
	///
	#[must_use]
	pub fn digits(&self) -> usize {
		self.value.len()
	}

	//		divmod
	/// Division returning both quotient and remainder.
	///
	/// Behaves as [`checked_divmod()`](Integer::checked_divmod()), but panics
	/// on a zero divisor in the same way the standard `/` and `%` operators
	/// do.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	#[must_use]
	pub fn divmod(&self, rhs: &Self) -> (Self, Self) {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.checked_divmod(rhs).expect("Division cannot fail with a non-zero divisor")
	}

	//		fill
	/// Replaces the value with `2^bits - 1`, i.e. a magnitude of `bits` set
	/// bits.
	///
	/// # Parameters
	///
	/// * `bits` - The number of bits to set. Zero produces a zero value.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Whole-digit count bounded by the magnitude size")]
	pub fn fill(&mut self, bits: u64) {
		let partial = (bits % 8) as u8;
		self.sign   = false;
		self.value  = vec![0xFF; (bits / 8) as usize];
		if partial > 0 {
			self.value.push((1 << partial) - 1);
		}
	}

	//		from_json
	/// Deserialises a JSON value into an [`Integer`].
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise.
	///
	/// # Errors
	///
	/// If the JSON string is invalid, or the number inside the JSON is
	/// invalid, then an error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		is_negative
	/// Determines if the value is strictly negative.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.sign
	}

	//		is_positive
	/// Determines if the value is strictly positive.
	///
	/// Zero is neither positive nor negative.
	///
	#[must_use]
	pub fn is_positive(&self) -> bool {
		!self.sign && !self.value.is_empty()
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.value.is_empty()
	}

	//		log
	/// The number of base-`base` digits in the magnitude.
	///
	/// This is `floor(log(|self|)) + 1` in the given base for non-zero
	/// values, computed by repeated division. A zero value has zero digits.
	///
	/// # Parameters
	///
	/// * `base` - The base to count digits in. Returns [`None`] for bases
	///            below 2.
	///
	#[must_use]
	pub fn log(&self, base: u64) -> Option<u64> {
		if base < 2 {
			return None;
		}

		let divisor     = Self::from(base);
		let mut current = self.abs();
		let mut count   = 0_u64;
		while !current.is_zero() {
			current = &current / &divisor;
			count  += 1;
		}
		Some(count)
	}

	//		pow
	/// Raises the value to the given exponent, by squaring.
	///
	/// # Parameters
	///
	/// * `exp` - The exponent to raise `self` to. An exponent of zero yields
	///           one.
	///
	#[must_use]
	pub fn pow(&self, exp: u32) -> Self {
		let mut base      = self.clone();
		let mut remaining = exp;
		let mut result    = Self::from(1_u8);

		while remaining > 0 {
			if remaining & 1 == 1 {
				result *= &base;
			}
			remaining >>= 1_i32;
			if remaining > 0 {
				base = &base * &base;
			}
		}

		result
	}

	//		sign
	/// The sign flag: `true` if and only if the value is strictly negative.
	#[must_use]
	pub fn sign(&self) -> bool {
		self.sign
	}

	//		to_json
	/// Serialises the value to a JSON string.
	///
	/// # Errors
	///
	/// If the value cannot be serialised, then an error will be returned.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_radix
	/// Formats the value as a byte string in the given base.
	///
	/// Bases 2 to 16 produce ASCII digit characters, zero-padded to at least
	/// `length` digits, with a leading `-` for negative values. Base 256
	/// produces the raw magnitude octets, most-significant first, zero-padded
	/// to at least `length` octets and with no sign: callers encode the sign
	/// out of band if they need it. Zero formats as a single zero digit, or
	/// the padded form.
	///
	/// # Parameters
	///
	/// * `base`   - The base to format in: 2 to 16, or 256.
	/// * `length` - The minimum number of digits to emit.
	///
	/// # Errors
	///
	/// Returns an error if the base is unsupported.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Base is at most sixteen in the arm that casts")]
	pub fn to_radix(&self, base: u16, length: usize) -> Result<Vec<u8>, ParseError> {
		match base {
			2..=16 => {
				let mut digits    = Vec::new();
				let mut remaining = self.value.clone();
				while !remaining.is_empty() {
					let digit = Self::mag_divmod_digit(&mut remaining, base as u8);
					digits.push(Self::DIGIT_CHARS[usize::from(digit)]);
				}
				if digits.is_empty() {
					digits.push(b'0');
				}
				while digits.len() < length {
					digits.push(b'0');
				}
				if self.sign {
					digits.push(b'-');
				}
				digits.reverse();
				Ok(digits)
			}
			256    => {
				let mut octets: Vec<u8> = self.value.iter().rev().copied().collect();
				if octets.len() < length {
					let mut padded = vec![0_u8; length - octets.len()];
					padded.extend_from_slice(&octets);
					octets = padded;
				}
				Ok(octets)
			}
			other  => Err(ParseError::UnsupportedBase(other)),
		}
	}

	//		to_str_radix
	/// Formats the value as a string in the given base.
	///
	/// This is a convenience over [`to_radix()`](Integer::to_radix()) for
	/// bases whose digits are characters, i.e. 2 to 16. Base 256 produces raw
	/// octets rather than text, so it is not supported here; use
	/// [`to_radix()`](Integer::to_radix()) or [`makeascii()`] for that.
	///
	/// # Parameters
	///
	/// * `base`   - The base to format in: 2 to 16.
	/// * `length` - The minimum number of digits to emit.
	///
	/// # Errors
	///
	/// Returns an error if the base is unsupported.
	///
	pub fn to_str_radix(&self, base: u16, length: usize) -> Result<String, ParseError> {
		if base == 256 {
			return Err(ParseError::UnsupportedBase(base));
		}
		Ok(self.to_radix(base, length)?.into_iter().map(char::from).collect())
	}

	//		twos_complement
	/// The fixed-width two's-complement representation of the magnitude.
	///
	/// Computes `((2^width - 1) XOR |self|) + 1`, truncated to `width` bits.
	/// This is the projection to use when a two's-complement bit pattern is
	/// needed, since the bitwise operators on this type act on the magnitude
	/// and are not two's-complement operations.
	///
	/// # Parameters
	///
	/// * `width` - The width of the two's-complement representation, in bits.
	///
	#[must_use]
	pub fn twos_complement(&self, width: u64) -> Self {
		let mut mask = Self::new();
		mask.fill(width);

		((&mask ^ &self.abs()) + Self::from(1_u8)) & mask
	}

	//		Private methods

	//		from_i64
	/// Builds a value from a signed 64-bit integer, peeling eight bits at a
	/// time. The two's-complement minimum is handled by taking the magnitude
	/// in unsigned space before negation.
	#[expect(clippy::cast_sign_loss, reason = "The unsigned cast is how the magnitude is recovered")]
	fn from_i64(value: i64) -> Self {
		let sign      = value < 0;
		let magnitude = if sign { (value as u64).wrapping_neg() } else { value as u64 };

		let mut result = Self::from_u64(magnitude);
		result.sign    = sign && !result.value.is_empty();
		result
	}

	//		from_u64
	/// Builds a non-negative value from an unsigned 64-bit integer, peeling
	/// eight bits at a time until the remainder is zero.
	#[expect(clippy::cast_possible_truncation, reason = "Masked to eight bits")]
	fn from_u64(value: u64) -> Self {
		let mut remaining = value;
		let mut digits    = Vec::new();
		while remaining > 0 {
			digits.push((remaining & 0xFF) as u8);
			remaining >>= 8_i32;
		}
		Self { sign: false, value: digits }
	}

	//		fft_mult
	/// Multiplies two magnitudes via the convolution theorem: transform both
	/// digit sequences, multiply pointwise, transform back, then round and
	/// carry-propagate the coefficients base 256.
	///
	/// With eight-bit digits every convolution coefficient is below
	/// `len * 255^2`, which sits comfortably inside `f64`'s 53-bit mantissa
	/// for any operand length that fits in memory, so the rounding step is
	/// exact.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Coefficients are non-negative and below 2^53")]
	#[expect(clippy::cast_sign_loss,           reason = "Coefficients are non-negative and below 2^53")]
	fn fft_mult(lhs: &[u8], rhs: &[u8]) -> Vec<u8> {
		if lhs.is_empty() || rhs.is_empty() {
			return Vec::new();
		}

		let length = lhs.len() + rhs.len();
		let padded = length.next_power_of_two();

		let mut lhs_buffer = vec![Complex::default(); padded];
		let mut rhs_buffer = vec![Complex::default(); padded];
		for (slot, &digit) in lhs_buffer.iter_mut().zip(lhs) {
			*slot = Complex::new(f64::from(digit), 0.0);
		}
		for (slot, &digit) in rhs_buffer.iter_mut().zip(rhs) {
			*slot = Complex::new(f64::from(digit), 0.0);
		}

		fft::forward(&mut lhs_buffer);
		fft::forward(&mut rhs_buffer);
		for (lhs_point, rhs_point) in lhs_buffer.iter_mut().zip(&rhs_buffer) {
			*lhs_point = *lhs_point * *rhs_point;
		}
		fft::inverse(&mut lhs_buffer);

		//	The convolution has length - 1 meaningful coefficients; the carry
		//	may extend the result beyond them.
		let mut result = Vec::with_capacity(length);
		let mut carry  = 0_u64;
		for point in &lhs_buffer[..length - 1] {
			let total = (point.re + 0.5).floor() as u64 + carry;
			result.push((total & 0xFF) as u8);
			carry = total >> 8_i32;
		}
		while carry > 0 {
			result.push((carry & 0xFF) as u8);
			carry >>= 8_i32;
		}

		Self::vec_trim(&mut result);
		result
	}

	//		long_mult
	/// Schoolbook multiplication: each digit product lands at the position
	/// given by the sum of its operand positions, with the carry widened to
	/// 64 bits.
	#[expect(clippy::cast_possible_truncation, reason = "Masked to eight bits")]
	fn long_mult(lhs: &[u8], rhs: &[u8]) -> Vec<u8> {
		if lhs.is_empty() || rhs.is_empty() {
			return Vec::new();
		}

		let mut result = vec![0_u8; lhs.len() + rhs.len()];
		for (i, &lhs_digit) in lhs.iter().enumerate() {
			let mut carry = 0_u64;
			for (j, &rhs_digit) in rhs.iter().enumerate() {
				let total = u64::from(lhs_digit) * u64::from(rhs_digit)
				          + u64::from(result[i + j])
				          + carry;
				result[i + j] = (total & 0xFF) as u8;
				carry         = total >> 8_i32;
			}

			let mut position = i + rhs.len();
			while carry > 0 {
				let total = u64::from(result[position]) + carry;
				result[position] = (total & 0xFF) as u8;
				carry            = total >> 8_i32;
				position        += 1;
			}
		}

		Self::vec_trim(&mut result);
		result
	}

	//		mag_add
	/// Adds two magnitudes, walking least-significant-first with the carry
	/// widened to 64 bits.
	#[expect(clippy::cast_possible_truncation, reason = "Masked to eight bits")]
	fn mag_add(lhs: &[u8], rhs: &[u8]) -> Vec<u8> {
		let length     = lhs.len().max(rhs.len());
		let mut result = Vec::with_capacity(length + 1);
		let mut carry  = 0_u64;

		for i in 0..length {
			let total = u64::from(lhs.get(i).copied().unwrap_or(0))
			          + u64::from(rhs.get(i).copied().unwrap_or(0))
			          + carry;
			result.push((total & 0xFF) as u8);
			carry = total >> 8_i32;
		}
		if carry > 0 {
			result.push(1);
		}

		result
	}

	//		mag_bits
	/// The position of the highest set bit of a canonical magnitude, plus
	/// one. Zero for an empty magnitude.
	fn mag_bits(value: &[u8]) -> u64 {
		value.last().map_or(0, |&top| {
			(value.len() as u64 - 1) * 8 + u64::from(8 - top.leading_zeros())
		})
	}

	//		mag_cmp
	/// Compares two canonical magnitudes: first by length, then
	/// most-significant-first lexicographically.
	fn mag_cmp(lhs: &[u8], rhs: &[u8]) -> Ordering {
		match lhs.len().cmp(&rhs.len()) {
			Ordering::Equal => lhs.iter().rev().cmp(rhs.iter().rev()),
			unequal         => unequal,
		}
	}

	//		mag_divmod
	/// Bit-serial long division of two magnitudes. The divisor must not be
	/// empty; the dividend's bits are fed into the remainder one at a time,
	/// most-significant first, subtracting the divisor whenever it fits.
	#[expect(clippy::cast_possible_truncation, reason = "Bit positions are bounded by the digit count")]
	fn mag_divmod(lhs: &[u8], rhs: &[u8]) -> (Vec<u8>, Vec<u8>) {
		//	Shortcut: a dividend smaller than the divisor is all remainder.
		if Self::mag_cmp(lhs, rhs) == Ordering::Less {
			return (Vec::new(), lhs.to_vec());
		}
		//	Shortcut: division by one.
		if rhs.len() == 1 && rhs[0] == 1 {
			return (lhs.to_vec(), Vec::new());
		}
		//	Shortcut: equal operands.
		if lhs == rhs {
			return (vec![1], Vec::new());
		}

		let mut quotient  = vec![0_u8; lhs.len()];
		let mut remainder = Vec::new();

		for i in (0..Self::mag_bits(lhs)).rev() {
			Self::mag_shl1(&mut remainder);
			if (lhs[(i / 8) as usize] >> (i % 8)) & 1 == 1 {
				if remainder.is_empty() {
					remainder.push(1);
				} else {
					remainder[0] |= 1;
				}
			}

			if Self::mag_cmp(&remainder, rhs) != Ordering::Less {
				remainder = Self::mag_sub(&remainder, rhs);
				quotient[(i / 8) as usize] |= 1 << (i % 8);
			}
		}

		Self::vec_trim(&mut quotient);
		(quotient, remainder)
	}

	//		mag_divmod_digit
	/// Short division of a magnitude by a single digit, in place,
	/// most-significant-first. Returns the remainder.
	#[expect(clippy::cast_possible_truncation, reason = "Quotient digits and remainders fit eight bits")]
	fn mag_divmod_digit(value: &mut Vec<u8>, divisor: u8) -> u8 {
		let mut remainder = 0_u64;
		for digit in value.iter_mut().rev() {
			let current = (remainder << 8_i32) | u64::from(*digit);
			*digit      = (current / u64::from(divisor)) as u8;
			remainder   = current % u64::from(divisor);
		}

		Self::vec_trim(value);
		remainder as u8
	}

	//		mag_mul_add
	/// Multiplies a magnitude by a single digit and adds another digit, in
	/// place. This is the accumulation step of the radix parsers.
	#[expect(clippy::cast_possible_truncation, reason = "Masked to eight bits")]
	fn mag_mul_add(value: &mut Vec<u8>, factor: u8, addend: u8) {
		let mut carry = u64::from(addend);
		for digit in value.iter_mut() {
			let total = u64::from(*digit) * u64::from(factor) + carry;
			*digit    = (total & 0xFF) as u8;
			carry     = total >> 8_i32;
		}
		while carry > 0 {
			value.push((carry & 0xFF) as u8);
			carry >>= 8_i32;
		}
	}

	//		mag_shl1
	/// Shifts a magnitude left by one bit, in place, growing by a digit when
	/// the top bit carries out.
	fn mag_shl1(value: &mut Vec<u8>) {
		let mut carry = 0_u8;
		for digit in value.iter_mut() {
			let next = *digit >> 7_i32;
			*digit   = (*digit << 1_i32) | carry;
			carry    = next;
		}
		if carry != 0 {
			value.push(carry);
		}
	}

	//		mag_sub
	/// Subtracts the smaller magnitude from the larger, walking
	/// least-significant-first with a borrow. The minuend must not be smaller
	/// than the subtrahend; callers orient the operands and the sign.
	fn mag_sub(lhs: &[u8], rhs: &[u8]) -> Vec<u8> {
		let mut result = Vec::with_capacity(lhs.len());
		let mut borrow = 0_u8;

		for i in 0..lhs.len() {
			let (diff1, borrow1) = lhs[i].overflowing_sub(rhs.get(i).copied().unwrap_or(0));
			let (diff2, borrow2) = diff1.overflowing_sub(borrow);
			result.push(diff2);
			borrow = u8::from(borrow1 || borrow2);
		}

		Self::vec_trim(&mut result);
		result
	}

	//		trim
	/// Restores canonical form: drops leading zero digits, and clears the
	/// sign when the magnitude collapses to zero.
	fn trim(&mut self) {
		Self::vec_trim(&mut self.value);
		if self.value.is_empty() {
			self.sign = false;
		}
	}

	//		vec_trim
	/// Drops leading zero digits from a little-endian magnitude.
	fn vec_trim(value: &mut Vec<u8>) {
		while value.last() == Some(&0) {
			let _ = value.pop();
		}
	}
}

//󰭅		Add
impl Add for &Integer {
	type Output = Integer;

	//		add
	fn add(self, rhs: &Integer) -> Integer {
		//	Same signs add magnitudes; differing signs subtract the smaller
		//	magnitude from the larger, and the larger operand decides the sign.
		let mut result = if self.sign == rhs.sign {
			Integer { sign: self.sign, value: Integer::mag_add(&self.value, &rhs.value) }
		} else {
			match Integer::mag_cmp(&self.value, &rhs.value) {
				Ordering::Less    => Integer { sign: rhs.sign,  value: Integer::mag_sub(&rhs.value, &self.value) },
				Ordering::Equal   => Integer::new(),
				Ordering::Greater => Integer { sign: self.sign, value: Integer::mag_sub(&self.value, &rhs.value) },
			}
		};
		result.trim();
		result
	}
}

//󰭅		Binary
impl Binary for Integer {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.sign {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0b")?;
		}

		match self.value.split_last() {
			None               => write!(f, "0"),
			Some((top, rest)) => {
				//	The top digit drops its leading zeros; the rest print full
				//	width.
				write!(f, "{top:b}")?;
				for &digit in rest.iter().rev() {
					write!(f, "{digit:08b}")?;
				}
				Ok(())
			}
		}
	}
}

//󰭅		BitAnd
impl BitAnd for &Integer {
	type Output = Integer;

	//		bitand
	fn bitand(self, rhs: &Integer) -> Integer {
		//	Operands align at the least-significant digit; missing high digits
		//	of the shorter operand are zero. The sign comes from the left
		//	operand.
		let length = self.value.len().min(rhs.value.len());

		let mut result = Integer {
			sign:  self.sign,
			value: (0..length).map(|i| self.value[i] & rhs.value[i]).collect(),
		};
		result.trim();
		result
	}
}

//󰭅		BitOr
impl BitOr for &Integer {
	type Output = Integer;

	//		bitor
	fn bitor(self, rhs: &Integer) -> Integer {
		let length = self.value.len().max(rhs.value.len());

		let mut result = Integer {
			sign:  self.sign,
			value: (0..length)
				.map(|i| self.value.get(i).copied().unwrap_or(0) | rhs.value.get(i).copied().unwrap_or(0))
				.collect(),
		};
		result.trim();
		result
	}
}

//󰭅		BitXor
impl BitXor for &Integer {
	type Output = Integer;

	//		bitxor
	fn bitxor(self, rhs: &Integer) -> Integer {
		let length = self.value.len().max(rhs.value.len());

		let mut result = Integer {
			sign:  self.sign,
			value: (0..length)
				.map(|i| self.value.get(i).copied().unwrap_or(0) ^ rhs.value.get(i).copied().unwrap_or(0))
				.collect(),
		};
		result.trim();
		result
	}
}

//󰭅		Debug
impl Debug for Integer {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - Integer(value)
		write!(f, "Integer({self})")?;

		//	For alternate formatting (#), show the sign and digit sequence
		if f.alternate() {
			write!(f, " [sign: {}, digits: {:?}]", self.sign, self.value)?;
		}

		Ok(())
	}
}

//󰭅		Deserialize
impl<'de> Deserialize<'de> for Integer {
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(IntegerVisitor)
		} else {
			//	For binary formats, expect the raw sign and magnitude bytes
			deserializer.deserialize_bytes(DigitsVisitor)
		}
	}
}

//󰭅		Display
impl Display for Integer {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Base 10 is always supported
		self.to_str_radix(10, 1).map_or(Err(fmt::Error), |s| f.write_str(&s))
	}
}

//󰭅		Div
impl Div for &Integer {
	type Output = Integer;

	//		div
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: &Integer) -> Integer {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.checked_div(rhs).expect("Division cannot fail with a non-zero divisor")
	}
}

//󰭅		From: bool -> Integer
impl From<bool> for Integer {
	//		from
	fn from(v: bool) -> Self {
		Self::from_u64(u64::from(v))
	}
}

//󰭅		From: char -> Integer
impl From<char> for Integer {
	//		from
	fn from(v: char) -> Self {
		Self::from_u64(u64::from(u32::from(v)))
	}
}

//󰭅		FromSql
impl<'a> FromSql<'a> for Integer {
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => Ok(Self::from(i16::from_sql(ty, raw)?)),
			&Type::INT4 => Ok(Self::from(i32::from_sql(ty, raw)?)),
			&Type::INT8 => Ok(Self::from(i64::from_sql(ty, raw)?)),
			&Type::TEXT => Ok(String::from_utf8(raw.to_vec())?.parse::<Self>()?),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for Integer: {unknown}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
}

//󰭅		FromStr
impl FromStr for Integer {
	type Err = ParseError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();

		if trimmed.is_empty() {
			return Err(ParseError::NoDigits);
		}

		//	Find index after signs, scanning character by character
		let index       = trimmed.chars().position(|c| !matches!(c, '-' | '+')).unwrap_or(trimmed.len());
		//	Count minus signs safely by iterating chars
		let minus_count = trimmed.chars().take(index).filter(|&c| c == '-').count();
		let negative    = minus_count % 2 == 1;
		let unsigned    = &trimmed[index..];

		//	Handle different bases
		#[expect(clippy::option_if_let_else, reason = "Clearer to read as if-let-else")]
		let (digits_part, radix) =
			if        let Some(rest) = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
				(rest, 16_u16)
			} else if let Some(rest) = unsigned.strip_prefix("0b").or_else(|| unsigned.strip_prefix("0B")) {
				(rest, 2)
			} else if let Some(rest) = unsigned.strip_prefix("0o").or_else(|| unsigned.strip_prefix("0O")) {
				(rest, 8)
			} else {
				(unsigned, 10)
			}
		;

		if digits_part.is_empty() {
			return Err(ParseError::NoDigits);
		}

		let mut result = Self::new();

		for c in digits_part.chars() {
			#[expect(clippy::cast_possible_truncation, reason = "Decoded digits are below the radix")]
			let digit = match c {
				'0'..='9' => c as u8 - b'0',
				'a'..='f' => c as u8 - b'a' + 10,
				'A'..='F' => c as u8 - b'A' + 10,
				'_'       => continue,  //  Allow underscores between digits
				_         => return Err(if radix == 16 { ParseError::NonHexDigit(c) } else { ParseError::NonDigit(c) }),
			};

			if u16::from(digit) >= radix {
				return Err(ParseError::NonDigit(c));
			}

			#[expect(clippy::cast_possible_truncation, reason = "The radix is at most sixteen")]
			Self::mag_mul_add(&mut result.value, radix as u8, digit);
		}

		result.sign = negative && !result.value.is_empty();
		Ok(result)
	}
}

//󰭅		LowerHex
impl LowerHex for Integer {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.sign {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0x")?;
		}

		match self.value.split_last() {
			None              => write!(f, "0"),
			Some((top, rest)) => {
				write!(f, "{top:x}")?;
				for &digit in rest.iter().rev() {
					write!(f, "{digit:02x}")?;
				}
				Ok(())
			}
		}
	}
}

//󰭅		Mul
impl Mul for &Integer {
	type Output = Integer;

	//		mul
	fn mul(self, rhs: &Integer) -> Integer {
		//	Schoolbook multiplication wins on constant factors for small
		//	operands; the FFT path takes over once both operands are large.
		let value = if self.value.len().min(rhs.value.len()) >= Integer::FFT_THRESHOLD {
			Integer::fft_mult(&self.value, &rhs.value)
		} else {
			Integer::long_mult(&self.value, &rhs.value)
		};

		let mut result = Integer { sign: self.sign != rhs.sign, value };
		result.trim();
		result
	}
}

//󰭅		Neg
impl Neg for Integer {
	type Output = Integer;

	//		neg
	fn neg(mut self) -> Integer {
		//	Zero has no sign to flip
		if !self.value.is_empty() {
			self.sign = !self.sign;
		}
		self
	}
}

//󰭅		Neg for &Integer
impl Neg for &Integer {
	type Output = Integer;

	//		neg
	fn neg(self) -> Integer {
		-self.clone()
	}
}

//󰭅		Not
impl Not for Integer {
	type Output = Integer;

	//		not
	fn not(self) -> Integer {
		!&self
	}
}

//󰭅		Not for &Integer
impl Not for &Integer {
	type Output = Integer;

	//		not
	fn not(self) -> Integer {
		//	Flips every bit of every digit of the magnitude and trims; the
		//	sign passes through. This is not two's-complement negation.
		let mut result = Integer {
			sign:  self.sign,
			value: self.value.iter().map(|&digit| !digit).collect(),
		};
		result.trim();
		result
	}
}

//󰭅		Octal
impl Octal for Integer {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.sign {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0o")?;
		}

		//	Base 8 is always supported
		self.abs().to_str_radix(8, 1).map_or(Err(fmt::Error), |s| f.write_str(&s))
	}
}

//󰭅		Ord
impl Ord for Integer {
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		//	Zero is stored positive, so the sign flags order mixed-sign pairs
		//	and magnitude order settles the rest, inverted when both are
		//	negative.
		match (self.sign, other.sign) {
			(false, true)  => Ordering::Greater,
			(true,  false) => Ordering::Less,
			(false, false) => Self::mag_cmp(&self.value,  &other.value),
			(true,  true)  => Self::mag_cmp(&other.value, &self.value),
		}
	}
}

//󰭅		PartialOrd
impl PartialOrd for Integer {
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product
impl Product for Integer {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::from(1_u8), |acc, x| acc * x)
	}
}

//󰭅		Product<&>
impl<'a> Product<&'a Self> for Integer {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::from(1_u8), |acc, x| acc * x)
	}
}

//󰭅		Rem
impl Rem for &Integer {
	type Output = Integer;

	//		rem
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem(self, rhs: &Integer) -> Integer {
		assert!(!rhs.is_zero(), "Attempt to calculate remainder with a divisor of zero");
		self.checked_rem(rhs).expect("Remainder cannot fail with a non-zero divisor")
	}
}

//󰭅		Serialize
impl Serialize for Integer {
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as a number if the
			//	value fits in i64/u64
			if self.bits() <= 63 {
				return serializer.serialize_i64(self.as_i64());
			}
			if !self.sign && self.bits() <= 64 {
				return serializer.serialize_u64(self.as_u64());
			}
			//	Fall back to a base-10 string for larger numbers
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise the sign byte and the raw digits
			let mut bytes = Vec::with_capacity(self.value.len() + 1);
			bytes.push(u8::from(self.sign));
			bytes.extend_from_slice(&self.value);
			serializer.serialize_bytes(&bytes)
		}
	}
}

//󰭅		Shl
impl Shl<u32> for &Integer {
	type Output = Integer;

	//		shl
	fn shl(self, rhs: u32) -> Integer {
		if self.value.is_empty() || rhs == 0 {
			return self.clone();
		}

		//	Calculate digit and bit offsets
		let digit_shift = (rhs / 8) as usize;
		let bit_shift   = rhs % 8;

		let mut value = vec![0_u8; digit_shift];
		if bit_shift == 0 {
			//	Simple case - digit aligned shift
			value.extend_from_slice(&self.value);
		} else {
			//	Complex case - bits cross digit boundaries
			let mut carry = 0_u8;
			for &digit in &self.value {
				value.push((digit << bit_shift) | carry);
				carry = digit >> (8 - bit_shift);
			}
			if carry != 0 {
				value.push(carry);
			}
		}

		//	The sign is maintained
		Integer { sign: self.sign, value }
	}
}

//󰭅		Shl for Integer
impl Shl<u32> for Integer {
	type Output = Integer;

	//		shl
	fn shl(self, rhs: u32) -> Integer {
		&self << rhs
	}
}

//󰭅		ShlAssign
impl ShlAssign<u32> for Integer {
	//		shl_assign
	fn shl_assign(&mut self, rhs: u32) {
		*self = &*self << rhs;
	}
}

//󰭅		Shr
impl Shr<u32> for &Integer {
	type Output = Integer;

	//		shr
	fn shr(self, rhs: u32) -> Integer {
		let digit_shift = (rhs / 8) as usize;

		//	Shifts that discard every digit return zero
		if digit_shift >= self.value.len() {
			return Integer::new();
		}

		let bit_shift = rhs % 8;
		let mut value = self.value[digit_shift..].to_vec();
		if bit_shift > 0 {
			let mut carry = 0_u8;
			for digit in value.iter_mut().rev() {
				let next = *digit << (8 - bit_shift);
				*digit   = (*digit >> bit_shift) | carry;
				carry    = next;
			}
		}

		//	The sign is maintained, so a negative value rounds toward zero on
		//	magnitude rather than behaving like an arithmetic shift
		let mut result = Integer { sign: self.sign, value };
		result.trim();
		result
	}
}

//󰭅		Shr for Integer
impl Shr<u32> for Integer {
	type Output = Integer;

	//		shr
	fn shr(self, rhs: u32) -> Integer {
		&self >> rhs
	}
}

//󰭅		ShrAssign
impl ShrAssign<u32> for Integer {
	//		shr_assign
	fn shr_assign(&mut self, rhs: u32) {
		*self = &*self >> rhs;
	}
}

//󰭅		Sub
impl Sub for &Integer {
	type Output = Integer;

	//		sub
	fn sub(self, rhs: &Integer) -> Integer {
		self + &-rhs
	}
}

//󰭅		Sum
impl Sum for Integer {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::new(), |acc, x| acc + x)
	}
}

//󰭅		Sum<&>
impl<'a> Sum<&'a Self> for Integer {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::new(), |acc, x| acc + x)
	}
}

//󰭅		ToSql
impl ToSql for Integer {
	//		to_sql
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => i16::try_from(self)?.to_sql(ty, out),
			&Type::INT4 => i32::try_from(self)?.to_sql(ty, out),
			&Type::INT8 => i64::try_from(self)?.to_sql(ty, out),
			&Type::TEXT => self.to_string().to_sql(ty, out),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for Integer: {unknown}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}

	to_sql_checked!();
}

//󰭅		UpperHex
impl UpperHex for Integer {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.sign {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0x")?;
		}

		match self.value.split_last() {
			None              => write!(f, "0"),
			Some((top, rest)) => {
				write!(f, "{top:X}")?;
				for &digit in rest.iter().rev() {
					write!(f, "{digit:02X}")?;
				}
				Ok(())
			}
		}
	}
}



//		Macros

//		impl_owned_forms!
/// Forwards the owned and mixed operator forms onto the reference
/// implementation, which holds the actual logic.
macro_rules! impl_owned_forms {
	($(($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident)),* $(,)?) => { $(
		impl $trait for Integer {
			type Output = Integer;

			fn $method(self, rhs: Integer) -> Integer {
				(&self).$method(&rhs)
			}
		}

		impl $trait<&Integer> for Integer {
			type Output = Integer;

			fn $method(self, rhs: &Integer) -> Integer {
				(&self).$method(rhs)
			}
		}

		impl $trait<Integer> for &Integer {
			type Output = Integer;

			fn $method(self, rhs: Integer) -> Integer {
				self.$method(&rhs)
			}
		}

		impl $assign_trait for Integer {
			fn $assign_method(&mut self, rhs: Integer) {
				*self = (&*self).$method(&rhs);
			}
		}

		impl $assign_trait<&Integer> for Integer {
			fn $assign_method(&mut self, rhs: &Integer) {
				*self = (&*self).$method(rhs);
			}
		}
	)* };
}

impl_owned_forms! {
	(Add,    add,    AddAssign,    add_assign),
	(BitAnd, bitand, BitAndAssign, bitand_assign),
	(BitOr,  bitor,  BitOrAssign,  bitor_assign),
	(BitXor, bitxor, BitXorAssign, bitxor_assign),
	(Div,    div,    DivAssign,    div_assign),
	(Mul,    mul,    MulAssign,    mul_assign),
	(Rem,    rem,    RemAssign,    rem_assign),
	(Sub,    sub,    SubAssign,    sub_assign),
}

//		impl_from_signed!
/// Implements lossless construction from the signed primitives, widening to
/// 64 bits and dispatching once.
macro_rules! impl_from_signed {
	($($t:ty),* $(,)?) => { $(
		impl From<$t> for Integer {
			#[allow(clippy::cast_lossless, clippy::unnecessary_cast, reason = "Widening within 64 bits")]
			fn from(v: $t) -> Self {
				Self::from_i64(v as i64)
			}
		}
	)* };
}

impl_from_signed!(i8, i16, i32, i64, isize);

//		impl_from_unsigned!
/// Implements lossless construction from the unsigned primitives, widening
/// to 64 bits and dispatching once.
macro_rules! impl_from_unsigned {
	($($t:ty),* $(,)?) => { $(
		impl From<$t> for Integer {
			#[allow(clippy::cast_lossless, clippy::unnecessary_cast, reason = "Widening within 64 bits")]
			fn from(v: $t) -> Self {
				Self::from_u64(v as u64)
			}
		}
	)* };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

//󰭅		From: &Integer -> bool
impl From<&Integer> for bool {
	//		from
	fn from(v: &Integer) -> Self {
		!v.is_zero()
	}
}

//		impl_try_from_signed!
/// Implements range-checked conversion out to the signed primitives.
macro_rules! impl_try_from_signed {
	($($t:ty),* $(,)?) => { $(
		impl TryFrom<&Integer> for $t {
			type Error = ConversionError;

			#[allow(
				clippy::cast_possible_truncation,
				clippy::cast_possible_wrap,
				clippy::unnecessary_cast,
				reason = "In range once the magnitude checks have passed"
			)]
			fn try_from(v: &Integer) -> Result<Self, Self::Error> {
				if v.bits() > u64::from(<$t>::BITS) {
					return Err(ConversionError::ValueTooLarge);
				}

				let magnitude = v.as_u64();
				let limit     = 1_u64 << (<$t>::BITS - 1);
				if v.is_negative() {
					if magnitude > limit {
						return Err(ConversionError::ValueTooLarge);
					}
					Ok((magnitude.wrapping_neg() as i64) as $t)
				} else {
					if magnitude >= limit {
						return Err(ConversionError::ValueTooLarge);
					}
					Ok(magnitude as $t)
				}
			}
		}
	)* };
}

impl_try_from_signed!(i8, i16, i32, i64, isize);

//		impl_try_from_unsigned!
/// Implements range-checked conversion out to the unsigned primitives.
macro_rules! impl_try_from_unsigned {
	($($t:ty),* $(,)?) => { $(
		impl TryFrom<&Integer> for $t {
			type Error = ConversionError;

			#[allow(
				clippy::cast_possible_truncation,
				clippy::unnecessary_cast,
				reason = "In range once the magnitude checks have passed"
			)]
			fn try_from(v: &Integer) -> Result<Self, Self::Error> {
				if v.is_negative() {
					return Err(ConversionError::ValueIsNegative);
				}
				if v.bits() > u64::from(<$t>::BITS) {
					return Err(ConversionError::ValueTooLarge);
				}
				Ok(v.as_u64() as $t)
			}
		}
	)* };
}

impl_try_from_unsigned!(u8, u16, u32, u64, usize);

//		impl_primitive_interop!
/// Implements the heterogeneous operator and comparison forms against the
/// native integer types. The native operand is promoted to an [`Integer`]
/// once and the homogeneous implementation takes over.
macro_rules! impl_primitive_interop {
	($($t:ty),* $(,)?) => { $(
		impl Add<$t> for Integer {
			type Output = Integer;

			fn add(self, rhs: $t) -> Integer {
				self + Integer::from(rhs)
			}
		}

		impl Add<Integer> for $t {
			type Output = Integer;

			fn add(self, rhs: Integer) -> Integer {
				Integer::from(self) + rhs
			}
		}

		impl AddAssign<$t> for Integer {
			fn add_assign(&mut self, rhs: $t) {
				*self += Integer::from(rhs);
			}
		}

		impl BitAnd<$t> for Integer {
			type Output = Integer;

			fn bitand(self, rhs: $t) -> Integer {
				self & Integer::from(rhs)
			}
		}

		impl BitAnd<Integer> for $t {
			type Output = Integer;

			fn bitand(self, rhs: Integer) -> Integer {
				Integer::from(self) & rhs
			}
		}

		impl BitAndAssign<$t> for Integer {
			fn bitand_assign(&mut self, rhs: $t) {
				*self &= Integer::from(rhs);
			}
		}

		impl BitOr<$t> for Integer {
			type Output = Integer;

			fn bitor(self, rhs: $t) -> Integer {
				self | Integer::from(rhs)
			}
		}

		impl BitOr<Integer> for $t {
			type Output = Integer;

			fn bitor(self, rhs: Integer) -> Integer {
				Integer::from(self) | rhs
			}
		}

		impl BitOrAssign<$t> for Integer {
			fn bitor_assign(&mut self, rhs: $t) {
				*self |= Integer::from(rhs);
			}
		}

		impl BitXor<$t> for Integer {
			type Output = Integer;

			fn bitxor(self, rhs: $t) -> Integer {
				self ^ Integer::from(rhs)
			}
		}

		impl BitXor<Integer> for $t {
			type Output = Integer;

			fn bitxor(self, rhs: Integer) -> Integer {
				Integer::from(self) ^ rhs
			}
		}

		impl BitXorAssign<$t> for Integer {
			fn bitxor_assign(&mut self, rhs: $t) {
				*self ^= Integer::from(rhs);
			}
		}

		impl Div<$t> for Integer {
			type Output = Integer;

			fn div(self, rhs: $t) -> Integer {
				self / Integer::from(rhs)
			}
		}

		impl Div<Integer> for $t {
			type Output = Integer;

			fn div(self, rhs: Integer) -> Integer {
				Integer::from(self) / rhs
			}
		}

		impl DivAssign<$t> for Integer {
			fn div_assign(&mut self, rhs: $t) {
				*self /= Integer::from(rhs);
			}
		}

		impl Mul<$t> for Integer {
			type Output = Integer;

			fn mul(self, rhs: $t) -> Integer {
				self * Integer::from(rhs)
			}
		}

		impl Mul<Integer> for $t {
			type Output = Integer;

			fn mul(self, rhs: Integer) -> Integer {
				Integer::from(self) * rhs
			}
		}

		impl MulAssign<$t> for Integer {
			fn mul_assign(&mut self, rhs: $t) {
				*self *= Integer::from(rhs);
			}
		}

		impl Rem<$t> for Integer {
			type Output = Integer;

			fn rem(self, rhs: $t) -> Integer {
				self % Integer::from(rhs)
			}
		}

		impl Rem<Integer> for $t {
			type Output = Integer;

			fn rem(self, rhs: Integer) -> Integer {
				Integer::from(self) % rhs
			}
		}

		impl RemAssign<$t> for Integer {
			fn rem_assign(&mut self, rhs: $t) {
				*self %= Integer::from(rhs);
			}
		}

		impl Sub<$t> for Integer {
			type Output = Integer;

			fn sub(self, rhs: $t) -> Integer {
				self - Integer::from(rhs)
			}
		}

		impl Sub<Integer> for $t {
			type Output = Integer;

			fn sub(self, rhs: Integer) -> Integer {
				Integer::from(self) - rhs
			}
		}

		impl SubAssign<$t> for Integer {
			fn sub_assign(&mut self, rhs: $t) {
				*self -= Integer::from(rhs);
			}
		}

		impl PartialEq<$t> for Integer {
			fn eq(&self, other: &$t) -> bool {
				*self == Integer::from(*other)
			}
		}

		impl PartialEq<Integer> for $t {
			fn eq(&self, other: &Integer) -> bool {
				Integer::from(*self) == *other
			}
		}

		impl PartialOrd<$t> for Integer {
			fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
				Some(self.cmp(&Integer::from(*other)))
			}
		}

		impl PartialOrd<Integer> for $t {
			fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
				Some(Integer::from(*self).cmp(other))
			}
		}
	)* };
}

impl_primitive_interop!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);



//		Functions

//		makeascii
/// Formats a value as raw base-256 octets, most-significant first,
/// zero-padded to at least `size` octets.
///
/// The sign is not encoded; callers carry it out of band if they need it.
///
/// # Parameters
///
/// * `value` - The value to format.
/// * `size`  - The minimum number of octets to emit.
///
#[must_use]
pub fn makeascii(value: &Integer, size: usize) -> Vec<u8> {
	//	Base 256 is always supported
	value.to_radix(256, size).unwrap_or_default()
}

//		makebin
/// Formats a value in binary, zero-padded to `size` bytes worth of digits.
///
/// # Parameters
///
/// * `value` - The value to format.
/// * `size`  - The minimum length, expressed in bytes of eight binary
///             digits.
///
#[must_use]
pub fn makebin(value: &Integer, size: usize) -> String {
	//	Base 2 is always supported
	value.to_str_radix(2, size.saturating_mul(8)).unwrap_or_default()
}

//		makehex
/// Formats a value in hexadecimal, zero-padded to `size` bytes worth of
/// digits.
///
/// # Parameters
///
/// * `value` - The value to format.
/// * `size`  - The minimum length, expressed in bytes of two hexadecimal
///             digits.
///
#[must_use]
pub fn makehex(value: &Integer, size: usize) -> String {
	//	Base 16 is always supported
	value.to_str_radix(16, size.saturating_mul(2)).unwrap_or_default()
}



//		DigitsVisitor
/// A visitor for parsing integers from raw sign-and-magnitude bytes.
struct DigitsVisitor;

//󰭅		Visitor
impl Visitor<'_> for DigitsVisitor {
	type Value = Integer;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str("a sign byte followed by little-endian magnitude bytes")
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		let Some((&sign_byte, digits)) = v.split_first() else {
			return Err(E::invalid_length(0, &self));
		};
		if sign_byte > 1 {
			return Err(E::custom(format!("invalid sign byte: {sign_byte}")));
		}

		let mut value = Integer { sign: sign_byte == 1, value: digits.to_vec() };
		value.trim();
		Ok(value)
	}
}

//		IntegerVisitor
/// A visitor for parsing integers from numbers and strings.
struct IntegerVisitor;

//󰭅		Visitor
impl Visitor<'_> for IntegerVisitor {
	type Value = Integer;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str("an integer or a base-10 string")
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Integer::from(v))
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Integer::from(v))
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		DigitsVisitor.visit_bytes(v)
	}
}


