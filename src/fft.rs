//! Complex radix-2 FFT used by the large-operand multiplication path.

//	This lint check is unnecessary in this module because every index is
//	derived from the buffer length, which is asserted to be a power of two
//	before the butterflies run.
#![allow(clippy::indexing_slicing, reason = "Indices are bounded by the buffer length")]



//		Modules

#[cfg(test)]
#[path = "tests/fft.rs"]
mod tests;



//		Packages

use core::f64::consts::PI;
use core::ops::{Add, Mul, Sub};



//		Structs

//		Complex
/// A complex number in rectangular form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Complex {
	/// Real part.
	pub(crate) re: f64,

	/// Imaginary part.
	pub(crate) im: f64,
}

//󰭅		Complex
impl Complex {
	//		new
	/// Creates a new complex number from its real and imaginary parts.
	pub(crate) const fn new(re: f64, im: f64) -> Self {
		Self { re, im }
	}
}

//󰭅		Add
impl Add for Complex {
	type Output = Self;

	//		add
	fn add(self, rhs: Self) -> Self::Output {
		Self::new(self.re + rhs.re, self.im + rhs.im)
	}
}

//󰭅		Mul
impl Mul for Complex {
	type Output = Self;

	//		mul
	fn mul(self, rhs: Self) -> Self::Output {
		Self::new(
			self.re.mul_add(rhs.re, -(self.im * rhs.im)),
			self.re.mul_add(rhs.im,   self.im * rhs.re),
		)
	}
}

//󰭅		Sub
impl Sub for Complex {
	type Output = Self;

	//		sub
	fn sub(self, rhs: Self) -> Self::Output {
		Self::new(self.re - rhs.re, self.im - rhs.im)
	}
}



//		Functions

//		forward
/// In-place forward DFT. The buffer length must be a power of two.
pub(crate) fn forward(buffer: &mut [Complex]) {
	transform(buffer, false);
}

//		inverse
/// In-place inverse DFT, including the 1/N scaling.
pub(crate) fn inverse(buffer: &mut [Complex]) {
	transform(buffer, true);

	#[expect(clippy::cast_precision_loss, reason = "Buffer lengths stay far below 2^52")]
	let scale = 1.0 / buffer.len() as f64;
	for value in buffer.iter_mut() {
		value.re *= scale;
		value.im *= scale;
	}
}

//		reverse_bits
/// Reverses the low `bits` bits of an index.
pub(crate) fn reverse_bits(index: usize, bits: u32) -> usize {
	index.reverse_bits().unbounded_shr(usize::BITS - bits)
}

//		bit_reverse_permute
/// Reorders the buffer so that element `i` lands at index `reverse_bits(i)`,
/// the input order the iterative butterflies below require.
fn bit_reverse_permute(buffer: &mut [Complex]) {
	let bits = buffer.len().trailing_zeros();

	for i in 0..buffer.len() {
		let j = reverse_bits(i, bits);
		if i < j {
			buffer.swap(i, j);
		}
	}
}

//		transform
/// Iterative decimation-in-time butterflies. The forward direction uses the
/// twiddle `exp(-2πik/N)`; the inverse uses its conjugate.
#[expect(clippy::cast_precision_loss, reason = "Span lengths stay far below 2^52")]
fn transform(buffer: &mut [Complex], invert: bool) {
	debug_assert!(buffer.len().is_power_of_two(), "FFT buffer length must be a power of two");

	bit_reverse_permute(buffer);

	let mut span = 2;
	while span <= buffer.len() {
		let direction = if invert { 2.0 } else { -2.0 };
		let angle     = direction * PI / span as f64;
		let step      = Complex::new(angle.cos(), angle.sin());
		let half      = span / 2;

		for chunk in buffer.chunks_mut(span) {
			let mut twiddle = Complex::new(1.0, 0.0);
			for i in 0..half {
				let upper       = chunk[i];
				let lower       = chunk[i + half] * twiddle;
				chunk[i]        = upper + lower;
				chunk[i + half] = upper - lower;
				twiddle         = twiddle * step;
			}
		}

		span <<= 1_i32;
	}
}


