//		Packages

use super::*;



//		Common

//		assert_close
fn assert_close(actual: f64, expected: f64) {
	assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}



//		Tests

mod complex {
	use super::*;

	//		add
	#[test]
	fn add__normal() {
		let sum = Complex::new(1.0, 2.0) + Complex::new(3.0, -4.0);
		assert_close(sum.re,  4.0);
		assert_close(sum.im, -2.0);
	}

	//		sub
	#[test]
	fn sub__normal() {
		let difference = Complex::new(1.0, 2.0) - Complex::new(3.0, -4.0);
		assert_close(difference.re, -2.0);
		assert_close(difference.im,  6.0);
	}

	//		mul
	#[test]
	fn mul__normal() {
		//	(1 + 2i)(3 + 4i) = -5 + 10i
		let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
		assert_close(product.re, -5.0);
		assert_close(product.im, 10.0);
	}
	#[test]
	fn mul__by_i_rotates() {
		let product = Complex::new(1.0, 0.0) * Complex::new(0.0, 1.0);
		assert_close(product.re, 0.0);
		assert_close(product.im, 1.0);
	}
}

mod functions {
	use super::*;

	//		reverse_bits
	#[test]
	fn reverse_bits__normal() {
		assert_eq!(reverse_bits(0b001, 3), 0b100);
		assert_eq!(reverse_bits(0b110, 3), 0b011);
		assert_eq!(reverse_bits(0b101, 3), 0b101);
	}
	#[test]
	fn reverse_bits__zero_width() {
		assert_eq!(reverse_bits(0, 0), 0);
	}

	//		forward
	#[test]
	fn forward__constant_signal() {
		//	The DFT of a constant signal concentrates everything in bin zero
		let mut buffer = vec![Complex::new(1.0, 0.0); 4];
		forward(&mut buffer);
		assert_close(buffer[0].re, 4.0);
		for point in &buffer[1..] {
			assert_close(point.re, 0.0);
			assert_close(point.im, 0.0);
		}
	}

	//		inverse
	#[test]
	fn inverse__round_trips() {
		let original   = [1.0, 2.0, 3.0, 4.0, 0.0, -1.0, 2.5, -0.5];
		let mut buffer: Vec<Complex> = original.iter().map(|&re| Complex::new(re, 0.0)).collect();
		forward(&mut buffer);
		inverse(&mut buffer);
		for (point, &expected) in buffer.iter().zip(&original) {
			assert_close(point.re, expected);
			assert_close(point.im, 0.0);
		}
	}
	#[test]
	fn inverse__single_point_is_identity() {
		let mut buffer = vec![Complex::new(7.0, 0.0)];
		forward(&mut buffer);
		inverse(&mut buffer);
		assert_close(buffer[0].re, 7.0);
	}

	//		convolution
	#[test]
	fn convolution__matches_polynomial_product() {
		//	(1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
		let mut lhs = vec![
			Complex::new(1.0, 0.0),
			Complex::new(2.0, 0.0),
			Complex::default(),
			Complex::default(),
		];
		let mut rhs = vec![
			Complex::new(3.0, 0.0),
			Complex::new(4.0, 0.0),
			Complex::default(),
			Complex::default(),
		];
		forward(&mut lhs);
		forward(&mut rhs);
		for (lhs_point, rhs_point) in lhs.iter_mut().zip(&rhs) {
			*lhs_point = *lhs_point * *rhs_point;
		}
		inverse(&mut lhs);

		for (point, expected) in lhs.iter().zip([3.0, 10.0, 8.0, 0.0]) {
			assert_close(point.re, expected);
		}
	}
}


