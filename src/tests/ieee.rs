//		Packages

use super::*;



//		Helpers

fn half(value: f32) -> u64 {
	Binary16::from(value).encoding()
}

fn min_subnormal16() -> f32 {
	f32::from_bits(0x3380_0000)
}



//		Tests

mod constants {
	use super::*;
	
	//		Binary16															
	#[test]
	fn binary16() {
		assert_eq!(Binary16::NUM_EXPONENT_BITS,  5);
		assert_eq!(Binary16::NUM_TRAILING_BITS,  10);
		assert_eq!(Binary16::EXPONENT_BIAS,      15);
		assert_eq!(Binary16::MIN_SUB_EXPONENT,   -24);
		assert_eq!(Binary16::MIN_EXPONENT,       -14);
		assert_eq!(Binary16::MAX_EXPONENT,       15);
		assert_eq!(Binary16::MAX_NORMAL,         0x7BFF);
		assert_eq!(Binary16::POS_INFINITY,       0x7C00);
		assert_eq!(Binary16::NEG_INFINITY,       0xFC00);
		assert_eq!(Binary16::QUIET_NAN,          0x7E00);
	}
	
	//		Binary32															
	#[test]
	fn binary32() {
		assert_eq!(Binary32::NUM_EXPONENT_BITS,  8);
		assert_eq!(Binary32::EXPONENT_BIAS,      127);
		assert_eq!(Binary32::MIN_SUB_EXPONENT,   -149);
		assert_eq!(Binary32::MIN_EXPONENT,       -126);
		assert_eq!(Binary32::MAX_EXPONENT,       127);
		assert_eq!(Binary32::SIGN_MASK,          0x8000_0000);
		assert_eq!(Binary32::MAX_SUBNORMAL,      0x007F_FFFF);
		assert_eq!(Binary32::MIN_NORMAL,         0x0080_0000);
		assert_eq!(Binary32::MAX_NORMAL,         u64::from(f32::MAX.to_bits()));
		assert_eq!(Binary32::POS_INFINITY,       u64::from(f32::INFINITY.to_bits()));
		assert_eq!(Binary32::NEG_INFINITY,       u64::from(f32::NEG_INFINITY.to_bits()));
		assert_eq!(Binary32::QUIET_NAN,          0x7FC0_0000);
	}
	
	//		Binary64															
	#[test]
	fn binary64() {
		assert_eq!(Binary64::NUM_EXPONENT_BITS,  11);
		assert_eq!(Binary64::EXPONENT_BIAS,      1023);
		assert_eq!(Binary64::MIN_SUB_EXPONENT,   -1074);
		assert_eq!(Binary64::MIN_NORMAL,         f64::MIN_POSITIVE.to_bits());
		assert_eq!(Binary64::MAX_NORMAL,         f64::MAX.to_bits());
		assert_eq!(Binary64::SUP_TRAILING,       1 << 52);
	}
}

mod constructors {
	use super::*;
	
	//		from_encoding														
	#[test]
	fn from_encoding__masks_high_bits() {
		assert_eq!(Binary16::from_encoding(0x1_3C00).encoding(), 0x3C00);
	}
	
	//		from_parts															
	#[test]
	fn from_parts() {
		assert_eq!(Binary32::from_parts(1, 127, 0x40_0000), Binary32::from(-1.5_f32));
		assert_eq!(Binary16::from_parts(0, 15, 0),          Binary16::from_encoding(0x3C00));
	}
}

mod public_methods {
	use super::*;
	
	//		classify															
	#[test]
	fn classify__finite() {
		assert_eq!(Binary32::from(1.0_f32).classify(),              FloatClass::PositiveNormal);
		assert_eq!(Binary32::from(-1.0_f32).classify(),             FloatClass::NegativeNormal);
		assert_eq!(Binary32::from(0.0_f32).classify(),              FloatClass::PositiveZero);
		assert_eq!(Binary32::from(-0.0_f32).classify(),             FloatClass::NegativeZero);
		assert_eq!(Binary32::from_encoding(1).classify(),           FloatClass::PositiveSubnormal);
		assert_eq!(Binary32::from_encoding(0x8000_0001).classify(), FloatClass::NegativeSubnormal);
	}
	#[test]
	fn classify__non_finite() {
		assert_eq!(Binary32::from(f32::INFINITY).classify(),        FloatClass::PositiveInfinity);
		assert_eq!(Binary32::from(f32::NEG_INFINITY).classify(),    FloatClass::NegativeInfinity);
		assert_eq!(Binary32::from(f32::NAN).classify(),             FloatClass::QuietNaN);
		assert_eq!(Binary32::from_encoding(0x7F80_0001).classify(), FloatClass::SignalingNaN);
	}
	
	//		is_*																
	#[test]
	fn predicates() {
		let subnormal = Binary64::from_encoding(1);
		assert!( subnormal.is_finite());
		assert!( subnormal.is_subnormal());
		assert!(!subnormal.is_normal());
		assert!(!subnormal.is_zero());
		
		let infinity = Binary64::from(f64::NEG_INFINITY);
		assert!(!infinity.is_finite());
		assert!( infinity.is_infinite());
		assert!(!infinity.is_nan());
		assert!( infinity.is_sign_minus());
		
		let signaling = Binary64::from_encoding(0x7FF0_0000_0000_0001);
		assert!( signaling.is_nan());
		assert!( signaling.is_signaling_nan());
		assert!(!Binary64::from(f64::NAN).is_signaling_nan());
		
		assert!( Binary64::from(-0.0_f64).is_zero());
		assert!( Binary64::from(-0.0_f64).is_sign_minus());
	}
	
	//		negate																
	#[test]
	fn negate() {
		assert_eq!(Binary32::from(2.0_f32).negate(), Binary32::from(-2.0_f32));
		assert_eq!(Binary32::from(0.0_f32).negate(), Binary32::from(-0.0_f32));
		assert!(Binary32::from(f32::NAN).negate().is_nan());
	}
	
	//		next_down															
	#[test]
	fn next_down__normal() {
		let value = f32::from(Binary32::from(1.0_f32).next_down());
		assert_eq!(value, 1.0 - f32::EPSILON / 2.0);
	}
	#[test]
	fn next_down__through_zero() {
		assert_eq!(Binary32::from(0.0_f32).next_down().encoding(), 0x8000_0001);
		assert_eq!(Binary32::from_encoding(1).next_down().encoding(), 0);
	}
	#[test]
	fn next_down__to_infinity() {
		let lowest = Binary32::from_encoding(Binary32::SIGN_MASK | Binary32::MAX_NORMAL);
		assert_eq!(lowest.next_down().encoding(), Binary32::NEG_INFINITY);
	}
	
	//		next_up																
	#[test]
	fn next_up__normal() {
		let value = f32::from(Binary32::from(1.0_f32).next_up());
		assert_eq!(value, 1.0 + f32::EPSILON);
	}
	#[test]
	fn next_up__from_zero() {
		assert_eq!(Binary16::from_encoding(Binary16::NEG_ZERO).next_up().encoding(), Binary16::MIN_SUBNORMAL);
		assert_eq!(Binary16::from_encoding(Binary16::POS_ZERO).next_up().encoding(), Binary16::MIN_SUBNORMAL);
	}
	#[test]
	fn next_up__across_boundaries() {
		assert_eq!(Binary16::from_encoding(Binary16::MAX_SUBNORMAL).next_up().encoding(), Binary16::MIN_NORMAL);
		assert_eq!(Binary16::from_encoding(Binary16::MAX_NORMAL).next_up().encoding(),    Binary16::POS_INFINITY);
		assert_eq!(Binary16::from_encoding(0x8001).next_up().encoding(),                   Binary16::NEG_ZERO);
	}
	#[test]
	fn next_up__infinities() {
		assert_eq!(Binary16::from_encoding(Binary16::POS_INFINITY).next_up().encoding(), Binary16::POS_INFINITY);
		assert_eq!(
			Binary16::from_encoding(Binary16::NEG_INFINITY).next_up().encoding(),
			Binary16::SIGN_MASK | Binary16::MAX_NORMAL
		);
	}
	#[test]
	fn next_up__nan_is_quieted() {
		assert_eq!(Binary32::from_encoding(0x7F80_0001).next_up().encoding(), 0x7FC0_0001);
	}
	
	//		parts																
	#[test]
	fn parts() {
		assert_eq!(Binary32::from(-1.5_f32).parts(), (1, 127, 0x40_0000));
		assert_eq!(Binary64::from(0.0_f64).parts(),  (0, 0, 0));
	}
}

mod binary16 {
	use super::*;
	
	//		from_binary32														
	#[test]
	fn from_binary32__exact() {
		assert_eq!(half(1.0),      0x3C00);
		assert_eq!(half(-2.0),     0xC000);
		assert_eq!(half(0.5),      0x3800);
		assert_eq!(half(65504.0),  0x7BFF);
		assert_eq!(half(-0.0),     0x8000);
	}
	#[test]
	fn from_binary32__ties_to_even() {
		//	1 + 2^-11 lies half-way between 1 and 1 + 2^-10
		assert_eq!(half(1.0 + f32::from_bits(0x3A00_0000)),       0x3C00);
		//	1 + 3 × 2^-11 lies half-way between 1 + 2^-10 and 1 + 2^-9
		assert_eq!(half(1.0 + 3.0 * f32::from_bits(0x3A00_0000)), 0x3C02);
	}
	#[test]
	fn from_binary32__overflow() {
		assert_eq!(half(65519.0),       0x7BFF);
		assert_eq!(half(65520.0),       Binary16::POS_INFINITY);
		assert_eq!(half(-1.0e10),       Binary16::NEG_INFINITY);
		assert_eq!(half(f32::INFINITY), Binary16::POS_INFINITY);
	}
	#[test]
	fn from_binary32__subnormal() {
		assert_eq!(half(min_subnormal16()),          0x0001);
		assert_eq!(half(min_subnormal16() * 3.0),    0x0003);
		assert_eq!(half(min_subnormal16() * 1023.0), 0x03FF);
		assert_eq!(half(f32::from_bits(0x3880_0000)), 0x0400);
	}
	#[test]
	fn from_binary32__underflow() {
		assert_eq!(half(min_subnormal16() / 2.0),        0x0000);
		assert_eq!(half(-min_subnormal16() / 2.0),       0x8000);
		assert_eq!(half(min_subnormal16() * 0.75),       0x0001);
		assert_eq!(half(min_subnormal16() * 2.5),        0x0002);
		assert_eq!(half(f32::from_bits(1)),              0x0000);
	}
	#[test]
	fn from_binary32__nan() {
		assert_eq!(half(f32::NAN), Binary16::QUIET_NAN);
		assert!(Binary16::from(f32::from_bits(0x7F80_0001)).is_nan());
		assert!(!Binary16::from(f32::from_bits(0x7F80_0001)).is_signaling_nan());
	}
	
	//		to_binary32															
	#[test]
	fn to_binary32__normal() {
		assert_eq!(f32::from(Binary16::from_encoding(0x3C00)), 1.0);
		assert_eq!(f32::from(Binary16::from_encoding(0x7BFF)), 65504.0);
		assert_eq!(f32::from(Binary16::from_encoding(0xC000)), -2.0);
	}
	#[test]
	fn to_binary32__subnormal() {
		assert_eq!(f32::from(Binary16::from_encoding(0x0001)), min_subnormal16());
		assert_eq!(f32::from(Binary16::from_encoding(0x03FF)), min_subnormal16() * 1023.0);
		assert_eq!(f32::from(Binary16::from_encoding(0x8003)), min_subnormal16() * -3.0);
	}
	#[test]
	fn to_binary32__special() {
		assert_eq!(f32::from(Binary16::from_encoding(0xFC00)),      f32::NEG_INFINITY);
		assert_eq!(f32::from(Binary16::from_encoding(0x8000)).to_bits(), 0x8000_0000);
		assert!(f32::from(Binary16::from_encoding(Binary16::QUIET_NAN)).is_nan());
	}
}

mod traits {
	use super::*;
	
	//		Debug																
	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", Binary16::from_encoding(0x3C00)), "IeeeBinary::<16, 11>(0, 0xf, 0x0)");
	}
	
	//		From: f64 -> Binary64												
	#[test]
	fn from__f64_round_trip() {
		for value in [0.0, -0.0, 1.0, -1.5, f64::MIN_POSITIVE, f64::MAX, 5e-324] {
			assert_eq!(f64::from(Binary64::from(value)).to_bits(), value.to_bits());
		}
	}
	
	//		Neg																	
	#[test]
	fn neg() {
		assert_eq!(-Binary32::from(2.0_f32), Binary32::from(-2.0_f32));
	}
}

mod float_class {
	use super::*;
	
	//		is_*																
	#[test]
	fn predicates() {
		assert!( FloatClass::NegativeSubnormal.is_finite());
		assert!( FloatClass::NegativeSubnormal.is_subnormal());
		assert!( FloatClass::PositiveZero.is_zero());
		assert!( FloatClass::NegativeInfinity.is_infinite());
		assert!(!FloatClass::QuietNaN.is_finite());
		assert!( FloatClass::SignalingNaN.is_nan());
		assert!( FloatClass::PositiveNormal.is_normal());
	}
}
