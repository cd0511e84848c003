//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok, assert_ok_eq};
use typenum::U1;
use rubedo::sugar::s;



//		Helpers

fn ratio(numerator: i64, denominator: i64) -> BSRationalAp {
	BSRationalAp::from_ratio(numerator, denominator).unwrap()
}

fn number(value: f64) -> BSNumber<UIntegerAp32> {
	BSNumber::try_from(value).unwrap()
}



//		Tests

mod constructors {
	use super::*;
	
	//		from_ratio															
	#[test]
	fn from_ratio() {
		let value = BSRationalAp::from_ratio(3_i32, -4_i32).unwrap();
		assert_eq!(value.numerator(),   &number(3.0));
		assert_eq!(value.denominator(), &number(-4.0));
		assert_ok_eq!(BSRationalAp::from_ratio(0.5_f64, 0.25_f64), ratio(2, 1));
	}
	#[test]
	fn from_ratio__invalid() {
		assert_err_eq!(
			BSRationalAp::from_ratio(1_i32, 0_i32),
			ConversionError::Arithmetic(ArithmeticError::DivideByZero)
		);
		assert_err_eq!(BSRationalAp::from_ratio(f64::NAN, 1.0), ConversionError::NonFinite);
	}
	
	//		new																	
	#[test]
	fn new() {
		assert_ok!(BSRationalAp::new(number(1.0), number(3.0)));
		assert_err_eq!(BSRationalAp::new(number(1.0), BSNumber::zero()), ArithmeticError::DivideByZero);
	}
	
	//		one																	
	#[test]
	fn one() {
		assert_eq!(BSRationalAp::one(), ratio(7, 7));
	}
	
	//		zero																
	#[test]
	fn zero() {
		let zero = BSRationalAp::zero();
		assert!(zero.is_zero());
		assert_eq!(zero.denominator(), &number(1.0));
		assert_eq!(zero, ratio(0, -5));
	}
}

mod public_methods {
	use super::*;
	
	//		abs																	
	#[test]
	fn abs() {
		assert_eq!(ratio(1, -3).abs(),  ratio(1, 3));
		assert_eq!(ratio(-1, -3).abs(), ratio(1, 3));
		assert_eq!(ratio(-2, 3).abs().sign(), 1);
	}
	
	//		from_json															
	#[test]
	fn from_json() {
		assert_ok_eq!(BSRationalAp::from_json(r#""0x1p+0/0x3p+0""#), ratio(1, 3));
		assert!(BSRationalAp::from_json(r#""0x1p+0/0""#).is_err());
	}
	
	//		is_zero																
	#[test]
	fn is_zero() {
		assert!( ratio(0, 3).is_zero());
		assert!(!ratio(1, 3).is_zero());
	}
	
	//		ldexp																
	#[test]
	fn ldexp() {
		assert_ok_eq!(ratio(1, 3).ldexp(2),  ratio(4, 3));
		assert_ok_eq!(ratio(1, 3).ldexp(-1), ratio(1, 6));
		assert_err_eq!(ratio(1, 3).ldexp(i32::MAX), ArithmeticError::ExponentOverflow);
	}
	
	//		normalized															
	#[test]
	fn normalized() {
		let value = ratio(3, -8).normalized().unwrap();
		assert_eq!(value.numerator(),   &number(-0.375));
		assert_eq!(value.denominator(), &number(1.0));
		
		let value = ratio(5, 12).normalized().unwrap();
		assert_eq!(value.numerator(),   &number(1.25));
		assert_eq!(value.denominator(), &number(3.0));
		assert_eq!(value, ratio(5, 12));
	}
	#[test]
	fn normalized__zero() {
		let value = ratio(0, -4).normalized().unwrap();
		assert!(value.is_zero());
		assert_eq!(value.denominator(), &number(1.0));
	}
	
	//		recip																
	#[test]
	fn recip() {
		assert_ok_eq!(ratio(2, 3).recip(),  ratio(3, 2));
		assert_ok_eq!(ratio(-1, 4).recip(), ratio(-4, 1));
		assert_err_eq!(ratio(0, 4).recip(), ArithmeticError::DivideByZero);
	}
	
	//		sign																
	#[test]
	fn sign() {
		assert_eq!(ratio(1, 2).sign(),   1);
		assert_eq!(ratio(1, -2).sign(),  -1);
		assert_eq!(ratio(-1, 2).sign(),  -1);
		assert_eq!(ratio(-1, -2).sign(), 1);
		assert_eq!(ratio(0, -2).sign(),  0);
	}
	
	//		to_f32																
	#[test]
	fn to_f32() {
		assert_eq!(ratio(1, 4).to_f32(),  0.25);
		assert_eq!(ratio(1, 3).to_f32(),  1.0 / 3.0);
		assert_eq!(ratio(-3, 2).to_f32(), -1.5);
	}
	#[test]
	fn to_f32__components_out_of_range() {
		let value = BSRationalAp::new(number(2.0_f64.powi(200)), number(2.0_f64.powi(199))).unwrap();
		assert!(value.to_f32().is_nan());
		assert_eq!(value.to_f64(), 2.0);
	}
	
	//		to_f64																
	#[test]
	fn to_f64() {
		assert_eq!(ratio(1, 3).to_f64(),  1.0 / 3.0);
		assert_eq!(ratio(2, -5).to_f64(), -0.4);
	}
	
	//		to_json																
	#[test]
	fn to_json() {
		assert_ok_eq!(ratio(1, 3).to_json(), s!(r#""0x1p+0/0x3p+0""#));
	}
	
	//		try_add																
	#[test]
	fn try_add() {
		assert_ok_eq!(ratio(1, 3).try_add(&ratio(1, 6)), ratio(1, 2));
		assert_ok_eq!(ratio(1, 2).try_add(&ratio(-1, 2)), BSRationalAp::zero());
	}
	#[test]
	fn try_add__equal_denominators() {
		let sum = ratio(1, 3).try_add(&ratio(1, 3)).unwrap();
		assert_eq!(sum.numerator(),   &number(2.0));
		assert_eq!(sum.denominator(), &number(3.0));
	}
	#[test]
	fn try_add__cross_terms() {
		let sum = ratio(1, 3).try_add(&ratio(1, 6)).unwrap();
		assert_eq!(sum.numerator(),   &number(9.0));
		assert_eq!(sum.denominator(), &number(18.0));
	}
	
	//		try_cmp																
	#[test]
	fn try_cmp__by_sign() {
		assert_ok_eq!(ratio(1, -2).try_cmp(&ratio(1, 3)), Ordering::Less);
		assert_ok_eq!(ratio(0, 7).try_cmp(&ratio(0, -3)), Ordering::Equal);
	}
	#[test]
	fn try_cmp__negative_denominators() {
		//	-1/2 < -1/3 with the denominators of mixed sign
		assert_ok_eq!(ratio(1, -2).try_cmp(&ratio(-1, 3)), Ordering::Less);
		//	-1/2 > -3/2 with equal negative denominators
		assert_ok_eq!(ratio(1, -2).try_cmp(&ratio(3, -2)), Ordering::Greater);
		assert_ok_eq!(ratio(-1, -2).try_cmp(&ratio(1, 2)), Ordering::Equal);
	}
	#[test]
	fn try_cmp__capacity_exceeded() {
		let lhs = BSRationalFp::<U1>::from_ratio(u32::MAX, 3).unwrap();
		let rhs = BSRationalFp::<U1>::from_ratio(1, u32::MAX).unwrap();
		assert_err_eq!(lhs.try_cmp(&rhs), ArithmeticError::CapacityExceeded { required: 2, capacity: 1 });
	}
	
	//		try_div																
	#[test]
	fn try_div() {
		assert_ok_eq!(ratio(1, 2).try_div(&ratio(3, 4)),  ratio(2, 3));
		assert_ok_eq!(ratio(1, 2).try_div(&ratio(-1, 4)), ratio(-2, 1));
	}
	#[test]
	fn try_div__self() {
		let value = ratio(-3, 7);
		assert_ok_eq!(value.try_div(&value), BSRationalAp::one());
	}
	#[test]
	fn try_div__by_zero() {
		assert_err_eq!(ratio(1, 2).try_div(&ratio(0, 3)), ArithmeticError::DivideByZero);
	}
	
	//		try_mul																
	#[test]
	fn try_mul() {
		assert_ok_eq!(ratio(2, 3).try_mul(&ratio(3, 4)),  ratio(1, 2));
		assert_ok_eq!(ratio(2, 3).try_mul(&ratio(0, 4)),  BSRationalAp::zero());
	}
	
	//		try_sub																
	#[test]
	fn try_sub() {
		assert_ok_eq!(ratio(1, 2).try_sub(&ratio(1, 3)), ratio(1, 6));
		assert_ok_eq!(ratio(1, 3).try_sub(&ratio(1, 2)), ratio(-1, 6));
	}
	#[test]
	fn try_sub__equal_denominators() {
		let difference = ratio(2, 3).try_sub(&ratio(1, 3)).unwrap();
		assert_eq!(difference.numerator(),   &number(1.0));
		assert_eq!(difference.denominator(), &number(3.0));
	}
}

mod traits {
	use super::*;
	
	//		Abs																	
	#[test]
	fn abs__generic() {
		assert_eq!(crate::abs(&ratio(-1, 3)), ratio(1, 3));
	}
	
	//		Add																	
	#[test]
	fn add() {
		assert_eq!(ratio(1, 3) + ratio(1, 6),   ratio(1, 2));
		assert_eq!(&ratio(1, 3) + &ratio(1, 6), ratio(1, 2));
	}
	
	//		AddAssign															
	#[test]
	fn add_assign() {
		let mut value = ratio(1, 4);
		value += ratio(1, 4);
		value += &ratio(1, 2);
		assert_eq!(value, BSRationalAp::one());
	}
	
	//		Default																
	#[test]
	fn default() {
		assert_eq!(BSRationalAp::default(), BSRationalAp::zero());
	}
	
	//		Deserialize															
	#[test]
	fn deserialize() {
		assert_ok_eq!(serde_json::from_str::<BSRationalAp>(r#""-0x3p-2""#),        ratio(-3, 4));
		assert_ok_eq!(serde_json::from_str::<BSRationalAp>(r#""0x5p+0/0x3p+1""#), ratio(5, 6));
	}
	
	//		Display																
	#[test]
	fn display() {
		assert_eq!(ratio(1, 3).to_string(),  "0x1p+0/0x3p+0");
		assert_eq!(ratio(-3, 4).to_string(), "-0x3p+0/0x1p+2");
		assert_eq!(ratio(0, 4).to_string(),  "0/0x1p+2");
	}
	
	//		Div																	
	#[test]
	fn div() {
		assert_eq!(ratio(1, 2) / ratio(1, 4),   ratio(2, 1));
		assert_eq!(&ratio(1, 2) / &ratio(1, 4), ratio(2, 1));
	}
	#[test]
	#[should_panic(expected = "Attempt to divide by zero")]
	fn div__by_zero() {
		let _ = ratio(1, 2) / BSRationalAp::zero();
	}
	
	//		DivAssign															
	#[test]
	fn div_assign() {
		let mut value = ratio(1, 2);
		value /= ratio(1, 3);
		value /= &ratio(3, 1);
		assert_eq!(value, ratio(1, 2));
	}
	
	//		Eq																	
	#[test]
	fn eq__by_value() {
		assert_eq!(ratio(2, 4),  ratio(1, 2));
		assert_eq!(ratio(-1, 2), ratio(1, -2));
		assert_ne!(ratio(1, 2),  ratio(1, 3));
	}
	
	//		FromStr																
	#[test]
	fn from_str() {
		assert_ok_eq!("0x1p+0/0x3p+0".parse::<BSRationalAp>(), ratio(1, 3));
		assert_ok_eq!("0x3p-2".parse::<BSRationalAp>(),        ratio(3, 4));
	}
	#[test]
	fn from_str__invalid() {
		assert_err_eq!(
			"0x1p+0/0".parse::<BSRationalAp>(),
			ConversionError::Arithmetic(ArithmeticError::DivideByZero)
		);
		assert_err_eq!("0x1p+0/".parse::<BSRationalAp>(),  ConversionError::EmptyValue);
		assert_err_eq!("0x1p+0/3".parse::<BSRationalAp>(), ConversionError::InvalidFormat);
	}
	
	//		Mul																	
	#[test]
	fn mul() {
		assert_eq!(ratio(2, 3) * ratio(-3, 4), ratio(-1, 2));
	}
	
	//		MulAssign															
	#[test]
	fn mul_assign() {
		let mut value = ratio(2, 3);
		value *= ratio(3, 4);
		value *= &ratio(2, 1);
		assert_eq!(value, BSRationalAp::one());
	}
	
	//		Neg																	
	#[test]
	fn neg() {
		assert_eq!(-ratio(1, 3),  ratio(-1, 3));
		assert_eq!(-&ratio(1, -3), ratio(1, 3));
	}
	
	//		Ord																	
	#[test]
	fn ord() {
		assert!(ratio(1, 3) < ratio(1, 2));
		assert!(ratio(-1, 2) < ratio(-1, 3));
		assert!(ratio(2, 4) <= ratio(1, 2));
		let mut values = vec![ratio(1, 2), ratio(-2, 3), ratio(1, 3), ratio(0, 1)];
		values.sort();
		assert_eq!(values, vec![ratio(-2, 3), ratio(0, 1), ratio(1, 3), ratio(1, 2)]);
	}
	#[test]
	#[should_panic(expected = "Attempt to compare overflowed")]
	fn ord__overflow() {
		let lhs = BSRationalFp::<U1>::from_ratio(u32::MAX, 3).unwrap();
		let rhs = BSRationalFp::<U1>::from_ratio(1, u32::MAX).unwrap();
		let _ = lhs < rhs;
	}
	
	//		Product																
	#[test]
	fn product() {
		let values = vec![ratio(2, 3), ratio(3, 4), ratio(-2, 1)];
		assert_eq!(values.iter().product::<BSRationalAp>(),      ratio(-1, 1));
		assert_eq!(values.into_iter().product::<BSRationalAp>(), ratio(-1, 1));
	}
	
	//		Serialize															
	#[test]
	fn serialize() {
		assert_ok_eq!(serde_json::to_string(&ratio(5, 6)), s!(r#""0x5p+0/0x3p+1""#));
	}
	
	//		Sub																	
	#[test]
	fn sub() {
		assert_eq!(ratio(1, 2) - ratio(1, 3),   ratio(1, 6));
		assert_eq!(&ratio(1, 2) - &ratio(1, 2), BSRationalAp::zero());
	}
	
	//		SubAssign															
	#[test]
	fn sub_assign() {
		let mut value = ratio(1, 2);
		value -= ratio(1, 3);
		value -= &ratio(1, 6);
		assert!(value.is_zero());
	}
	
	//		Sum																	
	#[test]
	fn sum() {
		let values = vec![ratio(1, 2), ratio(1, 3), ratio(1, 6)];
		assert_eq!(values.iter().sum::<BSRationalAp>(),      BSRationalAp::one());
		assert_eq!(values.into_iter().sum::<BSRationalAp>(), BSRationalAp::one());
	}
}

mod conversions {
	use super::*;
	
	//		From: BSNumber -> BSRational										
	#[test]
	fn from__bsnumber() {
		let value = BSRationalAp::from(number(0.75));
		assert_eq!(value.numerator(),   &number(0.75));
		assert_eq!(value.denominator(), &number(1.0));
	}
	
	//		TryFrom: f32 -> BSRational											
	#[test]
	fn try_from__f32() {
		assert_ok_eq!(BSRationalAp::try_from(0.5_f32), ratio(1, 2));
		assert_err_eq!(BSRationalAp::try_from(f32::INFINITY), ConversionError::NonFinite);
	}
	
	//		TryFrom: f64 -> BSRational											
	#[test]
	fn try_from__f64() {
		assert_ok_eq!(BSRationalAp::try_from(-0.125_f64), ratio(-1, 8));
		assert_err_eq!(BSRationalAp::try_from(f64::NAN),  ConversionError::NonFinite);
	}
	
	//		TryFrom: i32 -> BSRational											
	#[test]
	fn try_from__i32() {
		assert_ok_eq!(BSRationalAp::try_from(-7_i32), ratio(-7, 1));
	}
	
	//		TryFrom: i64 -> BSRational											
	#[test]
	fn try_from__i64() {
		assert_ok_eq!(BSRationalAp::try_from(i64::MIN), ratio(i64::MIN, 1));
	}
	
	//		TryFrom: u32 -> BSRational											
	#[test]
	fn try_from__u32() {
		assert_ok_eq!(BSRationalAp::try_from(7_u32), ratio(7, 1));
	}
	
	//		TryFrom: u64 -> BSRational											
	#[test]
	fn try_from__u64() {
		assert_ok_eq!(BSRationalAp::try_from(u64::MAX), BSRationalAp::from(BSNumber::<UIntegerAp32>::try_from(u64::MAX).unwrap()));
		assert_err_eq!(
			BSRationalFp::<U1>::try_from(u64::MAX),
			ConversionError::Arithmetic(ArithmeticError::CapacityExceeded { required: 2, capacity: 1 })
		);
	}
}
