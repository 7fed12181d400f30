use num_bigint::{BigInt, BigUint, Sign};

use super::containers::serialize_slice;
use crate::{Deserialize, Deserializer, Serialize, Serializer, Shape, Trivial, Unit};

// Written as its `u32` digits, least significant first, like a `Vec<u32>`.
// Independent of `BigUint`'s internal digit size.
impl Serialize for BigUint {
	const SHAPE: Shape = Shape::Struct;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_slice(&self.to_u32_digits(), serializer);
	}
}

impl Deserialize for BigUint {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		BigUint::new(Vec::<u32>::deserialize_value(deserializer))
	}
}

const SIGN_MINUS: u8 = 0;
const SIGN_NONE: u8 = 1;
const SIGN_PLUS: u8 = 2;

// Sign byte, then magnitude
impl Serialize for BigInt {
	const SHAPE: Shape = Shape::Struct;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		let sign = match self.sign() {
			Sign::Minus => SIGN_MINUS,
			Sign::NoSign => SIGN_NONE,
			Sign::Plus => SIGN_PLUS,
		};
		serializer.push_raw(Trivial::new(), &sign);
		self.magnitude().serialize_data(serializer);
	}
}

impl Deserialize for BigInt {
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		let sign = match deserializer.read_raw(Trivial::<u8>::new()) {
			SIGN_MINUS => Sign::Minus,
			SIGN_PLUS => Sign::Plus,
			_ => Sign::NoSign,
		};
		BigInt::from_biguint(sign, BigUint::deserialize_value(deserializer))
	}
}
