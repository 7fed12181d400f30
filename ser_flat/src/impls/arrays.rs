use std::array;

use crate::{
	classify::Check, ByteCopy, Deserialize, Deserializer, Serialize, Serializer, Shape, Trivial,
	Unit,
};

unsafe impl<T: ByteCopy, const N: usize> ByteCopy for [T; N] {}

// Arrays have no count in output. Byte-copyable arrays are written whole,
// otherwise each element in index order.
impl<T: Serialize, const N: usize> Serialize for [T; N] {
	const SHAPE: Shape = Shape::Array;
	const TRIVIAL: Option<Trivial<Self>> = match T::TRIVIAL {
		// SAFETY: Element type is proven byte-copyable
		Some(_) if N > 0 => Some(unsafe { Trivial::assume() }),
		_ => None,
	};
	const SERIALIZABLE: bool = N > 0 && T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		let _ = Check::<Self>::ASSERT_SERIALIZABLE;
		let _ = Check::<T>::ASSERT_SERIALIZABLE;

		match Self::TRIVIAL {
			Some(trivial) => serializer.push_raw(trivial, self),
			None => {
				for value in self {
					value.serialize_data(serializer);
				}
			}
		}
	}
}

impl<T: Deserialize, const N: usize> Deserialize for [T; N] {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		match Self::TRIVIAL {
			Some(trivial) => deserializer.read_raw(trivial),
			// `from_fn` calls closure in index order
			None => array::from_fn(|_| T::deserialize_value(deserializer)),
		}
	}

	#[inline]
	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		match Self::TRIVIAL {
			Some(trivial) => *self = deserializer.read_raw(trivial),
			None => {
				for value in self {
					value.deserialize_data(deserializer);
				}
			}
		}
	}
}
