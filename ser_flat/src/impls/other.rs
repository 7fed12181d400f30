use std::{num::Wrapping, ops::Range, time::Duration};

use crate::{
	classify::Check, impl_byte_copy, ByteCopy, Deserialize, Deserializer, Serialize, Serializer,
	Shape, Trivial, Unit,
};

unsafe impl ByteCopy for Duration {}
impl_byte_copy!(Duration);

// `Wrapping<T>` is `#[repr(transparent)]`
unsafe impl<T: ByteCopy> ByteCopy for Wrapping<T> {}

impl<T: ByteCopy + Serialize> Serialize for Wrapping<T> {
	const SHAPE: Shape = Shape::Scalar;
	const TRIVIAL: Option<Trivial<Self>> = Some(Trivial::PROOF);
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serializer.push_raw(Trivial::<Self>::PROOF, self);
	}
}

impl<T: ByteCopy + Deserialize> Deserialize for Wrapping<T> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		deserializer.read_raw(Trivial::<Self>::PROOF)
	}
}

// Not `Copy`, so always written as `start` then `end`
impl<T: Serialize> Serialize for Range<T> {
	const SHAPE: Shape = Shape::Pair;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		let _ = Check::<T>::ASSERT_SERIALIZABLE;

		self.start.serialize_data(serializer);
		self.end.serialize_data(serializer);
	}
}

impl<T: Deserialize> Deserialize for Range<T> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		let start = T::deserialize_value(deserializer);
		let end = T::deserialize_value(deserializer);
		start..end
	}

	#[inline]
	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		self.start.deserialize_data(deserializer);
		self.end.deserialize_data(deserializer);
	}
}
