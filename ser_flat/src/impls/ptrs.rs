use crate::{
	classify::Check, Deserialize, Deserializer, OwnedPointer, Serialize, Serializer, Shape, Unit,
};

/// Write presence flag (only if pointer is nullable), then pointee if present.
#[inline]
fn serialize_pointer<P, S>(pointer: &P, serializer: &mut S)
where
	P: OwnedPointer,
	P::Pointee: Serialize,
	S: Serializer,
{
	let _ = Check::<P::Pointee>::ASSERT_SERIALIZABLE;

	let pointee = pointer.pointee();
	if P::NULLABLE {
		serializer.push_flag(pointee.is_some());
	}
	if let Some(value) = pointee {
		value.serialize_data(serializer);
	}
}

impl<T> OwnedPointer for Box<T> {
	type Pointee = T;

	const NULLABLE: bool = false;

	#[inline]
	fn pointee(&self) -> Option<&T> {
		Some(&**self)
	}

	#[inline]
	fn from_pointee(pointee: T) -> Self {
		Box::new(pointee)
	}
}

impl<T: Serialize> Serialize for Box<T> {
	const SHAPE: Shape = Shape::OwnedPointer;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_pointer(self, serializer);
	}
}

impl<T: Deserialize> Deserialize for Box<T> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		Self::from_pointee(T::deserialize_value(deserializer))
	}

	// Reuse existing allocation
	#[inline]
	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		(**self).deserialize_data(deserializer);
	}
}

impl<T> OwnedPointer for Option<T> {
	type Pointee = T;

	const NULLABLE: bool = true;

	#[inline]
	fn pointee(&self) -> Option<&T> {
		self.as_ref()
	}

	#[inline]
	fn from_pointee(pointee: T) -> Self {
		Some(pointee)
	}
}

impl<T: Serialize> Serialize for Option<T> {
	const SHAPE: Shape = Shape::OwnedPointer;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_pointer(self, serializer);
	}
}

impl<T: Deserialize> Deserialize for Option<T> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		if deserializer.read_flag() {
			Self::from_pointee(T::deserialize_value(deserializer))
		} else {
			None
		}
	}
}
