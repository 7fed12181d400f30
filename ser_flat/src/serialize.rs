use crate::{
	classify::{is_zero_sized, Shape, Trivial, Unit},
	Deserializer, Serializer,
};

/// Trait for types which can be serialized.
///
/// Implemented for primitives, tuples, arrays, std containers and owned
/// pointers. Use `#[derive(Serialize)]` for your own types.
#[diagnostic::on_unimplemented(
	message = "`{Self}` cannot be serialized",
	label = "`{Self}` does not implement `Serialize`",
	note = "raw pointers, references and shared pointers are never serializable",
	note = "derive `Serialize` (add `#[ser_copy]` for plain-data types), or implement `Serialize` for a custom traversal"
)]
pub trait Serialize: Sized {
	/// Structural shape of the type.
	const SHAPE: Shape;

	/// Proof that the type may be copied byte-for-byte, if it can be.
	///
	/// `Some` selects the byte-copy fast path.
	const TRIVIAL: Option<Trivial<Self>> = None;

	/// `true` if the type must never be serialized.
	///
	/// Takes precedence over `TRIVIAL`.
	const BLACKLISTED: bool = false;

	/// `false` if the type, or any type it holds, cannot be serialized.
	///
	/// Types which hold other serializable types must override this to
	/// include their components.
	const SERIALIZABLE: bool = !Self::BLACKLISTED && !is_zero_sized::<Self>();

	/// Write this value to `serializer`.
	fn serialize_data<S: Serializer>(&self, serializer: &mut S);
}

/// Trait for types which can be deserialized.
pub trait Deserialize: Serialize {
	/// Read a new value from `deserializer`.
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self;

	/// Read into an existing value.
	///
	/// Any existing contents are discarded first. Containers override this to
	/// reuse their allocation.
	#[inline]
	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		*self = Self::deserialize_value(deserializer);
	}
}

/// Trait for use with `#[ser_with]`.
///
/// Serializes a `T` on its behalf, e.g. for a field of a foreign type.
pub trait SerializeWith<T> {
	fn serialize_data_with<S: Serializer>(value: &T, serializer: &mut S);
}

/// Trait for use with `#[ser_with]`.
pub trait DeserializeWith<T> {
	fn deserialize_value_with<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> T;

	#[inline]
	fn deserialize_data_with<U: Unit>(value: &mut T, deserializer: &mut Deserializer<'_, U>) {
		*value = Self::deserialize_value_with(deserializer);
	}
}
