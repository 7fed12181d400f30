/// Implement `Serialize` and `Deserialize` for byte-copyable types.
///
/// Each type must implement [`ByteCopy`](crate::ByteCopy).
///
/// ```
/// use ser_flat::{impl_byte_copy, ByteCopy};
///
/// #[derive(Clone, Copy)]
/// #[repr(C)]
/// struct Rgba([u8; 4]);
///
/// unsafe impl ByteCopy for Rgba {}
/// impl_byte_copy!(Rgba);
///
/// assert_eq!(ser_flat::serialized_size(&Rgba([1, 2, 3, 4])), 4);
/// ```
#[macro_export]
macro_rules! impl_byte_copy {
	($($ty:ty),* $(,)?) => {
		$(
			impl $crate::Serialize for $ty {
				const SHAPE: $crate::Shape = $crate::Shape::Scalar;
				const TRIVIAL: ::core::option::Option<$crate::Trivial<Self>> =
					::core::option::Option::Some($crate::Trivial::PROOF);

				#[inline]
				fn serialize_data<S: $crate::Serializer>(&self, serializer: &mut S) {
					serializer.push_raw($crate::Trivial::<Self>::PROOF, self);
				}
			}

			impl $crate::Deserialize for $ty {
				#[inline]
				fn deserialize_value<U: $crate::Unit>(deserializer: &mut $crate::Deserializer<'_, U>) -> Self {
					deserializer.read_raw($crate::Trivial::<Self>::PROOF)
				}
			}
		)*
	};
}
