//! Flat binary serializer.
//!
//! Values are written into a caller-provided buffer as a flat stream:
//! byte-copyable values as their raw bytes, containers as a count followed by
//! their elements, and everything else by walking its structure. How each type
//! is written is decided at compile time.
//!
//! Output is not self-describing, and only valid for the same build of the
//! program. Reading it back is `unsafe` for that reason.
//!
//! ```
//! use ser_flat::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Layer {
//! 	name: String,
//! 	weights: Vec<f32>,
//! }
//!
//! let layer = Layer { name: "dense".to_string(), weights: vec![0.5, -1.0] };
//!
//! let mut buf = vec![0u8; ser_flat::serialized_size(&layer)];
//! let rest = ser_flat::serialize(&mut buf, &layer);
//! assert!(rest.is_empty());
//!
//! let (out, _): (Layer, _) = unsafe { ser_flat::from_slice(&buf) };
//! assert_eq!(out, layer);
//! ```
//!
//! Types which hold raw pointers, references or zero-sized values are refused
//! at compile time:
//!
//! ```compile_fail
//! let value: (i32, *const i32) = (1, std::ptr::null());
//! ser_flat::serialized_size(&value);
//! ```
//!
//! ```compile_fail
//! #[derive(ser_flat::Serialize)]
//! struct Empty;
//!
//! ser_flat::serialized_size(&Empty);
//! ```
//!
//! ```compile_fail
//! #[derive(ser_flat::Serialize)]
//! struct Node {
//! 	next: *const Node,
//! }
//! ```
//!
//! A type marked `#[ser_deny]` can be declared and used as normal, but not
//! serialized:
//!
//! ```compile_fail
//! #[derive(ser_flat::Serialize)]
//! #[ser_deny]
//! struct Handle(u32);
//!
//! ser_flat::serialized_size(&Handle(1));
//! ```
//!
//! Nor can anything which holds one:
//!
//! ```compile_fail
//! #[derive(ser_flat::Serialize)]
//! #[ser_deny]
//! struct Handle(u32);
//!
//! #[derive(ser_flat::Serialize)]
//! struct Session {
//! 	id: u64,
//! 	handles: Vec<Handle>,
//! }
//!
//! let session = Session { id: 1, handles: vec![] };
//! ser_flat::serialized_size(&session);
//! ```

use tracing::{debug, trace};

#[cfg(feature = "derive")]
pub use ser_flat_derive::{Deserialize, Serialize};

mod macros;

pub mod classify;
pub use classify::{ByteCopy, Classification, Shape, Strategy, Trivial, Unit};

pub mod shapes;
pub use shapes::{Adapter, Container, DecodePolicy, OwnedPointer};

mod serialize;
pub use serialize::{Deserialize, DeserializeWith, Serialize, SerializeWith};

mod serializer;
pub use serializer::{DrySerializer, Serializer, SliceSerializer, Slot};

mod deserializer;
pub use deserializer::{Deserializer, RawIter};

mod error;
pub use error::Error;

pub mod collections;

mod impls;

use classify::Check;

/// Serialize `value` into start of `buf`.
///
/// Returns the unwritten tail of `buf`.
///
/// # Panics
///
/// Panics if `buf` is too small. Use [`serialized_end`] to size the buffer
/// first, or [`try_serialize`] to check for you.
pub fn serialize<'b, U: Unit, T: Serialize>(buf: &'b mut [U], value: &T) -> &'b mut [U] {
	let _ = Check::<T>::ASSERT_SERIALIZABLE;

	let mut serializer = SliceSerializer::new(buf);
	value.serialize_data(&mut serializer);
	trace!(
		type_name = std::any::type_name::<T>(),
		units = serializer.pos(),
		"serialized value"
	);
	serializer.into_rest()
}

/// Calculate position where output of serializing `value` would end, if
/// starting at position `base`.
///
/// Positions are in units of `U`. Writes nothing.
pub fn serialized_end<U: Unit, T: Serialize>(base: usize, value: &T) -> usize {
	let _ = Check::<T>::ASSERT_SERIALIZABLE;

	let mut serializer = DrySerializer::<U>::new(base);
	value.serialize_data(&mut serializer);
	serializer.pos()
}

/// Calculate size of serialized `value` in bytes.
#[inline]
pub fn serialized_size<T: Serialize>(value: &T) -> usize {
	serialized_end::<u8, T>(0, value)
}

/// Serialize `value` into start of `buf`, checking it fits first.
pub fn try_serialize<'b, U: Unit, T: Serialize>(
	buf: &'b mut [U],
	value: &T,
) -> Result<&'b mut [U], Error> {
	let needed = serialized_end::<U, T>(0, value);
	if needed > buf.len() {
		debug!(
			type_name = std::any::type_name::<T>(),
			needed,
			available = buf.len(),
			"buffer too small"
		);
		return Err(Error::BufferTooSmall { needed, available: buf.len() });
	}
	Ok(serialize(buf, value))
}

/// Serialize `value` into a new `Vec<u8>` of exactly the right size.
pub fn to_vec<T: Serialize>(value: &T) -> Vec<u8> {
	let mut buf = vec![0; serialized_size(value)];
	let rest = serialize(&mut buf, value);
	debug_assert!(rest.is_empty());
	buf
}

/// Deserialize from start of `buf` into `value`, replacing its contents.
///
/// Returns the unread tail of `buf`.
///
/// # Safety
///
/// `buf` must hold output of [`serialize`] called with a value of type `T`, in
/// this same build of the program. See [`Deserializer::new`].
pub unsafe fn deserialize<'b, U: Unit, T: Deserialize>(buf: &'b [U], value: &mut T) -> &'b [U] {
	let _ = Check::<T>::ASSERT_SERIALIZABLE;

	let mut deserializer = Deserializer::new(buf);
	value.deserialize_data(&mut deserializer);
	trace!(
		type_name = std::any::type_name::<T>(),
		units = deserializer.pos(),
		"deserialized value"
	);
	deserializer.into_rest()
}

/// Deserialize a new value from start of `buf`.
///
/// Returns the value, and the unread tail of `buf`.
///
/// # Safety
///
/// As for [`deserialize`].
pub unsafe fn from_slice<U: Unit, T: Deserialize>(buf: &[U]) -> (T, &[U]) {
	let _ = Check::<T>::ASSERT_SERIALIZABLE;

	let mut deserializer = Deserializer::new(buf);
	let value = T::deserialize_value(&mut deserializer);
	trace!(
		type_name = std::any::type_name::<T>(),
		units = deserializer.pos(),
		"deserialized value"
	);
	(value, deserializer.into_rest())
}
