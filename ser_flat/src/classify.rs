//! Compile-time classification of types.
//!
//! Every [`Serialize`] type declares a [`Shape`], and optionally a [`Trivial`]
//! proof that it can be copied byte-for-byte. From those, a single
//! [`Strategy`] is chosen for the type, entirely at compile time.

use std::{fmt, marker::PhantomData, mem, ptr};

use crate::Serialize;

/// Types whose serialized form is an exact copy of their bytes in memory.
///
/// Implement this (together with [`impl_byte_copy!`]) to whitelist a type for
/// the byte-copy fast path. `#[derive(Serialize)]` with `#[ser_copy]` does it
/// for you, and checks every field is `ByteCopy` too.
///
/// # Safety
///
/// Implementor must ensure that:
/// * Copying the bytes of a value produces an equivalent value.
/// * The type contains no pointers or references, directly or indirectly.
/// * The type is not zero-sized.
///
/// Bytes are copied exactly as they are in memory, including any padding, so
/// uninitialized padding bytes end up in the output. Output of types with
/// padding can differ between values which compare equal.
///
/// [`impl_byte_copy!`]: crate::impl_byte_copy
pub unsafe trait ByteCopy: Copy + 'static {}

/// Unit in which a buffer is addressed.
///
/// All positions and sizes passed to or returned from the buffer API are
/// counted in units, not bytes.
///
/// # Safety
///
/// Every bit pattern must be a valid value of the type.
pub unsafe trait Unit: ByteCopy + Default {}

unsafe impl Unit for u8 {}
unsafe impl Unit for u16 {}
unsafe impl Unit for u32 {}
unsafe impl Unit for u64 {}

/// Structural shape of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	/// Primitive, or other opaque plain-data type.
	Scalar,
	/// 2-element tuple, or similar first/second record.
	Pair,
	/// Tuple of any other arity.
	Tuple,
	/// Fixed-size array.
	Array,
	/// Sequence, set or map with a count and forward iteration.
	Container,
	/// Wrapper exposing elements only via a restricted interface.
	Adapter,
	/// Exclusively-owned (possibly absent) heap value.
	OwnedPointer,
	/// Struct with named or positional fields.
	Struct,
	/// Enum.
	Enum,
}

/// How a type is traversed when serializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
	/// Copied byte-for-byte.
	ByteCopy,
	/// Traversed according to its [`Shape`].
	Structural,
	/// Zero-sized or blacklisted, or holds a value which is. Refused at compile
	/// time.
	Unsupported,
}

impl Strategy {
	/// Select strategy for `T`.
	///
	/// Blacklist beats whitelist, and whitelist beats structural traversal.
	pub const fn of<T: Serialize>() -> Self {
		if T::BLACKLISTED || is_zero_sized::<T>() || !T::SERIALIZABLE {
			Self::Unsupported
		} else if T::TRIVIAL.is_some() {
			Self::ByteCopy
		} else {
			Self::Structural
		}
	}
}

/// Classification of a type, evaluated at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
	pub zero_sized: bool,
	pub byte_copyable: bool,
	pub container: bool,
	pub pair: bool,
	pub adapter: bool,
	pub owned_pointer: bool,
	pub whitelisted: bool,
	pub blacklisted: bool,
	/// Neither the type nor anything nested in it is zero-sized or blacklisted.
	pub serializable: bool,
}

impl Classification {
	pub const fn of<T: Serialize>() -> Self {
		let zero_sized = is_zero_sized::<T>();
		let whitelisted = T::TRIVIAL.is_some();
		let blacklisted = T::BLACKLISTED;
		let serializable = !blacklisted && !zero_sized && T::SERIALIZABLE;
		Self {
			zero_sized,
			byte_copyable: whitelisted && serializable,
			container: matches!(T::SHAPE, Shape::Container),
			pair: matches!(T::SHAPE, Shape::Pair | Shape::Tuple),
			adapter: matches!(T::SHAPE, Shape::Adapter),
			owned_pointer: matches!(T::SHAPE, Shape::OwnedPointer),
			whitelisted,
			blacklisted,
			serializable,
		}
	}

	/// Whether a type with this classification can be serialized at all.
	pub const fn can_serialize(&self) -> bool {
		self.serializable
	}

	/// Whether a type with this classification takes the byte-copy fast path.
	pub const fn can_byte_copy(&self) -> bool {
		self.byte_copyable
	}
}

/// Whether `T` can be serialized.
pub const fn can_serialize<T: Serialize>() -> bool {
	matches!(Strategy::of::<T>(), Strategy::ByteCopy | Strategy::Structural)
}

/// Whether `T` is serialized by copying its bytes.
pub const fn can_byte_copy<T: Serialize>() -> bool {
	matches!(Strategy::of::<T>(), Strategy::ByteCopy)
}

#[inline]
pub const fn is_zero_sized<T>() -> bool {
	mem::size_of::<T>() == 0
}

/// Number of buffer units needed to hold a `T`, rounded up.
///
/// Zero for zero-sized types.
#[inline]
pub const fn relative_size_of<T, U: Unit>() -> usize {
	let size = mem::size_of::<T>();
	if size == 0 {
		0
	} else {
		(size - 1) / mem::size_of::<U>() + 1
	}
}

/// Whether size of `T` is an exact multiple of size of `U`.
#[inline]
pub const fn is_relatively_aligned<T, U: Unit>() -> bool {
	relative_size_of::<T, U>() * mem::size_of::<U>() == mem::size_of::<T>()
}

#[allow(dead_code)]
#[repr(C)]
struct ReferencePair<A, B> {
	first: A,
	second: B,
}

/// Whether `(A, B)` has the size of a plain `#[repr(C)]` first/second record.
///
/// A size heuristic only. Used to decide whether a pair may be copied whole.
#[inline]
pub const fn is_pair_shaped<A, B>() -> bool {
	mem::size_of::<(A, B)>() == mem::size_of::<ReferencePair<A, B>>()
}

/// Proof that values of `T` may be copied byte-for-byte.
///
/// Zero-sized. Can only be obtained for `T: ByteCopy`, or built up from proofs
/// for the components of a tuple or array. All raw pushes and reads require
/// one.
pub struct Trivial<T> {
	_marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Trivial<T> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Trivial<T> {}

impl<T> fmt::Debug for Trivial<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Trivial<{}>", std::any::type_name::<T>())
	}
}

impl<T: ByteCopy> Trivial<T> {
	/// Proof for a whitelisted type. Evaluated at compile time.
	pub const PROOF: Self = {
		assert!(!is_zero_sized::<T>(), "zero-sized types cannot be serialized");
		Self { _marker: PhantomData }
	};

	#[inline]
	pub const fn new() -> Self {
		Self::PROOF
	}
}

impl<T> Trivial<T> {
	/// Create proof without a `ByteCopy` bound.
	///
	/// # Safety
	///
	/// `T` must uphold every requirement of [`ByteCopy`].
	#[inline]
	pub(crate) const unsafe fn assume() -> Self {
		assert!(!is_zero_sized::<T>(), "zero-sized types cannot be serialized");
		Self { _marker: PhantomData }
	}

	/// Size of `T` in bytes.
	#[inline]
	pub const fn size(self) -> usize {
		mem::size_of::<T>()
	}
}

impl<A, B> Trivial<(A, B)> {
	/// Assemble a pair from references to its halves.
	#[inline]
	pub fn join(self, first: &A, second: &B) -> (A, B) {
		// SAFETY: A pair is only proven trivial if both halves are
		unsafe { (ptr::read(first), ptr::read(second)) }
	}
}

/// Compile-time assertions for a type about to be serialized.
pub struct Check<T>(PhantomData<T>);

impl<T: Serialize> Check<T> {
	pub const ASSERT_SERIALIZABLE: () = {
		assert!(
			!is_zero_sized::<T>(),
			"zero-sized types cannot be serialized"
		);
		assert!(
			!T::BLACKLISTED,
			"type is blacklisted from serialization with `#[ser_deny]`"
		);
		assert!(
			T::SERIALIZABLE,
			"type holds a value which cannot be serialized"
		);
	};
}
