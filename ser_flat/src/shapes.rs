//! Traits describing the structural shapes which get special traversal.

use crate::{
	classify::{is_relatively_aligned, Trivial, Unit},
	Serialize,
};

/// Sequence, set or map.
///
/// Serialized as element count followed by each element in iteration order.
pub trait Container {
	type Element;

	/// Container can be sized to an exact element count up front, and filled in
	/// order.
	const RESIZABLE: bool;

	/// Container can be extended from a contiguous run of elements in one call.
	const BATCH_INSERTABLE: bool;

	/// Number of elements, if known without iterating.
	fn element_count(&self) -> Option<usize>;

	/// Remove all elements.
	fn reset(&mut self);

	/// Prepare to receive `additional` elements.
	#[inline]
	fn reserve_elements(&mut self, additional: usize) {
		let _ = additional;
	}
}

/// How a container is refilled when deserializing.
#[derive(Debug)]
pub enum DecodePolicy<T> {
	/// Resize once, then bulk copy all elements.
	ResizeBulk(Trivial<T>),
	/// Resize once, then deserialize each element in place.
	ResizeEach,
	/// Insert all elements directly from the buffer in one call.
	BatchInsert(Trivial<T>),
	/// Deserialize and insert elements one at a time.
	InsertEach,
}

impl<T> Clone for DecodePolicy<T> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for DecodePolicy<T> {}

impl<T: Serialize> DecodePolicy<T> {
	/// Select policy for container `C` read from a buffer of `U` units.
	///
	/// Bulk paths need byte-copyable elements which fill a whole number of units.
	pub const fn select<C: Container<Element = T>, U: Unit>() -> Self {
		let bulk = match T::TRIVIAL {
			Some(trivial) if is_relatively_aligned::<T, U>() => Some(trivial),
			_ => None,
		};
		match (C::RESIZABLE, C::BATCH_INSERTABLE, bulk) {
			(true, _, Some(trivial)) => Self::ResizeBulk(trivial),
			(true, _, None) => Self::ResizeEach,
			(false, true, Some(trivial)) => Self::BatchInsert(trivial),
			(false, _, _) => Self::InsertEach,
		}
	}
}

/// Wrapper which only exposes its elements through a restricted interface,
/// e.g. a stack or queue.
///
/// Serialized as its underlying container.
pub trait Adapter: Sized {
	type Container;

	/// Copy elements out into underlying container, in the order which
	/// `from_container` needs to rebuild an equivalent adapter.
	///
	/// Leaves `self` untouched.
	fn to_container(&self) -> Self::Container;

	fn from_container(container: Self::Container) -> Self;
}

/// Exclusively-owned heap value, which may be absent.
///
/// Serialized as a presence flag (if nullable) followed by the pointee.
pub trait OwnedPointer: Sized {
	type Pointee;

	/// Whether pointer can be absent.
	const NULLABLE: bool;

	fn pointee(&self) -> Option<&Self::Pointee>;

	fn from_pointee(pointee: Self::Pointee) -> Self;
}
