use std::{marker::PhantomData, mem, ptr, slice};

use crate::classify::{is_relatively_aligned, relative_size_of, Trivial, Unit};

/// Serializers implement this trait.
///
/// All traversal code is written once against this trait. [`SliceSerializer`]
/// writes into a buffer, [`DrySerializer`] only advances a cursor, so both
/// always agree on how many units a value occupies.
pub trait Serializer: Sized {
	/// Unit in which output is addressed.
	type Unit: Unit;

	/// `false` if this serializer only measures.
	///
	/// Traversal code may use this to skip work which cannot affect the
	/// position, e.g. iterating a container of byte-copyable elements.
	const WRITES: bool;

	/// Get current position in output, in units.
	fn pos(&self) -> usize;

	/// Push a byte-copyable value to output.
	///
	/// Value is padded to a whole number of units.
	#[inline]
	fn push_raw<T>(&mut self, trivial: Trivial<T>, value: &T) {
		self.push_raw_slice(trivial, slice::from_ref(value));
	}

	/// Push a slice of byte-copyable values to output.
	///
	/// Output is identical to pushing each value individually with `push_raw`.
	fn push_raw_slice<T>(&mut self, trivial: Trivial<T>, values: &[T]);

	/// Move position forwards as if `count` values of `T` had been pushed,
	/// without writing anything.
	fn advance<T>(&mut self, trivial: Trivial<T>, count: usize);

	/// Push an element count.
	#[inline]
	fn push_len(&mut self, len: usize) {
		self.push_raw(Trivial::new(), &len);
	}

	/// Push an enum variant index.
	#[inline]
	fn push_variant(&mut self, index: u32) {
		self.push_raw(Trivial::new(), &index);
	}

	/// Push a presence flag.
	#[inline]
	fn push_flag(&mut self, flag: bool) {
		self.push_raw(Trivial::new(), &flag);
	}

	/// Reserve space for a value which will be written later with `fill_slot`.
	#[inline]
	fn reserve_slot<T>(&mut self, trivial: Trivial<T>) -> Slot<T> {
		let pos = self.pos();
		self.advance(trivial, 1);
		Slot { pos, trivial }
	}

	/// Write a value into a previously reserved slot.
	///
	/// Does not move position.
	fn fill_slot<T>(&mut self, slot: Slot<T>, value: &T);
}

/// Reserved space in output for a value of type `T`.
#[must_use]
pub struct Slot<T> {
	pos: usize,
	trivial: Trivial<T>,
}

/// Serializer which writes into a caller-provided buffer.
///
/// Panics if the buffer is too small.
pub struct SliceSerializer<'b, U: Unit = u8> {
	buf: &'b mut [U],
	pos: usize,
}

impl<'b, U: Unit> SliceSerializer<'b, U> {
	#[inline]
	pub fn new(buf: &'b mut [U]) -> Self {
		Self { buf, pos: 0 }
	}

	/// Consume serializer, returning the unwritten tail of the buffer.
	#[inline]
	pub fn into_rest(self) -> &'b mut [U] {
		let Self { buf, pos } = self;
		&mut buf[pos..]
	}

	/// Write `values` at `pos`, each value starting on a unit boundary.
	fn write_at<T>(&mut self, pos: usize, _trivial: Trivial<T>, values: &[T]) {
		let unit_size = mem::size_of::<U>();
		let stride = relative_size_of::<T, U>() * unit_size;
		let start = pos * unit_size;
		let end = start + stride * values.len();
		// SAFETY: Any bit pattern is valid for `U`, so its storage can be viewed as bytes
		let bytes = unsafe {
			slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<u8>(), mem::size_of_val(self.buf))
		};
		let dst = &mut bytes[start..end];

		let src = values.as_ptr().cast::<u8>();
		if is_relatively_aligned::<T, U>() {
			// SAFETY: `dst` is `stride * values.len()` bytes long, which equals
			// size of `values` when `T` is relatively aligned.
			// `Trivial<T>` proves `T` can be copied bytewise.
			unsafe { ptr::copy_nonoverlapping(src, dst.as_mut_ptr(), dst.len()) };
		} else {
			let size = mem::size_of::<T>();
			for (index, chunk) in dst.chunks_exact_mut(stride).enumerate() {
				// SAFETY: `chunk` is at least `size` bytes. `index` is in bounds of `values`.
				unsafe { ptr::copy_nonoverlapping(src.add(index * size), chunk.as_mut_ptr(), size) };
			}
		}
	}
}

impl<'b, U: Unit> Serializer for SliceSerializer<'b, U> {
	type Unit = U;

	const WRITES: bool = true;

	#[inline]
	fn pos(&self) -> usize {
		self.pos
	}

	#[inline]
	fn push_raw_slice<T>(&mut self, trivial: Trivial<T>, values: &[T]) {
		self.write_at(self.pos, trivial, values);
		self.pos += relative_size_of::<T, U>() * values.len();
	}

	#[inline]
	fn advance<T>(&mut self, _trivial: Trivial<T>, count: usize) {
		let pos = self.pos + relative_size_of::<T, U>() * count;
		assert!(
			pos <= self.buf.len(),
			"buffer too small: needed {} units, only {} available",
			pos,
			self.buf.len()
		);
		self.pos = pos;
	}

	#[inline]
	fn fill_slot<T>(&mut self, slot: Slot<T>, value: &T) {
		self.write_at(slot.pos, slot.trivial, slice::from_ref(value));
	}
}

/// Serializer which writes nothing, and only calculates where output would
/// end.
///
/// Never touches any buffer.
pub struct DrySerializer<U: Unit = u8> {
	pos: usize,
	_unit: PhantomData<U>,
}

impl<U: Unit> DrySerializer<U> {
	/// Create dry serializer starting at position `base`.
	#[inline]
	pub fn new(base: usize) -> Self {
		Self { pos: base, _unit: PhantomData }
	}
}

impl<U: Unit> Serializer for DrySerializer<U> {
	type Unit = U;

	const WRITES: bool = false;

	#[inline]
	fn pos(&self) -> usize {
		self.pos
	}

	#[inline]
	fn push_raw_slice<T>(&mut self, trivial: Trivial<T>, values: &[T]) {
		self.advance(trivial, values.len());
	}

	#[inline]
	fn advance<T>(&mut self, _trivial: Trivial<T>, count: usize) {
		self.pos += relative_size_of::<T, U>() * count;
	}

	#[inline]
	fn fill_slot<T>(&mut self, _slot: Slot<T>, _value: &T) {}
}
