use std::{marker::PhantomData, mem, mem::MaybeUninit, ptr, slice};

use crate::classify::{is_relatively_aligned, relative_size_of, Trivial, Unit};

/// Reads values back out of a buffer written by a [`Serializer`].
///
/// Reads are unaligned, so buffer may sit at any address.
///
/// [`Serializer`]: crate::Serializer
pub struct Deserializer<'b, U: Unit = u8> {
	buf: &'b [U],
	pos: usize,
}

impl<'b, U: Unit> Deserializer<'b, U> {
	/// Create deserializer reading from start of `buf`.
	///
	/// # Safety
	///
	/// `buf` must contain output of serializing values in this same build of the
	/// program, and values must be read back with exactly the same types in
	/// exactly the same order.
	///
	/// Reading a byte-copied type from bytes which were not written from a valid
	/// value of that type is undefined behavior.
	#[inline]
	pub unsafe fn new(buf: &'b [U]) -> Self {
		Self { buf, pos: 0 }
	}

	/// Get current position in buffer, in units.
	#[inline]
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Consume deserializer, returning the unread tail of the buffer.
	#[inline]
	pub fn into_rest(self) -> &'b [U] {
		&self.buf[self.pos..]
	}

	/// Take next `count` values of `T` from buffer, returning their bytes.
	fn take_bytes<T>(&mut self, count: usize) -> &'b [u8] {
		let unit_size = mem::size_of::<U>();
		let start = self.pos * unit_size;
		let end = start + relative_size_of::<T, U>() * unit_size * count;
		// SAFETY: Any bit pattern is valid for `U`, so its storage can be viewed as bytes
		let bytes: &'b [u8] =
			unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<u8>(), mem::size_of_val(self.buf)) };
		let taken = &bytes[start..end];
		self.pos += relative_size_of::<T, U>() * count;
		taken
	}

	/// Read a byte-copyable value.
	#[inline]
	pub fn read_raw<T>(&mut self, trivial: Trivial<T>) -> T {
		let bytes = self.take_bytes::<T>(1);
		debug_assert!(bytes.len() >= trivial.size());
		// SAFETY: `bytes` is long enough to hold a `T`.
		// Contract of `Deserializer::new` guarantees it was written from a valid `T`.
		unsafe { ptr::read_unaligned(bytes.as_ptr().cast::<T>()) }
	}

	/// Read byte-copyable values into `dst`, filling it completely.
	pub fn read_raw_slice<T>(&mut self, trivial: Trivial<T>, dst: &mut [MaybeUninit<T>]) {
		let bytes = self.take_bytes::<T>(dst.len());
		if is_relatively_aligned::<T, U>() {
			// SAFETY: `bytes` is exactly as long as `dst` when `T` is relatively aligned.
			// `Trivial<T>` proves copying bytes produces valid values.
			unsafe {
				ptr::copy_nonoverlapping(bytes.as_ptr(), dst.as_mut_ptr().cast::<u8>(), bytes.len())
			};
		} else {
			let stride = relative_size_of::<T, U>() * mem::size_of::<U>();
			for (slot, chunk) in dst.iter_mut().zip(bytes.chunks_exact(stride)) {
				debug_assert!(chunk.len() >= trivial.size());
				// SAFETY: Each chunk holds a `T` written by a serializer
				slot.write(unsafe { ptr::read_unaligned(chunk.as_ptr().cast::<T>()) });
			}
		}
	}

	/// Read `count` byte-copyable values lazily, as an iterator.
	///
	/// Position moves past all `count` values immediately.
	#[inline]
	pub fn read_raw_iter<T>(&mut self, _trivial: Trivial<T>, count: usize) -> RawIter<'b, T> {
		let stride = relative_size_of::<T, U>() * mem::size_of::<U>();
		let bytes = self.take_bytes::<T>(count);
		RawIter {
			chunks: bytes.chunks_exact(stride),
			_marker: PhantomData,
		}
	}

	/// Read an element count.
	#[inline]
	pub fn read_len(&mut self) -> usize {
		self.read_raw(Trivial::new())
	}

	/// Read an enum variant index.
	#[inline]
	pub fn read_variant(&mut self) -> u32 {
		self.read_raw(Trivial::new())
	}

	/// Read a presence flag.
	#[inline]
	pub fn read_flag(&mut self) -> bool {
		self.read_raw(Trivial::new())
	}
}

/// Iterator over byte-copyable values in a buffer.
///
/// Created by [`Deserializer::read_raw_iter`].
pub struct RawIter<'b, T> {
	chunks: slice::ChunksExact<'b, u8>,
	_marker: PhantomData<fn() -> T>,
}

impl<'b, T> Iterator for RawIter<'b, T> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<T> {
		let chunk = self.chunks.next()?;
		// SAFETY: `RawIter` is only created from `Deserializer::read_raw_iter`,
		// which requires a `Trivial<T>`. Each chunk holds a `T` written by a serializer.
		Some(unsafe { ptr::read_unaligned(chunk.as_ptr().cast::<T>()) })
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.chunks.size_hint()
	}
}

impl<'b, T> ExactSizeIterator for RawIter<'b, T> {}
