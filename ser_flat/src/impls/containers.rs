use std::{
	collections::{BTreeSet, HashSet, LinkedList, VecDeque},
	hash::{BuildHasher, Hash},
	iter, mem,
};

use crate::{
	classify::Check, collections::ForwardList, Container, DecodePolicy, Deserialize, Deserializer,
	Serialize, Serializer, Shape, Trivial, Unit,
};

/// Write `[count][elements]` for a contiguous run of elements.
#[inline]
pub(crate) fn serialize_slice<T: Serialize, S: Serializer>(values: &[T], serializer: &mut S) {
	let _ = Check::<T>::ASSERT_SERIALIZABLE;

	serializer.push_len(values.len());
	serialize_run(values, serializer);
}

/// Write elements of a slice, with no count.
#[inline]
fn serialize_run<T: Serialize, S: Serializer>(values: &[T], serializer: &mut S) {
	match T::TRIVIAL {
		Some(trivial) => serializer.push_raw_slice(trivial, values),
		None => {
			for value in values {
				value.serialize_data(serializer);
			}
		}
	}
}

/// Write `[count][elements]` for a container.
///
/// Count is written first if the container knows it, otherwise it is
/// backpatched once elements are written.
fn serialize_container<'a, C, S>(container: &'a C, serializer: &mut S)
where
	C: Container,
	C::Element: Serialize + 'a,
	&'a C: IntoIterator<Item = &'a C::Element>,
	S: Serializer,
{
	match container.element_count() {
		Some(len) => serialize_counted(len, container.into_iter(), serializer),
		None => serialize_uncounted(container.into_iter(), serializer),
	}
}

/// Write `[count][elements]` for a container whose count is known up front.
fn serialize_counted<'a, T, S, I>(len: usize, values: I, serializer: &mut S)
where
	T: Serialize + 'a,
	S: Serializer,
	I: Iterator<Item = &'a T>,
{
	let _ = Check::<T>::ASSERT_SERIALIZABLE;

	serializer.push_len(len);
	match T::TRIVIAL {
		// Size only depends on count
		Some(trivial) if !S::WRITES => serializer.advance(trivial, len),
		_ => {
			for value in values {
				value.serialize_data(serializer);
			}
		}
	}
}

/// Write `[count][elements]` for a container which can only count its elements
/// by iterating them. Count is backpatched once elements are written.
fn serialize_uncounted<'a, T, S, I>(values: I, serializer: &mut S)
where
	T: Serialize + 'a,
	S: Serializer,
	I: Iterator<Item = &'a T>,
{
	let _ = Check::<T>::ASSERT_SERIALIZABLE;

	let slot = serializer.reserve_slot(Trivial::<usize>::new());
	let mut len = 0usize;
	for value in values {
		value.serialize_data(serializer);
		len += 1;
	}
	serializer.fill_slot(slot, &len);
}

/// Refill `vec` with `len` elements.
pub(crate) fn deserialize_into_vec<T: Deserialize, U: Unit>(
	vec: &mut Vec<T>,
	len: usize,
	deserializer: &mut Deserializer<'_, U>,
) {
	vec.clear();
	vec.reserve_exact(len);
	match DecodePolicy::<T>::select::<Vec<T>, U>() {
		DecodePolicy::ResizeBulk(trivial) => {
			deserializer.read_raw_slice(trivial, &mut vec.spare_capacity_mut()[..len]);
			// SAFETY: First `len` elements have been initialized
			unsafe { vec.set_len(len) };
		}
		_ => {
			for _ in 0..len {
				vec.push(T::deserialize_value(deserializer));
			}
		}
	}
}

/// Refill a container which is filled by inserting elements.
pub(crate) fn deserialize_inserting<C, U>(container: &mut C, deserializer: &mut Deserializer<'_, U>)
where
	C: Container + Extend<C::Element>,
	C::Element: Deserialize,
	U: Unit,
{
	container.reset();
	let len = deserializer.read_len();
	container.reserve_elements(len);
	match DecodePolicy::<C::Element>::select::<C, U>() {
		DecodePolicy::BatchInsert(trivial) => {
			container.extend(deserializer.read_raw_iter(trivial, len));
		}
		_ => {
			for _ in 0..len {
				let value = <C::Element as Deserialize>::deserialize_value(deserializer);
				container.extend(iter::once(value));
			}
		}
	}
}

impl<T> Container for Vec<T> {
	type Element = T;

	const RESIZABLE: bool = true;
	const BATCH_INSERTABLE: bool = true;

	#[inline]
	fn element_count(&self) -> Option<usize> {
		Some(self.len())
	}

	#[inline]
	fn reset(&mut self) {
		self.clear();
	}

	#[inline]
	fn reserve_elements(&mut self, additional: usize) {
		self.reserve(additional);
	}
}

impl<T: Serialize> Serialize for Vec<T> {
	const SHAPE: Shape = Shape::Container;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_slice(self.as_slice(), serializer);
	}
}

impl<T: Deserialize> Deserialize for Vec<T> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		let mut vec = Vec::new();
		vec.deserialize_data(deserializer);
		vec
	}

	#[inline]
	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		let _ = Check::<T>::ASSERT_SERIALIZABLE;

		let len = deserializer.read_len();
		deserialize_into_vec(self, len, deserializer);
	}
}

impl<T: Serialize> Serialize for Box<[T]> {
	const SHAPE: Shape = Shape::Container;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_slice(self, serializer);
	}
}

impl<T: Deserialize> Deserialize for Box<[T]> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		Vec::<T>::deserialize_value(deserializer).into_boxed_slice()
	}
}

impl Container for String {
	type Element = u8;

	const RESIZABLE: bool = true;
	const BATCH_INSERTABLE: bool = true;

	#[inline]
	fn element_count(&self) -> Option<usize> {
		Some(self.len())
	}

	#[inline]
	fn reset(&mut self) {
		self.clear();
	}

	#[inline]
	fn reserve_elements(&mut self, additional: usize) {
		self.reserve(additional);
	}
}

impl Serialize for String {
	const SHAPE: Shape = Shape::Container;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_slice(self.as_bytes(), serializer);
	}
}

impl Deserialize for String {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		let mut string = String::new();
		string.deserialize_data(deserializer);
		string
	}

	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		let mut bytes = mem::take(self).into_bytes();
		let len = deserializer.read_len();
		deserialize_into_vec(&mut bytes, len, deserializer);
		// SAFETY: Contract of `Deserializer::new` guarantees these bytes were
		// written from a `String`, so are valid UTF-8
		*self = unsafe { String::from_utf8_unchecked(bytes) };
	}
}

impl Serialize for Box<str> {
	const SHAPE: Shape = Shape::Container;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_slice(self.as_bytes(), serializer);
	}
}

impl Deserialize for Box<str> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		String::deserialize_value(deserializer).into_boxed_str()
	}
}

impl<T> Container for VecDeque<T> {
	type Element = T;

	const RESIZABLE: bool = true;
	const BATCH_INSERTABLE: bool = true;

	#[inline]
	fn element_count(&self) -> Option<usize> {
		Some(self.len())
	}

	#[inline]
	fn reset(&mut self) {
		self.clear();
	}

	#[inline]
	fn reserve_elements(&mut self, additional: usize) {
		self.reserve(additional);
	}
}

impl<T: Serialize> Serialize for VecDeque<T> {
	const SHAPE: Shape = Shape::Container;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		let _ = Check::<T>::ASSERT_SERIALIZABLE;

		// Ring buffer may wrap around, so is 2 runs of elements
		let (front, back) = self.as_slices();
		serializer.push_len(self.len());
		serialize_run(front, serializer);
		serialize_run(back, serializer);
	}
}

impl<T: Deserialize> Deserialize for VecDeque<T> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		let mut deque = VecDeque::new();
		deque.deserialize_data(deserializer);
		deque
	}

	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		let _ = Check::<T>::ASSERT_SERIALIZABLE;

		let mut vec = Vec::from(mem::take(self));
		let len = deserializer.read_len();
		deserialize_into_vec(&mut vec, len, deserializer);
		*self = VecDeque::from(vec);
	}
}

impl<T> Container for LinkedList<T> {
	type Element = T;

	const RESIZABLE: bool = false;
	const BATCH_INSERTABLE: bool = true;

	#[inline]
	fn element_count(&self) -> Option<usize> {
		Some(self.len())
	}

	#[inline]
	fn reset(&mut self) {
		self.clear();
	}
}

impl<T: Serialize> Serialize for LinkedList<T> {
	const SHAPE: Shape = Shape::Container;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_container(self, serializer);
	}
}

impl<T: Deserialize> Deserialize for LinkedList<T> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		let mut list = LinkedList::new();
		list.deserialize_data(deserializer);
		list
	}

	#[inline]
	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		let _ = Check::<T>::ASSERT_SERIALIZABLE;
		deserialize_inserting(self, deserializer);
	}
}

impl<T: Ord> Container for BTreeSet<T> {
	type Element = T;

	const RESIZABLE: bool = false;
	const BATCH_INSERTABLE: bool = true;

	#[inline]
	fn element_count(&self) -> Option<usize> {
		Some(self.len())
	}

	#[inline]
	fn reset(&mut self) {
		self.clear();
	}
}

impl<T: Serialize + Ord> Serialize for BTreeSet<T> {
	const SHAPE: Shape = Shape::Container;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_container(self, serializer);
	}
}

impl<T: Deserialize + Ord> Deserialize for BTreeSet<T> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		let mut set = BTreeSet::new();
		set.deserialize_data(deserializer);
		set
	}

	#[inline]
	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		let _ = Check::<T>::ASSERT_SERIALIZABLE;
		deserialize_inserting(self, deserializer);
	}
}

impl<T: Eq + Hash, H: BuildHasher> Container for HashSet<T, H> {
	type Element = T;

	const RESIZABLE: bool = false;
	const BATCH_INSERTABLE: bool = true;

	#[inline]
	fn element_count(&self) -> Option<usize> {
		Some(self.len())
	}

	#[inline]
	fn reset(&mut self) {
		self.clear();
	}

	#[inline]
	fn reserve_elements(&mut self, additional: usize) {
		self.reserve(additional);
	}
}

impl<T, H> Serialize for HashSet<T, H>
where
	T: Serialize + Eq + Hash,
	H: BuildHasher,
{
	const SHAPE: Shape = Shape::Container;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_container(self, serializer);
	}
}

impl<T, H> Deserialize for HashSet<T, H>
where
	T: Deserialize + Eq + Hash,
	H: BuildHasher + Default,
{
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		let mut set = HashSet::with_hasher(H::default());
		set.deserialize_data(deserializer);
		set
	}

	#[inline]
	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		let _ = Check::<T>::ASSERT_SERIALIZABLE;
		deserialize_inserting(self, deserializer);
	}
}

impl<T> Container for ForwardList<T> {
	type Element = T;

	const RESIZABLE: bool = false;
	const BATCH_INSERTABLE: bool = false;

	#[inline]
	fn element_count(&self) -> Option<usize> {
		None
	}

	#[inline]
	fn reset(&mut self) {
		self.clear();
	}
}

// No stored length, so count is backpatched
impl<T: Serialize> Serialize for ForwardList<T> {
	const SHAPE: Shape = Shape::Container;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_container(self, serializer);
	}
}

impl<T: Deserialize> Deserialize for ForwardList<T> {
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		let _ = Check::<T>::ASSERT_SERIALIZABLE;

		// List can only be built from the back, so collect elements first
		let len = deserializer.read_len();
		let mut values = Vec::new();
		deserialize_into_vec(&mut values, len, deserializer);
		values.into_iter().collect()
	}
}
