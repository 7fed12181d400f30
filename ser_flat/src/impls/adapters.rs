use std::collections::{BinaryHeap, VecDeque};

use crate::{
	classify::Check,
	collections::{Queue, Stack},
	Adapter, Deserialize, Deserializer, Serialize, Serializer, Shape, Unit,
};

// Adapters are written as their underlying container. Elements are only
// reachable by draining, so a copy is drained and `self` is left untouched.

#[inline]
fn serialize_adapter<A, S>(adapter: &A, serializer: &mut S)
where
	A: Adapter,
	A::Container: Serialize,
	S: Serializer,
{
	let _ = Check::<A::Container>::ASSERT_SERIALIZABLE;
	adapter.to_container().serialize_data(serializer);
}

#[inline]
fn deserialize_adapter<A, U>(deserializer: &mut Deserializer<'_, U>) -> A
where
	A: Adapter,
	A::Container: Deserialize,
	U: Unit,
{
	A::from_container(<A::Container as Deserialize>::deserialize_value(deserializer))
}

impl<T: Clone> Adapter for Stack<T> {
	type Container = Vec<T>;

	fn to_container(&self) -> Vec<T> {
		let mut stack = self.clone();
		let mut items = Vec::with_capacity(stack.len());
		while let Some(value) = stack.pop() {
			items.push(value);
		}
		// Popped top first. Bottom goes first in output.
		items.reverse();
		items
	}

	#[inline]
	fn from_container(items: Vec<T>) -> Self {
		Stack::from_vec(items)
	}
}

impl<T: Serialize + Clone> Serialize for Stack<T> {
	const SHAPE: Shape = Shape::Adapter;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_adapter(self, serializer);
	}
}

impl<T: Deserialize + Clone> Deserialize for Stack<T> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		deserialize_adapter(deserializer)
	}
}

impl<T: Clone> Adapter for Queue<T> {
	type Container = VecDeque<T>;

	fn to_container(&self) -> VecDeque<T> {
		let mut queue = self.clone();
		let mut items = VecDeque::with_capacity(queue.len());
		while let Some(value) = queue.pop() {
			items.push_back(value);
		}
		items
	}

	#[inline]
	fn from_container(items: VecDeque<T>) -> Self {
		Queue::from_deque(items)
	}
}

impl<T: Serialize + Clone> Serialize for Queue<T> {
	const SHAPE: Shape = Shape::Adapter;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_adapter(self, serializer);
	}
}

impl<T: Deserialize + Clone> Deserialize for Queue<T> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		deserialize_adapter(deserializer)
	}
}

// Ordering comes from `T: Ord`, so heap can be rebuilt from its elements
// in any order
impl<T: Ord + Clone> Adapter for BinaryHeap<T> {
	type Container = Vec<T>;

	#[inline]
	fn to_container(&self) -> Vec<T> {
		self.clone().into_vec()
	}

	#[inline]
	fn from_container(items: Vec<T>) -> Self {
		BinaryHeap::from(items)
	}
}

impl<T: Serialize + Ord + Clone> Serialize for BinaryHeap<T> {
	const SHAPE: Shape = Shape::Adapter;
	const SERIALIZABLE: bool = T::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_adapter(self, serializer);
	}
}

impl<T: Deserialize + Ord + Clone> Deserialize for BinaryHeap<T> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		deserialize_adapter(deserializer)
	}
}
