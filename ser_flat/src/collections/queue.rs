use std::collections::VecDeque;

/// First-in first-out queue.
///
/// Only the front element is accessible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Queue<T> {
	items: VecDeque<T>,
}

impl<T> Queue<T> {
	#[inline]
	pub fn new() -> Self {
		Self { items: VecDeque::new() }
	}

	/// Create queue from a deque. First element of `items` is the front.
	#[inline]
	pub fn from_deque(items: VecDeque<T>) -> Self {
		Self { items }
	}

	#[inline]
	pub fn push(&mut self, value: T) {
		self.items.push_back(value);
	}

	#[inline]
	pub fn pop(&mut self) -> Option<T> {
		self.items.pop_front()
	}

	#[inline]
	pub fn front(&self) -> Option<&T> {
		self.items.front()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl<T> FromIterator<T> for Queue<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::from_deque(iter.into_iter().collect())
	}
}
