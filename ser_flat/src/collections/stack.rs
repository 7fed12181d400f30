/// Last-in first-out stack.
///
/// Only the top element is accessible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack<T> {
	items: Vec<T>,
}

impl<T> Stack<T> {
	#[inline]
	pub fn new() -> Self {
		Self { items: Vec::new() }
	}

	/// Create stack from a vec. Last element of `items` is the top.
	#[inline]
	pub fn from_vec(items: Vec<T>) -> Self {
		Self { items }
	}

	#[inline]
	pub fn push(&mut self, value: T) {
		self.items.push(value);
	}

	#[inline]
	pub fn pop(&mut self) -> Option<T> {
		self.items.pop()
	}

	#[inline]
	pub fn top(&self) -> Option<&T> {
		self.items.last()
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

impl<T> FromIterator<T> for Stack<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::from_vec(iter.into_iter().collect())
	}
}
