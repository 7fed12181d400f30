use std::fmt;

/// Singly linked list.
///
/// Does not store its length, so counting elements means walking the list.
pub struct ForwardList<T> {
	head: Option<Box<Node<T>>>,
}

struct Node<T> {
	value: T,
	next: Option<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
	#[inline]
	pub fn new() -> Self {
		Self { head: None }
	}

	#[inline]
	pub fn push_front(&mut self, value: T) {
		let next = self.head.take();
		self.head = Some(Box::new(Node { value, next }));
	}

	#[inline]
	pub fn pop_front(&mut self) -> Option<T> {
		let Node { value, next } = *self.head.take()?;
		self.head = next;
		Some(value)
	}

	#[inline]
	pub fn front(&self) -> Option<&T> {
		self.head.as_ref().map(|node| &node.value)
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.head.is_none()
	}

	pub fn clear(&mut self) {
		while self.pop_front().is_some() {}
	}

	#[inline]
	pub fn iter(&self) -> Iter<'_, T> {
		Iter { next: self.head.as_deref() }
	}
}

impl<T> Default for ForwardList<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

// Unlink iteratively. Default drop would recurse once per node.
impl<T> Drop for ForwardList<T> {
	fn drop(&mut self) {
		let mut next = self.head.take();
		while let Some(mut node) = next {
			next = node.next.take();
		}
	}
}

impl<T> FromIterator<T> for ForwardList<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let values: Vec<T> = iter.into_iter().collect();
		let mut list = Self::new();
		for value in values.into_iter().rev() {
			list.push_front(value);
		}
		list
	}
}

impl<T: Clone> Clone for ForwardList<T> {
	fn clone(&self) -> Self {
		self.iter().cloned().collect()
	}
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
	fn eq(&self, other: &Self) -> bool {
		self.iter().eq(other.iter())
	}
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	#[inline]
	fn into_iter(self) -> Iter<'a, T> {
		self.iter()
	}
}

/// Iterator over a [`ForwardList`].
pub struct Iter<'a, T> {
	next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		let node = self.next?;
		self.next = node.next.as_deref();
		Some(&node.value)
	}
}
