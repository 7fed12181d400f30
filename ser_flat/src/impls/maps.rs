use std::{
	collections::{BTreeMap, HashMap},
	hash::{BuildHasher, Hash},
};

use super::containers::deserialize_inserting;
use crate::{
	classify::Check, Container, Deserialize, Deserializer, Serialize, Serializer, Shape, Unit,
};

/// Write `[count][entries]`. Each entry is written exactly as the pair `(K, V)`
/// would be, so can be read back as one.
fn serialize_entries<'a, K, V, S, I>(len: usize, entries: I, serializer: &mut S)
where
	K: Serialize + 'a,
	V: Serialize + 'a,
	S: Serializer,
	I: Iterator<Item = (&'a K, &'a V)>,
{
	let _ = Check::<(K, V)>::ASSERT_SERIALIZABLE;

	serializer.push_len(len);
	match <(K, V)>::TRIVIAL {
		Some(trivial) if !S::WRITES => serializer.advance(trivial, len),
		Some(trivial) => {
			for (key, value) in entries {
				serializer.push_raw(trivial, &trivial.join(key, value));
			}
		}
		None => {
			for (key, value) in entries {
				key.serialize_data(serializer);
				value.serialize_data(serializer);
			}
		}
	}
}

impl<K: Ord, V> Container for BTreeMap<K, V> {
	type Element = (K, V);

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

impl<K: Serialize, V: Serialize> Serialize for BTreeMap<K, V> {
	const SHAPE: Shape = Shape::Container;
	const SERIALIZABLE: bool = K::SERIALIZABLE && V::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_entries(self.len(), self.iter(), serializer);
	}
}

impl<K: Deserialize + Ord, V: Deserialize> Deserialize for BTreeMap<K, V> {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		let mut map = BTreeMap::new();
		map.deserialize_data(deserializer);
		map
	}

	#[inline]
	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		deserialize_inserting(self, deserializer);
	}
}

impl<K: Eq + Hash, V, H: BuildHasher> Container for HashMap<K, V, H> {
	type Element = (K, V);

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

impl<K: Serialize, V: Serialize, H> Serialize for HashMap<K, V, H> {
	const SHAPE: Shape = Shape::Container;
	const SERIALIZABLE: bool = K::SERIALIZABLE && V::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		serialize_entries(self.len(), self.iter(), serializer);
	}
}

impl<K, V, H> Deserialize for HashMap<K, V, H>
where
	K: Deserialize + Eq + Hash,
	V: Deserialize,
	H: BuildHasher + Default,
{
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		let mut map = HashMap::with_hasher(H::default());
		map.deserialize_data(deserializer);
		map
	}

	#[inline]
	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		deserialize_inserting(self, deserializer);
	}
}
