use crate::{
	classify::{is_pair_shaped, Check},
	ByteCopy, Deserialize, Deserializer, Serialize, Serializer, Shape, Trivial, Unit,
};

// A pair is copied whole only if both halves are byte-copyable and it is laid
// out like a plain first/second record. Otherwise halves are written in order.
unsafe impl<A: ByteCopy, B: ByteCopy> ByteCopy for (A, B) {}

impl<A: Serialize, B: Serialize> Serialize for (A, B) {
	const SHAPE: Shape = Shape::Pair;
	const TRIVIAL: Option<Trivial<Self>> =
		if A::TRIVIAL.is_some() && B::TRIVIAL.is_some() && is_pair_shaped::<A, B>() {
			// SAFETY: Both halves are proven byte-copyable
			Some(unsafe { Trivial::assume() })
		} else {
			None
		};
	const SERIALIZABLE: bool = A::SERIALIZABLE && B::SERIALIZABLE;

	#[inline]
	fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
		let _ = Check::<A>::ASSERT_SERIALIZABLE;
		let _ = Check::<B>::ASSERT_SERIALIZABLE;

		match Self::TRIVIAL {
			Some(trivial) => serializer.push_raw(trivial, self),
			None => {
				self.0.serialize_data(serializer);
				self.1.serialize_data(serializer);
			}
		}
	}
}

impl<A: Deserialize, B: Deserialize> Deserialize for (A, B) {
	#[inline]
	fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
		match Self::TRIVIAL {
			Some(trivial) => deserializer.read_raw(trivial),
			None => {
				let first = A::deserialize_value(deserializer);
				let second = B::deserialize_value(deserializer);
				(first, second)
			}
		}
	}

	#[inline]
	fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
		match Self::TRIVIAL {
			Some(trivial) => *self = deserializer.read_raw(trivial),
			None => {
				self.0.deserialize_data(deserializer);
				self.1.deserialize_data(deserializer);
			}
		}
	}
}

macro_rules! impl_tuple {
	($($name:ident $index:tt),+) => {
		unsafe impl<$($name: ByteCopy),+> ByteCopy for ($($name,)+) {}

		impl<$($name: Serialize),+> Serialize for ($($name,)+) {
			const SHAPE: Shape = Shape::Tuple;
			const TRIVIAL: Option<Trivial<Self>> = if $($name::TRIVIAL.is_some())&&+ {
				// SAFETY: All components are proven byte-copyable
				Some(unsafe { Trivial::assume() })
			} else {
				None
			};
			const SERIALIZABLE: bool = $($name::SERIALIZABLE)&&+;

			#[inline]
			fn serialize_data<S: Serializer>(&self, serializer: &mut S) {
				$(let _ = Check::<$name>::ASSERT_SERIALIZABLE;)+

				match Self::TRIVIAL {
					Some(trivial) => serializer.push_raw(trivial, self),
					None => {
						$(self.$index.serialize_data(serializer);)+
					}
				}
			}
		}

		impl<$($name: Deserialize),+> Deserialize for ($($name,)+) {
			#[inline]
			fn deserialize_value<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Self {
				match Self::TRIVIAL {
					Some(trivial) => deserializer.read_raw(trivial),
					// Tuple expressions evaluate left to right
					None => ($($name::deserialize_value(deserializer),)+),
				}
			}

			#[inline]
			fn deserialize_data<U: Unit>(&mut self, deserializer: &mut Deserializer<'_, U>) {
				match Self::TRIVIAL {
					Some(trivial) => *self = deserializer.read_raw(trivial),
					None => {
						$(self.$index.deserialize_data(deserializer);)+
					}
				}
			}
		}
	};
}

impl_tuple!(A 0);
impl_tuple!(A 0, B 1, C 2);
impl_tuple!(A 0, B 1, C 2, D 3);
impl_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
