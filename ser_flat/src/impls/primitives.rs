use std::num;

use crate::{impl_byte_copy, ByteCopy};

macro_rules! impl_primitive {
	($($ty:ty),* $(,)?) => {
		$(
			unsafe impl ByteCopy for $ty {}
			impl_byte_copy!($ty);
		)*
	};
}

impl_primitive!(u8, u16, u32, u64, u128, usize);
impl_primitive!(i8, i16, i32, i64, i128, isize);
impl_primitive!(f32, f64, bool, char);

impl_primitive!(
	num::NonZeroU8,
	num::NonZeroU16,
	num::NonZeroU32,
	num::NonZeroU64,
	num::NonZeroU128,
	num::NonZeroUsize,
);

impl_primitive!(
	num::NonZeroI8,
	num::NonZeroI16,
	num::NonZeroI32,
	num::NonZeroI64,
	num::NonZeroI128,
	num::NonZeroIsize,
);
