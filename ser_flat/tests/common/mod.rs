#![allow(dead_code)]

mod checkpoint;
pub use checkpoint::{generate_checkpoint, Checkpoint};

pub enum Test {
	Primitives,
	NonZeroNumbers,
	Arrays,
	ArraysOfStrings,
	Tuples,
	EnumFieldless,
	EnumWithFields,
	BoxedPrimitives,
	BoxedStructs,
	CopyStructs,
	VecOfPrimitives,
	VecOfVecs,
	VecsWithZeroLenExcessCapacity,
	VecsWithExcessCapacity,
	Strings,
	StringsWithExcessCapacity,
	Options,
	Sequences,
	SetsAndMaps,
	Adapters,
	ForwardLists,
	Misc,
	GenericTypes,
	SerWith,
	BigInts,
	/// Carries expected size in bytes, calculated by the fixture itself
	Checkpoint(usize),
}

macro_rules! tests {
	($test_round_trip:ident) => {
		#[test]
		fn primitives() {
			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				u8: u8,
				u16: u16,
				u32: u32,
				u64: u64,
				u128: u128,
				i8: i8,
				i16: i16,
				i32: i32,
				i64: i64,
				i128: i128,
				usize: usize,
				isize: isize,
				f32: f32,
				f64: f64,
				bool: bool,
				char: char,
			}

			let input = Foo {
				u8: 0x01,
				u16: 0x0203,
				u32: 0x04050607,
				u64: 0x08090a0b0c0d0e0f,
				u128: 0x101112131415161718191a1b1c1d1e1f,
				i8: 0x01,
				i16: 0x0203,
				i32: 0x04050607,
				i64: 0x08090a0b0c0d0e0f,
				i128: 0x101112131415161718191a1b1c1d1e1f,
				usize: usize::MAX,
				isize: isize::MAX / 2,
				f32: f32::MAX,
				f64: f64::MAX / 2f64,
				bool: true,
				char: 'c',
			};
			$test_round_trip(&input, Test::Primitives, 0);
		}

		#[test]
		fn non_zero_numbers() {
			use std::num;

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			#[allow(non_snake_case)]
			struct Foo {
				NonZeroU8: num::NonZeroU8,
				NonZeroU16: num::NonZeroU16,
				NonZeroU32: num::NonZeroU32,
				NonZeroU64: num::NonZeroU64,
				NonZeroU128: num::NonZeroU128,
				NonZeroUsize: num::NonZeroUsize,
				NonZeroI8: num::NonZeroI8,
				NonZeroI16: num::NonZeroI16,
				NonZeroI32: num::NonZeroI32,
				NonZeroI64: num::NonZeroI64,
				NonZeroI128: num::NonZeroI128,
				NonZeroIsize: num::NonZeroIsize,
			}

			let input = Foo {
				NonZeroU8: num::NonZeroU8::new(0x01).unwrap(),
				NonZeroU16: num::NonZeroU16::new(0x0203).unwrap(),
				NonZeroU32: num::NonZeroU32::new(0x04050607).unwrap(),
				NonZeroU64: num::NonZeroU64::new(0x08090a0b0c0d0e0f).unwrap(),
				NonZeroU128: num::NonZeroU128::new(0x101112131415161718191a1b1c1d1e1f).unwrap(),
				NonZeroI8: num::NonZeroI8::new(0x01).unwrap(),
				NonZeroI16: num::NonZeroI16::new(0x0203).unwrap(),
				NonZeroI32: num::NonZeroI32::new(0x04050607).unwrap(),
				NonZeroI64: num::NonZeroI64::new(0x08090a0b0c0d0e0f).unwrap(),
				NonZeroI128: num::NonZeroI128::new(0x101112131415161718191a1b1c1d1e1f).unwrap(),
				NonZeroUsize: num::NonZeroUsize::new(usize::MAX).unwrap(),
				NonZeroIsize: num::NonZeroIsize::new(isize::MAX / 2).unwrap(),
			};
			$test_round_trip(&input, Test::NonZeroNumbers, 0);
		}

		#[test]
		fn arrays() {
			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				single: [u8; 1],
				double: [u16; 2],
				triple: [u32; 3],
			}

			let input = Foo {
				single: [0x01],
				double: [0x0203, 0x0405],
				triple: [0x06070809, 0x0a0b0c0d, 0x0e0f1011],
			};
			$test_round_trip(&input, Test::Arrays, 0);
		}

		#[test]
		fn arrays_of_strings() {
			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				strings: [String; 2],
				boxes: [Box<u16>; 2],
			}

			let input = Foo {
				strings: ["ab".to_string(), "cde".to_string()],
				boxes: [Box::new(0x0102), Box::new(0x0304)],
			};
			$test_round_trip(&input, Test::ArraysOfStrings, 0);
		}

		#[test]
		fn tuples() {
			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				pair: (u8, u32),
				triple: (u8, u16, u32),
				mixed: (u8, String),
				boxes: (Box<u8>, Box<u16>),
			}

			let input = Foo {
				pair: (0x01, 0x02030405),
				triple: (0x06, 0x0708, 0x090a0b0c),
				mixed: (0x0d, "abc".to_string()),
				boxes: (Box::new(0x0e), Box::new(0x0f10)),
			};
			$test_round_trip(&input, Test::Tuples, 0);
		}

		#[test]
		fn enum_fieldless() {
			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			enum Foo {
				One,
				Two,
				Three,
			}

			$test_round_trip(&Foo::One, Test::EnumFieldless, 0);
			$test_round_trip(&Foo::Two, Test::EnumFieldless, 1);
			$test_round_trip(&Foo::Three, Test::EnumFieldless, 2);
		}

		#[test]
		fn enum_with_fields() {
			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			enum Foo {
				Bar(Bar),
				Qux(Qux),
			}

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Bar {
				small: u8,
				big: u32,
			}

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			enum Qux {
				Small(i8),
				Big { value: i16 },
			}

			$test_round_trip(
				&Foo::Bar(Bar {
					small: 0x01,
					big: 0x0203,
				}),
				Test::EnumWithFields,
				0,
			);
			$test_round_trip(&Foo::Qux(Qux::Small(0x04)), Test::EnumWithFields, 1);
			$test_round_trip(&Foo::Qux(Qux::Big { value: 0x0506 }), Test::EnumWithFields, 2);
		}

		#[test]
		fn boxed_primitives() {
			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				u8: Box<u8>,
				u16: Box<u16>,
				u32: Box<u32>,
				u64: Box<u64>,
				u128: Box<u128>,
				i8: Box<i8>,
				i16: Box<i16>,
				i32: Box<i32>,
				i64: Box<i64>,
				i128: Box<i128>,
				usize: Box<usize>,
				isize: Box<isize>,
				f32: Box<f32>,
				f64: Box<f64>,
				bool: Box<bool>,
				char: Box<char>,
			}

			let input = Foo {
				u8: Box::new(0x01),
				u16: Box::new(0x0203),
				u32: Box::new(0x04050607),
				u64: Box::new(0x08090a0b0c0d0e0f),
				u128: Box::new(0x101112131415161718191a1b1c1d1e1f),
				i8: Box::new(0x01),
				i16: Box::new(0x0203),
				i32: Box::new(0x04050607),
				i64: Box::new(0x08090a0b0c0d0e0f),
				i128: Box::new(0x101112131415161718191a1b1c1d1e1f),
				usize: Box::new(usize::MAX),
				isize: Box::new(isize::MAX / 2),
				f32: Box::new(f32::MAX),
				f64: Box::new(f64::MAX / 2f64),
				bool: Box::new(true),
				char: Box::new('c'),
			};
			$test_round_trip(&input, Test::BoxedPrimitives, 0);
		}

		#[test]
		fn boxed_structs() {
			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				bar: Box<Bar>,
				bar2: Box<Bar>,
			}

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Bar {
				small: u8,
				big: Box<u32>,
			}

			let input = Foo {
				bar: Box::new(Bar {
					small: 0x01,
					big: Box::new(0x02030405),
				}),
				bar2: Box::new(Bar {
					small: 0x06,
					big: Box::new(0x0708090a),
				}),
			};
			$test_round_trip(&input, Test::BoxedStructs, 0);
		}

		#[test]
		fn copy_structs() {
			#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
			#[ser_copy]
			struct Point {
				x: f32,
				y: f32,
			}

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				origin: Point,
				path: Vec<Point>,
			}

			let input = Foo {
				origin: Point { x: 0.0, y: -1.5 },
				path: vec![
					Point { x: 1.0, y: 2.0 },
					Point { x: 3.0, y: 4.0 },
					Point { x: 5.0, y: 6.0 },
				],
			};
			$test_round_trip(&input, Test::CopyStructs, 0);
		}

		#[test]
		fn vec_of_primitives() {
			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				small: Vec<u8>,
				middle: Vec<u16>,
				big: Vec<u32>,
			}

			$test_round_trip(
				&Foo {
					small: Vec::new(),
					middle: Vec::new(),
					big: Vec::new(),
				},
				Test::VecOfPrimitives,
				0,
			);

			$test_round_trip(
				&Foo {
					small: vec![0x01],
					middle: vec![0x0203],
					big: vec![0x04050607],
				},
				Test::VecOfPrimitives,
				1,
			);

			$test_round_trip(
				&Foo {
					small: vec![0x01, 0x02, 0x03],
					middle: vec![0x0405, 0x0607, 0x0809, 0x0a0b, 0x0c0d],
					big: vec![0x0e0f1012, 0x13141516, 0x1718191a],
				},
				Test::VecOfPrimitives,
				2,
			);
		}

		#[test]
		fn vec_of_vecs() {
			let input: Vec<Vec<u8>> = vec![
				vec![1, 2, 3],
				vec![4, 5, 6, 7, 8, 9],
				vec![10],
				vec![],
				vec![11, 12],
				vec![13, 14, 15, 16],
				vec![],
			];
			$test_round_trip(&input, Test::VecOfVecs, 0);
		}

		#[test]
		fn vecs_with_zero_len_excess_capacity() {
			let mut input = Vec::<u32>::new();
			input.push(1);
			input.pop();
			assert!(input.capacity() > 0);
			$test_round_trip(&input, Test::VecsWithZeroLenExcessCapacity, 0);
		}

		#[test]
		fn vecs_with_excess_capacity() {
			let mut input = Vec::<u8>::with_capacity(5);
			input.push(1);
			assert!(input.capacity() > input.len());
			$test_round_trip(&input, Test::VecsWithExcessCapacity, 0);
		}

		#[test]
		fn strings() {
			$test_round_trip(&"abc".to_string(), Test::Strings, 0);
			$test_round_trip(&"d".to_string(), Test::Strings, 1);
			$test_round_trip(&"efghijkl".to_string(), Test::Strings, 2);
			$test_round_trip(&"MNOPQRSTIVWXYZ".to_string(), Test::Strings, 3);
		}

		#[test]
		fn strings_with_excess_capacity() {
			let mut input = String::with_capacity(5);
			input.push('x');
			assert!(input.capacity() > input.len());
			$test_round_trip(&input, Test::StringsWithExcessCapacity, 0);
		}

		#[test]
		fn options() {
			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				bar: Option<Bar>,
				boxed: Option<Box<Bar>>,
				vec: Option<Vec<Bar>>,
				string: Option<String>,
			}

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Bar {
				small: u8,
				big: u32,
			}

			$test_round_trip(
				&Foo {
					bar: None,
					boxed: None,
					vec: None,
					string: None,
				},
				Test::Options,
				0,
			);

			$test_round_trip(
				&Foo {
					bar: Some(Bar { small: 1, big: 2 }),
					boxed: None,
					vec: None,
					string: Some(String::new()),
				},
				Test::Options,
				1,
			);

			$test_round_trip(
				&Foo {
					bar: None,
					boxed: Some(Box::new(Bar { small: 3, big: 4 })),
					vec: Some(vec![
						Bar { small: 5, big: 6 },
						Bar { small: 7, big: 8 },
						Bar { small: 9, big: 10 },
					]),
					string: None,
				},
				Test::Options,
				2,
			);

			$test_round_trip(
				&Foo {
					bar: Some(Bar { small: 11, big: 12 }),
					boxed: Some(Box::new(Bar { small: 13, big: 14 })),
					vec: Some(vec![Bar { small: 15, big: 16 }]),
					string: Some("def".to_string()),
				},
				Test::Options,
				3,
			);
		}

		#[test]
		fn sequences() {
			use std::collections::{LinkedList, VecDeque};

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				deque: VecDeque<u16>,
				list: LinkedList<String>,
			}

			// Pushing to front of a fresh deque wraps it around the end of its buffer
			let mut deque = VecDeque::with_capacity(4);
			deque.push_back(2);
			deque.push_back(3);
			deque.push_front(1);
			deque.push_back(4);

			let input = Foo {
				deque,
				list: ["a", "bc"].iter().map(|s| s.to_string()).collect(),
			};
			$test_round_trip(&input, Test::Sequences, 0);
		}

		#[test]
		fn sets_and_maps() {
			use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				btree_set: BTreeSet<u32>,
				hash_set: HashSet<u64>,
				btree_map: BTreeMap<i32, String>,
				hash_map: HashMap<u16, u16>,
			}

			let input = Foo {
				btree_set: [3, 1, 2].into_iter().collect(),
				hash_set: [7, 9].into_iter().collect(),
				btree_map: [(5, "12345".to_string()), (9, "123456789".to_string())]
					.into_iter()
					.collect(),
				hash_map: [(1, 2), (3, 4)].into_iter().collect(),
			};
			$test_round_trip(&input, Test::SetsAndMaps, 0);
		}

		#[test]
		fn adapters() {
			use ser_flat::collections::{Queue, Stack};

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				stack: Stack<u32>,
				queue: Queue<String>,
			}

			let mut stack = Stack::new();
			stack.push(1);
			stack.push(2);
			stack.push(3);

			let mut queue = Queue::new();
			queue.push("x".to_string());
			queue.push("yz".to_string());

			let input = Foo { stack, queue };
			$test_round_trip(&input, Test::Adapters, 0);
		}

		#[test]
		fn forward_lists() {
			use ser_flat::collections::ForwardList;

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				numbers: ForwardList<u32>,
				words: ForwardList<String>,
			}

			let input = Foo {
				numbers: [1, 2, 3].into_iter().collect(),
				words: ["a".to_string()].into_iter().collect(),
			};
			$test_round_trip(&input, Test::ForwardLists, 0);
		}

		#[test]
		fn misc() {
			use std::{num::Wrapping, ops::Range, time::Duration};

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				range: Range<u32>,
				duration: Duration,
				wrapping: Wrapping<u16>,
				boxed_str: Box<str>,
				boxed_slice: Box<[u16]>,
			}

			let input = Foo {
				range: 3..7,
				duration: Duration::new(5, 30),
				wrapping: Wrapping(0x0102),
				boxed_str: "hi".into(),
				boxed_slice: vec![1, 2].into_boxed_slice(),
			};
			$test_round_trip(&input, Test::Misc, 0);
		}

		#[test]
		fn generic_types() {
			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Pair<T> {
				left: T,
				right: T,
			}

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			enum Either<A, B> {
				Left(A),
				Right(B),
			}

			$test_round_trip(
				&Pair {
					left: "l".to_string(),
					right: "rr".to_string(),
				},
				Test::GenericTypes,
				0,
			);
			$test_round_trip(
				&Either::<u8, Vec<u8>>::Right(vec![1, 2]),
				Test::GenericTypes,
				1,
			);
		}

		#[test]
		fn ser_with() {
			use ser_flat::{DeserializeWith, Deserializer, SerializeWith, Serializer, Trivial, Unit};

			// Foreign type with no `Serialize` impl
			#[derive(Debug, PartialEq)]
			struct Celsius(f32);

			struct CelsiusBits;

			impl SerializeWith<Celsius> for CelsiusBits {
				fn serialize_data_with<S: Serializer>(value: &Celsius, serializer: &mut S) {
					serializer.push_raw(Trivial::new(), &value.0.to_bits());
				}
			}

			impl DeserializeWith<Celsius> for CelsiusBits {
				fn deserialize_value_with<U: Unit>(deserializer: &mut Deserializer<'_, U>) -> Celsius {
					Celsius(f32::from_bits(deserializer.read_raw(Trivial::<u32>::new())))
				}
			}

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Reading {
				id: u16,
				#[ser_with(CelsiusBits)]
				temperature: Celsius,
			}

			let input = Reading {
				id: 7,
				temperature: Celsius(21.5),
			};
			$test_round_trip(&input, Test::SerWith, 0);
		}

		#[test]
		fn big_ints() {
			use num_bigint::{BigInt, BigUint};

			#[derive(Serialize, Deserialize, Debug, PartialEq)]
			struct Foo {
				unsigned: BigUint,
				signed: BigInt,
			}

			let input = Foo {
				unsigned: BigUint::from(0x1234_5678_9abc_def0u64),
				signed: -BigInt::from(0x1234_5678_9abc_def0u64),
			};
			$test_round_trip(&input, Test::BigInts, 0);
		}

		#[test]
		fn checkpoint() {
			let input = generate_checkpoint();
			let expected_size = input.expected_size();
			$test_round_trip(&input, Test::Checkpoint(expected_size), 0);
		}
	};
}
pub(crate) use tests;
