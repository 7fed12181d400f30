// Randomly generated model checkpoint, shaped like real training state:
// named tensors, scalar metrics, optimizer state and optional snapshots.

use std::{
	collections::{BTreeMap, HashSet, VecDeque},
	mem, ops,
};

use rand::Rng;
use rand_pcg::Lcg64Xsh32;
use ser_flat::{Deserialize, Serialize};

const USIZE: usize = mem::size_of::<usize>();

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum DType {
	F32,
	F16,
	BF16,
	I8,
}

impl Generate for DType {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		match rng.gen_range(0..4) {
			0 => DType::F32,
			1 => DType::F16,
			2 => DType::BF16,
			3 => DType::I8,
			_ => unreachable!(),
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[ser_copy]
pub struct TensorShape {
	pub rows: u32,
	pub cols: u32,
}

impl Generate for TensorShape {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Self {
			rows: rng.gen_range(1..8),
			cols: rng.gen_range(1..8),
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tensor {
	pub name: String,
	pub dtype: DType,
	pub shape: TensorShape,
	pub data: Vec<f32>,
}

impl Tensor {
	fn expected_size(&self) -> usize {
		(USIZE + self.name.len())
			+ mem::size_of::<u32>()
			+ mem::size_of::<TensorShape>()
			+ (USIZE + self.data.len() * mem::size_of::<f32>())
	}
}

impl Generate for Tensor {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const LAYERS: [&str; 6] = [
			"embed",
			"attn.query",
			"attn.key",
			"attn.value",
			"mlp.up",
			"mlp.down",
		];
		let shape = TensorShape::generate(rng);
		let len = (shape.rows * shape.cols) as usize;
		Self {
			name: LAYERS[rng.gen_range(0..LAYERS.len())].to_string(),
			dtype: DType::generate(rng),
			shape,
			data: (0..len).map(|_| rng.gen()).collect(),
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Optimizer {
	pub step: u64,
	pub learning_rate: f64,
	pub momentum: Option<Vec<f32>>,
}

impl Optimizer {
	fn expected_size(&self) -> usize {
		let momentum = match &self.momentum {
			Some(momentum) => USIZE + momentum.len() * mem::size_of::<f32>(),
			None => 0,
		};
		mem::size_of::<u64>() + mem::size_of::<f64>() + 1 + momentum
	}
}

impl Generate for Optimizer {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Self {
			step: rng.gen(),
			learning_rate: rng.gen(),
			momentum: <Option<Vec<f32>> as Generate>::generate(rng),
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Checkpoint {
	pub epoch: u32,
	pub tensors: Vec<Tensor>,
	pub metrics: BTreeMap<String, f64>,
	pub tags: HashSet<String>,
	pub optimizer: Optimizer,
	pub history: VecDeque<(u32, f32)>,
	pub best: Option<Box<Tensor>>,
	pub seeds: [u64; 4],
}

impl Checkpoint {
	/// Size of serialized checkpoint in bytes, calculated from its contents.
	pub fn expected_size(&self) -> usize {
		let tensors: usize = self.tensors.iter().map(Tensor::expected_size).sum();
		let metrics: usize = self
			.metrics
			.keys()
			.map(|key| USIZE + key.len() + mem::size_of::<f64>())
			.sum();
		let tags: usize = self.tags.iter().map(|tag| USIZE + tag.len()).sum();

		mem::size_of::<u32>()
			+ (USIZE + tensors)
			+ (USIZE + metrics)
			+ (USIZE + tags)
			+ self.optimizer.expected_size()
			+ (USIZE + self.history.len() * mem::size_of::<(u32, f32)>())
			+ 1 + self.best.as_ref().map_or(0, |best| best.expected_size())
			+ mem::size_of::<[u64; 4]>()
	}
}

impl Generate for Checkpoint {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const METRICS: [&str; 5] = ["loss", "accuracy", "perplexity", "grad_norm", "lr"];
		const TAGS: [&str; 4] = ["baseline", "warmup", "fp16", "distributed"];
		let mut metrics = BTreeMap::new();
		for name in METRICS {
			if rng.gen_bool(0.7) {
				metrics.insert(name.to_string(), rng.gen());
			}
		}

		Self {
			epoch: rng.gen(),
			tensors: generate_vec(rng, 1..20),
			metrics,
			tags: TAGS
				.iter()
				.filter(|_| rng.gen_bool(0.5))
				.map(|tag| tag.to_string())
				.collect(),
			optimizer: Optimizer::generate(rng),
			history: generate_vec::<_, (u32, f32)>(rng, 0..50).into(),
			best: <Option<Tensor> as Generate>::generate(rng).map(Box::new),
			seeds: Generate::generate(rng),
		}
	}
}

pub trait Generate {
	fn generate<R: Rng>(rng: &mut R) -> Self;
}

macro_rules! impl_generate {
	($ty:ident) => {
		impl Generate for $ty {
			fn generate<R: Rng>(rng: &mut R) -> Self {
				rng.gen()
			}
		}
	};
}

impl_generate!(u32);
impl_generate!(u64);
impl_generate!(f32);
impl_generate!(f64);

macro_rules! impl_tuple {
	() => {};
	($first:ident, $($rest:ident,)*) => {
		impl<$first: Generate, $($rest: Generate,)*> Generate for ($first, $($rest,)*) {
			fn generate<R: Rng>(rng: &mut R) -> Self {
				($first::generate(rng), $($rest::generate(rng),)*)
			}
		}

		impl_tuple!($($rest,)*);
	};
}

impl_tuple!(T0, T1, T2, T3,);

impl<T: Generate, const N: usize> Generate for [T; N] {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		std::array::from_fn(|_| T::generate(rng))
	}
}

impl<T: Generate> Generate for Option<T> {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		if rng.gen_bool(0.5) {
			Some(T::generate(rng))
		} else {
			None
		}
	}
}

impl<T: Generate> Generate for Vec<T> {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		generate_vec(rng, 0..64)
	}
}

fn generate_vec<R: Rng, T: Generate>(rng: &mut R, range: ops::Range<usize>) -> Vec<T> {
	let len = rng.gen_range(range);
	let mut result = Vec::with_capacity(len);
	for _ in 0..len {
		result.push(T::generate(rng));
	}
	result
}

pub fn generate_checkpoint() -> Checkpoint {
	const STATE: u64 = 2718281828;
	const STREAM: u64 = 4590452353;
	let mut rng = Lcg64Xsh32::new(STATE, STREAM);
	Checkpoint::generate(&mut rng)
}
