mod adapters;
mod arrays;
#[cfg(feature = "num_bigint")]
mod bigint;
mod containers;
mod maps;
mod other;
mod primitives;
mod ptrs;
mod tuples;
