use proc_macro2::{TokenStream, TokenTree};
use quote::{quote, ToTokens};
use syn::{
	parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Field, GenericParam, Generics,
	Ident,
};

mod enums;
mod fields;
mod structs;

/// Derive `Serialize`.
///
/// * `#[ser_copy]` on a `Copy` type: copy it byte-for-byte. Every field must be
///   `ByteCopy`.
/// * `#[ser_deny]`: refuse to serialize the type. Beats `#[ser_copy]`.
/// * `#[ser_with(Proxy)]` on a field: serialize field with `Proxy`, which
///   implements `SerializeWith<FieldType>`.
#[proc_macro_derive(Serialize, attributes(ser_copy, ser_deny, ser_with))]
pub fn serialize(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	serialize_impl(input).into()
}

/// Derive `Deserialize`.
///
/// Accepts the same attributes as `#[derive(Serialize)]`.
#[proc_macro_derive(Deserialize, attributes(ser_copy, ser_deny, ser_with))]
pub fn deserialize(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	deserialize_impl(input).into()
}

/// How a derived type is serialized.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
	/// Field by field.
	Structural,
	/// Byte-for-byte (`#[ser_copy]`).
	Copy,
	/// Never (`#[ser_deny]`).
	Deny,
}

fn get_mode(attrs: &[Attribute]) -> Mode {
	let mut copy = false;
	let mut deny = false;
	for attr in attrs {
		if attr.path.is_ident("ser_deny") {
			deny = true;
		} else if attr.path.is_ident("ser_copy") {
			copy = true;
		}
	}

	// Blacklist beats whitelist
	if deny {
		Mode::Deny
	} else if copy {
		Mode::Copy
	} else {
		Mode::Structural
	}
}

/// Add `bound` to every type param.
/// For `#[ser_copy]`, also require every field type to be `ByteCopy`.
fn get_generics(input: &DeriveInput, mode: Mode, bound: TokenStream) -> Generics {
	let mut generics = input.generics.clone();
	for param in &mut generics.params {
		if let GenericParam::Type(type_param) = param {
			type_param.bounds.push(parse_quote!(#bound));
		}
	}

	if mode == Mode::Copy {
		let where_clause = generics.make_where_clause();
		for ty in get_fields(&input.data).into_iter().map(|field| &field.ty) {
			where_clause
				.predicates
				.push(parse_quote!(#ty: ::ser_flat::ByteCopy));
		}
	}

	generics
}

fn get_fields(data: &Data) -> Vec<&Field> {
	match data {
		Data::Struct(data) => data.fields.iter().collect(),
		Data::Enum(data) => data
			.variants
			.iter()
			.flat_map(|variant| variant.fields.iter())
			.collect(),
		Data::Union(_) => vec![],
	}
}

/// `SERIALIZABLE` const for a type serialized field by field.
///
/// Type is serializable if it's not zero-sized and every field type is.
/// Skips fields with `#[ser_with]`, which have no `Serialize` impl, and fields
/// whose type refers to the type itself (e.g. `Vec<Self>`), which would be a
/// cycle. A recursive field is serializable if the type is.
fn serializable_const(input: &DeriveInput) -> TokenStream {
	let checks = get_fields(&input.data)
		.into_iter()
		.filter(|field| !fields::has_with(field))
		.filter(|field| !mentions_ident(field.ty.to_token_stream(), &input.ident))
		.map(|field| {
			let ty = &field.ty;
			quote! { && <#ty as ::ser_flat::Serialize>::SERIALIZABLE }
		});

	quote! {
		const SERIALIZABLE: bool = !::ser_flat::classify::is_zero_sized::<Self>() #(#checks)*;
	}
}

fn mentions_ident(tokens: TokenStream, ident: &Ident) -> bool {
	tokens.into_iter().any(|tree| match tree {
		TokenTree::Ident(other) => other == *ident || other == "Self",
		TokenTree::Group(group) => mentions_ident(group.stream(), ident),
		_ => false,
	})
}

fn serialize_impl(input: DeriveInput) -> TokenStream {
	let mode = get_mode(&input.attrs);
	let generics = get_generics(&input, mode, quote!(::ser_flat::Serialize));
	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
	let ident = &input.ident;

	let (shape, structural_body) = match &input.data {
		Data::Struct(data) => (quote!(Struct), structs::serialize_body(data)),
		Data::Enum(data) => (quote!(Enum), enums::serialize_body(data)),
		Data::Union(_) => panic!("Deriving `Serialize` on unions is not supported"),
	};

	let (consts, body) = match mode {
		Mode::Structural => (serializable_const(&input), structural_body),
		Mode::Copy => (
			quote! {
				const TRIVIAL: ::core::option::Option<::ser_flat::Trivial<Self>> =
					::core::option::Option::Some(::ser_flat::Trivial::PROOF);
			},
			quote! {
				serializer.push_raw(::ser_flat::Trivial::<Self>::PROOF, self);
			},
		),
		Mode::Deny => (quote! { const BLACKLISTED: bool = true; }, quote! {}),
	};

	let byte_copy_impl = if mode == Mode::Copy {
		quote! {
			#[automatically_derived]
			unsafe impl #impl_generics ::ser_flat::ByteCopy for #ident #type_generics #where_clause {}
		}
	} else {
		quote! {}
	};

	quote! {
		#[automatically_derived]
		impl #impl_generics ::ser_flat::Serialize for #ident #type_generics #where_clause {
			const SHAPE: ::ser_flat::Shape = ::ser_flat::Shape::#shape;
			#consts

			#[allow(unused_variables)]
			#[inline]
			fn serialize_data<__S: ::ser_flat::Serializer>(&self, serializer: &mut __S) {
				#body
			}
		}

		#byte_copy_impl
	}
}

fn deserialize_impl(input: DeriveInput) -> TokenStream {
	let mode = get_mode(&input.attrs);
	let generics = get_generics(&input, mode, quote!(::ser_flat::Deserialize));
	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
	let ident = &input.ident;

	let (value_body, data_fn) = match mode {
		Mode::Structural => match &input.data {
			Data::Struct(data) => (
				structs::deserialize_value_body(data),
				structs::deserialize_data_fn(data),
			),
			Data::Enum(data) => (enums::deserialize_value_body(data, ident), quote! {}),
			Data::Union(_) => panic!("Deriving `Deserialize` on unions is not supported"),
		},
		Mode::Copy => (
			quote! { deserializer.read_raw(::ser_flat::Trivial::<Self>::PROOF) },
			quote! {},
		),
		Mode::Deny => (
			quote! { ::core::unreachable!("blacklisted type cannot be deserialized") },
			quote! {},
		),
	};

	quote! {
		#[automatically_derived]
		impl #impl_generics ::ser_flat::Deserialize for #ident #type_generics #where_clause {
			#[allow(unused_variables)]
			#[inline]
			fn deserialize_value<__U: ::ser_flat::Unit>(
				deserializer: &mut ::ser_flat::Deserializer<'_, __U>
			) -> Self {
				#value_body
			}

			#data_fn
		}
	}
}

/// Create ident `val_<suffix>`, used to bind fields in match arms.
///
/// Aliases avoid collisions with a field called `serializer`.
fn alias(suffix: &str, span: proc_macro2::Span) -> Ident {
	Ident::new(&format!("val_{}", suffix), span)
}
