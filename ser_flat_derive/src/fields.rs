use proc_macro2::TokenStream;
use quote::quote_spanned;
use syn::{spanned::Spanned, Field, Meta, MetaList, NestedMeta, Path};

/// Statement serializing field, given an expression for a reference to it.
pub fn serialize_stmt(field: &Field, field_ref: TokenStream) -> TokenStream {
	let ty = &field.ty;
	match get_with(field) {
		Some(with) => quote_spanned! {field.span()=>
			<#with as ::ser_flat::SerializeWith<#ty>>::serialize_data_with(#field_ref, serializer);
		},
		None => quote_spanned! {field.span()=>
			<#ty as ::ser_flat::Serialize>::serialize_data(#field_ref, serializer);
		},
	}
}

/// Expression deserializing a new value for field.
pub fn deserialize_value_expr(field: &Field) -> TokenStream {
	let ty = &field.ty;
	match get_with(field) {
		Some(with) => quote_spanned! {field.span()=>
			<#with as ::ser_flat::DeserializeWith<#ty>>::deserialize_value_with(deserializer)
		},
		None => quote_spanned! {field.span()=>
			<#ty as ::ser_flat::Deserialize>::deserialize_value(deserializer)
		},
	}
}

/// Statement deserializing into field, given an expression for a mutable
/// reference to it.
pub fn deserialize_data_stmt(field: &Field, field_ref: TokenStream) -> TokenStream {
	let ty = &field.ty;
	match get_with(field) {
		Some(with) => quote_spanned! {field.span()=>
			<#with as ::ser_flat::DeserializeWith<#ty>>::deserialize_data_with(#field_ref, deserializer);
		},
		None => quote_spanned! {field.span()=>
			<#ty as ::ser_flat::Deserialize>::deserialize_data(#field_ref, deserializer);
		},
	}
}

pub fn has_with(field: &Field) -> bool {
	field.attrs.iter().any(|attr| attr.path.is_ident("ser_with"))
}

fn get_with(field: &Field) -> Option<Path> {
	let attrs = field
		.attrs
		.iter()
		.filter(|attr| attr.path.is_ident("ser_with"))
		.map(|attr| attr.parse_meta().expect("Malformed `ser_with` attr"))
		.collect::<Vec<_>>();

	let mut attrs = attrs.into_iter();
	let attr = attrs.next()?;
	if attrs.next().is_some() {
		panic!("Cannot have more than 1 `#[ser_with]` attribute on a field");
	}

	if let Meta::List(MetaList { nested, .. }) = attr {
		let mut parts = nested.into_iter();
		if let (Some(NestedMeta::Meta(Meta::Path(with))), None) = (parts.next(), parts.next()) {
			return Some(with);
		}
	}
	panic!("`#[ser_with]` needs a path e.g. `#[ser_with(ForeignTypeProxy)]`");
}
