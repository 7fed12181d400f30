use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, Fields, Index};

use crate::fields::{deserialize_data_stmt, deserialize_value_expr, serialize_stmt};

/// Fields in declaration order.
pub fn serialize_body(data: &DataStruct) -> TokenStream {
	let stmts = match &data.fields {
		Fields::Named(fields) => fields
			.named
			.iter()
			.map(|field| {
				let name = field.ident.as_ref().expect("Missing field name");
				serialize_stmt(field, quote!(&self.#name))
			})
			.collect::<Vec<_>>(),
		Fields::Unnamed(fields) => fields
			.unnamed
			.iter()
			.enumerate()
			.map(|(index, field)| {
				let index = Index::from(index);
				serialize_stmt(field, quote!(&self.#index))
			})
			.collect(),
		Fields::Unit => vec![],
	};

	quote! { #(#stmts)* }
}

pub fn deserialize_value_body(data: &DataStruct) -> TokenStream {
	match &data.fields {
		Fields::Named(fields) => {
			// Struct expression fields are evaluated in the order written
			let inits = fields.named.iter().map(|field| {
				let name = field.ident.as_ref().expect("Missing field name");
				let value = deserialize_value_expr(field);
				quote! { #name: #value }
			});
			quote! { Self { #(#inits),* } }
		}
		Fields::Unnamed(fields) => {
			let values = fields.unnamed.iter().map(deserialize_value_expr);
			quote! { Self(#(#values),*) }
		}
		Fields::Unit => quote! { Self },
	}
}

/// `deserialize_data` which decodes each field in place.
pub fn deserialize_data_fn(data: &DataStruct) -> TokenStream {
	let stmts = match &data.fields {
		Fields::Named(fields) => fields
			.named
			.iter()
			.map(|field| {
				let name = field.ident.as_ref().expect("Missing field name");
				deserialize_data_stmt(field, quote!(&mut self.#name))
			})
			.collect::<Vec<_>>(),
		Fields::Unnamed(fields) => fields
			.unnamed
			.iter()
			.enumerate()
			.map(|(index, field)| {
				let index = Index::from(index);
				deserialize_data_stmt(field, quote!(&mut self.#index))
			})
			.collect(),
		// Nothing to decode
		Fields::Unit => return quote! {},
	};

	quote! {
		#[inline]
		fn deserialize_data<__U: ::ser_flat::Unit>(
			&mut self,
			deserializer: &mut ::ser_flat::Deserializer<'_, __U>
		) {
			#(#stmts)*
		}
	}
}
