use proc_macro2::{Literal, TokenStream};
use quote::{quote, quote_spanned};
use syn::{DataEnum, Fields, Ident};

use crate::{
	alias,
	fields::{deserialize_value_expr, serialize_stmt},
};

/// Variant index as `u32`, then fields of the variant.
pub fn serialize_body(data: &DataEnum) -> TokenStream {
	if data.variants.is_empty() {
		return quote! { match *self {} };
	}

	let arms = data.variants.iter().enumerate().map(|(index, variant)| {
		let ident = &variant.ident;
		let index = Literal::u32_suffixed(index as u32);
		let push_index = quote! { serializer.push_variant(#index); };

		match &variant.fields {
			Fields::Unit => quote_spanned! {ident.span()=>
				Self::#ident => { #push_index }
			},
			Fields::Unnamed(fields) => {
				let aliases = (0..fields.unnamed.len())
					.map(|index| alias(&index.to_string(), ident.span()))
					.collect::<Vec<_>>();
				let stmts = fields
					.unnamed
					.iter()
					.zip(&aliases)
					.map(|(field, alias)| serialize_stmt(field, quote!(#alias)));
				quote_spanned! {ident.span()=>
					Self::#ident(#(#aliases),*) => {
						#push_index
						#(#stmts)*
					}
				}
			}
			Fields::Named(fields) => {
				let names = fields
					.named
					.iter()
					.map(|field| field.ident.clone().expect("Missing field name"))
					.collect::<Vec<_>>();
				// `Self::Foo { x: val_x } =>`, not `Self::Foo { x } =>`
				let aliases = names
					.iter()
					.map(|name| alias(&name.to_string(), name.span()))
					.collect::<Vec<_>>();
				let stmts = fields
					.named
					.iter()
					.zip(&aliases)
					.map(|(field, alias)| serialize_stmt(field, quote!(#alias)));
				quote_spanned! {ident.span()=>
					Self::#ident { #(#names: #aliases),* } => {
						#push_index
						#(#stmts)*
					}
				}
			}
		}
	});

	quote! {
		match self {
			#(#arms)*
		}
	}
}

pub fn deserialize_value_body(data: &DataEnum, enum_ident: &Ident) -> TokenStream {
	let arms = data.variants.iter().enumerate().map(|(index, variant)| {
		let ident = &variant.ident;
		let index = Literal::u32_suffixed(index as u32);

		let value = match &variant.fields {
			Fields::Unit => quote! { Self::#ident },
			Fields::Unnamed(fields) => {
				let values = fields.unnamed.iter().map(deserialize_value_expr);
				quote! { Self::#ident(#(#values),*) }
			}
			Fields::Named(fields) => {
				let inits = fields.named.iter().map(|field| {
					let name = field.ident.as_ref().expect("Missing field name");
					let value = deserialize_value_expr(field);
					quote! { #name: #value }
				});
				quote! { Self::#ident { #(#inits),* } }
			}
		};

		quote! { #index => #value, }
	});

	let message = format!("invalid variant index {{}} for `{}`", enum_ident);
	quote! {
		match deserializer.read_variant() {
			#(#arms)*
			index => ::core::panic!(#message, index),
		}
	}
}
