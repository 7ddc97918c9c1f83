use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields, Index, parse_macro_input, parse_quote};

/// Derives `setdb::Persist` for a struct by persisting its fields in
/// declaration order.
///
/// Every field type must implement `Persist`. Fields are loaded in place, so
/// the struct needs no `Default` impl of its own unless it is used as a set
/// element.
#[proc_macro_derive(Persist)]
pub fn derive_persist(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(DataStruct { fields, .. }) => fields,
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "Persist can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let (members, types): (Vec<TokenStream2>, Vec<&syn::Type>) = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|field| {
                let ident = &field.ident;
                (quote! { #ident }, &field.ty)
            })
            .unzip(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let index = Index::from(i);
                (quote! { #index }, &field.ty)
            })
            .unzip(),
        Fields::Unit => (Vec::new(), Vec::new()),
    };

    // Bound every field type so generic structs only persist when their
    // parameters do.
    let mut generics = input.generics.clone();
    if !types.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in &types {
            where_clause
                .predicates
                .push(parse_quote! { #ty: ::setdb::Persist });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::setdb::Persist for #struct_name #ty_generics #where_clause {
            const MIN_ENCODED_LEN: usize =
                0 #(+ <#types as ::setdb::Persist>::MIN_ENCODED_LEN)*;

            fn save<W: ::setdb::Sink + ?Sized>(&self, sink: &mut W) -> ::setdb::Result<()> {
                #(::setdb::Persist::save(&self.#members, sink)?;)*
                let _ = sink;
                Ok(())
            }

            fn load<R: ::setdb::Source + ?Sized>(&mut self, source: &mut R) -> ::setdb::Result<()> {
                #(::setdb::Persist::load(&mut self.#members, source)?;)*
                let _ = source;
                Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}
