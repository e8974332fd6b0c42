use crate::attributes::{FieldAttrs, display_name};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Index, Member, parse_macro_input};

pub fn validate_derive_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream2, Error> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match &input.data {
        Data::Struct(data) => {
            let fields = field_descriptors(&data.fields)?;
            quote! {
                ::core::result::Result::Ok(::std::vec![#(#fields),*])
            }
        }
        Data::Enum(_) | Data::Union(_) => {
            let found = name.to_string();
            quote! {
                ::core::result::Result::Err(
                    ::purify_validation::IntrospectError::not_a_struct(#found)
                )
            }
        }
    };

    Ok(quote! {
        impl #impl_generics ::purify_validation::Introspect for #name #ty_generics #where_clause {
            fn introspect(
                &self,
            ) -> ::core::result::Result<
                ::std::vec::Vec<::purify_validation::FieldDescriptor>,
                ::purify_validation::IntrospectError,
            > {
                #body
            }
        }
    })
}

/// One `FieldDescriptor` expression per field, in declaration order
fn field_descriptors(fields: &Fields) -> Result<Vec<TokenStream2>, Error> {
    let mut descriptors = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let attrs = FieldAttrs::from_field(field)?;

        let (member, declared) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
            None => (Member::Unnamed(Index::from(index)), index.to_string()),
        };
        let display = display_name(&declared, attrs.rename.as_deref());
        let rules = attrs.rules;

        let descriptor = if rules.is_empty() {
            quote! {
                ::purify_validation::FieldDescriptor::unchecked(#display)
            }
        } else {
            quote! {
                ::purify_validation::FieldDescriptor::new(
                    #display,
                    #rules,
                    ::purify_validation::RenderValue::render(&self.#member),
                )
            }
        };
        descriptors.push(descriptor);
    }

    Ok(descriptors)
}
