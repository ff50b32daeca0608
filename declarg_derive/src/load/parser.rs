use crate::model::{DeriveParameter, DeriveParser, DeriveValue, IntermediateAttributes};
use quote::quote;

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = value.ident.clone();
        let span = struct_name.span();
        let attributes = IntermediateAttributes::collect(&value.attrs)?;
        attributes.restrict(span, &[], &["program", "about"])?;

        let program = match attributes.single(span, "program")? {
            Some(program) => program.clone(),
            None => DeriveValue {
                tokens: quote! { env!("CARGO_CRATE_NAME") },
            },
        };
        let about = attributes.single(span, "about")?.cloned();

        let parameters = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveParameter::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    span,
                    "Invalid - DeclargParser may only be derived on a struct with named fields.",
                ));
            }
        };

        Ok(DeriveParser {
            struct_name,
            generics: value.generics,
            program,
            about,
            parameters,
        })
    }
}
