use crate::model::DeriveParser;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            generics,
            program,
            about,
            parameters,
        } = value;
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        let program = program.tokens;
        let about = about.map(|about| {
            let about = about.tokens;
            quote! { .about(#about) }
        });
        let parameters: Vec<TokenStream2> = parameters
            .into_iter()
            .map(|parameter| parameter.generate())
            .collect();

        quote! {
            impl #impl_generics #struct_name #ty_generics #where_clause {
                /// Create the command line parser, bound to the fields of this struct.
                pub fn declarg_parser(&mut self) -> ::declarg::CommandLineParser<'_, 'static> {
                    ::declarg::CommandLineParser::new(#program)
                        #about
                        #( .add(#parameters) )*
                }

                /// Parse the command line arguments into a new instance, starting from its `Default`.
                ///
                /// Exits the process on help (code `0`) or error (code `1`).
                pub fn declarg_parse() -> Self {
                    let mut target = Self::default();
                    target.declarg_parser().build().parse();
                    target
                }
            }
        }
    }
}
