use crate::model::{DeriveParameter, ParameterKind, ParameterType};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveParameter {
    /// The `::declarg::Parameter` expression for this field.
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveParameter {
            field_name,
            parameter_type,
            kind,
            help,
        } = self;

        let field = match parameter_type {
            ParameterType::Switch => quote! { ::declarg::Switch::flag(&mut self.#field_name) },
            ParameterType::Scalar => quote! { ::declarg::Scalar::new(&mut self.#field_name) },
            ParameterType::Optional => quote! { ::declarg::Optional::new(&mut self.#field_name) },
            ParameterType::Array => quote! { ::declarg::Array::new(&mut self.#field_name) },
            ParameterType::Collection => {
                quote! { ::declarg::Collection::new(&mut self.#field_name) }
            }
        };

        let parameter = match kind {
            ParameterKind::Option {
                long: Some(long),
                short,
            } => {
                let short = match short {
                    Some(short) => quote! { Some(#short) },
                    None => quote! { None },
                };
                quote! { ::declarg::Parameter::option(#field, #long, #short) }
            }
            ParameterKind::Option {
                long: None,
                short: Some(short),
            } => quote! { ::declarg::Parameter::short_option(#field, #short) },
            ParameterKind::Option {
                long: None,
                short: None,
            } => {
                unreachable!("internal error - a checked option always has a name")
            }
            ParameterKind::Argument { name } => {
                quote! { ::declarg::Parameter::argument(#field, #name) }
            }
        };

        match help {
            Some(help) => {
                let help = help.tokens;
                quote! { #parameter.help(#help) }
            }
            None => parameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveValue;
    use proc_macro2::Literal;
    use quote::{format_ident, ToTokens};
    use rstest::rstest;

    #[rstest]
    #[case(ParameterType::Switch, quote! { ::declarg::Switch::flag(&mut self.abc) })]
    #[case(ParameterType::Scalar, quote! { ::declarg::Scalar::new(&mut self.abc) })]
    #[case(ParameterType::Optional, quote! { ::declarg::Optional::new(&mut self.abc) })]
    #[case(ParameterType::Array, quote! { ::declarg::Array::new(&mut self.abc) })]
    #[case(ParameterType::Collection, quote! { ::declarg::Collection::new(&mut self.abc) })]
    fn generate_option(#[case] parameter_type: ParameterType, #[case] field: TokenStream2) {
        // Setup
        let parameter = DeriveParameter {
            field_name: format_ident!("abc"),
            parameter_type,
            kind: ParameterKind::Option {
                long: Some("a-b-c".to_string()),
                short: Some('a'),
            },
            help: None,
        };

        // Execute
        let token_stream = parameter.generate();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! { ::declarg::Parameter::option(#field, "a-b-c", Some('a')) }.to_string()
        );
    }

    #[test]
    fn generate_option_help() {
        // Setup
        let parameter = DeriveParameter {
            field_name: format_ident!("abc"),
            parameter_type: ParameterType::Scalar,
            kind: ParameterKind::Option {
                long: Some("abc".to_string()),
                short: None,
            },
            help: Some(DeriveValue {
                tokens: Literal::string("The abc.").into_token_stream(),
            }),
        };

        // Execute
        let token_stream = parameter.generate();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                ::declarg::Parameter::option(::declarg::Scalar::new(&mut self.abc), "abc", None)
                    .help("The abc.")
            }
            .to_string()
        );
    }

    #[test]
    fn generate_short_option() {
        // Setup
        let parameter = DeriveParameter {
            field_name: format_ident!("abc"),
            parameter_type: ParameterType::Array,
            kind: ParameterKind::Option {
                long: None,
                short: Some('a'),
            },
            help: None,
        };

        // Execute
        let token_stream = parameter.generate();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                ::declarg::Parameter::short_option(::declarg::Array::new(&mut self.abc), 'a')
            }
            .to_string()
        );
    }

    #[test]
    fn generate_argument() {
        // Setup
        let parameter = DeriveParameter {
            field_name: format_ident!("out_file"),
            parameter_type: ParameterType::Optional,
            kind: ParameterKind::Argument {
                name: "out-file".to_string(),
            },
            help: Some(DeriveValue {
                tokens: Literal::string("Where to write.").into_token_stream(),
            }),
        };

        // Execute
        let token_stream = parameter.generate();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                ::declarg::Parameter::argument(::declarg::Optional::new(&mut self.out_file), "out-file")
                    .help("Where to write.")
            }
            .to_string()
        );
    }
}
