use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::{HashMap, HashSet};

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in expressions {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    let values = pairs.entry(left.to_string()).or_default();
                    values.push(DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    });
                }
                syn::Expr::Path(ref path) if path.path.get_ident().is_some() => {
                    if let Some(ident) = path.path.get_ident() {
                        singletons.insert(ident.to_string());
                    }
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        expression,
                        "Invalid - declarg attributes are either `key` or `key = value`.",
                    ));
                }
            };
        }

        Ok(Self { singletons, pairs })
    }
}

impl IntermediateAttributes {
    /// Fold every `#[declarg(..)]` attribute into one.
    pub(crate) fn collect(attributes: &[syn::Attribute]) -> Result<Self, syn::Error> {
        let mut out = IntermediateAttributes::default();

        for attribute in attributes {
            if attribute.path().is_ident("declarg") {
                let IntermediateAttributes { singletons, pairs } =
                    IntermediateAttributes::try_from(attribute)?;
                out.singletons.extend(singletons);

                for (key, mut values) in pairs {
                    out.pairs.entry(key).or_default().append(&mut values);
                }
            }
        }

        Ok(out)
    }

    /// Reject any key outside of the allowed ones.
    pub(crate) fn restrict(
        &self,
        span: proc_macro2::Span,
        singletons: &[&str],
        pairs: &[&str],
    ) -> Result<(), syn::Error> {
        if let Some(key) = self
            .singletons
            .iter()
            .find(|key| !singletons.contains(&key.as_str()))
        {
            return Err(syn::Error::new(
                span,
                format!("Invalid - unknown declarg attribute `{key}`."),
            ));
        }

        if let Some(key) = self.pairs.keys().find(|key| !pairs.contains(&key.as_str())) {
            return Err(syn::Error::new(
                span,
                format!("Invalid - unknown declarg attribute `{key} = ..`."),
            ));
        }

        Ok(())
    }

    /// The value of `key`, which may be given at most once.
    pub(crate) fn single(
        &self,
        span: proc_macro2::Span,
        key: &str,
    ) -> Result<Option<&DeriveValue>, syn::Error> {
        match self.pairs.get(key).map(Vec::as_slice) {
            None | Some([]) => Ok(None),
            Some([value]) => Ok(Some(value)),
            Some(_) => Err(syn::Error::new(
                span,
                format!("Invalid - declarg attribute `{key}` is repeated."),
            )),
        }
    }
}

impl DeriveValue {
    pub(crate) fn string_literal(&self) -> Result<String, syn::Error> {
        syn::parse2::<syn::LitStr>(self.tokens.clone())
            .map(|literal| literal.value())
            .map_err(|error| {
                syn::Error::new(error.span(), "Invalid - expected a string literal, ex: \"abc\".")
            })
    }

    pub(crate) fn char_literal(&self) -> Result<char, syn::Error> {
        syn::parse2::<syn::LitChar>(self.tokens.clone())
            .map(|literal| literal.value())
            .map_err(|error| {
                syn::Error::new(error.span(), "Invalid - expected a char literal, ex: 'c'.")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::{Literal, Span};
    use syn::parse_quote;

    #[test]
    fn construct_attributes_empty() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[declarg()]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(attributes, IntermediateAttributes::default());
    }

    #[test]
    fn construct_attributes() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[declarg(no_long, short = 'k', short = 'x')]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::from(["no_long".to_string()]),
                pairs: HashMap::from([(
                    "short".to_string(),
                    vec![
                        DeriveValue {
                            tokens: Literal::character('k').into_token_stream(),
                        },
                        DeriveValue {
                            tokens: Literal::character('x').into_token_stream(),
                        }
                    ]
                )])
            }
        );
    }

    #[test]
    fn construct_attributes_invalid() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[declarg(1 + 2)]
        };

        // Execute
        let error = IntermediateAttributes::try_from(&attribute).unwrap_err();

        // Verify
        assert!(error.to_string().contains("either `key` or `key = value`"));
    }

    #[test]
    fn collect() {
        // Setup
        let item: syn::ItemStruct = parse_quote! {
            #[declarg(program = "abc")]
            #[derive(Default)]
            #[declarg(about = "def", program = "ghi")]
            struct Parameters {}
        };

        // Execute
        let attributes = IntermediateAttributes::collect(&item.attrs).unwrap();

        // Verify
        assert!(attributes.singletons.is_empty());
        assert_eq!(attributes.pairs["program"].len(), 2);
        assert_eq!(attributes.pairs["about"].len(), 1);
    }

    #[test]
    fn restrict() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[declarg(argument, long = "abc")]
        };
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Execute & verify
        attributes
            .restrict(Span::call_site(), &["argument"], &["long"])
            .unwrap();
        let error = attributes
            .restrict(Span::call_site(), &[], &["long"])
            .unwrap_err();
        assert!(error.to_string().contains("`argument`"));
        let error = attributes
            .restrict(Span::call_site(), &["argument"], &[])
            .unwrap_err();
        assert!(error.to_string().contains("`long = ..`"));
    }

    #[test]
    fn single() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[declarg(long = "abc", short = 'a', short = 'b')]
        };
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Execute & verify
        let long = attributes.single(Span::call_site(), "long").unwrap().unwrap();
        assert_eq!(long.string_literal().unwrap(), "abc");
        assert_eq!(attributes.single(Span::call_site(), "help").unwrap(), None);
        attributes.single(Span::call_site(), "short").unwrap_err();
    }

    #[test]
    fn literals() {
        // Setup
        let string = DeriveValue {
            tokens: Literal::string("abc").into_token_stream(),
        };
        let character = DeriveValue {
            tokens: Literal::character('a').into_token_stream(),
        };

        // Execute & verify
        assert_eq!(string.string_literal().unwrap(), "abc");
        assert_eq!(character.char_literal().unwrap(), 'a');
        string.char_literal().unwrap_err();
        character.string_literal().unwrap_err();
    }
}
