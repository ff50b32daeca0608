use crate::model::{DeriveParameter, IntermediateAttributes, ParameterKind, ParameterType};

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - declarg fields must be named.",
                ));
            }
        };
        let span = field_name.span();
        let attributes = IntermediateAttributes::collect(&value.attrs)?;
        attributes.restrict(span, &["argument", "no_long"], &["long", "short", "help"])?;

        let parameter_type = parameter_type(&value.ty);
        let help = attributes.single(span, "help")?.cloned();
        let long = match attributes.single(span, "long")? {
            Some(value) => Some(value.string_literal()?),
            None => None,
        };
        // '\0' means no short name, as in the builder.
        let short = match attributes.single(span, "short")? {
            Some(value) => Some(value.char_literal()?).filter(|short| *short != '\0'),
            None => None,
        };
        let default_name = field_name.to_string().replace('_', "-");

        let kind = if attributes.singletons.contains("argument") {
            if short.is_some() {
                return Err(incompatible_error(&field_name, "argument", "short"));
            }

            if attributes.singletons.contains("no_long") {
                return Err(incompatible_error(&field_name, "argument", "no_long"));
            }

            match parameter_type {
                ParameterType::Scalar | ParameterType::Optional => {}
                ParameterType::Switch | ParameterType::Array | ParameterType::Collection => {
                    return Err(syn::Error::new(
                        span,
                        format!("Invalid - {parameter_type:?} field `{field_name}` cannot be an argument; only single values are positional."),
                    ));
                }
            }

            ParameterKind::Argument {
                name: long.unwrap_or(default_name),
            }
        } else if attributes.singletons.contains("no_long") {
            if long.is_some() {
                return Err(incompatible_error(&field_name, "no_long", "long"));
            }

            ParameterKind::Option { long: None, short }
        } else {
            ParameterKind::Option {
                long: Some(long.unwrap_or(default_name)),
                short,
            }
        };

        Ok(DeriveParameter {
            field_name,
            parameter_type,
            kind,
            help,
        })
    }
}

fn parameter_type(ty: &syn::Type) -> ParameterType {
    match ty {
        syn::Type::Array(_) => ParameterType::Array,
        syn::Type::Path(path) => match path.path.segments.last() {
            Some(segment) => match segment.ident.to_string().as_str() {
                "bool" => ParameterType::Switch,
                "Option" => ParameterType::Optional,
                "Vec" | "HashSet" => ParameterType::Collection,
                _ => ParameterType::Scalar,
            },
            None => ParameterType::Scalar,
        },
        _ => ParameterType::Scalar,
    }
}

fn incompatible_error(field_name: &syn::Ident, left: &str, right: &str) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!("Invalid - field `{field_name}` cannot be both `{left}` and `{right}`."),
    )
}
