use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The raw `#[declarg(..)]` attribute contents, before interpretation.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParameterType {
    Switch,
    Scalar,
    Optional,
    Array,
    Collection,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ParameterKind {
    Option {
        long: Option<String>,
        short: Option<char>,
    },
    Argument {
        name: String,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParameter {
    pub field_name: syn::Ident,
    pub parameter_type: ParameterType,
    pub kind: ParameterKind,
    pub help: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParser {
    pub struct_name: syn::Ident,
    pub generics: syn::Generics,
    pub program: DeriveValue,
    pub about: Option<DeriveValue>,
    pub parameters: Vec<DeriveParameter>,
}
