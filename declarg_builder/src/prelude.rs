//! Traits which, typically, may be imported without concern: `use declarg::prelude::*`.

/// Behaviour for multiple (0 to many) items T to be collected together.
// Needs to be imported in order to implement a custom `Collectable`.
pub trait Collectable<T> {
    /// Add a value to this `Collectable`.
    fn add(&mut self, item: T);
}

/// Behaviour to decode a value of `Self` from a single raw token.
///
/// The lifetime `'t` is that of the token buffer, so implementations may borrow from the token (ex: `&'t str`).
// Needs to be imported in order to implement a custom `FromToken`.
pub trait FromToken<'t>: Sized {
    /// Decode the token, or explain why it cannot be decoded.
    fn from_token(token: &'t str) -> Result<Self, String>;
}
