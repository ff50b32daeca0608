use std::collections::HashSet;
use std::marker::PhantomData;

use crate::api::capture::*;
use crate::model::Nargs;
use crate::prelude::{Collectable, FromToken};

fn decode<'t, T: FromToken<'t>>(token: &'t str) -> Result<T, InvalidCapture> {
    T::from_token(token).map_err(|reason| InvalidCapture::InvalidConversion {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
        reason,
    })
}

/// An option parameter that takes no values (precisely 0).
///
/// When matched, the variable is set to the target.
pub struct Switch<'a, T> {
    variable: &'a mut T,
    target: T,
}

impl<'a, T> CliOption for Switch<'a, T> {}

impl<'a, T> Switch<'a, T> {
    /// Create a switch parameter.
    pub fn new(variable: &'a mut T, target: T) -> Self {
        Self { variable, target }
    }
}

impl<'a> Switch<'a, bool> {
    /// Create a boolean flag: `true` iff the option appears on the Cli.
    pub fn flag(variable: &'a mut bool) -> Self {
        Self::new(variable, true)
    }
}

impl<'a, 't, T: Clone> GenericCapturable<'t, T> for Switch<'a, T> {
    fn matched(&mut self) {
        *self.variable = self.target.clone();
    }

    fn capture(&mut self, _token: &'t str) -> Result<(), InvalidCapture> {
        unreachable!("internal error - must not capture on a Switch");
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(0)
    }
}

/// A parameter that takes a single value (precisely 1).
pub struct Scalar<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> CliOption for Scalar<'a, T> {}
impl<'a, T> CliArgument for Scalar<'a, T> {}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar parameter.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, 't, T: FromToken<'t>> GenericCapturable<'t, T> for Scalar<'a, T> {
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &'t str) -> Result<(), InvalidCapture> {
        *self.variable = decode(token)?;
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(1)
    }
}

/// A parameter that maps down to [`Option`], taking a single value (precisely 1).
pub struct Optional<'a, T> {
    variable: &'a mut Option<T>,
}

impl<'a, T> CliOption for Optional<'a, T> {}
impl<'a, T> CliArgument for Optional<'a, T> {}

impl<'a, T> Optional<'a, T> {
    /// Create an optional parameter.
    pub fn new(variable: &'a mut Option<T>) -> Self {
        Self { variable }
    }
}

impl<'a, 't, T: FromToken<'t>> GenericCapturable<'t, T> for Optional<'a, T> {
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &'t str) -> Result<(), InvalidCapture> {
        self.variable.replace(decode(token)?);
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(1)
    }
}

/// An option parameter that fills a fixed size array (precisely `N`).
///
/// Each match fills the array in order, starting from the first slot.
pub struct Array<'a, T, const N: usize> {
    variable: &'a mut [T; N],
    cursor: usize,
}

impl<'a, T, const N: usize> CliOption for Array<'a, T, N> {}

impl<'a, T, const N: usize> Array<'a, T, N> {
    /// Create an array parameter.
    pub fn new(variable: &'a mut [T; N]) -> Self {
        Self {
            variable,
            cursor: 0,
        }
    }
}

impl<'a, 't, T: FromToken<'t>, const N: usize> GenericCapturable<'t, T> for Array<'a, T, N> {
    fn matched(&mut self) {
        self.cursor = 0;
    }

    fn capture(&mut self, token: &'t str) -> Result<(), InvalidCapture> {
        let slot = self
            .variable
            .get_mut(self.cursor)
            .unwrap_or_else(|| unreachable!("internal error - captured beyond the Array bound"));
        *slot = decode(token)?;
        self.cursor += 1;
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(N)
    }
}

/// An option parameter that collects any number of values.
///
/// Values are taken until the end of input, or until a literal `--` token (which is consumed).
pub struct Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    variable: &'a mut C,
    _phantom: PhantomData<T>,
}

impl<'a, C, T> CliOption for Collection<'a, C, T> where C: 'a + Collectable<T> {}

impl<'a, C, T> Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    /// Create a collection parameter.
    pub fn new(variable: &'a mut C) -> Self {
        Self {
            variable,
            _phantom: PhantomData,
        }
    }
}

impl<'a, 't, C, T> GenericCapturable<'t, T> for Collection<'a, C, T>
where
    T: FromToken<'t>,
    C: 'a + Collectable<T>,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &'t str) -> Result<(), InvalidCapture> {
        self.variable.add(decode(token)?);
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        Nargs::Sequence
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}
