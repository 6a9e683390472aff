//! Schema compilation.
//!
//! A schema is a comma-separated list of elements. Each element is a single alphabetic identifier
//! followed by a suffix giving the kind of its value:
//!
//! | suffix | kind                |
//! |--------|---------------------|
//! | (none) | [`Kind::Boolean`]   |
//! | `*`    | [`Kind::String`]    |
//! | `#`    | [`Kind::Integer`]   |
//! | `##`   | [`Kind::Float`]     |
//!
//! For instance, `"x,y*,z#,w##"`. Whitespace around elements is ignored.

use core::fmt;

use heapless::Vec;

use crate::marshaler::{Kind, Marshaler};
use crate::parser::Error;

/// Iterate over the elements of a schema source, without compiling it.
pub fn elements(source: &str) -> Elements<'_> {
    Elements {
        inner: source.split(','),
    }
}

/// Iterator over the elements of a schema, see [`elements`].
#[derive(Clone, Debug)]
pub struct Elements<'a> {
    inner: core::str::Split<'a, char>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = Result<(char, Kind), Error<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.inner.by_ref().map(str::trim).find(|x| !x.is_empty())?;
        Some(parse_element(element))
    }
}

fn parse_element(element: &str) -> Result<(char, Kind), Error<'_>> {
    let mut chars = element.chars();

    // Elements are never empty here.
    let id = chars.next().unwrap_or_default();
    if !id.is_alphabetic() {
        return Err(Error::InvalidArgumentName(id));
    }

    let suffix = chars.as_str();
    let kind = Kind::from_suffix(suffix).ok_or(Error::InvalidFormat(id, suffix))?;

    Ok((id, kind))
}

/// Defines a compiled schema: the table of marshalers, keyed by flag identifier.
///
/// The table keeps the order of first appearance in the schema and holds at most `SIZE` entries.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Schema<'a, const SIZE: usize = 8> {
    source: &'a str,
    marshalers: Vec<(char, Marshaler<'a>), SIZE>,
}

impl<'a, const SIZE: usize> Schema<'a, SIZE> {
    /// Compile the schema source into a table of fresh marshalers.
    ///
    /// An identifier appearing more than once takes the kind of its last element.
    pub fn compile(source: &'a str) -> Result<Self, Error<'a>> {
        let mut marshalers: Vec<(char, Marshaler<'a>), SIZE> = Vec::new();

        for element in elements(source) {
            let (id, kind) = element?;
            let marshaler = Marshaler::new(kind);

            if let Some(entry) = marshalers.iter_mut().find(|x| x.0 == id) {
                entry.1 = marshaler;
            } else if marshalers.push((id, marshaler)).is_err() {
                return Err(Error::OutOfMemory);
            }
        }

        Ok(Schema { source, marshalers })
    }

    /// Get the schema source.
    #[inline(always)]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Get the marshaler of the given identifier.
    pub fn get(&self, id: char) -> Option<&Marshaler<'a>> {
        self.marshalers.iter().find(|x| x.0 == id).map(|x| &x.1)
    }

    /// Get the marshaler of the given identifier, mutably.
    pub fn get_mut(&mut self, id: char) -> Option<&mut Marshaler<'a>> {
        self.marshalers
            .iter_mut()
            .find(|x| x.0 == id)
            .map(|x| &mut x.1)
    }

    /// Get the kind of the given identifier.
    #[inline(always)]
    pub fn kind(&self, id: char) -> Option<Kind> {
        self.get(id).map(Marshaler::kind)
    }

    /// Number of distinct identifiers.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.marshalers.len()
    }

    /// Check if the schema declares no identifier.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.marshalers.is_empty()
    }

    /// Iterate over the identifiers and their kind.
    pub fn iter(&self) -> impl Iterator<Item = (char, Kind)> + '_ {
        self.marshalers.iter().map(|(id, m)| (*id, m.kind()))
    }

    /// Get the usage string, i.e. the schema source between brackets.
    #[inline(always)]
    pub fn usage(&self) -> Usage<'a> {
        Usage::new(self.source)
    }
}

/// Usage string of a schema. Renders to nothing if the schema is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Usage<'a>(&'a str);

impl<'a> Usage<'a> {
    /// Create the usage string of a schema source, without compiling it.
    #[inline(always)]
    pub fn new(source: &'a str) -> Self {
        Usage(source)
    }
}

impl fmt::Display for Usage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }

        write!(f, "[{}]", self.0)
    }
}
