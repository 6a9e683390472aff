//! A parser for collecting flags from a token stream, according to a schema.

use heapless::Vec;

use crate::cursor::{Cursor, IntoCursor};
use crate::marshaler::{Kind, Marshal, Marshaler};
use crate::schema::{Schema, Usage};

/// Defines the possible errors that may occur during parsing of arguments.
///
/// Parsing stops at the first error, which always names the offending flag identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error<'a> {
    /// A schema identifier is not a letter.
    #[error("'{0}' is not a valid argument name")]
    InvalidArgumentName(char),

    /// A schema suffix is not one of the known ones.
    #[error("'{1}' is not a valid format for argument {0}")]
    InvalidFormat(char, &'a str),

    /// The flag is not defined by the schema.
    #[error("argument -{0} unexpected")]
    UnexpectedArgument(char),

    /// The string flag is not followed by its value.
    #[error("could not find string parameter for -{0}")]
    MissingString(char),

    /// The integer flag is not followed by its value.
    #[error("could not find integer parameter for -{0}")]
    MissingInteger(char),

    /// The integer flag value cannot be parsed.
    #[error("argument -{0} expects an integer but was '{1}'")]
    InvalidInteger(char, &'a str),

    /// The float flag is not followed by its value.
    #[error("could not find float parameter for -{0}")]
    MissingFloat(char),

    /// The float flag value cannot be parsed.
    #[error("argument -{0} expects a float but was '{1}'")]
    InvalidFloat(char, &'a str),

    /// Insufficient space for parsing arguments.
    #[error("out of parser memory space")]
    OutOfMemory,
}

impl<'a> Error<'a> {
    /// Get the identifier of the offending flag, if any.
    pub fn id(&self) -> Option<char> {
        match *self {
            Error::InvalidArgumentName(id)
            | Error::InvalidFormat(id, _)
            | Error::UnexpectedArgument(id)
            | Error::MissingString(id)
            | Error::MissingInteger(id)
            | Error::InvalidInteger(id, _)
            | Error::MissingFloat(id)
            | Error::InvalidFloat(id, _) => Some(id),
            Error::OutOfMemory => None,
        }
    }

    /// Get the offending raw text (schema suffix or flag value), if any.
    pub fn parameter(&self) -> Option<&'a str> {
        match *self {
            Error::InvalidFormat(_, param)
            | Error::InvalidInteger(_, param)
            | Error::InvalidFloat(_, param) => Some(param),
            _ => None,
        }
    }
}

/// Defines the result of argument parsing. This is a simple key-value store that offers typed
/// look-ups over the flags of the schema.
///
/// Up to `SIZE` distinct flags can be declared by the schema.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParsedArgs<'a, const SIZE: usize = 8> {
    schema: Schema<'a, SIZE>,
    found: Vec<char, SIZE>,
}

impl<'a, const SIZE: usize> ParsedArgs<'a, SIZE> {
    /// Compile the schema, then parse the command line input against it.
    ///
    /// Tokens starting with a hyphen are flag groups, each following character being a flag
    /// identifier (e.g. `-xy` stands for `-x -y`). Other tokens are ignored, unless they are
    /// consumed as a flag value.
    pub fn parse(schema: &'a str, argv: impl IntoCursor<'a>) -> Result<Self, Error<'a>> {
        let schema = Schema::compile(schema)?;

        let mut out = ParsedArgs {
            schema,
            found: Vec::new(),
        };

        let mut cursor = argv.into_cursor();

        while let Some(arg) = cursor.next() {
            let Some(flags) = arg.strip_prefix('-') else {
                continue;
            };

            for id in flags.chars() {
                out.decode(id, &mut cursor)?;
            }
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("parsed {} flag(s)", out.found.len());

        Ok(out)
    }

    fn decode(&mut self, id: char, cursor: &mut Cursor<'a>) -> Result<(), Error<'a>> {
        let Some(marshaler) = self.schema.get_mut(id) else {
            #[cfg(feature = "defmt")]
            defmt::debug!("unexpected argument -{}", id);

            return Err(Error::UnexpectedArgument(id));
        };

        marshaler.decode(id, cursor)?;

        if !self.found.contains(&id) && self.found.push(id).is_err() {
            return Err(Error::OutOfMemory);
        }

        Ok(())
    }

    /// Get the value of a boolean flag. Default to `false`.
    pub fn boolean(&self, id: char) -> bool {
        match self.schema.get(id) {
            Some(Marshaler::Boolean(m)) => m.value(),
            _ => false,
        }
    }

    /// Get the value of a string flag. Default to an empty string.
    pub fn string(&self, id: char) -> &'a str {
        match self.schema.get(id) {
            Some(Marshaler::String(m)) => m.value(),
            _ => "",
        }
    }

    /// Get the value of an integer flag. Default to `0`.
    pub fn integer(&self, id: char) -> i64 {
        match self.schema.get(id) {
            Some(Marshaler::Integer(m)) => m.value(),
            _ => 0,
        }
    }

    /// Get the value of a float flag. Default to `0.0`.
    pub fn float(&self, id: char) -> f64 {
        match self.schema.get(id) {
            Some(Marshaler::Float(m)) => m.value(),
            _ => 0.0,
        }
    }

    /// Check if the flag has been found on the command line.
    #[inline(always)]
    pub fn has(&self, id: char) -> bool {
        self.found.contains(&id)
    }

    /// Number of distinct flags found on the command line.
    #[inline(always)]
    pub fn cardinality(&self) -> usize {
        self.found.len()
    }

    /// Iterate over the found flags, in order of first appearance.
    pub fn found(&self) -> impl Iterator<Item = char> + '_ {
        self.found.iter().copied()
    }

    /// Get the kind of a flag declared by the schema.
    #[inline(always)]
    pub fn kind(&self, id: char) -> Option<Kind> {
        self.schema.kind(id)
    }

    /// Get the compiled schema.
    #[inline(always)]
    pub fn schema(&self) -> &Schema<'a, SIZE> {
        &self.schema
    }

    /// Get the usage string.
    #[inline(always)]
    pub fn usage(&self) -> Usage<'a> {
        self.schema.usage()
    }
}
