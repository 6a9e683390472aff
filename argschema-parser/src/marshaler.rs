//! Value marshalers, one per flag kind.
//!
//! A marshaler owns the decoded value of a single flag. It pulls the tokens it needs from the
//! shared [`Cursor`] when its flag is met on the command line.

use crate::cursor::Cursor;
use crate::parser::Error;

/// Defines the kind of value a flag carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Kind {
    /// A switch, without value (no suffix).
    Boolean,

    /// A string value (suffix `*`).
    String,

    /// A signed integer value (suffix `#`).
    Integer,

    /// A floating point value (suffix `##`).
    Float,
}

impl Kind {
    /// Get the kind associated to a schema suffix, if any.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Kind::Boolean),
            "*" => Some(Kind::String),
            "#" => Some(Kind::Integer),
            "##" => Some(Kind::Float),
            _ => None,
        }
    }

    /// Get the schema suffix of this kind.
    pub fn suffix(self) -> &'static str {
        match self {
            Kind::Boolean => "",
            Kind::String => "*",
            Kind::Integer => "#",
            Kind::Float => "##",
        }
    }
}

/// Capability shared by all the value marshalers.
pub trait Marshal<'a> {
    /// The decoded value type.
    type Value;

    /// Decode the value of the flag `id` from the next tokens.
    fn decode(&mut self, id: char, cursor: &mut Cursor<'a>) -> Result<(), Error<'a>>;

    /// Get the decoded value, or the default one if nothing has been decoded.
    fn value(&self) -> Self::Value;
}

/// Boolean marshaler. Does not consume any token.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BooleanMarshaler(bool);

impl<'a> Marshal<'a> for BooleanMarshaler {
    type Value = bool;

    fn decode(&mut self, _id: char, _cursor: &mut Cursor<'a>) -> Result<(), Error<'a>> {
        self.0 = true;
        Ok(())
    }

    #[inline(always)]
    fn value(&self) -> bool {
        self.0
    }
}

/// String marshaler. Stores the next token as is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StringMarshaler<'a>(&'a str);

impl<'a> Marshal<'a> for StringMarshaler<'a> {
    type Value = &'a str;

    fn decode(&mut self, id: char, cursor: &mut Cursor<'a>) -> Result<(), Error<'a>> {
        self.0 = cursor.next().ok_or(Error::MissingString(id))?;
        Ok(())
    }

    #[inline(always)]
    fn value(&self) -> &'a str {
        self.0
    }
}

/// Integer marshaler. Parses the next token as a base-10 signed integer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntegerMarshaler(i64);

impl<'a> Marshal<'a> for IntegerMarshaler {
    type Value = i64;

    fn decode(&mut self, id: char, cursor: &mut Cursor<'a>) -> Result<(), Error<'a>> {
        let param = cursor.next().ok_or(Error::MissingInteger(id))?;
        self.0 = param
            .parse()
            .map_err(|_| Error::InvalidInteger(id, param))?;
        Ok(())
    }

    #[inline(always)]
    fn value(&self) -> i64 {
        self.0
    }
}

/// Float marshaler. Parses the next token as a 64-bit floating point number.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FloatMarshaler(f64);

impl<'a> Marshal<'a> for FloatMarshaler {
    type Value = f64;

    fn decode(&mut self, id: char, cursor: &mut Cursor<'a>) -> Result<(), Error<'a>> {
        let param = cursor.next().ok_or(Error::MissingFloat(id))?;
        self.0 = param.parse().map_err(|_| Error::InvalidFloat(id, param))?;
        Ok(())
    }

    #[inline(always)]
    fn value(&self) -> f64 {
        self.0
    }
}

/// The closed set of marshalers a schema can instantiate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Marshaler<'a> {
    /// See [`BooleanMarshaler`].
    Boolean(BooleanMarshaler),

    /// See [`StringMarshaler`].
    String(StringMarshaler<'a>),

    /// See [`IntegerMarshaler`].
    Integer(IntegerMarshaler),

    /// See [`FloatMarshaler`].
    Float(FloatMarshaler),
}

impl<'a> Marshaler<'a> {
    /// Create a fresh marshaler for the given kind, holding its default value.
    pub fn new(kind: Kind) -> Self {
        match kind {
            Kind::Boolean => Marshaler::Boolean(BooleanMarshaler::default()),
            Kind::String => Marshaler::String(StringMarshaler::default()),
            Kind::Integer => Marshaler::Integer(IntegerMarshaler::default()),
            Kind::Float => Marshaler::Float(FloatMarshaler::default()),
        }
    }

    /// Get the kind of value handled by this marshaler.
    pub fn kind(&self) -> Kind {
        match self {
            Marshaler::Boolean(_) => Kind::Boolean,
            Marshaler::String(_) => Kind::String,
            Marshaler::Integer(_) => Kind::Integer,
            Marshaler::Float(_) => Kind::Float,
        }
    }

    /// Decode the value of the flag `id` from the cursor.
    pub fn decode(&mut self, id: char, cursor: &mut Cursor<'a>) -> Result<(), Error<'a>> {
        match self {
            Marshaler::Boolean(m) => m.decode(id, cursor),
            Marshaler::String(m) => m.decode(id, cursor),
            Marshaler::Integer(m) => m.decode(id, cursor),
            Marshaler::Float(m) => m.decode(id, cursor),
        }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_map_suffixes_to_kinds() {
        assert_that!(Kind::from_suffix(""), eq(Some(Kind::Boolean)));
        assert_that!(Kind::from_suffix("*"), eq(Some(Kind::String)));
        assert_that!(Kind::from_suffix("#"), eq(Some(Kind::Integer)));
        assert_that!(Kind::from_suffix("##"), eq(Some(Kind::Float)));
        assert_that!(Kind::from_suffix("###"), eq(None));
        assert_that!(Kind::from_suffix("-"), eq(None));

        for kind in [Kind::Boolean, Kind::String, Kind::Integer, Kind::Float] {
            assert_that!(Kind::from_suffix(kind.suffix()), eq(Some(kind)));
        }
    }

    #[test]
    fn it_should_default_to_zero_values() {
        assert_that!(BooleanMarshaler::default().value(), eq(false));
        assert_that!(StringMarshaler::default().value(), eq(""));
        assert_that!(IntegerMarshaler::default().value(), eq(0));
        assert_that!(FloatMarshaler::default().value(), eq(0.0));
    }

    #[test]
    fn it_should_decode_boolean_without_consuming() {
        let mut cursor = Cursor::new(&["next"]);
        let mut m = BooleanMarshaler::default();

        assert_that!(m.decode('b', &mut cursor), eq(Ok(())));
        assert_that!(m.value(), eq(true));
        assert_that!(cursor.remaining(), eq(1));
    }

    #[test]
    fn it_should_decode_string_verbatim() {
        let mut cursor = Cursor::new(&["-not-a-flag"]);
        let mut m = StringMarshaler::default();

        assert_that!(m.decode('s', &mut cursor), eq(Ok(())));
        assert_that!(m.value(), eq("-not-a-flag"));
        assert_that!(cursor.has_next(), eq(false));
    }

    #[test]
    fn it_should_report_missing_string() {
        let mut cursor = Cursor::new(&[]);
        let mut m = StringMarshaler::default();

        assert_that!(m.decode('s', &mut cursor), eq(Err(Error::MissingString('s'))));
    }

    #[test]
    fn it_should_decode_negative_integer() {
        let mut cursor = Cursor::new(&["-42"]);
        let mut m = IntegerMarshaler::default();

        assert_that!(m.decode('n', &mut cursor), eq(Ok(())));
        assert_that!(m.value(), eq(-42));
    }

    #[test]
    fn it_should_report_invalid_and_missing_integer() {
        let mut cursor = Cursor::new(&["4.2"]);
        let mut m = IntegerMarshaler::default();

        assert_that!(
            m.decode('n', &mut cursor),
            eq(Err(Error::InvalidInteger('n', "4.2")))
        );
        assert_that!(
            m.decode('n', &mut cursor),
            eq(Err(Error::MissingInteger('n')))
        );
    }

    #[test]
    fn it_should_decode_float() {
        let mut cursor = Cursor::new(&["2.5", "1e3"]);
        let mut m = FloatMarshaler::default();

        assert_that!(m.decode('f', &mut cursor), eq(Ok(())));
        assert_that!(m.value(), eq(2.5));

        assert_that!(m.decode('f', &mut cursor), eq(Ok(())));
        assert_that!(m.value(), eq(1000.0));
    }

    #[test]
    fn it_should_report_invalid_and_missing_float() {
        let mut cursor = Cursor::new(&["two"]);
        let mut m = FloatMarshaler::default();

        assert_that!(
            m.decode('f', &mut cursor),
            eq(Err(Error::InvalidFloat('f', "two")))
        );
        assert_that!(m.decode('f', &mut cursor), eq(Err(Error::MissingFloat('f'))));
    }

    #[test]
    fn it_should_dispatch_by_kind() {
        let mut cursor = Cursor::new(&["7"]);
        let mut m = Marshaler::new(Kind::Integer);

        assert_that!(m.kind(), eq(Kind::Integer));
        assert_that!(m.decode('i', &mut cursor), eq(Ok(())));
        assert_that!(m, eq(Marshaler::Integer(IntegerMarshaler(7))));
    }
}
