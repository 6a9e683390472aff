//! argschema, a `no_std` schema-driven command line flag parser.
//!
//! ```
//! let args: argschema::ParsedArgs<'_, 2> = argschema::parse("v,n#", &["-v", "-n", "3"]).unwrap();
//!
//! assert!(args.boolean('v'));
//! assert_eq!(3, args.integer('n'));
//! ```
#![no_std]
#![deny(missing_docs)]

pub use argschema_parser as parser;

pub use parser::{IntoCursor, Kind, ParsedArgs, Usage};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error<'a> {
    /// An error comes from the parsing of arguments.
    #[error(transparent)]
    Parser(parser::Error<'a>),
}

impl<'a> From<parser::Error<'a>> for Error<'a> {
    fn from(err: parser::Error<'a>) -> Self {
        Error::Parser(err)
    }
}

/// Parse the command line input `argv` against the `schema`.
///
/// See [`ParsedArgs::parse`].
pub fn parse<'a, const SIZE: usize>(
    schema: &'a str,
    argv: impl IntoCursor<'a>,
) -> Result<ParsedArgs<'a, SIZE>, Error<'a>> {
    Ok(ParsedArgs::parse(schema, argv)?)
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use googletest::prelude::{assert_that, eq};

    use crate as argschema;

    #[test]
    fn it_should_parse_args_with_all_kinds() {
        let argv = &["-l", "-p", "8080", "-d", "/tmp", "-r", "0.5"];
        let res = argschema::parse::<4>("l,p#,d*,r##", argv);

        assert_that!(res.is_ok(), eq(true));

        let args = res.unwrap();
        assert_that!(args.boolean('l'), eq(true));
        assert_that!(args.integer('p'), eq(8080));
        assert_that!(args.string('d'), eq("/tmp"));
        assert_that!(args.float('r'), eq(0.5));
        assert_that!(args.cardinality(), eq(4));
    }

    #[test]
    fn it_should_wrap_parser_errors() {
        let argv = &["-p", "eighty"];
        let res = argschema::parse::<1>("p#", argv);

        assert_that!(
            res.err(),
            eq(Some(argschema::Error::Parser(
                argschema::parser::Error::InvalidInteger('p', "eighty")
            )))
        );
    }

    #[test]
    fn it_should_display_parser_errors_transparently() {
        let argv = &["-q"];
        let err = argschema::parse::<1>("l", argv).err();

        assert_that!(err.is_some(), eq(true));

        let mut out: heapless::String<32> = heapless::String::new();
        if let Some(err) = err {
            write!(out, "{}", err).unwrap();
        }
        assert_that!(out.as_str(), eq("argument -q unexpected"));
    }

    #[test]
    fn it_should_echo_schema_as_usage() {
        let argv = argschema::parser::Cursor::new(&[]);
        let args = argschema::parse::<2>("l,p#", argv).unwrap();

        let mut out: heapless::String<16> = heapless::String::new();
        write!(out, "{}", args.usage()).unwrap();
        assert_that!(out.as_str(), eq("[l,p#]"));
    }
}
