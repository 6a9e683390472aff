//! A cursor for walking the tokens of a command line.

/// Defines a `Cursor` over the raw command line tokens.
///
/// A cursor acts like a forward iterator. It is shared by mutable reference between the argument
/// parser and the value marshalers, so that a marshaler can pull the tokens it needs right after
/// its flag.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor<'a> {
    argv: &'a [&'a str],
    cursor: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor, positioned before the first token.
    pub fn new(argv: &'a [&'a str]) -> Self {
        Cursor { argv, cursor: 0 }
    }

    /// Check if there is at least one token left.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.cursor < self.argv.len()
    }

    /// Number of tokens that have not been read yet.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.argv.len() - self.cursor
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let arg = self.argv.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(arg)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

/// Conversion into a [`Cursor`].
pub trait IntoCursor<'a> {
    /// Build the cursor.
    fn into_cursor(self) -> Cursor<'a>;
}

impl<'a> IntoCursor<'a> for Cursor<'a> {
    #[inline(always)]
    fn into_cursor(self) -> Cursor<'a> {
        self
    }
}

impl<'a> IntoCursor<'a> for &'a [&'a str] {
    #[inline(always)]
    fn into_cursor(self) -> Cursor<'a> {
        Cursor::new(self)
    }
}

impl<'a, const N: usize> IntoCursor<'a> for &'a [&'a str; N] {
    #[inline(always)]
    fn into_cursor(self) -> Cursor<'a> {
        Cursor::new(self.as_slice())
    }
}
