//! Gathering the input sequence from the running process.
//!
//! Only the outermost entry point should reach for this,
//! everything else hands the [`Tokenizer`] an explicit sequence.

use std::{env, ffi::OsString};

use crate::{Error, Result, Tokenizer};

/// Returns the process arguments with the program name stripped.
///
/// # Errors
///
/// [`Error::Empty`] if the process has no program name,
/// [`Error::InvalidString`] if an argument is not valid UTF-8.
pub fn args_without_program() -> Result<Vec<String>> {
    collect_utf8(env::args_os())
}

/// Drops the first item of `iter` (the program name)
/// and converts the rest to UTF-8.
///
/// # Errors
///
/// Same as [`args_without_program`].
pub fn collect_utf8<I>(iter: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    let mut iter = iter.into_iter();

    if iter.next().is_none() {
        return Err(Error::Empty);
    }

    iter.enumerate()
        .map(|(index, arg)| {
            arg.into_string().map_err(|raw| Error::InvalidString {
                index,
                lossy: raw.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

impl Tokenizer {
    /// Creates a `Tokenizer` over the arguments
    /// of the running process.
    ///
    /// # Errors
    ///
    /// Same as [`args_without_program`].
    pub fn from_env() -> Result<Self> {
        let args = args_without_program()?;
        tracing::debug!(count = args.len(), "read process arguments");

        Ok(Self::new(args))
    }
}
