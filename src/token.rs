//! Classification of a single raw token.

use std::fmt::{self, Display};

/// Represents one classified command-line token
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Token<'a> {
    /// The literal `--`, which ends classification
    /// of the remaining input.
    Separator,

    /// Represents a long option like
    /// `--example` or `--example=value`.
    ///
    /// `value` is `None` when there is no `=`,
    /// and `Some("")` for `--example=`.
    Long {
        name: &'a str,
        value: Option<&'a str>,
    },

    /// A cluster of single character options
    /// as in `-abc`, stored without the leading dash.
    Short(&'a str),

    /// Regular argument
    /// like `/proc/meminfo`
    Positional(&'a str),
}

impl<'a> Token<'a> {
    /// Classifies `arg` by its prefix.
    ///
    /// Every string is accepted: `---x` is a long option named `-x`,
    /// and a lonely `-` is an empty short cluster.
    #[must_use]
    pub fn classify(arg: &'a str) -> Self {
        if arg == "--" {
            return Token::Separator;
        }

        if let Some(rest) = arg.strip_prefix("--") {
            let (name, value) = split_long_opt_value(rest);

            Token::Long { name, value }
        } else if let Some(cluster) = arg.strip_prefix('-') {
            Token::Short(cluster)
        } else {
            Token::Positional(arg)
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Separator => f.write_str("--"),
            Self::Long { name, value: None } => write!(f, "--{name}"),
            Self::Long {
                name,
                value: Some(val),
            } => write!(f, "--{name}={val}"),
            Self::Short(cluster) => write!(f, "-{cluster}"),
            Self::Positional(arg) => f.write_str(arg),
        }
    }
}

/// Walks a short option cluster (the part after `-`)
/// one shortcut at a time.
///
/// A shortcut directly followed by `=` takes the rest of
/// the cluster as its value, and ends the walk.
#[derive(Debug, Clone)]
pub struct ShortCluster<'a> {
    rest: &'a str,
}

impl<'a> ShortCluster<'a> {
    #[must_use]
    pub fn new(cluster: &'a str) -> Self {
        Self { rest: cluster }
    }
}

impl<'a> Iterator for ShortCluster<'a> {
    type Item = (char, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.rest.chars();
        let shortcut = chars.next()?;
        let after = chars.as_str();

        if let Some(value) = after.strip_prefix('=') {
            self.rest = "";
            return Some((shortcut, Some(value)));
        }

        self.rest = after;
        Some((shortcut, None))
    }
}

// Splits a long option like
// `option=value`
// into ("option", Some("value"))
//
// if it can't find the `=` character
// then the 2nd field of the tuple is `None`
pub(crate) fn split_long_opt_value(src: &str) -> (&str, Option<&str>) {
    match src.split_once('=') {
        None => (src, None),
        Some((name, value)) => (name, Some(value)),
    }
}
