use crate::{
    event::Event,
    token::{split_long_opt_value, ShortCluster, Token},
};

/// Walks an input sequence once and forwards every classified
/// token to an [`Event`].
///
/// The cursor and the positional counter live inside [`Tokenizer::parse`],
/// so a `Tokenizer` can be parsed any number of times with the same result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenizer {
    args: Vec<String>,
}

impl Tokenizer {
    /// Creates a `Tokenizer` over `args`.
    ///
    /// `args` must not contain the program name.
    #[must_use]
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The input sequence.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Classifies every token, left to right, into `event`.
    ///
    /// Parsing stops at the first `--`. Whatever follows it
    /// is dropped, not recorded as positional arguments.
    pub fn parse<E>(&self, mut event: E) -> &Self
    where
        E: Event,
    {
        let mut position = 0;
        tracing::debug!(count = self.args.len(), "parsing");

        for (cursor, arg) in self.args.iter().enumerate() {
            match Token::classify(arg) {
                Token::Separator => {
                    tracing::debug!(
                        cursor,
                        dropped = self.args.len() - cursor - 1,
                        "stopped at separator"
                    );
                    break;
                }

                Token::Long { name, value } => {
                    tracing::trace!(cursor, option = name, ?value, "long option");
                    event.set_option(name, value);
                }

                Token::Short(cluster) => {
                    tracing::trace!(cursor, cluster, "short options");
                    set_short_options(&mut event, cluster);
                }

                Token::Positional(value) => {
                    tracing::trace!(cursor, position, value, "argument");
                    event.set_argument(position, value);
                    position += 1;
                }
            }
        }

        tracing::debug!(arguments = position, "parsed");
        self
    }
}

impl From<Vec<String>> for Tokenizer {
    fn from(args: Vec<String>) -> Self {
        Self { args }
    }
}

/// Parses one token known to start with `--`.
///
/// `--name` records `name` without a value, `--name=value`
/// records everything after the first `=` (possibly empty).
pub fn parse_long_option<E>(mut event: E, arg: &str)
where
    E: Event,
{
    let (name, value) = split_long_opt_value(arg.strip_prefix("--").unwrap_or(arg));

    event.set_option(name, value);
}

/// Parses one token known to start with `-`.
///
/// Each character is a shortcut recorded without a value,
/// until one is followed by `=`: that one takes the remainder
/// as its value and ends the cluster.
pub fn parse_short_option<E>(mut event: E, arg: &str)
where
    E: Event,
{
    set_short_options(&mut event, arg.strip_prefix('-').unwrap_or(arg));
}

fn set_short_options<E>(event: &mut E, cluster: &str)
where
    E: Event,
{
    let mut buf = [0; 4];

    for (shortcut, value) in ShortCluster::new(cluster) {
        event.set_option(shortcut.encode_utf8(&mut buf), value);
    }
}
