#![warn(clippy::pedantic)]
#![warn(clippy::complexity)]
#![forbid(unsafe_code)]
//! A tokenizer for command-line arguments.
//!
//! Every raw token is put into one of three buckets and handed to an [`Event`]:
//!
//! - long options: `--name`, `--name=value`
//! - short option clusters: `-a`, `-abc`, `-abc=value` (the value belongs to `c`)
//! - positional arguments, numbered from zero in input order
//!
//! A literal `--` stops tokenizing; the tokens after it are not recorded.
//!
//! There is no validation. Any string is accepted, `---x` simply becomes
//! a long option named `-x`.
//!
//! ```
//! use argv_tokenizer::{Captured, Tokenizer};
//!
//! let mut event = Captured::new();
//! Tokenizer::new(["-vo=out.txt", "--level=3", "input"]).parse(&mut event);
//!
//! assert_eq!(event.option("v"), Some(None));
//! assert_eq!(event.option("o"), Some(Some("out.txt")));
//! assert_eq!(event.option("level"), Some(Some("3")));
//! assert_eq!(event.argument(0), Some("input"));
//! ```

pub mod env;
mod error;
mod event;
mod token;
mod tokenizer;

pub use error::{Error, Result};
pub use event::{Captured, Event};
pub use token::{ShortCluster, Token};
pub use tokenizer::{parse_long_option, parse_short_option, Tokenizer};
