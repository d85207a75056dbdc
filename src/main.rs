use std::process::ExitCode;

use argv_tokenizer::{Captured, Tokenizer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    let tokenizer = match Tokenizer::from_env() {
        Ok(tokenizer) => tokenizer,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut event = Captured::new();
    tokenizer.parse(&mut event);

    for (name, value) in event.options() {
        match value {
            Some(value) => println!("option {name:?} = {value:?}"),
            None => println!("option {name:?}"),
        }
    }

    for (index, value) in event.arguments() {
        println!("argument {index} = {value:?}");
    }

    ExitCode::SUCCESS
}
