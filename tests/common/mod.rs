#![allow(dead_code)]

use argv_tokenizer::Event;

/// One call made on an [`Event`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Call {
    Option(String, Option<String>),
    Argument(usize, String),
}

/// Event keeping every call in order, repeats included.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Event for Recorder {
    fn set_option(&mut self, name: &str, value: Option<&str>) {
        self.calls
            .push(Call::Option(name.to_string(), value.map(String::from)));
    }

    fn set_argument(&mut self, index: usize, value: &str) {
        self.calls.push(Call::Argument(index, value.to_string()));
    }
}

pub fn flag(name: &str) -> Call {
    Call::Option(name.to_string(), None)
}

pub fn opt(name: &str, value: &str) -> Call {
    Call::Option(name.to_string(), Some(value.to_string()))
}

pub fn arg(index: usize, value: &str) -> Call {
    Call::Argument(index, value.to_string())
}

pub fn record<const N: usize>(args: [&str; N]) -> Vec<Call> {
    let mut recorder = Recorder::default();
    argv_tokenizer::Tokenizer::new(args).parse(&mut recorder);
    recorder.calls
}
