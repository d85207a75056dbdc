use argv_tokenizer::{Event, Tokenizer};

#[derive(Debug, Default)]
#[allow(unused)]
struct Args {
    verbose: bool,
    output: Option<String>,
    inputs: Vec<String>,
    unknown: Vec<String>,
}

impl Event for Args {
    fn set_option(&mut self, name: &str, value: Option<&str>) {
        match (name, value) {
            ("v" | "verbose", None) => self.verbose = true,
            ("o" | "output", Some(path)) => self.output = Some(path.to_string()),
            _ => self.unknown.push(name.to_string()),
        }
    }

    fn set_argument(&mut self, _index: usize, value: &str) {
        self.inputs.push(value.to_string());
    }
}

fn main() -> argv_tokenizer::Result<()> {
    let mut args = Args::default();
    Tokenizer::from_env()?.parse(&mut args);

    dbg!(args);

    Ok(())
}
