#![no_main]

use argv_tokenizer::{Captured, Tokenizer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut args: Vec<String> = Vec::new();

    for &byte in data {
        args.push(format!("{}", byte as char));
        args.push(format!("-{}", byte as char));
        args.push(format!("-{}={}", byte as char, byte));
        args.push(format!("--{}", byte as char));
        args.push(format!("--{}={:x}", byte as char, byte));
    }

    let mut event = Captured::new();
    Tokenizer::new(args).parse(&mut event);

    let lossy = String::from_utf8_lossy(data);
    let mut event = Captured::new();
    Tokenizer::new(lossy.split('\0')).parse(&mut event);
});
