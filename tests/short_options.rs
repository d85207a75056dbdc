mod common;

use argv_tokenizer::parse_short_option;
use common::{flag, opt, record, Recorder};
use pretty_assertions::assert_eq;

#[test]
fn short_options() {
    assert_eq!(
        record(["-a", "-b", "-c"]),
        [flag("a"), flag("b"), flag("c")]
    );
}

#[test]
fn short_option_clustering() {
    assert_eq!(record(["-abc"]), [flag("a"), flag("b"), flag("c")]);
}

#[test]
fn short_option_value() {
    assert_eq!(record(["-o=value"]), [opt("o", "value")]);
    assert_eq!(record(["-o="]), [opt("o", "")]);
}

#[test]
fn value_attaches_to_last_shortcut() {
    assert_eq!(
        record(["-abc=value"]),
        [flag("a"), flag("b"), opt("c", "value")]
    );
}

#[test]
fn value_ends_the_cluster() {
    assert_eq!(record(["-a=b=c"]), [opt("a", "b=c")]);
    assert_eq!(record(["-ab=cd", "-e"]), [flag("a"), opt("b", "cd"), flag("e")]);
}

#[test]
fn short_option_special_chars() {
    assert_eq!(
        record(["-1", "-@", "-ñ"]),
        [flag("1"), flag("@"), flag("ñ")]
    );
}

#[test]
fn parse_single_cluster() {
    let mut recorder = Recorder::default();
    parse_short_option(&mut recorder, "-xy=z");
    parse_short_option(&mut recorder, "-");
    assert_eq!(recorder.calls, [flag("x"), opt("y", "z")]);
}
