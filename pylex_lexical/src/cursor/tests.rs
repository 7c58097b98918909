use pylex_base::source_file::SourceFile;

use super::Cursor;

fn cursor(text: &str) -> Cursor { Cursor::new(SourceFile::in_memory("test.py", text)) }

#[test]
fn peek_at_start() {
    let cursor = cursor("ab");

    assert_eq!(cursor.peek_current(), 'a');
    assert_eq!(cursor.peek_next(), Some('b'));
    assert!(cursor.has_more());
}

#[test]
fn empty_source_has_no_more() {
    let cursor = cursor("");

    // the sentinel is the only character
    assert_eq!(cursor.peek_current(), '\n');
    assert_eq!(cursor.peek_next(), None);
    assert!(!cursor.has_more());
}

#[test]
fn advance_stops_before_running_past_the_end() {
    let mut cursor = cursor("abc");

    cursor.advance(2);
    assert_eq!(cursor.peek_current(), 'c');

    // would land past the sentinel
    cursor.advance(5);
    assert_eq!(cursor.peek_current(), 'c');

    cursor.advance(1);
    assert_eq!(cursor.peek_current(), '\n');
    assert!(!cursor.has_more());

    cursor.advance(1);
    assert_eq!(cursor.position(), 3);
}

#[test]
fn peek_window_never_covers_the_sentinel() {
    let cursor = cursor("abc");

    assert_eq!(cursor.peek_window(2), "ab");
    assert_eq!(cursor.peek_window(3), "abc");
    assert_eq!(cursor.peek_window(4), "");
}

#[test]
fn consume_while_returns_the_run() {
    let mut cursor = cursor("123abc");

    assert_eq!(cursor.consume_while(|c| c.is_ascii_digit()), "123");
    assert_eq!(cursor.consume_while(|c| c.is_ascii_digit()), "");
    assert_eq!(cursor.consume_while(char::is_alphabetic), "abc");

    // the sentinel is never consumed
    assert_eq!(cursor.consume_while(|_| true), "");
    assert_eq!(cursor.position(), 6);
}

#[test]
fn consume_while_handles_multibyte_characters() {
    let mut cursor = cursor("héllo wörld");

    assert_eq!(cursor.consume_while(char::is_alphabetic), "héllo");
    assert_eq!(cursor.peek_current(), ' ');
    assert_eq!(cursor.position(), "héllo".len());
}

#[test]
fn consume_while_window_stops_before_the_fence() {
    let mut cursor = cursor("abc'd");

    assert_eq!(cursor.consume_while_window(2, |window| !window.ends_with('\'')), "ab");
    assert_eq!(cursor.peek_window(2), "c'");
}

#[test]
fn current_is_any_of() {
    let mut cursor = cursor("e+");

    assert!(cursor.current_is_any_of(&['e', 'E']));
    cursor.advance(1);
    assert!(cursor.current_is_any_of(&['+', '-']));
    assert!(!cursor.current_is_any_of(&['e', 'E']));
}

#[test]
fn span_from_covers_the_consumed_text() {
    let mut cursor = cursor("  name = 1");

    cursor.consume_while(|c| c == ' ');
    let start = cursor.position();
    cursor.consume_while(char::is_alphanumeric);

    assert_eq!(cursor.span_from(start).str(), "name");
}
