//! Quoted-string lexing: escapes, `\u` handling, and the unescaped-quote
//! and embedded-newline recovery heuristics.

use crate::diagnostics::Log;
use crate::scanner::Scanner;

/// Reads a quoted string. The cursor must be positioned on the opening
/// quote (`"` or `'`); that quote becomes the closing sentinel for this
/// invocation, so both variants are accepted identically.
pub fn read_string(scanner: &mut Scanner, log: &mut Log) -> String {
    let quote = scanner.peek().expect("read_string called off a quote");
    scanner.advance();

    let mut out = String::new();
    loop {
        match scanner.peek() {
            None => {
                log.push(
                    scanner.pos(),
                    format!("Unterminated string at pos {}", scanner.pos()),
                );
                return out;
            }
            Some('\\') => {
                scanner.advance();
                if read_escape(scanner, log, &mut out) {
                    // Escape was truncated by EOF; already logged once.
                    return out;
                }
            }
            Some(c) if c == quote => {
                if ends_string_here(scanner) {
                    scanner.advance();
                    return out;
                }
                log.push(
                    scanner.pos(),
                    format!("Unescaped quote in string at pos {}", scanner.pos()),
                );
                out.push(c);
                scanner.advance();
            }
            Some(c) if c == '\n' || c == '\r' => {
                log.push(
                    scanner.pos(),
                    format!("Newline in string at pos {}, closing string", scanner.pos()),
                );
                return out;
            }
            Some(c) => {
                out.push(c);
                scanner.advance();
            }
        }
    }
}

/// The quote at the cursor only terminates the string if, after skipping
/// whitespace, the next character is EOF or one of `, : } ] { [`: a
/// stand-in for "this looks like the surrounding container's syntax, not
/// more string content". Non-mutating except for the scanner state the
/// caller already owns (this function is called with the cursor still on
/// the quote; it peeks ahead without leaving the cursor advanced).
fn ends_string_here(scanner: &Scanner) -> bool {
    let rest = scanner.rest();
    let after_quote = &rest[scanner.peek().unwrap().len_utf8()..];
    let mut chars = after_quote.chars().skip_while(|c| c.is_whitespace());
    match chars.next() {
        None => true,
        Some(c) => matches!(c, ',' | ':' | '}' | ']' | '{' | '['),
    }
}

/// Reads one escape sequence (cursor already past the backslash). Returns
/// `true` iff the escape was truncated by EOF, in which case the caller
/// must stop without logging again, since this function already did.
fn read_escape(scanner: &mut Scanner, log: &mut Log, out: &mut String) -> bool {
    let Some(c) = scanner.peek() else {
        log.push(
            scanner.pos(),
            format!("Unterminated string at pos {}", scanner.pos()),
        );
        return true;
    };
    match c {
        '"' | '\'' | '\\' | '/' => {
            out.push(c);
            scanner.advance();
        }
        'b' => {
            out.push('\u{8}');
            scanner.advance();
        }
        'f' => {
            out.push('\u{c}');
            scanner.advance();
        }
        'n' => {
            out.push('\n');
            scanner.advance();
        }
        'r' => {
            out.push('\r');
            scanner.advance();
        }
        't' => {
            out.push('\t');
            scanner.advance();
        }
        'u' => {
            scanner.advance();
            let hex_start = scanner.pos();
            let mut hex = String::with_capacity(4);
            for _ in 0..4 {
                match scanner.peek() {
                    Some(h) if h.is_ascii_hexdigit() => {
                        hex.push(h);
                        scanner.advance();
                    }
                    _ => break,
                }
            }
            if hex.len() == 4 {
                if let Some(ch) = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                {
                    out.push(ch);
                    return false;
                }
            }
            log.push(
                hex_start,
                format!("Invalid \\uXXXX at pos {}", hex_start),
            );
            out.push_str("\\u");
            out.push_str(&hex);
        }
        other => {
            log.push(
                scanner.pos(),
                format!("Invalid escape \\{} at pos {}", other, scanner.pos()),
            );
            out.push(other);
            scanner.advance();
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> (String, usize, Log) {
        let mut scanner = Scanner::new(input);
        let mut log = Log::new();
        let s = read_string(&mut scanner, &mut log);
        (s, scanner.pos(), log)
    }

    #[test]
    fn plain_double_quoted() {
        let (s, _pos, log) = read("\"hello\" tail");
        assert_eq!(s, "hello");
        assert!(log.is_empty());
    }

    #[test]
    fn single_quoted_is_symmetric() {
        let (s, _pos, log) = read("'hello' tail");
        assert_eq!(s, "hello");
        assert!(log.is_empty());
    }

    #[test]
    fn escapes() {
        let (s, _pos, log) = read(r#""a\nb\tc\"d""#);
        assert_eq!(s, "a\nb\tc\"d");
        assert!(log.is_empty());
    }

    #[test]
    fn unicode_escape() {
        let (s, _pos, log) = read("\"\\u0041\"");
        assert_eq!(s, "A");
        assert!(log.is_empty());
    }

    #[test]
    fn truncated_unicode_escape_is_literal() {
        let (s, _pos, log) = read(r#""\u12""#);
        assert_eq!(s, "\\u12");
        assert_eq!(log.len(), 1);
        assert!(log.first().unwrap().message.contains("Invalid \\uXXXX"));
    }

    #[test]
    fn properly_escaped_quotes_need_no_recovery() {
        let (s, _pos, log) = read(r#""<div class=\"red\">hi</div>""#);
        assert!(s.contains("red"));
        assert_eq!(s.matches('<').count() + s.matches('>').count(), 4);
        assert!(log.is_empty());
    }

    #[test]
    fn unescaped_quote_followed_by_non_closer_is_embedded_literally() {
        let (s, _pos, log) = read(r#""<div class="red">hi</div>""#);
        assert!(s.contains("red"));
        assert_eq!(s.matches('<').count() + s.matches('>').count(), 4);
        assert_eq!(log.len(), 2);
        assert!(log
            .iter()
            .all(|d| d.message.contains("Unescaped quote in string")));
    }

    #[test]
    fn newline_closes_string_without_consuming_it() {
        let (s, pos, log) = read("\"unterminated\nmore");
        assert_eq!(s, "unterminated");
        assert_eq!(log.len(), 1);
        assert!(log.first().unwrap().message.contains("Newline in string"));
        // the newline itself was not consumed
        assert_eq!(&"\"unterminated\nmore"[pos..pos + 1], "\n");
    }

    #[test]
    fn truncated_escape_at_eof_logs_once() {
        let (s, _pos, log) = read("\"abc\\");
        assert_eq!(s, "abc");
        assert_eq!(log.len(), 1);
        assert!(log.first().unwrap().message.contains("Unterminated string"));
    }

    #[test]
    fn eof_mid_string_is_unterminated() {
        let (s, _pos, log) = read("\"no closing quote");
        assert_eq!(s, "no closing quote");
        assert_eq!(log.len(), 1);
        assert!(log.first().unwrap().message.contains("Unterminated string"));
    }
}
