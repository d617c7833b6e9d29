//! Value extraction from server error messages.

use regex::Regex;
use std::sync::OnceLock;

static QUOTED_RE: OnceLock<Regex> = OnceLock::new();

fn quoted_regex() -> &'static Regex {
    QUOTED_RE.get_or_init(|| {
        Regex::new("'.+?'")
            .unwrap_or_else(|error| panic!("quoted token regex failed to compile: {error}"))
    })
}

/// Collect the single-quoted substrings of a message, with the quotes removed.
///
/// A quoted substring opens at a `'`, holds at least one character and closes
/// at the next `'` after that, never spanning a newline. Substrings do not
/// overlap and are returned left to right. Every `'` inside a match is
/// stripped, so `''a'` yields `a`.
pub fn quoted_tokens(message: &str) -> Vec<String> {
    quoted_regex()
        .find_iter(message)
        .map(|m| m.as_str().replace('\'', ""))
        .collect()
}

/// Scan `text` against a `printf`-style `template`, returning the value bound
/// to each `%s` placeholder in order.
///
/// Quote characters are stripped from both sides first. A placeholder binds
/// the next run of non-whitespace characters, whitespace in the template
/// matches any amount of whitespace, and `%%` matches a literal `%`. The scan
/// stops at the first mismatch and keeps whatever it bound up to then.
pub fn scan_template(template: &str, text: &str) -> Vec<String> {
    let template: Vec<char> = template.chars().filter(|&c| c != '\'').collect();
    let text: Vec<char> = text.chars().filter(|&c| c != '\'').collect();
    let mut values = Vec::new();

    let mut t = 0;
    let mut s = 0;
    while t < template.len() {
        let expected = template[t];

        if expected == '%' && template.get(t + 1) == Some(&'s') {
            s = skip_whitespace(&text, s);
            let start = s;
            while s < text.len() && !text[s].is_whitespace() {
                s += 1;
            }
            if start == s {
                break;
            }
            values.push(text[start..s].iter().collect());
            t += 2;
            continue;
        }

        if expected.is_whitespace() {
            s = skip_whitespace(&text, s);
            t = skip_whitespace(&template, t);
            continue;
        }

        let literal_len = if expected == '%' && template.get(t + 1) == Some(&'%') {
            2
        } else {
            1
        };
        if text.get(s) != Some(&expected) {
            break;
        }
        s += 1;
        t += literal_len;
    }

    values
}

fn skip_whitespace(chars: &[char], mut pos: usize) -> usize {
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    pos
}
