//! Legacy query normalization.
//!
//! Older queries wrote selectors and paths bare, e.g. `calc(pricing.bvr,
//! input=data/in.json)`. The strict lexer only accepts `[A-Za-z0-9_-]` in
//! bare identifiers, so dotted or slashed words sitting in an argument
//! position are rewritten as quoted strings before parsing:
//!
//! ```text
//! calc(pricing.bvr, input=data/in.json)
//! calc("pricing.bvr", input="data/in.json")
//! ```
//!
//! Operation names and field names never contain `.` or `/`, so the position
//! test alone tells values apart from names.

/// Characters the legacy parser accepted inside one identifier.
fn is_legacy_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.' | '/')
}

fn needs_quoting(word: &[char]) -> bool {
    word.iter().any(|&ch| ch == '.' || ch == '/')
}

/// True when the nearest non-whitespace character before `start` is `(`,
/// `,` or `=`.
fn is_argument_position(input: &[char], start: usize) -> bool {
    input[..start]
        .iter()
        .rev()
        .find(|ch| !ch.is_whitespace())
        .is_some_and(|&ch| matches!(ch, '(' | ',' | '='))
}

/// Rewrites dotted/slashed argument values into string literals.
///
/// Quoted regions and `{ ... }` projection blocks are copied verbatim. An
/// unterminated quote or block runs to the end of input. Never fails.
pub fn normalize(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 16);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '"' {
            out.push(ch);
            i += 1;
            while i < chars.len() {
                if chars[i] == '\\' && i + 1 < chars.len() {
                    out.push(chars[i]);
                    out.push(chars[i + 1]);
                    i += 2;
                    continue;
                }
                out.push(chars[i]);
                i += 1;
                if chars[i - 1] == '"' {
                    break;
                }
            }
            continue;
        }

        if ch == '{' {
            while i < chars.len() && chars[i] != '}' {
                out.push(chars[i]);
                i += 1;
            }
            if i < chars.len() {
                out.push(chars[i]);
                i += 1;
            }
            continue;
        }

        if is_legacy_identifier_char(ch) {
            let start = i;
            while i < chars.len() && is_legacy_identifier_char(chars[i]) {
                i += 1;
            }
            let word = &chars[start..i];

            if needs_quoting(word) && is_argument_position(&chars, start) {
                out.push('"');
                out.extend(word);
                out.push('"');
            } else {
                out.extend(word);
            }
            continue;
        }

        out.push(ch);
        i += 1;
    }

    out
}
