//! Canonical shell-export rendering and its lenient inverse.
//!
//! The rendered form is one `export NAME="VALUE"` statement per entry,
//! sorted by name, each terminated by a newline. Inside the quotes `"` and
//! `\` are escaped with a backslash, which keeps the text safe to `source`
//! and lets [`EnvCodec::parse`] undo the escaping exactly.

use super::vars::{is_valid_name, EnvVars};

/// Result of a parse that also records which lines were ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEnv {
    /// Entries that could be read.
    pub vars: EnvVars,
    /// 1-based line numbers of non-blank, non-comment lines that were skipped.
    pub skipped_lines: Vec<usize>,
}

impl ParsedEnv {
    /// Whether every meaningful line was understood.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_lines.is_empty()
    }
}

/// Converts between [`EnvVars`] and shell-export text.
///
/// # Examples
///
/// ```
/// use tenantenv::env::{EnvCodec, EnvVars};
///
/// let vars: EnvVars = [("S3_UPDATE_MINISIGN_PUBKEY", "key"), ("S3_UPDATE", "on")]
///     .into_iter()
///     .collect();
///
/// let text = EnvCodec::serialize(&vars);
/// assert_eq!(
///     text,
///     "export S3_UPDATE=\"on\"\nexport S3_UPDATE_MINISIGN_PUBKEY=\"key\"\n"
/// );
/// assert_eq!(EnvCodec::parse(&text), vars);
/// ```
pub struct EnvCodec;

impl EnvCodec {
    /// Renders `vars` as canonical export text.
    #[must_use]
    pub fn serialize(vars: &EnvVars) -> String {
        let mut out = String::new();
        for (name, value) in vars.iter() {
            out.push_str(&Self::format_export(name, value));
            out.push('\n');
        }
        out
    }

    /// Formats a single `export NAME="VALUE"` statement without a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenantenv::env::EnvCodec;
    ///
    /// assert_eq!(
    ///     EnvCodec::format_export("MSG", r#"say "hi" \o/"#),
    ///     r#"export MSG="say \"hi\" \\o/""#
    /// );
    /// ```
    #[must_use]
    pub fn format_export(name: &str, value: &str) -> String {
        format!("export {name}={}", Self::quote(value))
    }

    /// Wraps `value` in double quotes, escaping `"` and `\`.
    #[must_use]
    pub fn quote(value: &str) -> String {
        format!("\"{}\"", escape_value(value))
    }

    /// Parses export text into a collection.
    ///
    /// Leading spaces and tabs are ignored. Lines that are not a well-formed
    /// `export NAME="VALUE"` statement are skipped, and when a name appears
    /// more than once the last occurrence wins. Parsing never fails.
    #[must_use]
    pub fn parse(text: &str) -> EnvVars {
        Self::parse_with_report(text).vars
    }

    /// Parses raw persisted bytes; invalid UTF-8 is replaced, not rejected.
    #[must_use]
    pub fn parse_bytes(bytes: &[u8]) -> EnvVars {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// Like [`EnvCodec::parse`], but also reports the skipped lines.
    ///
    /// Blank lines and `#` comments are not reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenantenv::env::EnvCodec;
    ///
    /// let parsed = EnvCodec::parse_with_report("# header\nexport A=\"1\"\nA=2\n");
    /// assert_eq!(parsed.vars.get("A"), Some("1"));
    /// assert_eq!(parsed.skipped_lines, vec![3]);
    /// ```
    #[must_use]
    pub fn parse_with_report(text: &str) -> ParsedEnv {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut parsed = ParsedEnv::default();
        let mut idx = 0;

        while idx < lines.len() {
            let line = trim_indent(lines[idx]);
            if line.trim().is_empty() || line.starts_with('#') {
                idx += 1;
                continue;
            }

            match parse_statement(&lines[idx..]) {
                Some((name, value, consumed)) => {
                    parsed.vars.set(name, value);
                    idx += consumed;
                }
                None => {
                    log::debug!("skipping unreadable export line {}", idx + 1);
                    parsed.skipped_lines.push(idx + 1);
                    idx += 1;
                }
            }
        }

        parsed
    }
}

const INDENT: &[char] = &[' ', '\t'];

fn trim_indent(line: &str) -> &str {
    line.trim_start_matches(INDENT)
}

fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Parses one statement starting at `lines[0]`.
///
/// A quoted value may span lines; the returned count says how many lines
/// the statement used.
fn parse_statement(lines: &[&str]) -> Option<(String, String, usize)> {
    let first = trim_indent(lines.first()?);
    let rest = first.strip_prefix("export")?;
    let assignment = trim_indent(rest);
    if assignment.len() == rest.len() {
        return None;
    }

    let (name, quoted) = assignment.split_once('=')?;
    if !is_valid_name(name) {
        return None;
    }

    let mut body = quoted.strip_prefix('"')?;
    let mut value = String::new();
    let mut consumed = 1;
    loop {
        if let Some(tail) = unescape_until_quote(body, &mut value) {
            return tail
                .trim()
                .is_empty()
                .then(|| (name.to_string(), value, consumed));
        }
        body = *lines.get(consumed)?;
        value.push('\n');
        consumed += 1;
    }
}

/// Appends the unescaped contents of `body` up to the closing quote.
///
/// Returns the text after the closing quote, or `None` if the quote is not
/// closed on this line.
fn unescape_until_quote<'a>(body: &'a str, value: &mut String) -> Option<&'a str> {
    let mut chars = body.char_indices();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '"' => return Some(&body[idx + 1..]),
            '\\' => match chars.next() {
                Some((_, escaped @ ('"' | '\\'))) => value.push(escaped),
                Some((_, other)) => {
                    value.push('\\');
                    value.push(other);
                }
                None => value.push('\\'),
            },
            _ => value.push(ch),
        }
    }
    None
}
