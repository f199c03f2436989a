//! Literal value serialization.
//!
//! [`Value`] models the scalar/array inputs that property defaults, constant
//! values and argument defaults accept, and renders them to their PHP literal
//! form. Nested arrays indent one level per depth; the indent level is passed
//! down by argument, so it is restored on every exit path by construction.

use crate::indent::Indent;

/// A literal value rendered into generated source.
///
/// Strings are run through [`is_expression`] at render time: strings that
/// look like expressions (a class-constant reference, a `$variable`, a bare
/// call) pass through verbatim, everything else is single-quoted. The check
/// is a heuristic by design — a string intended as literal text that happens
/// to match the expression grammar (say, `"Foo::class"` meant as prose) is
/// emitted unquoted. That imprecision is documented behavior, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// String data, subject to the expression heuristic above.
    String(String),
    /// Ordered key-value array; keys are values too.
    Array(Vec<(Value, Value)>),
}

impl Value {
    /// Create a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create an array value from ordered key-value entries.
    pub fn entries(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self::Array(entries.into_iter().collect())
    }

    /// Render the literal at the given indent level.
    pub fn render(&self, indent: Indent, level: i32) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::String(value) => {
                if is_expression(value) {
                    value.clone()
                } else {
                    quote(value)
                }
            }
            Self::Array(entries) => {
                let mut out = String::from("[");
                for (key, value) in entries {
                    out.push('\n');
                    out.push_str(&indent.prefix(level + 1));
                    out.push_str(&key.render(indent, level + 1));
                    out.push_str(" => ");
                    out.push_str(&value.render(indent, level + 1));
                    out.push(',');
                }
                out.push('\n');
                out.push_str(&indent.prefix(level));
                out.push(']');
                out
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Decide whether a string is a pass-through expression rather than data.
///
/// Accepted forms, and nothing else:
/// - the `null` / `true` / `false` literals (ASCII case-insensitive)
/// - numeric tokens, including a sign, a decimal part or a `0x` hex form
/// - variables (`$request`)
/// - class-constant and static references (`Foo::class`, `\app\Str::SNAKE`)
/// - bare calls with balanced parentheses (`time()`, `count($items)`)
/// - `SCREAMING_SNAKE` constants with at least one underscore (`PHP_EOL`)
///
/// A plain identifier is treated as data and quoted.
pub fn is_expression(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }
    if trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("false")
    {
        return true;
    }

    is_numeric(trimmed)
        || is_variable(trimmed)
        || is_constant_reference(trimmed)
        || is_call(trimmed)
        || is_bare_constant(trimmed)
}

fn is_numeric(token: &str) -> bool {
    let token = token.strip_prefix(['+', '-']).unwrap_or(token);
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    let mut saw_digit = false;
    let mut saw_dot = false;
    for c in token.chars() {
        match c {
            '0'..='9' => saw_digit = true,
            '.' if !saw_dot => saw_dot = true,
            _ => return false,
        }
    }
    saw_digit
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_variable(token: &str) -> bool {
    token
        .strip_prefix('$')
        .is_some_and(is_identifier)
}

fn is_constant_reference(token: &str) -> bool {
    let Some((path, constant)) = token.rsplit_once("::") else {
        return false;
    };
    let path = path.strip_prefix('\\').unwrap_or(path);
    !path.is_empty()
        && path.split('\\').all(is_identifier)
        && (constant == "class" || is_identifier(constant))
}

fn is_call(token: &str) -> bool {
    let Some(open) = token.find('(') else {
        return false;
    };
    if !is_identifier(&token[..open]) || !token.ends_with(')') {
        return false;
    }

    let mut depth = 0i32;
    for c in token[open..].chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

fn is_bare_constant(token: &str) -> bool {
    token.contains('_')
        && token
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase())
        && token
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
