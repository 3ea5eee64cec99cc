//! Template mini-language for a single URL component.
//!
//! # Syntax
//! - literal text, `\x` escapes one character
//! - `:name` named capture using the component's segment wildcard
//! - `:name(re)` named capture refined by a regular expression
//! - `(re)` anonymous refined capture, `*` anonymous full wildcard
//! - `{ prefix capture suffix }` group, followed by an optional modifier
//! - modifiers `?` (zero or one), `*` (zero or more), `+` (one or more)
//!
//! In the path component a capture directly preceded by `/` takes the `/`
//! as its prefix, so `/:mod*` matches the empty string as well as `/a/b`.
//!
//! # Design Decisions
//! - Compiled to one anchored regex at table build time, never re-parsed
//! - Captures become named regex groups, so refinements may contain their
//!   own groups without shifting indices
//! - Groups do not nest and hold at most one capture

use std::fmt;

use regex::Regex;
use thiserror::Error;

/// The URL component a template applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Scheme,
    Host,
    Path,
    Query,
    Fragment,
}

impl Component {
    /// Regex used by a capture that declares no refinement.
    fn segment_wildcard(self) -> &'static str {
        match self {
            Component::Host => r"[^.]+?",
            Component::Path => r"[^/]+?",
            Component::Scheme | Component::Query | Component::Fragment => r".+?",
        }
    }

    /// Delimiter a capture absorbs from the literal text before it.
    fn prefix_delimiter(self) -> Option<char> {
        match self {
            Component::Path => Some('/'),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Component::Scheme => "scheme",
            Component::Host => "host",
            Component::Path => "path",
            Component::Query => "query",
            Component::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while compiling a template.
#[derive(Debug, Clone, Error)]
pub enum TemplateError {
    #[error("unterminated group starting at offset {0}")]
    UnterminatedGroup(usize),

    #[error("nested group at offset {0}")]
    NestedGroup(usize),

    #[error("unbalanced '{ch}' at offset {offset}")]
    Unbalanced { ch: char, offset: usize },

    #[error("unterminated regex starting at offset {0}")]
    UnterminatedRegex(usize),

    #[error("empty regex at offset {0}")]
    EmptyRegex(usize),

    #[error("missing or malformed capture name at offset {0}")]
    MissingName(usize),

    #[error("capture `{0}` declared more than once")]
    DuplicateCapture(String),

    #[error("modifier '{ch}' at offset {offset} has nothing to apply to")]
    DanglingModifier { ch: char, offset: usize },

    #[error("group starting at offset {0} holds more than one capture")]
    CrowdedGroup(usize),

    #[error("modifier inside group at offset {0}")]
    ModifierInGroup(usize),

    #[error("repeated capture `{0}` must be the last part of the path")]
    RestNotLast(String),

    #[error("template ends with an escape character")]
    TrailingEscape,

    #[error("`{0}` is not a scheme://host/path template")]
    NotAUrlTemplate(String),

    #[error("invalid regex: {0}")]
    Regex(#[from] regex::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
    One,
    Optional,
    ZeroOrMore,
    OneOrMore,
}

impl Modifier {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(Modifier::Optional),
            '*' => Some(Modifier::ZeroOrMore),
            '+' => Some(Modifier::OneOrMore),
            _ => None,
        }
    }

    fn as_regex(self) -> &'static str {
        match self {
            Modifier::One => "",
            Modifier::Optional => "?",
            Modifier::ZeroOrMore => "*",
            Modifier::OneOrMore => "+",
        }
    }

    fn repeats(self) -> bool {
        matches!(self, Modifier::ZeroOrMore | Modifier::OneOrMore)
    }
}

#[derive(Debug, Clone)]
struct CapturePart {
    name: String,
    anonymous: bool,
    pattern: String,
    prefix: String,
    suffix: String,
    modifier: Modifier,
}

impl CapturePart {
    fn to_regex(&self) -> String {
        let name = &self.name;
        let pat = &self.pattern;
        if self.prefix.is_empty() && self.suffix.is_empty() {
            return match self.modifier {
                Modifier::One => format!("(?P<{name}>{pat})"),
                Modifier::Optional => format!("(?P<{name}>{pat})?"),
                Modifier::ZeroOrMore => format!("(?P<{name}>(?:{pat})*)"),
                Modifier::OneOrMore => format!("(?P<{name}>(?:{pat})+)"),
            };
        }

        let prefix = regex::escape(&self.prefix);
        let suffix = regex::escape(&self.suffix);
        match self.modifier {
            Modifier::One | Modifier::Optional => format!(
                "(?:{prefix}(?P<{name}>{pat}){suffix}){}",
                self.modifier.as_regex()
            ),
            Modifier::ZeroOrMore | Modifier::OneOrMore => {
                let optional = if self.modifier == Modifier::ZeroOrMore { "?" } else { "" };
                format!(
                    "(?:{prefix}(?P<{name}>(?:{pat})(?:{suffix}{prefix}(?:{pat}))*){suffix}){optional}"
                )
            }
        }
    }
}

#[derive(Debug, Clone)]
enum Part {
    Fixed { text: String, modifier: Modifier },
    Capture(CapturePart),
}

impl Part {
    fn to_regex(&self) -> String {
        match self {
            Part::Fixed { text, modifier: Modifier::One } => regex::escape(text),
            Part::Fixed { text, modifier } => {
                format!("(?:{}){}", regex::escape(text), modifier.as_regex())
            }
            Part::Capture(capture) => capture.to_regex(),
        }
    }
}

struct Parser {
    component: Component,
    chars: Vec<char>,
    pos: usize,
    pending: String,
    parts: Vec<Part>,
    names: Vec<String>,
    anonymous: usize,
}

impl Parser {
    fn new(component: Component, source: &str) -> Self {
        Self {
            component,
            chars: source.chars().collect(),
            pos: 0,
            pending: String::new(),
            parts: Vec::new(),
            names: Vec::new(),
            anonymous: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn parse(mut self) -> Result<(Vec<Part>, Vec<String>), TemplateError> {
        while let Some(c) = self.peek() {
            match c {
                '\\' => {
                    self.pos += 1;
                    let escaped = self.bump().ok_or(TemplateError::TrailingEscape)?;
                    self.pending.push(escaped);
                }
                ':' | '(' | '*' => {
                    let (name, pattern) = self.capture_token()?;
                    let modifier = self.modifier();
                    let prefix = self.take_prefix();
                    self.flush_pending();
                    self.push_capture(name, pattern, prefix, String::new(), modifier)?;
                }
                '{' => self.group()?,
                '}' | ')' => {
                    return Err(TemplateError::Unbalanced { ch: c, offset: self.pos });
                }
                '?' | '+' => {
                    return Err(TemplateError::DanglingModifier { ch: c, offset: self.pos });
                }
                _ => {
                    self.pending.push(c);
                    self.pos += 1;
                }
            }
        }
        self.flush_pending();
        Ok((self.parts, self.names))
    }

    /// Consumes `:name`, `:name(re)`, `(re)` or `*`.
    fn capture_token(&mut self) -> Result<(Option<String>, String), TemplateError> {
        match self.peek() {
            Some(':') => {
                self.pos += 1;
                let name = self.name()?;
                let pattern = if self.peek() == Some('(') {
                    self.regex()?
                } else {
                    self.component.segment_wildcard().to_string()
                };
                Ok((Some(name), pattern))
            }
            Some('(') => Ok((None, self.regex()?)),
            _ => {
                self.pos += 1;
                Ok((None, ".*".to_string()))
            }
        }
    }

    fn name(&mut self) -> Result<String, TemplateError> {
        let start = self.pos;
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c);
                self.pos += 1;
            } else {
                break;
            }
        }
        let first = name.chars().next();
        match first {
            Some(first) if first.is_ascii_alphabetic() => Ok(name),
            _ => Err(TemplateError::MissingName(start)),
        }
    }

    fn regex(&mut self) -> Result<String, TemplateError> {
        let start = self.pos;
        self.pos += 1;
        let mut depth = 1usize;
        let mut in_class = false;
        let mut pattern = String::new();
        loop {
            let c = self.bump().ok_or(TemplateError::UnterminatedRegex(start))?;
            match c {
                '\\' => {
                    pattern.push(c);
                    let escaped = self.bump().ok_or(TemplateError::UnterminatedRegex(start))?;
                    pattern.push(escaped);
                    continue;
                }
                '[' if !in_class => in_class = true,
                ']' if in_class => in_class = false,
                '(' if !in_class => depth += 1,
                ')' if !in_class => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            pattern.push(c);
        }
        if pattern.is_empty() {
            return Err(TemplateError::EmptyRegex(start));
        }
        Ok(pattern)
    }

    fn modifier(&mut self) -> Modifier {
        match self.peek().and_then(Modifier::from_char) {
            Some(modifier) => {
                self.pos += 1;
                modifier
            }
            None => Modifier::One,
        }
    }

    fn take_prefix(&mut self) -> String {
        match self.component.prefix_delimiter() {
            Some(delimiter) if self.pending.ends_with(delimiter) => {
                self.pending.pop();
                delimiter.to_string()
            }
            _ => String::new(),
        }
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.parts.push(Part::Fixed { text, modifier: Modifier::One });
        }
    }

    fn group(&mut self) -> Result<(), TemplateError> {
        let start = self.pos;
        self.pos += 1;
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut capture: Option<(Option<String>, String)> = None;

        loop {
            let c = self.peek().ok_or(TemplateError::UnterminatedGroup(start))?;
            match c {
                '}' => {
                    self.pos += 1;
                    break;
                }
                '{' => return Err(TemplateError::NestedGroup(self.pos)),
                ')' => return Err(TemplateError::Unbalanced { ch: c, offset: self.pos }),
                '\\' => {
                    self.pos += 1;
                    let escaped = self.bump().ok_or(TemplateError::TrailingEscape)?;
                    if capture.is_some() {
                        suffix.push(escaped);
                    } else {
                        prefix.push(escaped);
                    }
                }
                ':' | '(' | '*' => {
                    if capture.is_some() {
                        return Err(TemplateError::CrowdedGroup(start));
                    }
                    capture = Some(self.capture_token()?);
                    if matches!(self.peek(), Some('?' | '*' | '+')) {
                        return Err(TemplateError::ModifierInGroup(self.pos));
                    }
                }
                '?' | '+' => {
                    return Err(TemplateError::DanglingModifier { ch: c, offset: self.pos });
                }
                _ => {
                    if capture.is_some() {
                        suffix.push(c);
                    } else {
                        prefix.push(c);
                    }
                    self.pos += 1;
                }
            }
        }

        let modifier = self.modifier();
        self.flush_pending();
        match capture {
            Some((name, pattern)) => self.push_capture(name, pattern, prefix, suffix, modifier),
            None => {
                if !prefix.is_empty() {
                    self.parts.push(Part::Fixed { text: prefix, modifier });
                }
                Ok(())
            }
        }
    }

    fn push_capture(
        &mut self,
        name: Option<String>,
        pattern: String,
        prefix: String,
        suffix: String,
        modifier: Modifier,
    ) -> Result<(), TemplateError> {
        let (name, anonymous) = match name {
            Some(name) => {
                if self.names.contains(&name) {
                    return Err(TemplateError::DuplicateCapture(name));
                }
                self.names.push(name.clone());
                (name, false)
            }
            None => {
                let name = format!("_{}", self.anonymous);
                self.anonymous += 1;
                (name, true)
            }
        };
        self.parts.push(Part::Capture(CapturePart {
            name,
            anonymous,
            pattern,
            prefix,
            suffix,
            modifier,
        }));
        Ok(())
    }
}

/// A compiled component template.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    component: Component,
    regex: Regex,
    names: Vec<String>,
}

impl Template {
    /// Compile `source` for the given component.
    pub fn compile(component: Component, source: &str) -> Result<Self, TemplateError> {
        let (parts, names) = Parser::new(component, source).parse()?;

        if component == Component::Path {
            let last = parts.len().saturating_sub(1);
            for (index, part) in parts.iter().enumerate() {
                if let Part::Capture(capture) = part {
                    if capture.modifier.repeats() && index != last {
                        let label = if capture.anonymous { "*" } else { capture.name.as_str() };
                        return Err(TemplateError::RestNotLast(label.to_string()));
                    }
                }
            }
        }

        let mut pattern = String::from("^");
        for part in &parts {
            pattern.push_str(&part.to_regex());
        }
        pattern.push('$');

        Ok(Self {
            source: source.to_string(),
            component,
            regex: Regex::new(&pattern)?,
            names,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn component(&self) -> Component {
        self.component
    }

    /// Named captures in declaration order. Anonymous captures are not listed.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The generated anchored regex.
    pub fn as_regex(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Match `input` and return the named captures that participated.
    pub fn captures<'t, 'h>(&'t self, input: &'h str) -> Option<Vec<(&'t str, &'h str)>> {
        let caps = self.regex.captures(input)?;
        Some(
            self.names
                .iter()
                .filter_map(|name| caps.name(name).map(|m| (name.as_str(), m.as_str())))
                .collect(),
        )
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
