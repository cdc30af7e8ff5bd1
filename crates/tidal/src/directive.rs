//! Line-oriented comment directives embedded in migration scripts.
//!
//! Two directives are recognised, one per physical line, case-insensitively and with
//! surrounding whitespace tolerated:
//!
//! * `-- package: <identifier>` names the package a migration belongs to.
//! * `-- migrate: up|down|end` opens (or closes) a region of the script.
//!
//! Everything else is opaque text; no SQL is parsed.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Whitespace and word characters are ASCII only: `--\u{a0}migrate: up` is script text.
static PACKAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[\t\n\f\r ]*--[\t\n\f\r ]+package:[\t\n\f\r ]+((?-u:\w)+)[\t\n\f\r ]*$")
        .expect("package pattern compiles")
});

static MIGRATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[\t\n\f\r ]*--[\t\n\f\r ]+migrate:[\t\n\f\r ]+(up|down|end)[\t\n\f\r ]*$")
        .expect("migrate pattern compiles")
});

/// The keyword of a `-- migrate:` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Up,
    Down,
    End,
}

impl Directive {
    /// Parses a directive keyword, ignoring case.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword.eq_ignore_ascii_case("up") {
            Some(Self::Up)
        } else if keyword.eq_ignore_ascii_case("down") {
            Some(Self::Down)
        } else if keyword.eq_ignore_ascii_case("end") {
            Some(Self::End)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the identifier of a `-- package: <identifier>` line.
#[must_use]
pub fn package_name(line: &str) -> Option<&str> {
    PACKAGE_RE.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Returns the keyword of a `-- migrate: up|down|end` line.
#[must_use]
pub fn migrate_directive(line: &str) -> Option<Directive> {
    MIGRATE_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .and_then(|m| Directive::from_keyword(m.as_str()))
}

/// Collects the lines of every region opened by the target directive.
///
/// A single flag tracks whether the scanner is inside a target region. Directive lines
/// flip the flag and are never emitted; `end` always closes. The accumulator is shared by
/// all occurrences of the target, so repeated regions are concatenated in document order.
///
/// ```rust
/// use tidal::directive::{Directive, Section};
///
/// let mut up = Section::new(Directive::Up);
/// for line in ["-- migrate: up", "A;", "-- migrate: down", "B;", "-- migrate: up", "C;"] {
///     up.feed(line);
/// }
/// assert_eq!(up.finish(), "A;\nC;\n");
/// ```
#[derive(Debug)]
pub struct Section {
    target: Directive,
    active: bool,
    buf: String,
}

impl Section {
    #[must_use]
    pub const fn new(target: Directive) -> Self {
        Self { target, active: false, buf: String::new() }
    }

    /// Processes one line, without its terminator.
    pub fn feed(&mut self, line: &str) {
        if let Some(directive) = migrate_directive(line) {
            self.active = directive != Directive::End && directive == self.target;
            return;
        }

        if self.active {
            self.buf.push_str(line);
            self.buf.push('\n');
        }
    }

    /// Returns everything collected so far; EOF implicitly closes an open region.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}
