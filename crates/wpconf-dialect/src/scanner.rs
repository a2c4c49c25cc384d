//! Declaration scanner
//!
//! Locates constant and variable declarations with two line-anchored
//! patterns. The scan is a partial parse: only single-line declarations whose
//! value is either one quoted string or the shortest text up to the
//! terminator are recognised. Anything else is left alone and does not
//! appear in the result.
//!
//! Text is scanned as bytes so that files which are not valid UTF-8 (a
//! Latin-1 comment, say) can still be edited. Names and values are decoded
//! lossily; spans are byte ranges into the scanned buffer.

use crate::kind::Kind;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::ops::Range;

/// Quoted string first, otherwise the shortest run up to the terminator
const VALUE: &str = r#"('(?:[^'\\\n]|\\.)*'|"(?:[^"\\\n]|\\.)*"|.*?)"#;

static CONSTANT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"(?mi-u)^[ \t]*define[ \t]*\([ \t]*['"](\w+)['"][ \t]*,[ \t]*{VALUE}[ \t]*\)[ \t]*;"#
    ))
    .expect("constant pattern is valid")
});

static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?m-u)^[ \t]*\$(\w+)[ \t]*=[ \t]*{VALUE}[ \t]*;"))
        .expect("variable pattern is valid")
});

fn pattern(kind: Kind) -> &'static Regex {
    match kind {
        Kind::Constant => &CONSTANT_PATTERN,
        Kind::Variable => &VARIABLE_PATTERN,
    }
}

/// One declaration found by [`scan`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declaration form
    pub kind: Kind,
    /// Declared name, without quotes or `$`
    pub name: String,
    /// Right-hand side exactly as written, never evaluated
    pub value_text: String,
    /// Verbatim matched text, leading indentation and `;` included, line break excluded
    pub source_span: String,
    /// Byte range of `source_span` in the scanned text
    pub span: Range<usize>,
    /// Byte range of `value_text` in the scanned text
    pub value_span: Range<usize>,
}

impl Declaration {
    /// Byte range of the value relative to the start of `source_span`
    #[inline]
    #[must_use]
    pub fn value_range_in_span(&self) -> Range<usize> {
        self.value_span.start - self.span.start..self.value_span.end - self.span.start
    }
}

/// Result of looking a name up in a [`DeclarationMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Declaration present
    Found(&'a Declaration),
    /// Kind present, name absent
    Missing,
    /// Other declarations exist but none of this kind
    KindAbsent,
    /// Scan found no declarations at all
    Empty,
}

impl<'a> Lookup<'a> {
    /// The declaration, if found
    #[inline]
    #[must_use]
    pub fn declaration(self) -> Option<&'a Declaration> {
        match self {
            Lookup::Found(decl) => Some(decl),
            _ => None,
        }
    }

    /// Whether the declaration was found
    #[inline]
    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Declarations of one scan, by kind then name
///
/// Kinds without any match are absent. Only valid for the exact text it was
/// scanned from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationMap {
    kinds: IndexMap<Kind, IndexMap<String, Declaration>>,
}

impl DeclarationMap {
    /// Create empty map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration, replacing any earlier one with the same kind and name
    pub fn insert(&mut self, decl: Declaration) {
        self.kinds
            .entry(decl.kind)
            .or_default()
            .insert(decl.name.clone(), decl);
    }

    /// Look a name up, distinguishing the ways it can be absent
    #[must_use]
    pub fn lookup(&self, kind: Kind, name: &str) -> Lookup<'_> {
        if self.kinds.is_empty() {
            return Lookup::Empty;
        }
        match self.kinds.get(&kind) {
            None => Lookup::KindAbsent,
            Some(decls) => decls.get(name).map_or(Lookup::Missing, Lookup::Found),
        }
    }

    /// Get a declaration by kind and name
    #[inline]
    #[must_use]
    pub fn get(&self, kind: Kind, name: &str) -> Option<&Declaration> {
        self.lookup(kind, name).declaration()
    }

    /// Declarations of one kind, in first-seen order
    #[inline]
    #[must_use]
    pub fn of_kind(&self, kind: Kind) -> Option<&IndexMap<String, Declaration>> {
        self.kinds.get(&kind)
    }

    /// All declarations
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.kinds.values().flat_map(IndexMap::values)
    }

    /// Total number of declarations
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.values().map(IndexMap::len).sum()
    }

    /// Whether the scan found nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Scan text for declarations
///
/// Runs one pass per kind over the whole text. Matches are applied in source
/// order, so when a name is declared twice only the last occurrence survives.
#[must_use]
pub fn scan(text: impl AsRef<[u8]>) -> DeclarationMap {
    let text = text.as_ref();
    let mut map = DeclarationMap::new();

    for kind in Kind::ALL {
        for caps in pattern(kind).captures_iter(text) {
            let (Some(whole), Some(name), Some(value)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            map.insert(Declaration {
                kind,
                name: String::from_utf8_lossy(name.as_bytes()).into_owned(),
                value_text: String::from_utf8_lossy(value.as_bytes()).into_owned(),
                source_span: String::from_utf8_lossy(whole.as_bytes()).into_owned(),
                span: whole.range(),
                value_span: value.range(),
            });
        }
    }

    map
}
