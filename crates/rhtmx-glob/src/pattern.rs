//! Extended glob patterns
//!
//! Pure parsing and matching of the glob dialect used by the route
//! conventions. All functions are **pure**: same input → same output, and
//! nothing here touches the filesystem.
//!
//! # Syntax
//!
//! | Syntax | Meaning |
//! |---|---|
//! | `*` | any run of characters inside one path segment |
//! | `?` | exactly one character |
//! | `**` | (whole segment) zero or more directories |
//! | `[abc]`, `[a-z]`, `[!a]` | character classes |
//! | `{a,b}` | brace alternation |
//! | `(a\|b)`, `@(a\|b)` | exactly one of the alternatives |
//! | `?(a\|b)` | zero or one |
//! | `*(a\|b)` | zero or more |
//! | `+(a\|b)` | one or more |
//! | `!(a\|b)` | anything matching none of the alternatives |
//! | `\x` | literal `x` |
//!
//! Segments starting with `.` are only matched by pattern segments that
//! start with a literal `.`, and `**` never crosses a dot-directory.

use std::borrow::Cow;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Errors raised while parsing a pattern
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// A `(`, `{` group was opened and never closed
    #[error("unclosed '{open}' starting at offset {offset}")]
    UnclosedGroup { open: char, offset: usize },

    /// The pattern is empty
    #[error("empty pattern")]
    Empty,
}

/// How many times a group's alternatives may repeat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// `(a|b)`, `@(a|b)`, `{a,b}`
    ExactlyOne,
    /// `?(a|b)`
    ZeroOrOne,
    /// `*(a|b)`
    ZeroOrMore,
    /// `+(a|b)`
    OneOrMore,
    /// `!(a|b)`
    Not,
}

#[derive(Debug, Clone, PartialEq)]
enum ClassItem {
    Char(char),
    Range(char, char),
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Literal(char),
    AnyChar,
    AnyRun,
    Class { negated: bool, items: Vec<ClassItem> },
    Group { kind: GroupKind, alternatives: Vec<Vec<Token>> },
}

/// Matcher for a single path segment (the text between two `/`)
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentMatcher {
    source: String,
    tokens: Vec<Token>,
    explicit_dot: bool,
    literal: Option<String>,
}

impl SegmentMatcher {
    fn parse(source: &str, offset: usize) -> Result<Self, PatternError> {
        let chars: Vec<char> = source.chars().collect();
        let mut pos = 0;
        let tokens = parse_sequence(&chars, &mut pos, &[], offset)?;

        let literal = tokens
            .iter()
            .map(|token| match token {
                Token::Literal(c) => Some(*c),
                _ => None,
            })
            .collect::<Option<String>>();

        Ok(Self {
            source: source.to_string(),
            explicit_dot: matches!(tokens.first(), Some(Token::Literal('.'))),
            tokens,
            literal,
        })
    }

    fn literal(name: &str) -> Self {
        Self {
            source: name.to_string(),
            tokens: name.chars().map(Token::Literal).collect(),
            explicit_dot: name.starts_with('.'),
            literal: Some(name.to_string()),
        }
    }

    /// The segment text as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the segment text if it contains no glob syntax
    pub fn as_literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Matches a single file or directory name
    pub fn matches(&self, name: &str) -> bool {
        if name.starts_with('.') && !self.explicit_dot {
            return false;
        }

        if let Some(literal) = &self.literal {
            return literal == name;
        }

        let chars: Vec<char> = name.chars().collect();
        match_tokens(&self.tokens, &chars)
    }
}

/// One `/`-separated piece of a pattern
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// `**`
    Globstar,
    /// Anything else
    Name(SegmentMatcher),
}

impl Segment {
    fn is_literal(&self) -> bool {
        matches!(self, Segment::Name(m) if m.literal.is_some())
    }
}

/// A parsed glob pattern
///
/// # Examples
///
/// ```
/// use rhtmx_glob::Pattern;
///
/// let pattern = Pattern::parse("/app/routes/**/!(_*|*.test).(ts|mdx)").unwrap();
/// assert!(pattern.matches_path("/app/routes/blog/post.mdx"));
/// assert!(!pattern.matches_path("/app/routes/_middleware.ts"));
/// assert!(!pattern.matches_path("/app/routes/about.test.ts"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    source: String,
    absolute: bool,
    // Where the literal prefix starts, and how many leading segments it covers
    root: PathBuf,
    root_len: usize,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern string
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        if source.is_empty() {
            return Err(PatternError::Empty);
        }

        let absolute = source.starts_with('/');
        let mut segments = Vec::new();

        for (offset, piece) in split_segments(source) {
            match piece {
                "" | "." => continue,
                "**" => {
                    // Consecutive globstars behave like one
                    if segments.last() != Some(&Segment::Globstar) {
                        segments.push(Segment::Globstar);
                    }
                }
                _ => segments.push(Segment::Name(SegmentMatcher::parse(piece, offset)?)),
            }
        }

        Ok(Self {
            source: source.to_string(),
            absolute,
            root: if absolute { PathBuf::from("/") } else { PathBuf::new() },
            root_len: 0,
            segments,
        })
    }

    /// The pattern text as given
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern starts at the filesystem root
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Anchors a relative pattern at `base`, leaving absolute patterns alone
    ///
    /// Base components are treated literally, so glob characters in the
    /// directory name are not interpreted.
    pub fn anchored_at(&self, base: &Path) -> Self {
        if self.absolute {
            return self.clone();
        }

        let mut root = PathBuf::new();
        let mut root_len = 0;
        let mut segments = Vec::new();

        for component in base.components() {
            match component {
                Component::Prefix(prefix) => {
                    root.push(prefix.as_os_str());
                    root_len += 1;
                    segments.push(Segment::Name(SegmentMatcher::literal(
                        &prefix.as_os_str().to_string_lossy(),
                    )));
                }
                Component::RootDir => root.push(component.as_os_str()),
                Component::CurDir => {}
                Component::ParentDir | Component::Normal(_) => segments.push(Segment::Name(
                    SegmentMatcher::literal(&component.as_os_str().to_string_lossy()),
                )),
            }
        }
        segments.extend(self.segments.iter().cloned());

        Self {
            source: format!("{}/{}", base.display(), self.source),
            absolute: base.has_root(),
            root,
            root_len,
            segments,
        }
    }

    /// The longest directory made only of literal segments
    ///
    /// Traversal starts here; nothing outside it can match.
    pub fn literal_prefix(&self) -> PathBuf {
        let mut prefix = self.root.clone();

        for segment in self
            .segments
            .iter()
            .take_while(|s| s.is_literal())
            .skip(self.root_len)
        {
            if let Segment::Name(SegmentMatcher {
                literal: Some(name),
                ..
            }) = segment
            {
                prefix.push(name);
            }
        }

        prefix
    }

    /// How deep below [`Pattern::literal_prefix`] a match can lie
    ///
    /// `None` when the pattern contains `**`.
    pub fn max_depth(&self) -> Option<usize> {
        let rest = &self.segments[self.literal_len()..];
        if rest.contains(&Segment::Globstar) {
            None
        } else {
            Some(rest.len())
        }
    }

    /// Whether every segment is literal
    pub fn is_literal(&self) -> bool {
        self.literal_len() == self.segments.len()
    }

    /// Returns a copy that also matches everything below the pattern
    pub fn with_contents(&self) -> Self {
        let mut expanded = self.clone();
        expanded.segments.push(Segment::Globstar);
        expanded.segments.push(Segment::Name(SegmentMatcher {
            source: "*".to_string(),
            tokens: vec![Token::AnyRun],
            explicit_dot: false,
            literal: None,
        }));
        expanded.source = format!("{}/**/*", self.source.trim_end_matches('/'));
        expanded
    }

    /// Whether anything below [`Pattern::literal_prefix`] can match a name
    /// starting with `.`
    ///
    /// When false, hidden entries below the prefix can be skipped entirely.
    pub fn names_dot_entries(&self) -> bool {
        self.segments[self.literal_len()..]
            .iter()
            .any(|segment| matches!(segment, Segment::Name(m) if m.explicit_dot))
    }

    /// Matches a filesystem path component by component
    ///
    /// Unlike [`Pattern::matches_path`], separators inside a component are
    /// never treated as segment boundaries.
    pub fn matches(&self, path: &Path) -> bool {
        let names: Vec<Cow<'_, str>> = path
            .components()
            .filter_map(|component| match component {
                Component::Prefix(_) | Component::ParentDir | Component::Normal(_) => {
                    Some(component.as_os_str().to_string_lossy())
                }
                Component::RootDir | Component::CurDir => None,
            })
            .collect();
        let names: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();

        match_segments(&self.segments, &names)
    }

    /// Matches a `/` or `\` separated path against the pattern
    pub fn matches_path(&self, path: &str) -> bool {
        let names: Vec<&str> = path
            .split(['/', '\\'])
            .filter(|name| !name.is_empty() && *name != ".")
            .collect();
        match_segments(&self.segments, &names)
    }

    fn literal_len(&self) -> usize {
        self.segments.iter().take_while(|s| s.is_literal()).count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Splits on `/` outside of groups and classes, keeping byte offsets
fn split_segments(source: &str) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut escaped = false;

    for (idx, c) in source.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '(' | '{' => depth += 1,
            ')' | '}' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => {
                pieces.push((start, &source[start..idx]));
                start = idx + 1;
            }
            _ => {}
        }
    }
    pieces.push((start, &source[start..]));
    pieces
}

/// Parses tokens until one of `stop` is found at the current level
fn parse_sequence(
    chars: &[char],
    pos: &mut usize,
    stop: &[char],
    offset: usize,
) -> Result<Vec<Token>, PatternError> {
    let mut tokens = Vec::new();

    while let Some(&c) = chars.get(*pos) {
        if stop.contains(&c) {
            break;
        }

        let next = chars.get(*pos + 1).copied();
        match (c, next) {
            ('\\', Some(escaped)) => {
                tokens.push(Token::Literal(escaped));
                *pos += 2;
            }
            ('!' | '@' | '?' | '*' | '+', Some('(')) => {
                let kind = match c {
                    '!' => GroupKind::Not,
                    '@' => GroupKind::ExactlyOne,
                    '?' => GroupKind::ZeroOrOne,
                    '*' => GroupKind::ZeroOrMore,
                    _ => GroupKind::OneOrMore,
                };
                *pos += 2;
                let alternatives = parse_alternatives(chars, pos, '|', ')', offset)?;
                tokens.push(Token::Group { kind, alternatives });
            }
            ('(', _) => {
                *pos += 1;
                let alternatives = parse_alternatives(chars, pos, '|', ')', offset)?;
                tokens.push(Token::Group {
                    kind: GroupKind::ExactlyOne,
                    alternatives,
                });
            }
            ('{', _) => {
                *pos += 1;
                let alternatives = parse_alternatives(chars, pos, ',', '}', offset)?;
                tokens.push(Token::Group {
                    kind: GroupKind::ExactlyOne,
                    alternatives,
                });
            }
            ('[', _) => match parse_class(chars, *pos) {
                Some((token, end)) => {
                    tokens.push(token);
                    *pos = end;
                }
                None => {
                    tokens.push(Token::Literal('['));
                    *pos += 1;
                }
            },
            ('*', _) => {
                if tokens.last() != Some(&Token::AnyRun) {
                    tokens.push(Token::AnyRun);
                }
                *pos += 1;
            }
            ('?', _) => {
                tokens.push(Token::AnyChar);
                *pos += 1;
            }
            _ => {
                tokens.push(Token::Literal(c));
                *pos += 1;
            }
        }
    }

    Ok(tokens)
}

/// Parses `alt{sep}alt{sep}...{close}`, with `pos` just past the opener
fn parse_alternatives(
    chars: &[char],
    pos: &mut usize,
    separator: char,
    close: char,
    offset: usize,
) -> Result<Vec<Vec<Token>>, PatternError> {
    let open_at = pos.saturating_sub(1);
    let mut alternatives = Vec::new();

    loop {
        let alternative = parse_sequence(chars, pos, &[separator, close], offset)?;
        alternatives.push(alternative);

        match chars.get(*pos) {
            Some(&c) if c == separator => *pos += 1,
            Some(&c) if c == close => {
                *pos += 1;
                return Ok(alternatives);
            }
            _ => {
                return Err(PatternError::UnclosedGroup {
                    open: if close == '}' { '{' } else { '(' },
                    offset: offset + open_at,
                })
            }
        }
    }
}

/// Parses `[...]` starting at `start`; returns the token and the index past `]`
fn parse_class(chars: &[char], start: usize) -> Option<(Token, usize)> {
    let mut pos = start + 1;
    let negated = matches!(chars.get(pos).copied(), Some('!' | '^'));
    if negated {
        pos += 1;
    }

    let mut items = Vec::new();
    let mut first = true;

    loop {
        let c = *chars.get(pos)?;
        if c == ']' && !first {
            return Some((Token::Class { negated, items }, pos + 1));
        }
        first = false;

        let c = if c == '\\' {
            pos += 1;
            *chars.get(pos)?
        } else {
            c
        };

        match (chars.get(pos + 1).copied(), chars.get(pos + 2).copied()) {
            (Some('-'), Some(end)) if end != ']' => {
                items.push(ClassItem::Range(c, end));
                pos += 3;
            }
            _ => {
                items.push(ClassItem::Char(c));
                pos += 1;
            }
        }
    }
}

fn match_segments(segments: &[Segment], names: &[&str]) -> bool {
    match segments.split_first() {
        None => names.is_empty(),
        Some((Segment::Globstar, rest)) => {
            for skip in 0..=names.len() {
                if match_segments(rest, &names[skip..]) {
                    return true;
                }
                if names.get(skip).is_some_and(|name| name.starts_with('.')) {
                    return false;
                }
            }
            false
        }
        Some((Segment::Name(matcher), rest)) => names
            .split_first()
            .is_some_and(|(name, tail)| matcher.matches(name) && match_segments(rest, tail)),
    }
}

fn match_tokens(tokens: &[Token], input: &[char]) -> bool {
    let Some((head, rest)) = tokens.split_first() else {
        return input.is_empty();
    };

    match head {
        Token::Literal(c) => input.first() == Some(c) && match_tokens(rest, &input[1..]),
        Token::AnyChar => !input.is_empty() && match_tokens(rest, &input[1..]),
        Token::AnyRun => (0..=input.len()).any(|i| match_tokens(rest, &input[i..])),
        Token::Class { negated, items } => input.first().is_some_and(|c| {
            let hit = items.iter().any(|item| match item {
                ClassItem::Char(x) => x == c,
                ClassItem::Range(lo, hi) => (*lo..=*hi).contains(c),
            });
            hit != *negated
        }) && match_tokens(rest, &input[1..]),
        Token::Group { kind, alternatives } => match kind {
            GroupKind::ExactlyOne => (0..=input.len()).any(|i| {
                matches_any(alternatives, &input[..i]) && match_tokens(rest, &input[i..])
            }),
            GroupKind::ZeroOrOne => {
                match_tokens(rest, input)
                    || (0..=input.len()).any(|i| {
                        matches_any(alternatives, &input[..i]) && match_tokens(rest, &input[i..])
                    })
            }
            GroupKind::ZeroOrMore => match_repeated(alternatives, 0, rest, input),
            GroupKind::OneOrMore => match_repeated(alternatives, 1, rest, input),
            GroupKind::Not => (0..=input.len()).any(|i| {
                !matches_any(alternatives, &input[..i]) && match_tokens(rest, &input[i..])
            }),
        },
    }
}

fn matches_any(alternatives: &[Vec<Token>], input: &[char]) -> bool {
    alternatives.iter().any(|alt| match_tokens(alt, input))
}

fn match_repeated(alternatives: &[Vec<Token>], min: usize, rest: &[Token], input: &[char]) -> bool {
    if min == 0 && match_tokens(rest, input) {
        return true;
    }

    (1..=input.len()).any(|i| {
        matches_any(alternatives, &input[..i])
            && match_repeated(alternatives, min.saturating_sub(1), rest, &input[i..])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ROUTES: &str = "/app/routes/**/!(_*|$*|*.test|*.spec).(ts|tsx|md|mdx)";
    const WELL_KNOWN: &str = "/app/routes/.well-known/**/!(_*|$*|*.test|*.spec).(ts|tsx|md|mdx)";

    #[rstest]
    #[case("/app/routes/index.ts", true)]
    #[case("/app/routes/about.mdx", true)]
    #[case("/app/routes/blog/post.md", true)]
    #[case("/app/routes/blog/[slug].tsx", true)]
    #[case("/app/routes/a.b.ts", true)]
    #[case("/app/routes/_middleware.ts", false)]
    #[case("/app/routes/blog/_renderer.tsx", false)]
    #[case("/app/routes/$counter.tsx", false)]
    #[case("/app/routes/about.test.ts", false)]
    #[case("/app/routes/about.spec.tsx", false)]
    #[case("/app/routes/about.js", false)]
    #[case("/app/routes/.well-known/security.txt.ts", false)]
    #[case("/app/routes/.hidden.ts", false)]
    #[case("/app/components/button.tsx", false)]
    fn test_routes_pattern(#[case] path: &str, #[case] expected: bool) {
        let pattern = Pattern::parse(ROUTES).unwrap();
        assert_eq!(pattern.matches_path(path), expected, "{}", path);
    }

    #[rstest]
    #[case("/app/routes/.well-known/security.txt.ts", true)]
    #[case("/app/routes/.well-known/nested/openid.tsx", true)]
    #[case("/app/routes/.well-known/_hidden.ts", false)]
    #[case("/app/routes/about.ts", false)]
    fn test_well_known_pattern(#[case] path: &str, #[case] expected: bool) {
        let pattern = Pattern::parse(WELL_KNOWN).unwrap();
        assert_eq!(pattern.matches_path(path), expected, "{}", path);
    }

    #[rstest]
    #[case("/app/routes/**/_404.(ts|tsx)", "/app/routes/_404.ts", true)]
    #[case("/app/routes/**/_404.(ts|tsx)", "/app/routes/deep/er/_404.tsx", true)]
    #[case("/app/routes/**/_404.(ts|tsx)", "/app/routes/_404.mdx", false)]
    #[case("/app/routes/**/_renderer.tsx", "/app/routes/_renderer.ts", false)]
    #[case("src/*.{rs,toml}", "src/lib.rs", true)]
    #[case("src/*.{rs,toml}", "src/nested/lib.rs", false)]
    #[case("file[0-9].txt", "file7.txt", true)]
    #[case("file[!0-9].txt", "file7.txt", false)]
    #[case("file?.txt", "file10.txt", false)]
    #[case("+(ab).txt", "ababab.txt", true)]
    #[case("x*(ab).txt", "x.txt", true)]
    #[case("?(x)y", "y", true)]
    #[case("\\*.txt", "*.txt", true)]
    #[case("\\*.txt", "a.txt", false)]
    fn test_pattern_semantics(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
        let parsed = Pattern::parse(pattern).unwrap();
        assert_eq!(parsed.matches_path(path), expected, "{} vs {}", pattern, path);
    }

    #[test]
    fn test_dot_segments_need_explicit_dot() {
        let star = Pattern::parse("*").unwrap();
        assert!(!star.matches_path(".env"));

        let dotted = Pattern::parse(".*").unwrap();
        assert!(dotted.matches_path(".env"));
    }

    #[test]
    fn test_literal_prefix_and_depth() {
        let pattern = Pattern::parse("/proj/app/routes/**/_404.(ts|tsx)").unwrap();
        assert_eq!(pattern.literal_prefix(), PathBuf::from("/proj/app/routes"));
        assert_eq!(pattern.max_depth(), None);

        let shallow = Pattern::parse("/proj/app/*.ts").unwrap();
        assert_eq!(shallow.literal_prefix(), PathBuf::from("/proj/app"));
        assert_eq!(shallow.max_depth(), Some(1));
    }

    #[test]
    fn test_duplicate_separators_are_ignored() {
        let pattern = Pattern::parse("/proj//app/routes/*.ts").unwrap();
        assert_eq!(pattern.literal_prefix(), PathBuf::from("/proj/app/routes"));
        assert!(pattern.matches_path("/proj/app/routes/index.ts"));
    }

    #[test]
    fn test_anchored_at_base() {
        let pattern = Pattern::parse("app/*.ts").unwrap();
        let anchored = pattern.anchored_at(Path::new("/proj"));
        assert!(anchored.is_absolute());
        assert_eq!(anchored.literal_prefix(), PathBuf::from("/proj/app"));
        assert!(anchored.matches_path("/proj/app/main.ts"));
        assert!(!anchored.matches_path("/other/app/main.ts"));
    }

    #[test]
    fn test_literal_base_keeps_glob_characters() {
        let pattern = Pattern::parse("*.ts").unwrap();
        let anchored = pattern.anchored_at(Path::new("/work/[draft]"));
        assert!(anchored.matches_path("/work/[draft]/a.ts"));
        assert!(!anchored.matches_path("/work/d/a.ts"));
    }

    #[test]
    fn test_backslash_base_is_one_literal_anchor() {
        let base = Path::new(r"C:\proj");
        let pattern = Pattern::parse("app/routes/**/_404.(ts|tsx)")
            .unwrap()
            .anchored_at(base);

        assert_eq!(pattern.literal_prefix(), base.join("app").join("routes"));
        assert!(pattern.matches(&base.join("app").join("routes").join("_404.ts")));
        assert!(pattern.matches(&base.join("app").join("routes").join("deep").join("_404.tsx")));
        assert!(!pattern.matches(&base.join("app").join("routes").join("index.ts")));
    }

    #[test]
    fn test_base_with_glob_characters_is_literal() {
        let base = Path::new("/home/u/site (copy)");
        let pattern = Pattern::parse("app/routes/**/_404.(ts|tsx)")
            .unwrap()
            .anchored_at(base);

        assert_eq!(pattern.literal_prefix(), PathBuf::from("/home/u/site (copy)/app/routes"));
        assert!(pattern.matches(Path::new("/home/u/site (copy)/app/routes/_404.ts")));
        assert!(!pattern.matches(Path::new("/home/u/site copy/app/routes/_404.ts")));
    }

    #[test]
    fn test_names_dot_entries() {
        let routes = Pattern::parse(ROUTES).unwrap();
        assert!(!routes.names_dot_entries());

        // The dot segment is part of the literal prefix
        let well_known = Pattern::parse(WELL_KNOWN).unwrap();
        assert!(!well_known.names_dot_entries());

        let hidden = Pattern::parse("/proj/**/.cache/*.json").unwrap();
        assert!(hidden.names_dot_entries());
    }

    #[test]
    fn test_with_contents() {
        let pattern = Pattern::parse("/proj/app").unwrap();
        assert!(pattern.is_literal());
        assert!(!pattern.matches_path("/proj/app/routes/index.ts"));
        assert!(pattern.with_contents().matches_path("/proj/app/routes/index.ts"));
    }

    #[test]
    fn test_invalid_patterns() {
        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert!(matches!(
            Pattern::parse("/app/(ts|tsx"),
            Err(PatternError::UnclosedGroup { open: '(', .. })
        ));
        assert!(matches!(
            Pattern::parse("*.{ts,tsx"),
            Err(PatternError::UnclosedGroup { open: '{', .. })
        ));
    }

    #[test]
    fn test_unclosed_class_is_literal() {
        let pattern = Pattern::parse("[abc.txt").unwrap();
        assert!(pattern.matches_path("[abc.txt"));
    }
}
