//! Code reference identifiers (`cref` values).
//!
//! Identifiers are kept as written. The one-letter prefix (`T:`, `M:`, ...) is
//! parsed so a readable label can be derived, but nothing is resolved against
//! compiled metadata.

use serde::Serialize;
use std::fmt;

/// What an identifier's prefix says it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MemberKind {
    Namespace,
    Type,
    Method,
    Property,
    Field,
    Event,
    /// `!:` prefix, an identifier the compiler could not resolve.
    Error,
}

impl MemberKind {
    fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'N' => Some(MemberKind::Namespace),
            'T' => Some(MemberKind::Type),
            'M' => Some(MemberKind::Method),
            'P' => Some(MemberKind::Property),
            'F' => Some(MemberKind::Field),
            'E' => Some(MemberKind::Event),
            '!' => Some(MemberKind::Error),
            _ => None,
        }
    }
}

/// A code reference identifier such as `M:Ns.Type.Method(System.Int32)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MemberId {
    raw: String,
    kind: Option<MemberKind>,
}

impl MemberId {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let mut chars = raw.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(prefix), Some(':')) => MemberKind::from_prefix(prefix),
            _ => None,
        };
        MemberId { raw, kind }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// `None` when the identifier has no recognized prefix.
    pub fn kind(&self) -> Option<MemberKind> {
        self.kind
    }

    /// The identifier without its `X:` prefix.
    pub fn name(&self) -> &str {
        match self.kind {
            Some(_) => &self.raw[2..],
            None => &self.raw,
        }
    }

    /// A short label for the identifier.
    ///
    /// Types show their simple name, members show `Type.Member`, namespaces
    /// and unprefixed identifiers are shown as they are. Parameter lists and
    /// generic arity markers are dropped.
    pub fn display_name(&self) -> String {
        let kind = match self.kind {
            Some(kind) => kind,
            None => return self.raw.clone(),
        };
        let name = self.name();
        let without_params = name.split('(').next().unwrap_or(name);
        let segments: Vec<&str> = without_params
            .split('.')
            .map(|segment| segment.split('`').next().unwrap_or(segment))
            .filter(|segment| !segment.is_empty())
            .collect();

        match kind {
            MemberKind::Namespace | MemberKind::Error => name.to_string(),
            MemberKind::Type => segments.last().map(|s| s.to_string()).unwrap_or_default(),
            MemberKind::Method | MemberKind::Property | MemberKind::Field | MemberKind::Event => {
                match segments.as_slice() {
                    [] => String::new(),
                    [only] => only.to_string(),
                    [.., ty, "#ctor"] | [.., ty, "#cctor"] => ty.to_string(),
                    [.., ty, member] => format!("{ty}.{member}"),
                }
            }
        }
    }

    /// A Markdown-friendly anchor slug, e.g. `t-ns-foo` for `T:Ns.Foo`.
    pub fn anchor(&self) -> String {
        let mut slug = String::with_capacity(self.raw.len());
        for c in self.raw.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
            } else if !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.trim_matches('-').to_string()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
