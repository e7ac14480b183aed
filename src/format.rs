//! Template-driven rendering of a map's contents.
//!
//! [`format_mapping`] concatenates a prefix, one rendered fragment per
//! entry, and a suffix. Each fragment comes from an [`EntryTemplate`], a
//! runtime string holding exactly two `{}` placeholders: the first receives
//! the entry's key, the second its value, both via [`Display`]. Optional
//! first-entry and last-entry templates override the default one at the
//! edges of the iteration.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use map_ops::format::format_mapping;
//!
//! let map = BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]);
//! let rendered = format_mapping(
//!     &map,
//!     "[",
//!     Some("{}={}"),
//!     ", {}={}",
//!     Some(" and {}={}"),
//!     "]",
//! )
//! .unwrap();
//! assert_eq!(rendered, "[a=1, b=2 and c=3]");
//! ```

use std::fmt::Display;

use crate::error::{Error, TemplateError};
use crate::mapping::Mapping;

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Key,
    Value,
}

/// A parsed per-entry template with exactly two `{}` placeholders.
///
/// The first placeholder receives the entry's key, the second its value.
/// Literal braces are written `{{` and `}}`. Parsing happens once; a
/// template can then render any number of entries.
///
/// # Examples
///
/// ```rust
/// use map_ops::format::EntryTemplate;
///
/// let template = EntryTemplate::parse("{{{}: {}}}").unwrap();
/// assert_eq!(template.format(&"a", &1), "{a: 1}");
///
/// assert!(EntryTemplate::parse("{} only one placeholder").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTemplate {
    segments: Vec<Segment>,
}

impl EntryTemplate {
    /// Parses a template string.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::PlaceholderCount`] when the template does
    /// not contain exactly two `{}` placeholders, and
    /// [`TemplateError::UnbalancedBrace`] on a stray `{` or `}`.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut placeholders = 0_usize;

        let mut chars = template.char_indices().peekable();
        while let Some((position, ch)) = chars.next() {
            match ch {
                '{' => match chars.peek() {
                    Some(&(_, '{')) => {
                        chars.next();
                        literal.push('{');
                    }
                    Some(&(_, '}')) => {
                        chars.next();
                        if !literal.is_empty() {
                            segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        }
                        segments.push(if placeholders == 0 {
                            Segment::Key
                        } else {
                            Segment::Value
                        });
                        placeholders += 1;
                    }
                    _ => {
                        return Err(TemplateError::UnbalancedBrace {
                            template: template.to_owned(),
                            position,
                        });
                    }
                },
                '}' => match chars.peek() {
                    Some(&(_, '}')) => {
                        chars.next();
                        literal.push('}');
                    }
                    _ => {
                        return Err(TemplateError::UnbalancedBrace {
                            template: template.to_owned(),
                            position,
                        });
                    }
                },
                _ => literal.push(ch),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        if placeholders != 2 {
            return Err(TemplateError::PlaceholderCount {
                template: template.to_owned(),
                found: placeholders,
            });
        }
        Ok(Self { segments })
    }

    /// Renders one entry through the template.
    pub fn format<K, V>(&self, key: &K, value: &V) -> String
    where
        K: Display + ?Sized,
        V: Display + ?Sized,
    {
        let mut out = String::new();
        self.render(&mut out, key, value);
        out
    }

    fn render<K, V>(&self, out: &mut String, key: &K, value: &V)
    where
        K: Display + ?Sized,
        V: Display + ?Sized,
    {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Key => out.push_str(&key.to_string()),
                Segment::Value => out.push_str(&value.to_string()),
            }
        }
    }
}

/// Renders the contents of `map` as
/// `prefix + fragment(entry_1) + … + fragment(entry_n) + suffix`.
///
/// Entries are visited in the map's natural iteration order. Per 1-based
/// entry index:
///
/// - the first entry uses `first_entry_format` when supplied,
/// - the last entry uses `last_entry_format` when supplied,
/// - every other entry (and any entry whose optional template is absent)
///   uses `entry_format`.
///
/// On a single-entry map both edge rules apply to the same entry; the
/// first-entry rule is evaluated before the last-entry rule, so
/// `first_entry_format` wins. An empty map renders as `prefix + suffix`
/// without touching the templates at all.
///
/// `prefix` and `suffix` are literals, not templates. The map is only read.
///
/// # Errors
///
/// Returns [`Error::Template`] when the map is non-empty and any supplied
/// template fails to parse; all templates are parsed before the first entry
/// is rendered, so a failing call produces no partial output.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use map_ops::format::format_mapping;
///
/// let map = BTreeMap::from([("a", 1), ("b", 2)]);
/// let rendered = format_mapping(
///     &map,
///     "[",
///     Some("FIRST({}={})"),
///     "({}={})",
///     Some("LAST({}={})"),
///     "]",
/// )
/// .unwrap();
/// assert_eq!(rendered, "[FIRST(a=1)LAST(b=2)]");
/// ```
pub fn format_mapping<M>(
    map: &M,
    prefix: &str,
    first_entry_format: Option<&str>,
    entry_format: &str,
    last_entry_format: Option<&str>,
    suffix: &str,
) -> Result<String, Error>
where
    M: Mapping,
    M::Key: Display,
    M::Value: Display,
{
    if map.is_empty() {
        let mut out = String::from(prefix);
        out.push_str(suffix);
        return Ok(out);
    }

    let entry_template = EntryTemplate::parse(entry_format)?;
    let first_template = first_entry_format.map(EntryTemplate::parse).transpose()?;
    let last_template = last_entry_format.map(EntryTemplate::parse).transpose()?;

    let len = map.len();
    let mut out = String::from(prefix);
    for (idx, (key, value)) in map.entries().enumerate() {
        let template = match (idx, &first_template, &last_template) {
            (0, Some(first), _) => first,
            (idx, _, Some(last)) if idx + 1 == len => last,
            _ => &entry_template,
        };
        template.render(&mut out, key, value);
    }
    out.push_str(suffix);
    Ok(out)
}
