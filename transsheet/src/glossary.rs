//! Glossary catalog and variable substitution.
//!
//! Game text embeds variables such as `@npc_Dragon@`: the part before the
//! first `_` is a prefix naming what kind of noun follows, the second
//! segment is the noun itself. Glossary rows are addressed by a
//! [`GlossaryKey`] made of an optional prefix and the original text, so
//! `@npc_Dragon@` looks up `(Some("npc"), "Dragon")` and `@Dragon@` looks up
//! `(None, "Dragon")`. Any further `_` in a token becomes `:` in the original
//! text: `@npc_Red_Dragon@` looks up `(Some("npc"), "Red:Dragon")`.
//! Keys print in their canonical `prefix:original` form.

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::{
    error::Error,
    formats::GlossaryRecord,
    traits::Parser,
    types::is_blank,
};

/// Delimiter wrapped around variables in game text.
pub const VARIABLE_DELIMITER: char = '@';
/// Separates the prefix from the noun inside a variable.
pub const TOKEN_SEPARATOR: char = '_';
/// Separates the prefix from the original text in canonical keys.
pub const KEY_SEPARATOR: char = ':';

lazy_static! {
    static ref DEFAULT_PATTERN: Regex = Regex::new(r"(?is)@.*?@").unwrap();
}

/// How a glossary variable is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConversionType {
    /// Keep the noun untranslated, dropping delimiters and prefix.
    #[default]
    None,
    AlwaysTranslate,
    NounTranslate,
}

impl ConversionType {
    /// Parses the glossary column value: `""`, `#` or `$`.
    pub fn from_sentinel(sentinel: &str) -> Result<Self, Error> {
        match sentinel {
            "" => Ok(ConversionType::None),
            "#" => Ok(ConversionType::AlwaysTranslate),
            "$" => Ok(ConversionType::NounTranslate),
            other => Err(Error::UnknownConversionType(other.to_string())),
        }
    }

    pub fn sentinel(&self) -> &'static str {
        match self {
            ConversionType::None => "",
            ConversionType::AlwaysTranslate => "#",
            ConversionType::NounTranslate => "$",
        }
    }
}

impl Display for ConversionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionType::None => write!(f, "none"),
            ConversionType::AlwaysTranslate => write!(f, "always"),
            ConversionType::NounTranslate => write!(f, "noun"),
        }
    }
}

impl FromStr for ConversionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ConversionType::None),
            "always" | "alwaystranslate" => Ok(ConversionType::AlwaysTranslate),
            "noun" | "nountranslate" => Ok(ConversionType::NounTranslate),
            other => Err(Error::UnknownConversionType(other.to_string())),
        }
    }
}

/// Address of a glossary row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlossaryKey {
    pub prefix: Option<String>,
    pub original: String,
}

impl GlossaryKey {
    /// A blank prefix means the key is unprefixed.
    pub fn new(prefix: &str, original: impl Into<String>) -> Self {
        GlossaryKey {
            prefix: (!is_blank(prefix)).then(|| prefix.to_string()),
            original: original.into(),
        }
    }

    /// Builds the key a variable token refers to, e.g. `@npc_Dragon@`.
    pub fn from_token(token: &str) -> Self {
        let name = strip_delimiters(token);
        match name.split_once(TOKEN_SEPARATOR) {
            Some((prefix, rest)) => {
                let original = rest.replace(TOKEN_SEPARATOR, &KEY_SEPARATOR.to_string());
                GlossaryKey::new(prefix, original)
            }
            None => GlossaryKey::new("", name),
        }
    }
}

impl Display for GlossaryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{}{}{}", prefix, KEY_SEPARATOR, self.original),
            None => write!(f, "{}", self.original),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub conversion_type: ConversionType,
    pub prefix: String,
    pub original: String,
    pub translated: String,
}

impl GlossaryEntry {
    pub fn new(
        conversion_type: ConversionType,
        prefix: impl Into<String>,
        original: impl Into<String>,
        translated: impl Into<String>,
    ) -> Self {
        GlossaryEntry {
            conversion_type,
            prefix: prefix.into(),
            original: original.into(),
            translated: translated.into(),
        }
    }

    pub fn key(&self) -> GlossaryKey {
        GlossaryKey::new(&self.prefix, self.original.clone())
    }
}

/// Result of a substitution pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    pub text: String,
    /// Whether the pattern found any variable at all.
    pub replaced: bool,
    /// Variables left in place because the glossary has no usable translation.
    pub unresolved: Vec<String>,
}

/// Glossary rows keyed by [`GlossaryKey`], in load order.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: IndexMap<GlossaryKey, GlossaryEntry>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: GlossaryEntry) -> Result<(), Error> {
        let key = entry.key();
        if self.entries.contains_key(&key) {
            return Err(Error::DuplicateGlossaryKey(key.to_string()));
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    /// Builds a glossary, failing if any key occurs more than once.
    ///
    /// Every duplicate is reported before the load fails, so one run shows
    /// all rows that need fixing.
    pub fn from_entries(entries: impl IntoIterator<Item = GlossaryEntry>) -> Result<Self, Error> {
        let mut glossary = Glossary::new();
        let mut count = 0;
        for entry in entries {
            if let Err(e) = glossary.add_entry(entry) {
                tracing::warn!("{}", e);
                count += 1;
            }
        }
        if count > 0 {
            return Err(Error::DuplicateGlossaryKeys { count });
        }
        Ok(glossary)
    }

    /// Loads a glossary CSV file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let records = Vec::<GlossaryRecord>::read_from(path)?;
        let entries = records
            .into_iter()
            .map(GlossaryEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let glossary = Glossary::from_entries(entries)?;
        tracing::debug!(path = %path.display(), entries = glossary.len(), "loaded glossary");
        Ok(glossary)
    }

    pub fn get(&self, key: &GlossaryKey) -> Option<&GlossaryEntry> {
        self.entries.get(key)
    }

    /// Finds the row a variable token refers to.
    pub fn lookup_token(&self, token: &str) -> Option<&GlossaryEntry> {
        self.get(&GlossaryKey::from_token(token))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlossaryEntry> {
        self.entries.values()
    }

    /// Rewrites the variables found in `text`.
    ///
    /// A blank `pattern` matches `@...@` lazily, across line breaks. Custom
    /// patterns are compiled case-insensitive with `.` matching newlines.
    /// Distinct tokens are processed in order of first appearance and every
    /// occurrence of a token is replaced literally.
    pub fn substitute(
        &self,
        text: &str,
        mode: ConversionType,
        pattern: &str,
    ) -> Result<Substitution, Error> {
        let custom;
        let regex = if is_blank(pattern) {
            &*DEFAULT_PATTERN
        } else {
            custom = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .dot_matches_new_line(true)
                .build()?;
            &custom
        };

        let mut tokens: Vec<&str> = Vec::new();
        for m in regex.find_iter(text) {
            if !tokens.contains(&m.as_str()) {
                tokens.push(m.as_str());
            }
        }

        let mut result = Substitution {
            text: text.to_string(),
            replaced: !tokens.is_empty(),
            unresolved: Vec::new(),
        };

        for token in tokens {
            let translated = self
                .lookup_token(token)
                .map(|entry| entry.translated.as_str())
                .filter(|t| !is_blank(t));
            let Some(translated) = translated else {
                result.unresolved.push(token.to_string());
                continue;
            };
            let replacement = match mode {
                ConversionType::None => bare_noun(token),
                ConversionType::AlwaysTranslate | ConversionType::NounTranslate => {
                    translated.to_string()
                }
            };
            result.text = result.text.replace(token, &replacement);
        }

        Ok(result)
    }
}

fn strip_delimiters(token: &str) -> String {
    token.replace(VARIABLE_DELIMITER, "")
}

/// The noun of a token: the second `_` segment, or the whole name.
fn bare_noun(token: &str) -> String {
    let name = strip_delimiters(token);
    match name.split(TOKEN_SEPARATOR).nth(1) {
        Some(noun) => noun.to_string(),
        None => name,
    }
}
