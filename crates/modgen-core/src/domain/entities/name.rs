//! Name derivation.
//!
//! Every scaffolding operation starts from one raw name and needs it in
//! half a dozen shapes: class names, file names, route segments, table
//! names, namespaces. [`NameVariantSet::derive`] computes all of them once,
//! up front, so the rest of the pipeline never re-interprets strings.

use crate::domain::error::DomainError;

/// All casing and pluralization variants of one name.
///
/// Derivation normalizes its input, so `"blog_post"`, `"blog-post"`,
/// `"BlogPost"` and `"blogPost"` all produce the same set. Derivation is
/// pure: no I/O, no clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariantSet {
    studly: String,
    camel: String,
    kebab: String,
    kebab_plural: String,
    snake: String,
    snake_plural: String,
    namespace_path: String,
}

impl NameVariantSet {
    /// Derives the full variant set from a raw name.
    ///
    /// Accepts letters, digits, spaces, `-` and `_`; the first letter of
    /// the name must be alphabetic (the studly form becomes a class name).
    pub fn derive(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_')))
        {
            return Err(DomainError::InvalidName {
                name: trimmed.to_string(),
                reason: format!("unsupported character '{bad}'"),
            });
        }

        let words = split_words(trimmed);
        let Some(first) = words.first() else {
            return Err(DomainError::InvalidName {
                name: trimmed.to_string(),
                reason: "no letters or digits".to_string(),
            });
        };
        if !first.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidName {
                name: trimmed.to_string(),
                reason: "must start with a letter".to_string(),
            });
        }

        let studly: String = words.iter().map(|w| capitalize(w)).collect();
        let camel = format!(
            "{}{}",
            words[0],
            words[1..].iter().map(|w| capitalize(w)).collect::<String>()
        );
        let kebab = words.join("-");
        let snake = words.join("_");
        let kebab_plural = pluralize(&kebab);
        let snake_plural = pluralize(&snake);
        let namespace_path = format!("App\\Modules\\{studly}");

        Ok(Self {
            studly,
            camel,
            kebab,
            kebab_plural,
            snake,
            snake_plural,
            namespace_path,
        })
    }

    /// `BlogPost`
    pub fn studly(&self) -> &str {
        &self.studly
    }

    /// `blogPost`
    pub fn camel(&self) -> &str {
        &self.camel
    }

    /// `blog-post`
    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    /// `blog-posts`
    pub fn kebab_plural(&self) -> &str {
        &self.kebab_plural
    }

    /// `blog_post`
    pub fn snake(&self) -> &str {
        &self.snake
    }

    /// `blog_posts`
    pub fn snake_plural(&self) -> &str {
        &self.snake_plural
    }

    /// `App\Modules\BlogPost`
    pub fn namespace_path(&self) -> &str {
        &self.namespace_path
    }
}

/// Splits a name into lowercase words.
///
/// Boundaries: explicit separators (`-`, `_`, whitespace), a lower→upper
/// transition (`blogPost`), and the last letter of an uppercase run when a
/// lowercase letter follows (`HTTPServer` → `http`, `server`).
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '-' | '_') || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_ascii_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c.to_ascii_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Suffix-rule pluralizer: `es` after sibilant endings, consonant-`y` →
/// `ies`, `s` otherwise. Deliberately no irregular-noun dictionary, so
/// `person` → `persons`.
fn pluralize(word: &str) -> String {
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        let is_consonant = stem
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        if is_consonant {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}
