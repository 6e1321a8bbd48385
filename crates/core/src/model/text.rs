use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text must not be blank")]
    Blank,
}

/// Non-blank text, tagged by what it is used for.
///
/// The stored value is kept verbatim: blankness is checked on the trimmed
/// input, but nothing is trimmed away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text<T>(String, std::marker::PhantomData<T>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt;
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution;

pub type PromptText = Text<Prompt>;
pub type SolutionText = Text<Solution>;

impl<T> Text<T> {
    /// # Errors
    ///
    /// Returns `TextError::Blank` if the input is empty or whitespace only.
    pub fn parse(s: impl Into<String>) -> Result<Self, TextError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(TextError::Blank);
        }
        Ok(Self(s, std::marker::PhantomData))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Case-insensitive equality, character by character.
///
/// Two characters agree when they are equal, when their single-character
/// upper-case mappings are equal, or when the lower case of those upper-case
/// mappings is equal. No trimming or normalisation is applied.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    if a.chars().count() != b.chars().count() {
        return false;
    }
    a.chars().zip(b.chars()).all(|(x, y)| {
        if x == y {
            return true;
        }
        let (ux, uy) = (simple_upper(x), simple_upper(y));
        ux == uy || simple_lower(ux) == simple_lower(uy)
    })
}

/// Upper case of `c` when it maps to exactly one character, else `c` itself.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Lower case of `c`; a multi-character mapping (only U+0130) keeps its first character.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
