// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical page identity.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Canonical identity of a page: `(section, owner, book, page)`.
///
/// The string form `S{section}/O{owner}/B{book}/P{page}` is produced by the
/// [`Display`](fmt::Display) impl and parsed back by [`FromStr`]. Two strokes
/// with identical tuple values always resolve to equal keys, so the key can be
/// used directly in hash maps and persisted snapshots.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageKey {
    /// Pen section.
    pub section: u32,
    /// Pen owner.
    pub owner: u32,
    /// Notebook.
    pub book: u32,
    /// Page within the notebook.
    pub page: u32,
}

impl PageKey {
    /// Key used for strokes whose book or page is unknown: `S0/O0/B0/P0`.
    pub const FALLBACK: Self = Self::new(0, 0, 0, 0);

    /// Creates a key from its four components.
    #[must_use]
    pub const fn new(section: u32, owner: u32, book: u32, page: u32) -> Self {
        Self {
            section,
            owner,
            book,
            page,
        }
    }

    /// Returns `true` if this is [`PageKey::FALLBACK`].
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        *self == Self::FALLBACK
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S{}/O{}/B{}/P{}",
            self.section, self.owner, self.book, self.page
        )
    }
}

/// Error returned when a string is not a canonical page key.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid page key {input:?}: expected S<n>/O<n>/B<n>/P<n>")]
pub struct ParsePageKeyError {
    input: String,
}

impl ParsePageKeyError {
    /// The string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for PageKey {
    type Err = ParsePageKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePageKeyError {
            input: s.to_owned(),
        };
        let mut parts = s.split('/');
        let mut field = |prefix: char| -> Result<u32, ParsePageKeyError> {
            parts
                .next()
                .and_then(|part| part.strip_prefix(prefix))
                .and_then(canonical_number)
                .ok_or_else(err)
        };
        let key = Self::new(field('S')?, field('O')?, field('B')?, field('P')?);
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(key)
    }
}

/// Parses a decimal number written the way [`PageKey`]'s `Display` writes it:
/// ASCII digits only, no sign, and no leading zeros.
fn canonical_number(digits: &str) -> Option<u32> {
    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));
    canonical.then(|| digits.parse().ok()).flatten()
}

/// Which required part of a page identity is missing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MissingField {
    /// The stroke carries no page identity at all.
    PageInfo,
    /// The notebook number is absent.
    Book,
    /// The page number is absent.
    Page,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PageInfo => "page info",
            Self::Book => "book",
            Self::Page => "page",
        })
    }
}

/// Raw page identity as reported alongside a stroke.
///
/// Section and owner are optional and default to `0`. Book and page are
/// required for a real key; see [`PageInfo::key`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PageInfo {
    /// Pen section, if reported.
    pub section: Option<u32>,
    /// Pen owner, if reported.
    pub owner: Option<u32>,
    /// Notebook, if reported.
    pub book: Option<u32>,
    /// Page, if reported.
    pub page: Option<u32>,
}

impl PageInfo {
    /// Creates page info from optional components.
    #[must_use]
    pub const fn new(
        section: Option<u32>,
        owner: Option<u32>,
        book: Option<u32>,
        page: Option<u32>,
    ) -> Self {
        Self {
            section,
            owner,
            book,
            page,
        }
    }

    /// Resolves this identity to a key.
    ///
    /// Missing section/owner are coerced to `0`. Missing book or page is
    /// reported as an error so callers can log it; see
    /// [`PageKeyResolver`](crate::PageKeyResolver).
    pub fn key(&self) -> Result<PageKey, MissingField> {
        let book = self.book.ok_or(MissingField::Book)?;
        let page = self.page.ok_or(MissingField::Page)?;
        Ok(PageKey::new(
            self.section.unwrap_or(0),
            self.owner.unwrap_or(0),
            book,
            page,
        ))
    }
}

/// Returns the canonical key for the given components.
///
/// Never fails: a missing section or owner becomes `0`, and a missing book
/// or page yields [`PageKey::FALLBACK`]. This function does not log; use
/// [`PageKeyResolver`](crate::PageKeyResolver) when the offending stroke
/// should be reported.
#[must_use]
pub fn canonical_key(
    section: Option<u32>,
    owner: Option<u32>,
    book: Option<u32>,
    page: Option<u32>,
) -> PageKey {
    PageInfo::new(section, owner, book, page)
        .key()
        .unwrap_or(PageKey::FALLBACK)
}
