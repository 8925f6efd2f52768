/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
use crate::constants::{AUTHORIZATION_HEADER, BEARER_SCHEME};
use std::fmt;

/// A single outgoing HTTP header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name, e.g. `Authorization`
    pub name: String,
    /// Header value, e.g. `Bearer abc123`
    pub value: String,
}

impl Header {
    /// Creates a header from a name and a value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates the `Authorization: Bearer <token>` header
    #[must_use]
    pub fn bearer(token: &str) -> Self {
        Self::new(AUTHORIZATION_HEADER, format!("{BEARER_SCHEME} {token}"))
    }

    /// True for any `Authorization` header using the bearer scheme
    ///
    /// Matches what a raw `Authorization: Bearer` line prefix would match. Header names
    /// are case-insensitive on the wire, so `authorization: Bearer x` counts as well.
    #[must_use]
    pub fn is_bearer(&self) -> bool {
        self.name.eq_ignore_ascii_case(AUTHORIZATION_HEADER)
            && self.value.starts_with(BEARER_SCHEME)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Ordered collection of outgoing headers shared by every request of a session
///
/// After any bearer update the set holds at most one bearer header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    headers: Vec<Header>,
}

impl HeaderSet {
    /// Creates an empty header set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a header, keeping insertion order
    pub fn push(&mut self, header: Header) {
        self.headers.push(header);
    }

    /// Iterates headers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter()
    }

    /// Number of headers
    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// True when no header is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Number of bearer headers currently present
    #[must_use]
    pub fn bearer_count(&self) -> usize {
        self.headers.iter().filter(|h| h.is_bearer()).count()
    }

    /// The current bearer header, if any
    #[must_use]
    pub fn bearer(&self) -> Option<&Header> {
        self.headers.iter().find(|h| h.is_bearer())
    }

    /// Removes every bearer header, however many there are
    pub fn remove_bearer(&mut self) {
        self.headers.retain(|h| !h.is_bearer());
    }

    /// Replaces all bearer headers with exactly one for `token`
    pub fn set_bearer(&mut self, token: &str) {
        self.remove_bearer();
        self.headers.push(Header::bearer(token));
    }

    /// Renders every header as a `Name: value` line
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.headers.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}
