// Copyright 2025 Icinga Web Response Project Authors. Licensed under Apache-2.0.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters gets escaped.
const URL_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode `input` so the whole string survives as a single
/// opaque header token, separators included.
#[inline]
pub(crate) fn raw_url_encode(input: &str) -> String {
    utf8_percent_encode(input, URL_ESCAPE).to_string()
}
