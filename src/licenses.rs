// SPDX-License-Identifier: MIT

//! The `licenses` module resolves license texts & fills their copyright placeholders.
//!
//! Bundled licenses carry the placeholder tokens of their upstream sources: `[year]` &
//! `[fullname]` in the MIT/BSD family, `[yyyy]` & `[name of copyright owner]` in Apache-2.0.

use std::borrow::Cow;
use std::io::{self, Write};

use regex::{Captures, Regex};

use crate::assets::{Bundle, Category};
use crate::errors::{Error, ErrorKind};

lazy_static! {
    /// Alternation of the literal placeholder tokens found in the bundled license texts.
    static ref PLACEHOLDER: Regex =
        Regex::new(r"\[year\]|\[yyyy\]|\[fullname\]|\[name of copyright owner\]")
            .expect("placeholder pattern must compile");
}

/// Returns the text of the license identified by `key` (its SPDX identifier).
///
/// The lookup is lenient: an unknown key yields an empty string. Callers that need failure
/// detection use [`write_license`].
pub fn license_text(bundle: &Bundle, key: &str) -> String {
    // Get raw embedded bytes; absent files become an empty slice.
    let raw = bundle
        .asset(&Category::Licenses.asset_path(key))
        .unwrap_or_default();

    String::from_utf8_lossy(raw).into_owned()
}

/// Writes the license identified by `key` to `out` verbatim, returning the bytes written.
///
/// An unknown key is an [`ErrorKind::UnknownLicense`] error; nothing is written in that case.
pub fn write_license(bundle: &Bundle, key: &str, out: &mut dyn Write) -> Result<usize, Error> {
    let data = bundle
        .asset(&Category::Licenses.asset_path(key))
        .ok_or_else(|| Error::from(ErrorKind::UnknownLicense(key.to_owned())))?;

    out.write_all(data)
        .map_err(|err| Error::from(err.to_string()))?;

    Ok(data.len())
}

/// Returns the text of the license identified by `key` with its placeholders filled in.
///
/// Lenient like [`license_text`]: substitution over the empty text of an unknown key is the
/// empty string.
#[allow(dead_code)]
pub fn license_text_with_params(bundle: &Bundle, key: &str, holder: &str, year: &str) -> String {
    fill_placeholders(&license_text(bundle, key), holder, year).into_owned()
}

/// Writes the license identified by `key` to `out` with its placeholders filled in, returning
/// the bytes written.
///
/// An unknown key writes nothing and reports `Ok(0)`; callers detect failure through the zero
/// count. A bundled license whose canonical text is legitimately empty would be
/// indistinguishable from a missing one under this contract.
pub fn write_license_with_params(
    bundle: &Bundle,
    key: &str,
    holder: &str,
    year: &str,
    out: &mut dyn Write,
) -> io::Result<usize> {
    let text = license_text(bundle, key);
    if text.is_empty() {
        return Ok(0);
    }

    fill_placeholders_write(&text, holder, year, out)
}

/// Replaces every placeholder token in `text` with the matching parameter.
///
/// All tokens are replaced in a single simultaneous pass: a replacement value that happens to
/// spell another token is never re-matched. Bracketed text outside the token set is left
/// verbatim.
fn fill_placeholders<'t>(text: &'t str, holder: &str, year: &str) -> Cow<'t, str> {
    PLACEHOLDER.replace_all(text, |caps: &Captures| match &caps[0] {
        "[year]" | "[yyyy]" => year.to_owned(),
        _ => holder.to_owned(),
    })
}

/// Streaming form of [`fill_placeholders`]: writes the substituted text to `out` & returns the
/// bytes written.
fn fill_placeholders_write(
    text: &str,
    holder: &str,
    year: &str,
    out: &mut dyn Write,
) -> io::Result<usize> {
    let filled = fill_placeholders(text, holder, year);
    out.write_all(filled.as_bytes())?;

    Ok(filled.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_MIT: &str = r#"MIT License

Copyright (c) [year] [fullname]

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

    const FULL_BSL: &str = r#"Boost Software License - Version 1.0 - August 17th, 2003

Permission is hereby granted, free of charge, to any person or organization
obtaining a copy of the software and accompanying documentation covered by
this license (the "Software") to use, reproduce, display, distribute,
execute, and transmit the Software, and to prepare derivative works of the
Software, and to permit third-parties to whom the Software is furnished to
do so, all subject to the following:

The copyright notices in the Software and this entire statement, including
the above license grant, this restriction and the following disclaimer,
must be included in all copies of the Software, in whole or in part, and
all derivative works of the Software, unless such copies or derivative
works are solely in the form of machine-executable object code generated by
a source language processor.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE, TITLE AND NON-INFRINGEMENT. IN NO EVENT
SHALL THE COPYRIGHT HOLDERS OR ANYONE DISTRIBUTING THE SOFTWARE BE LIABLE
FOR ANY DAMAGES OR OTHER LIABILITY, WHETHER IN CONTRACT, TORT OR OTHERWISE,
ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
DEALINGS IN THE SOFTWARE.
"#;

    #[test]
    fn license_text_returns_known_licenses() {
        let bundle = Bundle::bundled();

        let cases = [
            ("mit", FULL_MIT),
            ("bsl-1.0", FULL_BSL),
            ("lol", ""), // No file: empty
        ];
        for (key, want) in &cases {
            assert_eq!(license_text(&bundle, key), *want, "key: {}", key);
        }
    }

    #[test]
    fn write_license_is_byte_identical() {
        let bundle = Bundle::bundled();

        for (key, want) in &[("mit", FULL_MIT), ("bsl-1.0", FULL_BSL)] {
            let mut sink = Vec::new();

            let written = write_license(&bundle, key, &mut sink).unwrap();

            assert_eq!(sink, want.as_bytes());
            assert_eq!(written, want.len());
        }
    }

    #[test]
    fn write_license_rejects_unknown_keys() {
        let bundle = Bundle::bundled();
        let mut sink = Vec::new();

        let err = write_license(&bundle, "lol", &mut sink).unwrap_err();

        assert!(sink.is_empty(), "failed lookups must not produce output");
        assert_eq!(err.to_string(), "Unknown license 'lol'");
    }

    #[test]
    fn fill_placeholders_handles_both_styles() {
        let cases = [
            (
                // Short style
                "My name is [fullname]. The year is [year]",
                "My name is eacp. The year is 2021",
            ),
            (
                // Apache style
                "My name is [name of copyright owner]. The year is [yyyy]",
                "My name is eacp. The year is 2021",
            ),
            (
                // MIT notice line
                "Copyright (c) [year] [fullname]",
                "Copyright (c) 2021 eacp",
            ),
        ];
        for (text, want) in &cases {
            assert_eq!(fill_placeholders(text, "eacp", "2021"), *want);
        }
    }

    #[test]
    fn fill_placeholders_is_simultaneous() {
        // A parameter spelling another token must survive: sequential single-token replaces
        // would mangle it.
        let got = fill_placeholders("[fullname] in [year]", "[year]", "2021");
        assert_eq!(got, "[year] in 2021");
    }

    #[test]
    fn fill_placeholders_leaves_unknown_tokens() {
        let text = "[project] by [fullname]";
        assert_eq!(fill_placeholders(text, "eacp", "2021"), "[project] by eacp");
    }

    #[test]
    fn fill_placeholders_is_identity_without_tokens() {
        let text = "No placeholders in here.\n";
        assert_eq!(fill_placeholders(text, "eacp", "2021"), text);
    }

    #[test]
    fn fill_placeholders_write_matches_string_form() {
        let text = "Copyright (c) [year] [fullname]";
        let mut sink = Vec::new();

        let written = fill_placeholders_write(text, "eacp", "2021", &mut sink).unwrap();

        assert_eq!(sink, b"Copyright (c) 2021 eacp");
        assert_eq!(written, sink.len());
    }

    #[test]
    fn license_text_with_params_fills_notices() {
        let bundle = Bundle::bundled();

        let cases = [
            // [fullname] & [year]
            ("mit", "Copyright (c) 2021 eacp"),
            // [fullname] & [year], comma separated
            ("bsd-3-clause", "Copyright (c) 2021, eacp"),
            // [name of copyright owner] & [yyyy]
            ("apache-2.0", "Copyright 2021 eacp"),
        ];
        for (key, line) in &cases {
            let got = license_text_with_params(&bundle, key, "eacp", "2021");
            assert!(got.contains(line), "{} should contain '{}'", key, line);
            assert!(!PLACEHOLDER.is_match(&got), "{} left tokens behind", key);
        }
    }

    #[test]
    fn license_text_with_params_on_unknown_key_is_empty() {
        let bundle = Bundle::bundled();

        assert_eq!(license_text_with_params(&bundle, "lol", "eacp", "2021"), "");
    }

    #[test]
    fn write_license_with_params_reports_zero_for_unknown_keys() {
        let bundle = Bundle::bundled();
        let mut sink = Vec::new();

        let written = write_license_with_params(&bundle, "lol", "eacp", "2021", &mut sink).unwrap();

        assert_eq!(written, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn write_license_with_params_fills_notices() {
        let bundle = Bundle::bundled();
        let mut sink = Vec::new();

        let written =
            write_license_with_params(&bundle, "mit", "Eduardo Castillo", "2021", &mut sink)
                .unwrap();

        let got = String::from_utf8(sink).unwrap();
        assert!(got.contains("Copyright (c) 2021 Eduardo Castillo"));
        assert_eq!(written, got.len());
    }
}
