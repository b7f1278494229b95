// SPDX-License-Identifier: MIT

//! The `ignores` module resolves gitignore templates out of the asset bundle.

use std::io::Write;

use crate::assets::{Bundle, Category};
use crate::errors::{Error, ErrorKind};

/// Returns the text of the gitignore template identified by `key`.
///
/// The lookup is lenient: an unknown key yields an empty string, indistinguishable from an empty
/// template. Callers that need failure detection use [`write_ignore`].
#[allow(dead_code)]
pub fn ignore_text(bundle: &Bundle, key: &str) -> String {
    // Get raw embedded bytes; absent files become an empty slice.
    let raw = bundle
        .asset(&Category::Ignores.asset_path(key))
        .unwrap_or_default();

    String::from_utf8_lossy(raw).into_owned()
}

/// Writes the gitignore template identified by `key` to `out`, returning the bytes written.
///
/// An unknown key is an [`ErrorKind::UnknownTemplate`] error; nothing is written in that case.
pub fn write_ignore(bundle: &Bundle, key: &str, out: &mut dyn Write) -> Result<usize, Error> {
    let data = bundle
        .asset(&Category::Ignores.asset_path(key))
        .ok_or_else(|| Error::from(ErrorKind::UnknownTemplate(key.to_owned())))?;

    out.write_all(data)
        .map_err(|err| Error::from(err.to_string()))?;

    Ok(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    /*
     * 2 example templates: Ada and CUDA.
     *
     * Both are short so they make sense for testing, and honoring Ada Lovelace is a bonus.
     */
    const FULL_ADA: &str = "# Object file
*.o

# Ada Library Information
*.ali
";

    const FULL_CUDA: &str = "*.i
*.ii
*.gpu
*.ptx
*.cubin
*.fatbin
";

    #[test]
    fn ignore_text_returns_known_templates() {
        let bundle = Bundle::bundled();

        let cases = [
            ("Ada", FULL_ADA),
            ("CUDA", FULL_CUDA),
            ("BadKey", ""), // No file: empty
        ];
        for (key, want) in &cases {
            assert_eq!(ignore_text(&bundle, key), *want, "key: {}", key);
        }
    }

    #[test]
    fn write_ignore_is_byte_identical() {
        let bundle = Bundle::bundled();

        for (key, want) in &[("Ada", FULL_ADA), ("CUDA", FULL_CUDA)] {
            let mut sink = Vec::new();

            let written = write_ignore(&bundle, key, &mut sink).unwrap();

            assert_eq!(sink, want.as_bytes());
            assert_eq!(written, want.len());
        }
    }

    #[test]
    fn write_ignore_rejects_unknown_keys() {
        let bundle = Bundle::bundled();
        let mut sink = Vec::new();

        let err = write_ignore(&bundle, "BadKey", &mut sink).unwrap_err();

        assert!(sink.is_empty(), "failed lookups must not produce output");
        assert_eq!(err.to_string(), "'BadKey' gitignore template does not exist");
    }
}
