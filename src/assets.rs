// SPDX-License-Identifier: MIT

//! The `assets` module wraps the template files embedded into the binary.
//!
//! Lookups are pure & read-only: the same key always yields the same bytes for the lifetime of
//! the process.

use include_dir::{include_dir, Dir};

/// The template bundle compiled into the binary at build time.
static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// `enum` of the template categories shipped in the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Gitignore templates, keyed by their upstream (case sensitive) name.
    Ignores,

    /// License texts, keyed by SPDX identifier.
    Licenses,
}

/// Method implementations for [`Category`].
impl Category {
    /// Bundle subdirectory holding this category's templates.
    pub fn dir(self) -> &'static str {
        match self {
            Category::Ignores => "ignores",
            Category::Licenses => "licenses",
        }
    }

    /// File extension carried by this category's template files.
    pub fn extension(self) -> &'static str {
        match self {
            Category::Ignores => ".gitignore",
            Category::Licenses => ".txt",
        }
    }

    /// Bundle path of the template identified by `key`.
    pub fn asset_path(self, key: &str) -> String {
        format!("{}/{}{}", self.dir(), key, self.extension())
    }

    /// Maps a `list` subcommand category token to a [`Category`].
    pub fn from_token(token: &str) -> Option<Category> {
        match token {
            "ignore" | "i" => Some(Category::Ignores),
            "license" | "l" => Some(Category::Licenses),
            _ => None,
        }
    }
}

/// `struct` granting read access to a set of embedded template files.
///
/// Resolvers receive a `Bundle` by reference instead of reaching for the [`ASSETS`] static, so a
/// substitute bundle can be swapped in.
#[derive(Debug, Clone, Copy)]
pub struct Bundle {
    /// Root directory of the embedded files.
    root: &'static Dir<'static>,
}

/// Default implementation for [`Bundle`].
impl Default for Bundle {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Method implementations for [`Bundle`].
impl Bundle {
    /// Returns the bundle compiled into this binary.
    pub fn bundled() -> Self {
        Self { root: &ASSETS }
    }

    /// Looks up the raw bytes of the asset at `path` (e.g. `ignores/Ada.gitignore`).
    ///
    /// Whole-file semantics only; `None` when no asset exists at `path`.
    pub fn asset(&self, path: &str) -> Option<&'static [u8]> {
        self.root.get_file(path).map(|file| file.contents())
    }

    /// Enumerates the template names available in `category`, in bundle directory order.
    ///
    /// The category's file extension is stripped from each name.
    pub fn names(&self, category: Category) -> Vec<&'static str> {
        self.root
            .get_dir(category.dir())
            .map(|dir| {
                dir.files()
                    .filter_map(|file| file.path().file_stem().and_then(|stem| stem.to_str()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
