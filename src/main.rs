// SPDX-License-Identifier: MIT

#![warn(missing_docs)]

// NOTE: unneeded, this is not a library.
// #![warn(missing_doc_code_examples)]

//! The gitgen crate generates boilerplate files for new repositories.
//!
//! This crate prints gitignore templates & open-source license texts bundled into the binary,
//! filling the copyright placeholders of a license on request.

// Loading macros must be done at the crate root.
#[macro_use]
extern crate log;

#[macro_use]
extern crate clap;

#[macro_use]
extern crate lazy_static;

mod app;
mod assets;
mod config;
mod errors;
mod ignores;
mod licenses;

use config::RuntimeConfig;

/// This is the entry point for the crate's binary.
///
/// This function initiates the setting up of the running environment then calls the function to
/// run the underlying logic. Failures are reported on stderr & mapped to a non-zero exit code;
/// stdout carries nothing but the requested template text.
fn main() {
    RuntimeConfig::default()
        .load()
        .and_then(|runtime| app::run(&runtime))
        .unwrap_or_else(|err| {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        });
}
