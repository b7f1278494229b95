// SPDX-License-Identifier: MIT

//! The `app` module defines the operations backing each subcommand.

use std::error::Error as StdErr;
use std::io::{self, Write};

use regex::Regex;

use crate::assets::{Bundle, Category};
use crate::config::runtime::Operation;
use crate::config::RuntimeConfig;
use crate::errors::{Error, ErrorKind};
use crate::ignores;
use crate::licenses;

/// Executes the operation selected in the [`RuntimeConfig`], writing template text to stdout.
pub fn run(runtime: &RuntimeConfig) -> Result<(), Box<dyn StdErr>> {
    let stdout = io::stdout();

    run_with(runtime, &mut stdout.lock())
}

/// [`run`] against an arbitrary output sink.
///
/// Error paths never leave partial template text in `out`.
fn run_with(runtime: &RuntimeConfig, out: &mut dyn Write) -> Result<(), Box<dyn StdErr>> {
    let bundle = Bundle::bundled();

    match runtime.operation {
        Operation::PrintIgnore => print_ignore(&bundle, &runtime.template, out),
        Operation::PrintLicense => print_license(
            &bundle,
            &runtime.license,
            runtime.year.as_deref(),
            runtime
                .holder
                .as_deref()
                .or_else(|| runtime.config.default_holder()),
            out,
        ),
        Operation::ListAvailableTemplates => list_templates(
            &bundle,
            runtime.category,
            runtime.filter.as_deref(),
            out,
        ),
        Operation::GenerateCompletions => runtime.generate_completions(),
        Operation::Else => Err(Error::from(ErrorKind::NoOutput).into()),
    }
}

/// Writes the requested gitignore template to `out`.
fn print_ignore(bundle: &Bundle, key: &str, out: &mut dyn Write) -> Result<(), Box<dyn StdErr>> {
    let written = ignores::write_ignore(bundle, key, out)?;
    debug!("wrote {} bytes of the '{}' gitignore template", written, key);

    Ok(())
}

/// Writes the requested license to `out`, substituted when a year is supplied.
fn print_license(
    bundle: &Bundle,
    key: &str,
    year: Option<&str>,
    holder: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), Box<dyn StdErr>> {
    let year = match year {
        Some(year) => year,
        None => {
            // Plain copy, placeholders left for the user to fill.
            let written = licenses::write_license(bundle, key, out)?;
            debug!("wrote {} bytes of the '{}' license", written, key);

            return Ok(());
        }
    };

    let holder = holder.ok_or_else(|| Error::from(ErrorKind::MissingHolder))?;

    let written = licenses::write_license_with_params(bundle, key, holder, year, out)?;
    if written == 0 {
        // Zero bytes doubles as the not-found signal on the parameterised path.
        return Err(Error::from(ErrorKind::UnknownLicense(key.to_owned())).into());
    }
    debug!("wrote {} bytes of the '{}' license", written, key);

    Ok(())
}

/// Writes the category's template names to `out`, one per line, in bundle directory order.
fn list_templates(
    bundle: &Bundle,
    category: Category,
    filter: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), Box<dyn StdErr>> {
    let mut names = bundle.names(category);
    if let Some(pattern) = filter {
        let filter = Regex::new(pattern)?;
        names.retain(|name| filter.is_match(name));
    }

    for name in &names {
        writeln!(out, "{}", name)?;
    }
    debug!("listed {} {:?} templates", names.len(), category);

    Ok(())
}
