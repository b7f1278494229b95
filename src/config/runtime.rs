// SPDX-License-Identifier: MIT

//! The `runtime` module defines elements necessary for the configuration of [`RuntimeConfig`]
//! (contains the runtime options).

use crate::assets::Category;
use crate::config::cli::{build_cli, APP_NAME};

use super::configs::Config;

use std::error::Error as StdErr;

use clap::ArgMatches;
use clap_complete::Shell;

/// `struct` containing runtime options gathered from the config file and command arguments.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Arguments as read by [`clap`].
    matches: ArgMatches,

    /// Config read from file.
    pub config: Config,

    /// Exclusive operation specified by user.
    pub operation: Operation,

    /// Gitignore template requested by the `ignore` subcommand.
    pub template: String,

    /// License requested by the `license` subcommand, keyed by SPDX identifier.
    pub license: String,

    /// Copyright year to substitute into the license notice.
    pub year: Option<String>,

    /// Copyright holder to substitute into the license notice.
    pub holder: Option<String>,

    /// Template category to enumerate for the `list` subcommand.
    pub category: Category,

    /// Pattern restricting the names printed by the `list` subcommand.
    pub filter: Option<String>,

    /// Shell to generate completions for.
    pub completion_shell: Shell,
}

/// `enum` containing exclusive operations that can be performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Option to print a gitignore template.
    PrintIgnore,
    /// Option to print a license text.
    PrintLicense,
    /// Option to list available templates.
    ListAvailableTemplates,
    /// Option to generate shell completion scripts.
    GenerateCompletions,
    /// Option for unknown operations.
    Else,
}

/// Default implementation for [`RuntimeConfig`].
impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            matches: ArgMatches::default(),
            config: Config::default(),
            operation: Operation::Else,

            template: "".to_owned(),
            license: "".to_owned(),
            year: None,
            holder: None,

            category: Category::Ignores,
            filter: None,

            completion_shell: Shell::Zsh,
        }
    }
}

/// Method implementations for [`RuntimeConfig`].
impl RuntimeConfig {
    /// Load options from the arguments & config file.
    pub fn load(&mut self) -> Result<RuntimeConfig, Box<dyn StdErr>> {
        use super::logger::setup_logger;

        self.matches = build_cli().get_matches();
        debug!("parsed command flags");
        setup_logger(&self.matches)?;

        self.config = self
            .config
            .parse(
                self.matches
                    .get_one::<String>("config")
                    .expect("failed to use default config")
                    .as_str(),
            )
            .unwrap_or_else(|err| {
                error!("config load error, using the default: {}", err);
                Config::default()
            });
        self.configure_operation();

        debug!(
            "loaded command arguments & config file, options: {:#?}",
            self
        );

        Ok(self.clone())
    }

    /// Configures the `RuntimeConfig` to execute the subcommand selected by the user.
    ///
    /// This function checks for the presence of [`clap::Subcommand`]s & [`clap::Arg`]s as provided
    /// in the [`clap::ArgMatches`] struct.
    fn configure_operation(&mut self) {
        use crate::config::cli::{COMPLETIONS_SUBCMD, IGNORE_SUBCMD, LICENSE_SUBCMD, LIST_SUBCMD};

        match self.matches.subcommand() {
            Some((IGNORE_SUBCMD, sub_matches)) => {
                self.operation = Operation::PrintIgnore;

                self.template = sub_matches
                    .get_one::<String>("template")
                    .expect("template argument is required")
                    .to_owned();
            }
            Some((LICENSE_SUBCMD, sub_matches)) => {
                self.operation = Operation::PrintLicense;

                self.license = sub_matches
                    .get_one::<String>("license")
                    .expect("license argument is required")
                    .to_owned();
                self.year = sub_matches.get_one::<String>("year").map(String::to_owned);
                self.holder = sub_matches
                    .get_one::<String>("holder")
                    .map(String::to_owned);
            }
            Some((LIST_SUBCMD, sub_matches)) => {
                self.operation = Operation::ListAvailableTemplates;

                self.category = sub_matches
                    .get_one::<String>("category")
                    .and_then(|token| Category::from_token(token))
                    .expect("clap validates the category token");
                self.filter = sub_matches
                    .get_one::<String>("filter")
                    .map(String::to_owned);
            }
            Some((COMPLETIONS_SUBCMD, sub_matches)) => {
                self.operation = Operation::GenerateCompletions;

                self.completion_shell = sub_matches
                    .get_one::<Shell>("shell")
                    .copied()
                    .unwrap_or(Shell::Zsh);
            }
            _ => self.operation = Operation::Else,
        }
    }

    /// Generates completions for shells defined in [`clap_complete::Shell`].
    pub fn generate_completions(&self) -> Result<(), Box<dyn StdErr>> {
        use clap_complete::generate;
        use std::io;

        generate(
            self.completion_shell,
            &mut build_cli(),
            APP_NAME,
            &mut io::stdout(),
        );

        Ok(())
    }

    /// Builds a `RuntimeConfig` straight from an argument vector, skipping the logger & config
    /// file side effects.
    #[cfg(test)]
    pub(crate) fn load_from<I, T>(args: I) -> Result<RuntimeConfig, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut runtime = RuntimeConfig::default();
        runtime.matches = build_cli().try_get_matches_from(args)?;
        runtime.configure_operation();

        Ok(runtime)
    }
}
