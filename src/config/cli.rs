// SPDX-License-Identifier: MIT

//! The `cli` module defines functions necessary for the setup of [`clap`].

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub const APP_NAME: &str = "gitgen";

const DEFAULT_CONFIG_PATH: &str = "gitgen/config.toml";

pub const COMPLETIONS_SUBCMD: &str = "completions";
pub const IGNORE_SUBCMD: &str = "ignore";
pub const LICENSE_SUBCMD: &str = "license";
pub const LIST_SUBCMD: &str = "list";

lazy_static! {
    static ref CFG_FILE_PATH_BUF: PathBuf = {
        let mut default_config_file_path = PathBuf::new();
        if let Some(dir) = dirs_next::config_dir() {
            default_config_file_path = dir;
        }
        default_config_file_path.push(DEFAULT_CONFIG_PATH);
        default_config_file_path
    };
    static ref CFG_FILE: &'static str = CFG_FILE_PATH_BUF.to_str().unwrap_or(DEFAULT_CONFIG_PATH);
}

/// Builds a [`clap::Command`].
pub fn build_cli() -> Command {
    Command::new(APP_NAME)
        .arg_required_else_help(true)
        .version(crate_version!())
        .about("A gitignore & license boilerplate generator")
        .author("Eduardo Castillo")
        .arg(
            Arg::new("config")
                .help("Load configuration from FILE")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value(*CFG_FILE),
        )
        .arg(
            Arg::new("verbosity")
                .help("Set the level of verbosity: -v or -vv")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new(IGNORE_SUBCMD)
                .visible_aliases(["gitignore", "i"])
                .about("Print a gitignore template to stdout")
                .arg(
                    Arg::new("template")
                        .help("Case sensitive name of the gitignore TEMPLATE to print")
                        .value_name("TEMPLATE")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new(LICENSE_SUBCMD)
                .visible_aliases(["lic", "li", "l"])
                .about("Print a license to stdout, filling its copyright notice if a year is given")
                .arg(
                    Arg::new("license")
                        .help("SPDX identifier of the LICENSE to print")
                        .value_name("LICENSE")
                        .required(true),
                )
                .arg(
                    Arg::new("year")
                        .help("Copyright year to substitute into the license notice")
                        .value_name("YEAR"),
                )
                .arg(
                    Arg::new("holder")
                        .help("Copyright holder to substitute into the license notice")
                        .value_name("HOLDER")
                        .requires("year"),
                ),
        )
        .subcommand(
            Command::new(LIST_SUBCMD)
                .visible_alias("ls")
                .about("List the available templates of a category")
                .arg(
                    Arg::new("category")
                        .help("Template CATEGORY to enumerate")
                        .value_name("CATEGORY")
                        .value_parser(["ignore", "i", "license", "l"])
                        .required(true),
                )
                .arg(
                    Arg::new("filter")
                        .help("Only list template names matching the REGEX")
                        .short('f')
                        .long("filter")
                        .value_name("REGEX"),
                ),
        )
        .subcommand(
            Command::new(COMPLETIONS_SUBCMD)
                .arg_required_else_help(true)
                .about("Generate tab completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Specify shell to generate completion script for")
                        .value_name("SHELL")
                        .value_parser(value_parser!(Shell)),
                ),
        )
}
