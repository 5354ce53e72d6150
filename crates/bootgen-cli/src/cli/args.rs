//! Shared argument builders for the CLI.
//!
//! Each function returns a `clap::Arg`; the command is assembled in
//! `commands.rs`. Path-list flags carry raw strings here and are split on the
//! platform path separator during dispatch.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Entry-point class (positional, auto-detected if omitted).
pub fn main_class_arg() -> Arg {
    Arg::new("main_class")
        .value_name("MAIN-CLASS")
        .help("The main application class, auto-detected if not provided")
}

/// Output path for generated sources (--sources-out).
pub fn sources_out_arg() -> Arg {
    Arg::new("sources_out")
        .long("sources-out")
        .value_name("PATH")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Output path for the generated sources")
}

/// Output path for generated resources (--resources-out).
pub fn resources_out_arg() -> Arg {
    Arg::new("resources_out")
        .long("resources-out")
        .value_name("PATH")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Output path for the generated resources")
}

/// Compiled-classes roots (--classes, path-separator delimited).
pub fn classes_arg() -> Arg {
    Arg::new("classes")
        .long("classes")
        .value_name("PATHS")
        .required(true)
        .action(ArgAction::Append)
        .help("Paths to the application compiled classes, path-separator delimited")
}

/// Resource roots (--resources, path-separator delimited, order-irrelevant).
pub fn resources_arg() -> Arg {
    Arg::new("resources")
        .long("resources")
        .value_name("PATHS")
        .required(true)
        .action(ArgAction::Append)
        .help("Paths to the application resources, path-separator delimited")
}

/// Enable verification code generation and debug logging (--debug).
pub fn debug_arg() -> Arg {
    Arg::new("debug")
        .long("debug")
        .action(ArgAction::SetTrue)
        .help("Enable debug logging and verification code generation")
}

/// Feature-pruning toggle for one capability.
fn remove_arg(id: &'static str, flag: &'static str, what: &'static str) -> Arg {
    Arg::new(id)
        .long(flag)
        .action(ArgAction::SetTrue)
        .help(what)
}

pub fn remove_yaml_arg() -> Arg {
    remove_arg("remove_yaml", "remove-yaml", "Remove YAML support")
}

pub fn remove_jmx_arg() -> Arg {
    remove_arg("remove_jmx", "remove-jmx", "Remove JMX support")
}

pub fn remove_xml_arg() -> Arg {
    remove_arg("remove_xml", "remove-xml", "Remove XML support")
}

pub fn remove_spel_arg() -> Arg {
    remove_arg("remove_spel", "remove-spel", "Remove SpEL support")
}

/// Build-time property checks (--props, comma-delimited).
pub fn props_arg() -> Arg {
    Arg::new("props")
        .long("props")
        .value_name("NAMES")
        .action(ArgAction::Append)
        .value_delimiter(',')
        .help("Property names (or name=value entries) to resolve at build time")
}
