//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `GenerateParams` mirrors `GenerateArgs` but is populated from clap; the
//! `Into` impl bridges dispatch to the command handler. Path-list flags are
//! split on the platform path separator here.

use std::env;
use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub main_class: Option<String>,
    pub sources_out: PathBuf,
    pub resources_out: PathBuf,
    pub classes: Vec<PathBuf>,
    pub resources: Vec<PathBuf>,
    pub debug: bool,
    pub remove_yaml: bool,
    pub remove_jmx: bool,
    pub remove_xml: bool,
    pub remove_spel: bool,
    pub props: Vec<String>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            main_class: m.get_one::<String>("main_class").cloned(),
            sources_out: m
                .get_one::<PathBuf>("sources_out")
                .cloned()
                .unwrap_or_default(),
            resources_out: m
                .get_one::<PathBuf>("resources_out")
                .cloned()
                .unwrap_or_default(),
            classes: path_list(m, "classes"),
            resources: path_list(m, "resources"),
            debug: m.get_flag("debug"),
            remove_yaml: m.get_flag("remove_yaml"),
            remove_jmx: m.get_flag("remove_jmx"),
            remove_xml: m.get_flag("remove_xml"),
            remove_spel: m.get_flag("remove_spel"),
            props: m
                .get_many::<String>("props")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            main_class: p.main_class,
            sources_out: p.sources_out,
            resources_out: p.resources_out,
            classes: p.classes,
            resources: p.resources,
            debug: p.debug,
            remove_yaml: p.remove_yaml,
            remove_jmx: p.remove_jmx,
            remove_xml: p.remove_xml,
            remove_spel: p.remove_spel,
            props: p.props,
        }
    }
}

/// Collect a repeatable flag's values, splitting each on the platform path
/// separator (`:` on Unix, `;` on Windows).
fn path_list(m: &ArgMatches, id: &str) -> Vec<PathBuf> {
    m.get_many::<String>(id)
        .map(|values| values.flat_map(|v| env::split_paths(v)).collect())
        .unwrap_or_default()
}
