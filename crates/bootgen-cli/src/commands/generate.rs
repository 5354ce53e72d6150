use std::env;
use std::path::PathBuf;

use bootgen_core::AotOptions;
use bootgen_generator::{BootstrapCodeGenerator, locate::locate};
use tracing_subscriber::EnvFilter;

pub struct GenerateArgs {
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

pub fn run(args: GenerateArgs) {
    init_logging(args.debug);

    let options = AotOptions {
        debug_verify: args.debug,
        remove_yaml_support: args.remove_yaml,
        remove_jmx_support: args.remove_jmx,
        remove_xml_support: args.remove_xml,
        remove_spel_support: args.remove_spel,
        build_time_properties_checks: args.props,
    };

    let structure = match locate(
        args.sources_out,
        args.resources_out,
        &args.classes,
        &args.resources,
        args.main_class,
        classpath_entries(),
    ) {
        Ok(structure) => structure,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let report = match BootstrapCodeGenerator::new(options).generate(&structure) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    for warning in report.diagnostics.warnings() {
        eprintln!("warning: {warning}");
    }
    tracing::debug!(
        entry_point = %report.entry_point,
        registered = report.registered,
        excluded = report.excluded,
        resources = report.resources_written.len(),
        "bootstrap generated"
    );
}

/// Additional classpath locations for type resolution, taken from the
/// CLASSPATH environment the build tool passes through.
fn classpath_entries() -> Vec<PathBuf> {
    env::var_os("CLASSPATH")
        .map(|raw| env::split_paths(&raw).collect())
        .unwrap_or_default()
}

/// Pre-generation logging suppression: everything below ERROR stays silent
/// unless `--debug` is given, which raises the filter to DEBUG instead.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
