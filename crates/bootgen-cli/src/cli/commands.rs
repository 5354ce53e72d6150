//! Command assembly for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("bootgen")
        .about("Generate the bootstrap source for an ahead-of-time compiled application")
        .after_help(
            r#"EXAMPLES:
  bootgen --sources-out out/sources --resources-out out/resources \
          --classes build/classes --resources src/main/resources
  bootgen com.example.App --classes build/classes --resources src/main/resources \
          --sources-out out/sources --resources-out out/resources \
          --remove-yaml --remove-xml --props app.cache.enabled"#,
        )
        .arg(main_class_arg())
        .arg(sources_out_arg())
        .arg(resources_out_arg())
        .arg(classes_arg())
        .arg(resources_arg())
        .arg(debug_arg())
        .arg(remove_yaml_arg())
        .arg(remove_jmx_arg())
        .arg(remove_xml_arg())
        .arg(remove_spel_arg())
        .arg(props_arg())
}
