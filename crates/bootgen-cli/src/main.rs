mod cli;
mod commands;

use cli::{GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let params = GenerateParams::from_matches(&matches);
    commands::generate::run(params.into());
}
