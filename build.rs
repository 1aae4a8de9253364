// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("apkforge")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Apkforge Contributors")
        .about("Plan Android app packaging actions from declarative module descriptions")
        .subcommand_required(true)
        .subcommand(
            Command::new("plan")
                .about("Plan the packaging actions for a module")
                .arg(Arg::new("module").required(true).help("Path to the module description (TOML)"))
                .arg(
                    Arg::new("env")
                        .short('e')
                        .long("env")
                        .required(true)
                        .help("Path to the build environment file"),
                )
                .arg(
                    Arg::new("source_root")
                        .long("source-root")
                        .help("Module source root (default: the module file's directory)"),
                )
                .arg(
                    Arg::new("dep")
                        .long("dep")
                        .value_name("SPEC")
                        .action(clap::ArgAction::Append)
                        .help("Direct dependency: name=classpath:<files>, name=export:<file>, name=lib"),
                )
                .arg(
                    Arg::new("show_inputs")
                        .long("show-inputs")
                        .action(clap::ArgAction::SetTrue)
                        .help("Print every dependency file instead of a count"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate a module description without planning")
                .arg(Arg::new("module").required(true).help("Path to the module description (TOML)")),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("apkforge.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }

    println!("cargo:warning=Man page generated at {}", man_path.display());
}
