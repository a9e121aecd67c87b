//! Build script for srcmerge-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    let impl_ext = Arg::new("impl-ext")
        .long("impl-ext")
        .help("Implementation file extension, in priority order (repeatable)")
        .value_name("EXT")
        .action(ArgAction::Append);
    let root = Arg::new("root")
        .help("Root header")
        .value_name("ROOT")
        .required(true);

    Command::new("srcmerge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Merge a C header and its local includes into one file")
        .long_about(
            "Replace every quoted #include in a root header with the included file, \
             recursively, emitting each file once, then append the implementation \
             file paired with every header reached",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file in addition to discovered ones")
                .value_name("PATH")
                .global(true)
                .env("SRCMERGE_CONFIG"),
        )
        .subcommands(vec![
            Command::new("merge")
                .about("Merge a root header into a single translation unit")
                .long_about("Write the manifest, header region and implementation region")
                .arg(root.clone())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the merged source to this file instead of stdout")
                        .value_name("FILE"),
                )
                .arg(impl_ext.clone())
                .arg(
                    Arg::new("header-ext")
                        .long("header-ext")
                        .help("Header extension used to pair a root implementation with its header")
                        .value_name("EXT"),
                )
                .arg(
                    Arg::new("require-impl")
                        .long("require-impl")
                        .help("Fail if the root header has no implementation file")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("files")
                .about("List the files a merge would consume")
                .long_about("Print every consumed file in manifest order")
                .arg(root)
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format")
                        .value_parser(["human", "json"])
                        .default_value("human")
                        .env("SRCMERGE_OUTPUT_FORMAT"),
                )
                .arg(impl_ext),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("srcmerge.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
