//! Command line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clipinv - project media inventory and settings
#[derive(Parser, Debug)]
#[command(name = "clipinv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and clean up the media files of a video project")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser, Debug)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH", env = "CLIPINV_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every file used by a project, by category
    #[command(alias = "ls")]
    Scan {
        /// Clip manifest (.json)
        manifest: PathBuf,
    },

    /// Show or remove clips no timeline placement uses
    Unused {
        /// Clip manifest (.json)
        manifest: PathBuf,

        /// Remove the unused clips (and their files) and save the manifest
        #[arg(long)]
        apply: bool,

        /// Do not ask for confirmation
        #[arg(short, long, requires = "apply")]
        yes: bool,
    },

    /// Write the project inventory as plain text
    Export {
        /// Clip manifest (.json)
        manifest: PathBuf,

        /// Destination path or file:// URL
        destination: String,
    },

    /// Show or clear a project's thumbnail cache
    Cache {
        /// Project folder
        folder: PathBuf,

        /// Delete all cached thumbnails
        #[arg(long)]
        clear: bool,

        /// Do not ask for confirmation
        #[arg(short, long, requires = "clear")]
        yes: bool,
    },

    /// Show the details of a video profile
    Profile {
        /// Profile id (e.g. dv_pal); defaults to the configured profile
        name: Option<String>,

        /// List the available profiles instead
        #[arg(short, long, conflicts_with_all = ["name", "set_default"])]
        list: bool,

        /// Make this profile the default for new projects
        #[arg(long, requires = "name")]
        set_default: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unused_with_flags() {
        let cli = Cli::try_parse_from(["clipinv", "unused", "p.json", "--apply", "--yes"]).unwrap();
        match cli.command {
            Commands::Unused {
                manifest,
                apply,
                yes,
            } => {
                assert_eq!(manifest, PathBuf::from("p.json"));
                assert!(apply);
                assert!(yes);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn yes_requires_apply() {
        assert!(Cli::try_parse_from(["clipinv", "unused", "p.json", "--yes"]).is_err());
        assert!(Cli::try_parse_from(["clipinv", "cache", "/p", "-y"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["clipinv", "scan", "p.json", "--debug", "--config", "c.toml"]).unwrap();
        assert!(cli.global.debug);
        assert_eq!(cli.global.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn export_takes_destination() {
        let cli = Cli::try_parse_from(["clipinv", "export", "p.json", "file:///tmp/out.txt"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Export { ref destination, .. } if destination == "file:///tmp/out.txt"
        ));
    }

    #[test]
    fn profile_name_is_optional() {
        let cli = Cli::try_parse_from(["clipinv", "profile"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Profile {
                name: None,
                list: false,
                set_default: false
            }
        ));
        assert!(Cli::try_parse_from(["clipinv", "profile", "dv_pal", "--list"]).is_err());
    }

    #[test]
    fn set_default_requires_name() {
        assert!(Cli::try_parse_from(["clipinv", "profile", "--set-default"]).is_err());
        let cli = Cli::try_parse_from(["clipinv", "profile", "dv_pal", "--set-default"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Profile { ref name, set_default: true, .. } if name.as_deref() == Some("dv_pal")
        ));
    }
}
