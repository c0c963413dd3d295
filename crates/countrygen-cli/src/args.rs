use clap::{Parser, Subcommand};
use countrygen_core::Paths;

pub const DEFAULT_SRC_DIR: &str = "src";
pub const DEFAULT_DIST_DIR: &str = "dist";

/// CLI arguments for countrygen
#[derive(Debug, Parser)]
#[command(
    name = "countrygen",
    version,
    about = "Generates per-country and per-subdivision YAML/JSON data files"
)]
pub struct CliArgs {
    /// Source directory holding countries.json, countries/ and subdivisions/ (default: ./src)
    #[arg(long = "src", global = true)]
    pub src: Option<String>,

    /// Output directory for the yaml/ and json/ trees (default: ./dist)
    #[arg(long = "dist", global = true)]
    pub dist: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generates all data based on the local files
    Create,

    /// Imports data from various data sources
    Import,
}

impl CliArgs {
    pub fn paths(&self) -> Paths {
        Paths::new(
            self.src.as_deref().unwrap_or(DEFAULT_SRC_DIR),
            self.dist.as_deref().unwrap_or(DEFAULT_DIST_DIR),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_at_the_boundary() {
        let args = CliArgs::try_parse_from(["countrygen", "create"]).unwrap();
        assert!(matches!(args.command, Commands::Create));
        assert_eq!(args.paths(), Paths::new("src", "dist"));
    }

    #[test]
    fn global_paths_after_subcommand() {
        let args =
            CliArgs::try_parse_from(["countrygen", "create", "--src", "/in", "--dist", "/out"])
                .unwrap();
        assert_eq!(args.paths(), Paths::new("/in", "/out"));
    }

    #[test]
    fn import_is_accepted() {
        let args = CliArgs::try_parse_from(["countrygen", "import"]).unwrap();
        assert!(matches!(args.command, Commands::Import));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(CliArgs::try_parse_from(["countrygen"]).is_err());
    }
}
