/*!
 * Configuration handling for vcfilters
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;

/// Command-line arguments for vcfilters
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "vcfilters",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate Visual Studio .filters files from C++ project files",
    long_about = "Reads a Visual Studio project file (.vcxproj) and generates the companion .filters file, grouping every source file into a virtual folder derived from its relative path."
)]
pub struct Args {
    /// Path to the Visual Studio project file (.vcxproj)
    #[clap(required_unless_present = "generate")]
    pub project_file: Option<String>,

    /// Output file path (defaults to `<project-file>.filters`)
    #[clap(short, long)]
    pub output: Option<String>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Project file to convert
    pub project_file: PathBuf,

    /// Output .filters file path
    pub output_file: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        ensure!(args.project_file.is_some(), Config, "no project file given");
        let project_file = args.project_file.unwrap_or_default();

        // The companion file sits next to the project with ".filters"
        // appended to the full file name, extension included.
        let output_file = args
            .output
            .unwrap_or_else(|| format!("{}.filters", project_file));

        Ok(Self {
            project_file: PathBuf::from(project_file),
            output_file: PathBuf::from(output_file),
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.project_file.is_file(),
            Config,
            "Project file not found: {}",
            self.project_file.display()
        );

        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent.as_os_str().is_empty() || parent.exists(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }
}
