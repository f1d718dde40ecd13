// stubgen CLI - resolves type descriptors and drives the pipeline
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stubgen_build::{BuildConfig, StubWriter};
use stubgen_descriptor::DescriptorIndex;

/// Argument template echoed with every diagnostic.
pub const USAGE: &str = "The arguments should be:\n  \
stubgen generate <type-name> <output-root> --- generate a stub implementation source file\n  \
stubgen archive <type-name> <archive-path> --- compile the stub and package it into a zip archive";

#[derive(Parser)]
#[command(
    name = "stubgen",
    version,
    about = "Generates default-valued stub implementations for Java types"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate a stub implementation source file
    Generate {
        /// Canonical name of the class or interface to implement
        type_name: String,
        /// Root directory for the generated source tree
        output_root: PathBuf,
        /// Directory holding the type descriptor catalog
        #[arg(long, default_value = "./descriptors")]
        descriptors: PathBuf,
    },
    /// Generate, compile, and package the stub into a zip archive
    Archive {
        /// Canonical name of the class or interface to implement
        type_name: String,
        /// Path of the archive file to write
        archive_path: PathBuf,
        /// Directory holding the type descriptor catalog
        #[arg(long, default_value = "./descriptors")]
        descriptors: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            type_name,
            output_root,
            descriptors,
        } => {
            let index = DescriptorIndex::load_dir(&descriptors)
                .context("failed to load the descriptor catalog")?;
            let token = index.resolve(&type_name)?;

            let writer = StubWriter::new(BuildConfig::default());
            let path = writer
                .generate(token, &output_root)
                .context("failed to generate the stub implementation")?;
            println!("Generated {}", path.display());
        }
        Commands::Archive {
            type_name,
            archive_path,
            descriptors,
        } => {
            let index = DescriptorIndex::load_dir(&descriptors)
                .context("failed to load the descriptor catalog")?;
            let token = index.resolve(&type_name)?;

            let writer = StubWriter::new(BuildConfig::default());
            writer
                .generate_archive(token, &archive_path)
                .context("failed to generate the stub archive")?;
            println!("Packaged {}", archive_path.display());
        }
    }
    Ok(())
}

/// Render a failure as a diagnostic line, the original arguments, and
/// the usage template.
pub fn print_failure(error: &anyhow::Error, args: &[String]) {
    eprintln!("error: {:#}", error);
    eprintln!();
    eprintln!("Your arguments: {:?}", args);
    eprintln!();
    eprintln!("{}", USAGE);
}
