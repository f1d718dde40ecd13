// stubgen_build - writes stub sources, drives javac, packages archives
mod config;

pub use config::BuildConfig;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use stubgen_codegen::{assemble, encode, GenerateError};
use stubgen_descriptor::TypeDescriptor;
use thiserror::Error;
use tracing::{debug, info};
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Failures raised by the generation and archive pipeline. Every stage
/// fails fast; partially written output is left on disk.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    InvalidToken(#[from] GenerateError),

    #[error("cannot construct output path for {name} under {root}")]
    PathConstruction {
        name: String,
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create output directory {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write stub source to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot resolve the code location of {name}")]
    ClassPathResolution { name: String },

    #[error("cannot invoke compiler '{command}'")]
    CompilerSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("compilation of {path} failed: {stderr}")]
    Compilation { path: PathBuf, stderr: String },

    #[error("cannot create archive at {path}")]
    Archive {
        path: PathBuf,
        #[source]
        source: ZipError,
    },

    #[error("cannot copy compiled artifact {artifact} into archive")]
    ArchiveCopy {
        artifact: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Drives one generation call: assemble, encode, write, and in archive
/// mode compile and package. Holds no state between invocations.
pub struct StubWriter {
    config: BuildConfig,
}

impl StubWriter {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Write the encoded stub source for `token` under `output_root`
    /// at its package-qualified path, returning the written path.
    pub fn generate(
        &self,
        token: &TypeDescriptor,
        output_root: &Path,
    ) -> Result<PathBuf, BuildError> {
        let unit = assemble(token)?;
        let code = encode(&unit.to_source());

        let path = stub_file_path(output_root, token, "java")?;
        create_parent_directories(&path)?;
        write_source(&path, &code)?;

        info!(path = %path.display(), "stub source written");
        Ok(path)
    }

    /// Generate, compile, and package the stub for `token` into a
    /// zip-format archive at `archive_path` with a single entry at the
    /// package-qualified `.class` path.
    pub fn generate_archive(
        &self,
        token: &TypeDescriptor,
        archive_path: &Path,
    ) -> Result<(), BuildError> {
        let directory = match archive_path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let source = self.generate(token, &directory)?;
        self.compile(token, &source)?;
        self.package_archive(token, &directory, archive_path)?;

        info!(path = %archive_path.display(), "archive written");
        Ok(())
    }

    fn compile(&self, token: &TypeDescriptor, source: &Path) -> Result<(), BuildError> {
        let classpath =
            token
                .code_source
                .as_ref()
                .ok_or_else(|| BuildError::ClassPathResolution {
                    name: token.canonical_name(),
                })?;

        let mut cmd = Command::new(&self.config.javac);
        for option in &self.config.compiler_options {
            cmd.arg(option);
        }
        cmd.arg("-cp").arg(classpath).arg(source);
        debug!(command = %self.config.javac, source = %source.display(), "invoking compiler");

        let output = cmd
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| BuildError::CompilerSpawn {
                command: self.config.javac.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(BuildError::Compilation {
                path: source.to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }

    fn package_archive(
        &self,
        token: &TypeDescriptor,
        directory: &Path,
        archive_path: &Path,
    ) -> Result<(), BuildError> {
        let artifact = stub_file_path(directory, token, "class")?;
        let entry = archive_entry_path(token);

        let file = File::create(archive_path).map_err(|source| BuildError::Archive {
            path: archive_path.to_path_buf(),
            source: ZipError::Io(source),
        })?;
        let mut writer = ZipWriter::new(file);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        writer
            .start_file(&entry, options)
            .map_err(|source| BuildError::Archive {
                path: archive_path.to_path_buf(),
                source,
            })?;
        let mut input = File::open(&artifact).map_err(|source| BuildError::ArchiveCopy {
            artifact: artifact.clone(),
            source,
        })?;
        io::copy(&mut input, &mut writer).map_err(|source| BuildError::ArchiveCopy {
            artifact: artifact.clone(),
            source,
        })?;
        writer.finish().map_err(|source| BuildError::Archive {
            path: archive_path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

/// Absolute path of the stub file for `token` under `root`:
/// `<root>/<package-as-path>/<Simple>Impl.<extension>`.
fn stub_file_path(
    root: &Path,
    token: &TypeDescriptor,
    extension: &str,
) -> Result<PathBuf, BuildError> {
    let mut path = root.to_path_buf();
    for segment in token.package.split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(format!("{}.{}", token.stub_name(), extension));

    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = std::env::current_dir().map_err(|source| BuildError::PathConstruction {
            name: token.canonical_name(),
            root: root.to_path_buf(),
            source,
        })?;
        Ok(cwd.join(path))
    }
}

/// Zip entry path for the compiled stub, always `/`-separated.
fn archive_entry_path(token: &TypeDescriptor) -> String {
    if token.package.is_empty() {
        format!("{}.class", token.stub_name())
    } else {
        format!("{}/{}.class", token.package.replace('.', "/"), token.stub_name())
    }
}

/// Idempotent creation of the stub file's parent directories.
fn create_parent_directories(path: &Path) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| BuildError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Buffered write of the encoded source; the handle is flushed and
/// released on every exit path.
fn write_source(path: &Path, code: &str) -> Result<(), BuildError> {
    let file = File::create(path).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(code.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|source| BuildError::Write {
            path: path.to_path_buf(),
            source,
        })
}
