//! CLI runner - executes a generation request

use crate::cli::commands::Cli;
use crate::config::{GenConfig, DEFAULT_PACKAGE};
use crate::decode::DocumentFormat;
use crate::error::{Error, Result, ResultExt};
use crate::generator::Generator;
use crate::naming::is_go_identifier;
use crate::types::OptionStringExt;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command.
    ///
    /// Nothing is written unless generation succeeds.
    pub async fn run(&self) -> Result<()> {
        let config = self.build_config()?;
        let format = self.input_format();
        let generator = Generator::new(&config)?
            .with_format(format)
            .with_alignment(!self.cli.no_align);

        let echo_path = self.echo_path(format)?;

        let input = self.read_input().await?;
        let source = generator.generate(&input)?;

        if let Some(path) = echo_path {
            write_file(&path, input.as_bytes()).await?;
            info!(path = %path.display(), "Wrote source document");
        }
        self.write_output(&source).await
    }

    /// Merge the config file (if any) with the command-line flags
    fn build_config(&self) -> Result<GenConfig> {
        let mut config = match &self.cli.config {
            Some(path) => GenConfig::from_file(path)?,
            None => GenConfig::default(),
        };
        let package_from_file = config.package != DEFAULT_PACKAGE;

        if let Some(name) = self.cli.name.clone().none_if_empty() {
            config.name = name;
        }
        if let Some(struct_name) = self.cli.struct_name.clone().none_if_empty() {
            config.struct_name = struct_name;
        }
        if let Some(pkg) = self.cli.pkg.clone().none_if_empty() {
            config.package = pkg;
        } else if !package_from_file {
            if let Some(pkg) = derive_package(self.output_path()) {
                debug!(package = %pkg, "Derived package name");
                config.package = pkg;
            }
        }
        config.import_json |= self.cli.add_import;
        config.map_type |= self.cli.map_type;
        if !self.cli.tag_keys.is_empty() {
            config.tag_keys = self
                .cli
                .tag_keys
                .iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect();
        }

        if config.name.trim().is_empty() {
            return Err(Error::config(
                "Name of the type must be provided with -n/--name or in the config file",
            ));
        }
        Ok(config)
    }

    /// Input format: explicit flag, then file extension, then JSON
    fn input_format(&self) -> DocumentFormat {
        self.cli
            .format
            .or_else(|| self.input_path().and_then(DocumentFormat::from_path))
            .unwrap_or_default()
    }

    fn input_path(&self) -> Option<&Path> {
        self.cli.input.as_deref().filter(|p| !is_stdio(p))
    }

    fn output_path(&self) -> Option<&Path> {
        self.cli.output.as_deref().filter(|p| !is_stdio(p))
    }

    /// Where to echo the source document, if requested and possible
    fn echo_path(&self, format: DocumentFormat) -> Result<Option<PathBuf>> {
        if !self.cli.write_json {
            return Ok(None);
        }
        let Some(output) = self.output_path() else {
            warn!("--write-json ignored: output goes to stdout");
            return Ok(None);
        };

        let path = output.with_extension(format.extension());
        if path == output {
            return Err(Error::config(format!(
                "Source document would overwrite the output file '{}'",
                output.display()
            )));
        }
        Ok(Some(path))
    }

    async fn read_input(&self) -> Result<String> {
        match self.input_path() {
            Some(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::FileNotFound {
                        path: path.display().to_string(),
                    }
                } else {
                    Error::Io(e)
                }
            }),
            None => {
                debug!("Reading document from stdin");
                let mut input = String::new();
                tokio::io::stdin().read_to_string(&mut input).await?;
                Ok(input)
            }
        }
    }

    async fn write_output(&self, source: &str) -> Result<()> {
        match self.output_path() {
            Some(path) => {
                write_file(path, source.as_bytes()).await?;
                info!(path = %path.display(), "Wrote Go source");
                Ok(())
            }
            None => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(source.as_bytes()).await?;
                stdout.flush().await?;
                Ok(())
            }
        }
    }
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write '{}'", path.display()))
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Package name for generated code: the name of the output file's directory,
/// or of the working directory when writing to stdout.
///
/// Candidates that are not valid Go identifiers are skipped.
pub fn derive_package(output: Option<&Path>) -> Option<String> {
    let from_output = output
        .and_then(|path| std::path::absolute(path).ok())
        .and_then(|path| path.parent().and_then(dir_name));
    let from_cwd = || std::env::current_dir().ok().and_then(|dir| dir_name(&dir));

    from_output
        .filter(|name| is_package_name(name))
        .or_else(|| from_cwd().filter(|name| is_package_name(name)))
}

fn dir_name(dir: &Path) -> Option<String> {
    dir.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_lowercase)
}

fn is_package_name(name: &str) -> bool {
    is_go_identifier(name)
}
