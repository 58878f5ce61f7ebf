pub mod cli;
pub mod file_config;
pub mod settings;

#[cfg(feature = "cli")]
use crate::config::file_config::{FileConfig, SourceKind};
#[cfg(feature = "cli")]
use crate::config::settings::{ImporterSettings, SourceSettings, DEFAULT_PROGRAM, DEFAULT_PROGRAM_ARGS};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "iis-sites-importer", version)]
#[command(about = "Import IIS sites and generate Icinga 2 services")]
pub struct CliConfig {
    /// Path of the TOML or YAML configuration file
    #[arg(short = 'c', long)]
    pub conf_file: Option<String>,

    /// Where the Get-IISSite listing comes from
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// Read a captured listing from this file instead of running a command
    #[arg(long)]
    pub listing_file: Option<String>,

    /// Program that runs the listing command (e.g. pwsh, ssh)
    #[arg(long)]
    pub program: Option<String>,

    /// Argument passed to the program before the listing command; repeatable
    #[arg(long = "program-arg", allow_hyphen_values = true)]
    pub program_args: Vec<String>,

    /// The Jinja template file used to generate the output file
    #[arg(short, long)]
    pub template_file: Option<String>,

    /// The Icinga 2 output file
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Reload Icinga 2 after import
    #[arg(short, long)]
    pub reload: bool,

    /// Fail on template references to missing fields
    #[arg(long)]
    pub strict_template: bool,

    /// Print the rendered configuration instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, alias = "debug", help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔（若有）並以命令列參數覆蓋
    pub fn into_settings(self) -> Result<ImporterSettings> {
        let file = match &self.conf_file {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        let mut settings = ImporterSettings::from_file_config(file)?;
        self.apply_to(&mut settings);
        Ok(settings)
    }

    pub fn apply_to(&self, settings: &mut ImporterSettings) {
        let kind = self
            .source
            .or(self.listing_file.as_ref().map(|_| SourceKind::File));

        match kind {
            Some(SourceKind::File) => {
                let path = match (&self.listing_file, &settings.source) {
                    (Some(path), _) => path.clone(),
                    (None, SourceSettings::File { path }) => path.clone(),
                    (None, SourceSettings::Command { .. }) => String::new(),
                };
                settings.source = SourceSettings::File { path };
            }
            Some(SourceKind::Command) => {
                if !matches!(settings.source, SourceSettings::Command { .. }) {
                    settings.source = SourceSettings::Command {
                        program: DEFAULT_PROGRAM.to_string(),
                        args: DEFAULT_PROGRAM_ARGS.iter().map(|s| s.to_string()).collect(),
                    };
                }
            }
            None => {}
        }

        if let SourceSettings::Command { program, args } = &mut settings.source {
            if let Some(cli_program) = &self.program {
                *program = cli_program.clone();
            }
            if !self.program_args.is_empty() {
                *args = self.program_args.clone();
            }
        }

        if let Some(template_file) = &self.template_file {
            settings.template_file = template_file.clone();
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = output_file.clone();
        }

        settings.reload |= self.reload;
        settings.strict_template |= self.strict_template;
        settings.dry_run = self.dry_run;
    }
}
