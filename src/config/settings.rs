use crate::adapters::reload::DEFAULT_RELOAD_COMMAND;
use crate::adapters::{AnySource, CommandSource, FileSource};
use crate::config::file_config::{FileConfig, SourceKind};
use crate::domain::model::AttributeOverrideMap;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use std::sync::Arc;

pub const LISTING_COMMAND: &str = "Get-IISSite | ft Name,State,Bindings -HideTableHeaders -auto";
pub const DEFAULT_PROGRAM: &str = "pwsh";
pub const DEFAULT_PROGRAM_ARGS: [&str; 3] = ["-NoProfile", "-NonInteractive", "-Command"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSettings {
    Command { program: String, args: Vec<String> },
    File { path: String },
}

impl SourceSettings {
    pub fn build(&self) -> AnySource {
        match self {
            SourceSettings::Command { program, args } => {
                AnySource::Command(CommandSource::new(program.clone(), args.clone()))
            }
            SourceSettings::File { path } => AnySource::File(FileSource::new(path)),
        }
    }
}

/// 合併設定檔、命令列與預設值後的最終設定
#[derive(Debug, Clone)]
pub struct ImporterSettings {
    pub source: SourceSettings,
    pub listing_command: String,
    pub template_file: String,
    pub output_file: String,
    pub reload: bool,
    pub reload_command: Vec<String>,
    pub strict_template: bool,
    pub dry_run: bool,
    pub site_attributes: AttributeOverrideMap,
}

impl Default for ImporterSettings {
    fn default() -> Self {
        Self {
            source: SourceSettings::Command {
                program: DEFAULT_PROGRAM.to_string(),
                args: DEFAULT_PROGRAM_ARGS.iter().map(|s| s.to_string()).collect(),
            },
            listing_command: LISTING_COMMAND.to_string(),
            template_file: String::new(),
            output_file: String::new(),
            reload: false,
            reload_command: DEFAULT_RELOAD_COMMAND.iter().map(|s| s.to_string()).collect(),
            strict_template: false,
            dry_run: false,
            site_attributes: AttributeOverrideMap::new(),
        }
    }
}

impl ImporterSettings {
    pub fn from_file_config(file: FileConfig) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(source) = file.source {
            let kind = source.kind.unwrap_or(if source.path.is_some() {
                SourceKind::File
            } else {
                SourceKind::Command
            });

            settings.source = match kind {
                SourceKind::Command => SourceSettings::Command {
                    program: source.program.unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
                    args: source.args.unwrap_or_else(|| {
                        DEFAULT_PROGRAM_ARGS.iter().map(|s| s.to_string()).collect()
                    }),
                },
                SourceKind::File => SourceSettings::File {
                    path: validation::validate_required_field("source.path", &source.path)?.clone(),
                },
            };

            if let Some(command) = source.command {
                settings.listing_command = command;
            }
        }

        if let Some(template_file) = file.template_file {
            settings.template_file = template_file;
        }
        if let Some(output_file) = file.output_file {
            settings.output_file = output_file;
        }
        if let Some(reload) = file.reload_icinga {
            settings.reload = reload;
        }
        if let Some(reload_command) = file.reload_command {
            settings.reload_command = reload_command;
        }
        if let Some(strict) = file.strict_template {
            settings.strict_template = strict;
        }
        if let Some(site_attributes) = file.site_attributes {
            settings.site_attributes = site_attributes
                .into_iter()
                .map(|(name, attributes)| (name, Arc::new(attributes)))
                .collect();
        }

        Ok(settings)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("template_file", &self.template_file)?;
        validation::validate_non_empty_string("listing_command", &self.listing_command)?;

        // dry-run 只輸出到 stdout，不需要輸出檔案
        if !self.dry_run {
            validation::validate_path("output_file", &self.output_file)?;
        }

        match &self.source {
            SourceSettings::Command { program, .. } => {
                validation::validate_non_empty_string("source.program", program)?
            }
            SourceSettings::File { path } => validation::validate_path("source.path", path)?,
        }

        if self.reload {
            validation::validate_command("reload_command", &self.reload_command)?;
        }

        for name in self.site_attributes.keys() {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(EtlError::InvalidConfigValueError {
                    field: "site_attributes".to_string(),
                    value: name.clone(),
                    reason: "Site names cannot be empty or contain whitespace".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for ImporterSettings {
    fn listing_command(&self) -> &str {
        &self.listing_command
    }

    fn template_file(&self) -> &str {
        &self.template_file
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn site_attributes(&self) -> &AttributeOverrideMap {
        &self.site_attributes
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for ImporterSettings {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
