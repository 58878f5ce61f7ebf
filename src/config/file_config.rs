use crate::domain::model::Attributes;
use crate::utils::error::{EtlError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex must compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Command,
    File,
}

/// 設定檔內容；所有欄位皆為選填，未填者由命令列或預設值補上
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub source: Option<SourceConfig>,
    pub template_file: Option<String>,
    pub output_file: Option<String>,
    pub reload_icinga: Option<bool>,
    pub reload_command: Option<Vec<String>>,
    pub strict_template: Option<bool>,
    pub site_attributes: Option<HashMap<String, Attributes>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub kind: Option<SourceKind>,
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
    pub path: Option<String>,
    pub command: Option<String>,
}

impl FileConfig {
    /// 從檔案載入配置；`.yaml` / `.yml` 以 YAML 解析，其餘皆視為 TOML
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("📁 Loading settings from {} ...", path.display());

        let content = std::fs::read_to_string(path).map_err(EtlError::IoError)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };

        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        // 空白的 YAML 檔等同於沒有任何設定
        let config: Option<Self> =
            serde_yaml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
                field: "yaml_parsing".to_string(),
                message: format!("YAML parsing error: {}", e),
            })?;
        Ok(config.unwrap_or_default())
    }

    /// 替換環境變數 (例如 ${WINRM_PASSWORD})；未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_parse_toml_config() {
        let toml_content = r#"
template_file = "templates/iis.conf.j2"
output_file = "/etc/icinga2/conf.d/iis-sites.conf"
reload_icinga = true

[source]
kind = "command"
program = "ssh"
args = ["admin@iis01", "powershell", "-Command"]

[site_attributes.site1]
notes = "critical"
check_interval = 60
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        let source = config.source.unwrap();

        assert_eq!(source.kind, Some(SourceKind::Command));
        assert_eq!(source.program.as_deref(), Some("ssh"));
        assert_eq!(config.reload_icinga, Some(true));

        let attributes = &config.site_attributes.unwrap()["site1"];
        assert_eq!(attributes["notes"], json!("critical"));
        assert_eq!(attributes["check_interval"], json!(60));
    }

    #[test]
    fn test_parse_yaml_config_ignores_unknown_keys() {
        let yaml_content = r#"
winrm_url: http://iis01:5985/wsman
template_file: iis.conf.j2
output_file: iis.conf
reload_icinga: false
site_attributes:
  site1:
    notes: critical
    groups: [web, production]
"#;

        let config = FileConfig::from_yaml_str(yaml_content).unwrap();
        assert_eq!(config.template_file.as_deref(), Some("iis.conf.j2"));
        assert_eq!(
            config.site_attributes.unwrap()["site1"]["groups"],
            json!(["web", "production"])
        );
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = FileConfig::from_yaml_str("").unwrap();
        assert!(config.template_file.is_none());
        assert!(config.site_attributes.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("IIS_IMPORTER_TEST_OUTPUT", "/tmp/iis.conf");

        let config = FileConfig::from_toml_str(
            r#"output_file = "${IIS_IMPORTER_TEST_OUTPUT}"
template_file = "${IIS_IMPORTER_TEST_UNSET}""#,
        )
        .unwrap();
        assert_eq!(config.output_file.as_deref(), Some("/tmp/iis.conf"));
        assert_eq!(
            config.template_file.as_deref(),
            Some("${IIS_IMPORTER_TEST_UNSET}")
        );

        std::env::remove_var("IIS_IMPORTER_TEST_OUTPUT");
    }

    #[test]
    fn test_invalid_toml() {
        let err = FileConfig::from_toml_str("template_file = ").unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file_by_extension() {
        let mut yaml_file = Builder::new().suffix(".yml").tempfile().unwrap();
        yaml_file.write_all(b"output_file: from-yaml.conf\n").unwrap();
        let config = FileConfig::from_file(yaml_file.path()).unwrap();
        assert_eq!(config.output_file.as_deref(), Some("from-yaml.conf"));

        let mut toml_file = Builder::new().suffix(".toml").tempfile().unwrap();
        toml_file.write_all(b"output_file = \"from-toml.conf\"\n").unwrap();
        let config = FileConfig::from_file(toml_file.path()).unwrap();
        assert_eq!(config.output_file.as_deref(), Some("from-toml.conf"));
    }
}
