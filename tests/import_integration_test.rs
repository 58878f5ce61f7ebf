use anyhow::Result;
use iis_sites_importer::config::file_config::FileConfig;
use iis_sites_importer::config::settings::{ImporterSettings, SourceSettings};
use iis_sites_importer::core::LoadOutcome;
use iis_sites_importer::utils::validation::Validate;
use iis_sites_importer::{ImportEngine, ImportPipeline, JinjaRenderer, LocalStorage};
use tempfile::TempDir;

const LISTING: &str = "\r\n\
site1    Started    {http *:80:example.test.local,}\r\n\
garbage line with no braces\r\n\
site2    Stopped    {ftp 10.0.0.1:21:ftp.local, https 10.0.0.1:443:secure.local}\r\n\
\r\n";

const TEMPLATE: &str = r#"{% for site in sites -%}
object Service "iis-{{ site.name }}" {
  host_name = "iis01"
  check_command = "http"
  vars.iis_state = "{{ site.state }}"
  vars.http_vhosts = [{% for b in site.bindings %}"{{ b.protocol }}://{{ b.host_name }}:{{ b.port }}"{% if not loop.last %}, {% endif %}{% endfor %}]
{%- if site.attributes.notes %}
  notes = "{{ site.attributes.notes }}"
{%- endif %}
}
{% endfor %}"#;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> Result<String> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path.to_str().unwrap().to_string())
}

async fn run_with_settings(settings: ImporterSettings) -> Result<LoadOutcome> {
    settings.validate()?;
    let source = settings.source.build();
    let pipeline = ImportPipeline::new(source, LocalStorage::default(), settings, JinjaRenderer::new());
    let summary = ImportEngine::new(pipeline).run().await?;
    Ok(summary.outcome)
}

#[tokio::test]
async fn test_end_to_end_from_captured_listing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let listing = write_fixture(&temp_dir, "listing.txt", LISTING)?;
    let template = write_fixture(&temp_dir, "iis.conf.j2", TEMPLATE)?;
    let output = temp_dir.path().join("conf.d").join("iis-sites.conf");

    let conf = format!(
        r#"
template_file: {template}
output_file: {output}
source:
  kind: file
  path: {listing}
site_attributes:
  site1:
    notes: critical
  retired-site:
    notes: unused
"#,
        template = template,
        output = output.display(),
        listing = listing,
    );
    let conf_path = write_fixture(&temp_dir, "importer.yml", &conf)?;

    let settings = ImporterSettings::from_file_config(FileConfig::from_file(&conf_path)?)?;
    let outcome = run_with_settings(settings).await?;

    assert_eq!(
        outcome,
        LoadOutcome::Written(output.to_str().unwrap().to_string())
    );

    let rendered = std::fs::read_to_string(&output)?;
    assert!(rendered.contains("object Service \"iis-site1\""));
    assert!(rendered.contains("vars.http_vhosts = [\"http://example.test.local:80\"]"));
    assert!(rendered.contains("notes = \"critical\""));
    assert!(rendered.contains("vars.iis_state = \"Stopped\""));
    assert!(rendered.contains(
        "vars.http_vhosts = [\"ftp://ftp.local:21\", \"https://secure.local:443\"]"
    ));
    assert_eq!(rendered.matches("object Service").count(), 2);
    assert!(!rendered.contains("unused"));

    Ok(())
}

#[tokio::test]
async fn test_dry_run_leaves_output_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let listing = write_fixture(&temp_dir, "listing.txt", LISTING)?;
    let template = write_fixture(&temp_dir, "iis.conf.j2", TEMPLATE)?;

    let settings = ImporterSettings {
        source: SourceSettings::File { path: listing },
        template_file: template,
        dry_run: true,
        ..ImporterSettings::default()
    };

    match run_with_settings(settings).await? {
        LoadOutcome::Rendered(output) => {
            assert!(output.contains("iis-site1"));
            assert!(output.contains("iis-site2"));
        }
        other => panic!("expected rendered output, got {:?}", other),
    }
    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 2);

    Ok(())
}

#[tokio::test]
async fn test_listing_without_sites_renders_empty_document() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let listing = write_fixture(&temp_dir, "listing.txt", "Name State Bindings\r\n---- ----- --------\r\n")?;
    let template = write_fixture(&temp_dir, "iis.conf.j2", TEMPLATE)?;
    let output = temp_dir.path().join("iis-sites.conf");

    let settings = ImporterSettings {
        source: SourceSettings::File { path: listing },
        template_file: template,
        output_file: output.to_str().unwrap().to_string(),
        ..ImporterSettings::default()
    };
    run_with_settings(settings).await?;

    assert_eq!(std::fs::read_to_string(&output)?, "");
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn test_command_source_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let template = write_fixture(&temp_dir, "iis.conf.j2", "{% for s in sites %}{{ s.name }};{% endfor %}")?;
    let output = temp_dir.path().join("out.conf");

    let settings = ImporterSettings {
        source: SourceSettings::Command {
            program: "sh".to_string(),
            args: vec!["-c".to_string()],
        },
        listing_command: "printf 'a Started {http *:80:a.local,}\\r\\nb Stopped {http *:81:b.local,}\\r\\n'"
            .to_string(),
        template_file: template,
        output_file: output.to_str().unwrap().to_string(),
        ..ImporterSettings::default()
    };
    run_with_settings(settings).await?;

    assert_eq!(std::fs::read_to_string(&output)?, "a;b;");
    Ok(())
}

#[tokio::test]
async fn test_missing_listing_file_fails_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let template = write_fixture(&temp_dir, "iis.conf.j2", TEMPLATE)?;

    let settings = ImporterSettings {
        source: SourceSettings::File {
            path: temp_dir.path().join("missing.txt").to_str().unwrap().to_string(),
        },
        template_file: template,
        dry_run: true,
        ..ImporterSettings::default()
    };

    assert!(run_with_settings(settings).await.is_err());
    Ok(())
}
