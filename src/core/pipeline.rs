use crate::core::listing::ListingParser;
use crate::core::merge::{merge_attributes, unused_overrides};
use crate::core::{ConfigProvider, ListingSource, LoadOutcome, Pipeline, Renderer, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};

/// 取得列表 → 解析並合併屬性 → 渲染模板並寫出
pub struct ImportPipeline<L: ListingSource, S: Storage, C: ConfigProvider, R: Renderer> {
    source: L,
    storage: S,
    config: C,
    renderer: R,
    parser: ListingParser,
}

impl<L: ListingSource, S: Storage, C: ConfigProvider, R: Renderer> ImportPipeline<L, S, C, R> {
    pub fn new(source: L, storage: S, config: C, renderer: R) -> Self {
        Self {
            source,
            storage,
            config,
            renderer,
            parser: ListingParser::new(),
        }
    }
}

#[async_trait::async_trait]
impl<L: ListingSource, S: Storage, C: ConfigProvider, R: Renderer> Pipeline
    for ImportPipeline<L, S, C, R>
{
    async fn extract(&self) -> Result<String> {
        tracing::debug!(
            "Executing the listing command: {} ...",
            self.config.listing_command()
        );
        let raw = self.source.fetch_listing(self.config.listing_command()).await?;
        tracing::debug!("Command output: {:?}", raw);
        Ok(raw)
    }

    async fn transform(&self, raw: String) -> Result<TransformResult> {
        let parsed = self.parser.parse(&raw);
        let overrides = self.config.site_attributes();

        for name in unused_overrides(&parsed.sites, overrides) {
            tracing::debug!("Attributes for '{}' match no site in the listing", name);
        }

        let sites = merge_attributes(parsed.sites, overrides);
        tracing::debug!("Sites objects: {:?}", sites);

        Ok(TransformResult {
            sites,
            report: parsed.report,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<LoadOutcome> {
        let template_file = self.config.template_file();
        let template = self.storage.read_file(template_file).await?;
        let template = String::from_utf8(template).map_err(|e| EtlError::ProcessingError {
            message: format!("Template {} is not valid UTF-8: {}", template_file, e),
        })?;

        let output = self.renderer.render(&template, &result.sites)?;

        if self.config.dry_run() {
            tracing::debug!("Dry run, {} bytes rendered and not written", output.len());
            return Ok(LoadOutcome::Rendered(output));
        }

        let output_file = self.config.output_file();
        self.storage.write_file(output_file, output.as_bytes()).await?;
        Ok(LoadOutcome::Written(output_file.to_string()))
    }
}
