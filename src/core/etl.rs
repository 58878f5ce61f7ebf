use crate::core::{LoadOutcome, Pipeline, Reloader};
use crate::domain::model::ParseReport;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub outcome: LoadOutcome,
    pub sites: usize,
    pub report: ParseReport,
    pub reloaded: bool,
}

pub struct ImportEngine<P: Pipeline> {
    pipeline: P,
    reloader: Option<Box<dyn Reloader>>,
}

impl<P: Pipeline> ImportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            reloader: None,
        }
    }

    /// 輸出寫入後觸發重新載入（dry-run 時略過）
    pub fn with_reloader(mut self, reloader: impl Reloader + 'static) -> Self {
        self.reloader = Some(Box::new(reloader));
        self
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting import ...");

        let raw = self.pipeline.extract().await?;
        tracing::info!("📡 Listing fetched ({} bytes)", raw.len());

        let result = self.pipeline.transform(raw).await?;
        let report = result.report.clone();
        let sites = result.sites.len();
        tracing::info!(
            "🔄 Parsed {} sites ({} rows skipped, {} bindings skipped)",
            sites,
            report.rows_skipped,
            report.bindings_skipped
        );
        if report.out_of_range_ports > 0 {
            tracing::warn!(
                "⚠️ {} bindings carry a port outside 0-65535",
                report.out_of_range_ports
            );
        }
        if sites == 0 {
            tracing::warn!("⚠️ No sites found in the listing, the output will be empty");
        }

        let outcome = self.pipeline.load(result).await?;

        let reloaded = match (&outcome, &self.reloader) {
            (LoadOutcome::Written(_), Some(reloader)) => match reloader.reload().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("⚠️ Error during Icinga2 reload: {}", e);
                    false
                }
            },
            _ => {
                tracing::debug!("Icinga2 reload not needed, skipping ...");
                false
            }
        };

        Ok(RunSummary {
            outcome,
            sites,
            report,
            reloaded,
        })
    }
}
