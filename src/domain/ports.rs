use crate::domain::model::{AttributeOverrideMap, Site, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 取得 `Get-IISSite` 列表原始文字的來源
pub trait ListingSource: Send + Sync {
    fn fetch_listing(
        &self,
        command: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, sites: &[Site]) -> Result<String>;
}

#[async_trait]
pub trait Reloader: Send + Sync {
    async fn reload(&self) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn listing_command(&self) -> &str;
    fn template_file(&self) -> &str;
    fn output_file(&self) -> &str;
    fn site_attributes(&self) -> &AttributeOverrideMap;
    fn dry_run(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, raw: String) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<LoadOutcome>;
}

/// `load` 的結果：寫入的檔案路徑，或 dry-run 時的渲染內容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Written(String),
    Rendered(String),
}
