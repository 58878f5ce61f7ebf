use crate::core::binding::parse_binding;
use crate::core::row::extract_row;
use crate::domain::model::{Binding, ParseReport, Site};
use crate::utils::error::BindingParseError;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedListing {
    pub sites: Vec<Site>,
    pub report: ParseReport,
}

/// 將 `Get-IISSite | ft Name,State,Bindings -HideTableHeaders -auto` 的輸出轉成站台清單。
///
/// 無法解析的行或 binding 片段會被丟棄並記錄在 [`ParseReport`]，整體解析永遠不會失敗。
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingParser;

impl ListingParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, raw: &str) -> ParsedListing {
        let mut sites = Vec::new();
        let mut report = ParseReport::default();

        for row in raw.lines().map(str::trim).filter(|row| !row.is_empty()) {
            report.rows_total += 1;
            tracing::debug!("Exporting the row '{}'", row);

            let raw_row = match extract_row(row) {
                Ok(raw_row) => raw_row,
                Err(e) => {
                    tracing::debug!("Skipping row: {}", e);
                    report.rows_skipped += 1;
                    continue;
                }
            };

            let bindings = self.parse_bindings(raw_row.name, raw_row.bindings, &mut report);
            tracing::debug!(
                "Site '{}' ({}) with {} bindings",
                raw_row.name,
                raw_row.state,
                bindings.len()
            );

            sites.push(Site::new(raw_row.name, raw_row.state, bindings));
        }

        ParsedListing { sites, report }
    }

    fn parse_bindings(&self, site: &str, text: &str, report: &mut ParseReport) -> Vec<Binding> {
        let mut bindings = Vec::new();

        for fragment in text.split(',') {
            match parse_binding(fragment) {
                Ok(binding) => {
                    if !binding.has_valid_port() {
                        tracing::warn!(
                            "⚠️ Site '{}' has a binding with out-of-range port {}",
                            site,
                            binding.port
                        );
                        report.out_of_range_ports += 1;
                    }
                    bindings.push(binding);
                }
                // IIS 每個 binding 後都帶逗號，最後一段必為空
                Err(BindingParseError::Empty) => {}
                Err(e) => {
                    tracing::debug!("Skipping binding of site '{}': {}", site, e);
                    report.bindings_skipped += 1;
                }
            }
        }

        bindings
    }
}

pub fn parse_listing(raw: &str) -> Vec<Site> {
    ListingParser::new().parse(raw).sites
}
