use crate::domain::model::{AttributeOverrideMap, Site};
use std::collections::HashSet;
use std::sync::Arc;

/// 依站台名稱將設定檔中的屬性掛到每個站台上，順序與數量不變
pub fn merge_attributes(sites: Vec<Site>, overrides: &AttributeOverrideMap) -> Vec<Site> {
    tracing::debug!("Passed site attributes for {} sites", overrides.len());

    sites
        .into_iter()
        .map(|mut site| {
            site.attributes = match overrides.get(&site.name) {
                Some(attributes) => {
                    tracing::debug!("Site '{}' gets {} attributes", site.name, attributes.len());
                    Arc::clone(attributes)
                }
                None => Arc::default(),
            };
            site
        })
        .collect()
}

/// 設定了屬性但列表中不存在的站台名稱（已排序）
pub fn unused_overrides<'a>(sites: &[Site], overrides: &'a AttributeOverrideMap) -> Vec<&'a str> {
    let names: HashSet<&str> = sites.iter().map(|s| s.name.as_str()).collect();
    let mut unused: Vec<&str> = overrides
        .keys()
        .map(String::as_str)
        .filter(|name| !names.contains(name))
        .collect();
    unused.sort_unstable();
    unused
}
