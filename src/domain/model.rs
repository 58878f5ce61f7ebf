use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// 站台的附加屬性，由設定檔提供，內容任意
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// 站台名稱 → 屬性；唯讀，合併時以 `Arc` 共享而不複製
pub type AttributeOverrideMap = HashMap<String, Arc<Attributes>>;

pub const MAX_PORT: u64 = u16::MAX as u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub protocol: String,
    pub address: String,
    pub port: u64,
    pub host_name: String,
}

impl Binding {
    pub fn has_valid_port(&self) -> bool {
        self.port <= MAX_PORT
    }
}

// 模板看到的欄位；`type` 與 `ip_address` 為舊模板沿用的別名
impl Serialize for Binding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Binding", 6)?;
        state.serialize_field("protocol", &self.protocol)?;
        state.serialize_field("type", &self.protocol)?;
        state.serialize_field("address", &self.address)?;
        state.serialize_field("ip_address", &self.address)?;
        state.serialize_field("port", &self.port)?;
        state.serialize_field("host_name", &self.host_name)?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    pub name: String,
    pub state: String,
    pub bindings: Vec<Binding>,
    pub attributes: Arc<Attributes>,
}

impl Site {
    pub fn new(name: impl Into<String>, state: impl Into<String>, bindings: Vec<Binding>) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
            bindings,
            attributes: Arc::default(),
        }
    }
}

/// 解析過程中被丟棄的資料統計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub rows_total: usize,
    pub rows_skipped: usize,
    pub bindings_skipped: usize,
    pub out_of_range_ports: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub sites: Vec<Site>,
    pub report: ParseReport,
}
