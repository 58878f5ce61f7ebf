use crate::utils::error::RowParseError;
use regex::Regex;
use std::sync::LazyLock;

// state 為貪婪比對，內含 `{...}` 的狀態文字不會被誤當成 bindings 區段
static ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+(.+)\s+\{(.+)\}\s*$").expect("static regex must compile")
});

/// 一行 `Get-IISSite` 表格輸出拆出的三個欄位，尚未解析 bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRow<'a> {
    pub name: &'a str,
    pub state: &'a str,
    pub bindings: &'a str,
}

pub fn extract_row(row: &str) -> Result<RawRow<'_>, RowParseError> {
    let row = row.trim();
    let caps = ROW_RE
        .captures(row)
        .ok_or_else(|| RowParseError::Malformed(row.to_string()))?;

    let name = caps.get(1).map_or("", |m| m.as_str());
    if name.is_empty() {
        return Err(RowParseError::MissingField {
            row: row.to_string(),
            field: "name",
        });
    }

    let state = caps.get(2).map_or("", |m| m.as_str().trim());
    if state.is_empty() {
        return Err(RowParseError::MissingField {
            row: row.to_string(),
            field: "state",
        });
    }

    let bindings = caps.get(3).map_or("", |m| m.as_str());

    Ok(RawRow {
        name,
        state,
        bindings,
    })
}
