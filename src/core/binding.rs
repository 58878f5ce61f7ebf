use crate::domain::model::Binding;
use crate::utils::error::BindingParseError;
use regex::Regex;
use std::sync::LazyLock;

// `<protocol> <address>:<port>:<host>`；address 取第一個空白之後到最後兩組冒號之前
static BINDING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s(.+):([0-9]+):(\S+)$").expect("static regex must compile")
});

/// 解析單一 binding 片段，例如 `http *:80:example.test.local`
pub fn parse_binding(fragment: &str) -> Result<Binding, BindingParseError> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Err(BindingParseError::Empty);
    }

    let caps = BINDING_RE
        .captures(fragment)
        .ok_or_else(|| BindingParseError::Malformed(fragment.to_string()))?;

    // 文法已保證全為數字，只有超出 u64 時才會失敗；飽和後交由呼叫端標記為超出範圍
    let port = caps[3].parse::<u64>().unwrap_or(u64::MAX);

    Ok(Binding {
        protocol: caps[1].to_string(),
        address: caps[2].to_string(),
        port,
        host_name: caps[4].to_string(),
    })
}
