use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 捐血間隔（天）
pub const ELIGIBILITY_WINDOW_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn color_class(self) -> &'static str {
        match self {
            Severity::Success => "bg-green-500",
            Severity::Error => "bg-red-500",
            Severity::Warning => "bg-yellow-500",
            Severity::Info => "bg-blue-500",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Severity::Success),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" | "" => Ok(Severity::Info),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// 庫存與資格狀態共用的顏色分級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Red,
    Yellow,
    Green,
}

impl StatusColor {
    /// 庫存徽章的 (背景, 文字) 樣式
    pub fn stock_classes(self) -> (&'static str, &'static str) {
        match self {
            StatusColor::Red => ("bg-red-100", "text-red-700"),
            StatusColor::Yellow => ("bg-yellow-100", "text-yellow-700"),
            StatusColor::Green => ("bg-green-100", "text-green-700"),
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            StatusColor::Red => "text-red-600",
            StatusColor::Yellow => "text-yellow-600",
            StatusColor::Green => "text-green-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Eligibility {
    Eligible,
    Wait { days: i64 },
    /// 最後捐血日期無法解析
    Unknown,
}

impl Eligibility {
    pub fn text(&self) -> String {
        match self {
            Eligibility::Eligible => "Eligible".to_string(),
            Eligibility::Wait { days } => format!("Wait {} days", days),
            Eligibility::Unknown => "Unknown".to_string(),
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            Eligibility::Eligible => StatusColor::Green,
            Eligibility::Wait { .. } => StatusColor::Red,
            Eligibility::Unknown => StatusColor::Yellow,
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

/// `fulfillRequest` 的線上格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillRequest {
    pub request_id: u64,
    pub units_supplied: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorQuery {
    pub search: Option<String>,
    pub blood_type: String,
}

impl Default for DonorQuery {
    fn default() -> Self {
        Self {
            search: None,
            blood_type: "all".to_string(),
        }
    }
}

impl DonorQuery {
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search".to_string(), search.to_string()));
        }
        pairs.push(("blood_type".to_string(), self.blood_type.clone()));
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestQuery {
    pub search: Option<String>,
}

impl RequestQuery {
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| vec![("search".to_string(), s.to_string())])
            .unwrap_or_default()
    }
}
