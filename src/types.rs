use serde::Serialize;

/// Supported draw categories. Each kind selects both the source URL to
/// scrape and the page-layout parser that understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LotteryKind {
    Mega645,
    Power655,
    Max3D,
    Max4D,
    Keno,
}

impl LotteryKind {
    pub const ALL: [LotteryKind; 5] = [
        LotteryKind::Mega645,
        LotteryKind::Power655,
        LotteryKind::Max3D,
        LotteryKind::Max4D,
        LotteryKind::Keno,
    ];

    /// Case-insensitive match against the uppercased identifier.
    pub fn from_param(param: &str) -> Option<Self> {
        match param.to_uppercase().as_str() {
            "MEGA645" => Some(LotteryKind::Mega645),
            "POWER655" => Some(LotteryKind::Power655),
            "MAX3D" => Some(LotteryKind::Max3D),
            "MAX4D" => Some(LotteryKind::Max4D),
            "KENO" => Some(LotteryKind::Keno),
            _ => None,
        }
    }

    /// Uppercased identifier. Doubles as the name of the environment
    /// variable holding the source URL for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            LotteryKind::Mega645 => "MEGA645",
            LotteryKind::Power655 => "POWER655",
            LotteryKind::Max3D => "MAX3D",
            LotteryKind::Max4D => "MAX4D",
            LotteryKind::Keno => "KENO",
        }
    }
}

/// One extracted draw record. Field names follow the wire format.
#[derive(Debug, Serialize)]
pub struct Reward {
    #[serde(rename = "LotteryType")]
    pub lottery_type: String,
    #[serde(rename = "DateOpen")]
    pub date_open: String,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Results")]
    pub results: Vec<String>,
}

impl Reward {
    pub fn new(kind: LotteryKind) -> Self {
        Self {
            lottery_type: kind.as_str().to_string(),
            date_open: String::new(),
            code: String::new(),
            results: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseResult {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Reward")]
    pub data: Vec<Reward>,
}
