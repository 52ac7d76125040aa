//! Dictionary configuration.
//!
//! All literal lists the pipeline recognizes are data, not code. The built-in
//! lists below are what [DictionaryConfig::default] returns; a YAML file can
//! override any subset of fields, the rest fall back to the built-in values.
//!
//!     stars:
//!       debt: [化忌, 武曲化忌]
//!     patterns:
//!       adverse: [火貪格]
//!     question_headers: [推薦追問]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Error that can occur while loading configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io(String),
    /// The configuration text is not valid YAML for [DictionaryConfig]
    Yaml(String),
    /// A question header could not be compiled into a matcher
    InvalidHeader(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Could not read configuration: {msg}"),
            ConfigError::Yaml(msg) => write!(f, "Invalid configuration: {msg}"),
            ConfigError::InvalidHeader(msg) => write!(f, "Invalid question header: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Star names grouped by subtype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarLists {
    pub debt: Vec<String>,
    pub opportunity: Vec<String>,
    pub authority: Vec<String>,
    pub reputation: Vec<String>,
    pub adverse: Vec<String>,
    pub favorable: Vec<String>,
    pub romance: Vec<String>,
    pub imperial: Vec<String>,
    pub action: Vec<String>,
    pub intellect: Vec<String>,
    pub dark: Vec<String>,
}

/// Named chart configurations. The whitelist is the union of both lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternLists {
    pub favorable: Vec<String>,
    pub adverse: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    pub stars: StarLists,
    pub flow: Vec<String>,
    pub warning: Vec<String>,
    pub verdict: Vec<String>,
    pub patterns: PatternLists,
    pub bracket_glyphs: Vec<String>,
    /// Ideograms that mark any pattern name containing them as adverse
    pub adverse_ideograms: Vec<char>,
    /// Ideograms that make a label-pair label count as a pattern name
    pub label_risk_ideograms: Vec<char>,
    /// Trailing characters of short labels that count as pattern names
    pub pattern_suffixes: Vec<char>,
    /// Labels of the follow-up question heading (after `## ❓`)
    pub question_headers: Vec<String>,
}

impl DictionaryConfig {
    /// Parse a configuration from YAML. Missing fields take built-in values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Yaml(e.to_string()))
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Yaml(e.to_string()))
    }

    /// The pattern whitelist: favorable names followed by adverse names.
    pub fn pattern_whitelist(&self) -> impl Iterator<Item = &String> {
        self.patterns
            .favorable
            .iter()
            .chain(self.patterns.adverse.iter())
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for StarLists {
    fn default() -> Self {
        StarLists {
            debt: owned(DEBT_STARS),
            opportunity: owned(&["化祿"]),
            authority: owned(&["化權"]),
            reputation: owned(&["化科"]),
            adverse: owned(ADVERSE_STARS),
            favorable: owned(FAVORABLE_STARS),
            romance: owned(&["紅鸞", "天喜", "咸池", "天姚", "沐浴", "大耗"]),
            imperial: owned(&["紫微", "天府"]),
            action: owned(&["七殺", "破軍", "貪狼", "廉貞", "武曲", "太陽"]),
            intellect: owned(&["天機", "天梁", "天相", "天同", "太陰"]),
            dark: owned(&["巨門"]),
        }
    }
}

impl Default for PatternLists {
    fn default() -> Self {
        PatternLists {
            favorable: owned(FAVORABLE_PATTERNS),
            adverse: owned(ADVERSE_PATTERNS),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            stars: StarLists::default(),
            flow: owned(FLOW_KEYWORDS),
            warning: owned(WARNING_KEYWORDS),
            verdict: owned(VERDICT_KEYWORDS),
            patterns: PatternLists::default(),
            bracket_glyphs: owned(&["【", "】", "「", "」"]),
            adverse_ideograms: vec!['忌', '煞', '凶', '惡'],
            label_risk_ideograms: vec!['忌', '沖', '煞', '刑'],
            pattern_suffixes: vec!['格', '局'],
            question_headers: owned(&["推薦追問", "Recommended Follow-up"]),
        }
    }
}

const DEBT_STARS: &[&str] = &[
    "化忌", "武曲化忌", "廉貞化忌", "巨門化忌", "天機化忌", "文昌化忌", "文曲化忌", "太陰化忌",
    "貪狼化忌", "太陽化忌",
];

const ADVERSE_STARS: &[&str] = &[
    "擎羊", "陀羅", "火星", "鈴星", "地空", "地劫", "空宮", "天刑", "孤辰", "寡宿", "大耗", "破碎",
    "天哭", "天虛",
];

const FAVORABLE_STARS: &[&str] = &[
    "祿存", "天馬", "左輔", "右弼", "天魁", "天鉞", "文昌", "文曲", "三台", "八座", "恩光", "天貴",
];

const ADVERSE_PATTERNS: &[&str] = &[
    "馬頭帶劍格",
    "馬頭帶劍",
    "羊陀夾祿格",
    "羊陀夾祿",
    "羊陀夾命格",
    "羊陀夾命",
    "鈴昌陀武格",
    "鈴昌羅紋格",
    "鈴昌羅紋",
    "鈴昌陀武",
    "火貪格",
    "鈴貪格",
    "火貪",
    "鈴貪",
    "泛水桃花格",
    "風流彩杖格",
    "刑囚夾印格",
    "路上埋屍格",
    "財與囚仇格",
    "巨火羊格",
    "空劫夾命格",
    "刑忌夾印格",
    "雙忌夾命格",
    "三忌沖命",
    "雙忌沖命",
    "十惡格",
    "十惡",
    "刑杖格",
    "刑杖",
    "運忌沖命",
    "天機化忌",
    "太陰化忌",
    "雙忌沖",
    "三忌沖",
    "權忌交戰",
    "權忌交沖",
    "祿忌交沖",
    "忌沖",
];

const FAVORABLE_PATTERNS: &[&str] = &[
    "極嚮離明格",
    "極嚮離明",
    "紫府同宮格",
    "紫府朝垣格",
    "君臣慶會格",
    "府相朝垣格",
    "府相朝垣",
    "機月同梁格",
    "機月同梁",
    "機巨同臨格",
    "機巨同臨",
    "陽梁昌祿格",
    "陽梁昌祿",
    "日照雷門格",
    "日照雷門",
    "金燦光輝格",
    "日麗中天",
    "月朗天門格",
    "月朗天門",
    "月生滄海格",
    "月生滄海",
    "明珠出海格",
    "明珠出海",
    "日月並明格",
    "日月並明",
    "日月同宮格",
    "巨日同宮格",
    "巨日同宮",
    "丹墀桂墀格",
    "石中隱玉格",
    "石中隱玉",
    "壽星入廟格",
    "壽星入廟",
    "英星入廟格",
    "英星入廟",
    "七殺朝斗格",
    "七殺朝斗",
    "雄宿朝元格",
    "雄宿朝元",
    "三奇加會格",
    "三奇加會",
    "雙祿朝垣格",
    "雙祿朝垣",
    "祿馬交馳格",
    "祿馬交馳",
    "祿馬佩印格",
    "坐貴向貴格",
    "坐貴向貴",
    "文星拱命格",
    "文星拱命",
    "將星得地格",
    "權祿巡逢格",
    "權祿巡逢",
    "科權祿夾格",
    "財蔭夾印格",
    "財蔭夾印",
    "命無正曜格",
    "命無正曜",
    "殺破狼格",
    "殺破狼",
    "殺破狼局",
    "天同坐戌格",
    "太陰坐酉格",
    "巨門坐子格",
    "巨門坐午格",
    "天梁坐午格",
    "左右同宮格",
    "左右同宮",
    "魁鉞夾命格",
    "兼文武格",
];

const FLOW_KEYWORDS: &[&str] = &[
    "祿入", "忌入", "權入", "科入", "自化", "互沖", "互照", "拱照", "會照", "會合", "夾命", "夾宮",
    "夾局", "->", "→", "轉化", "連結", "引爆", "刑剋", "相欠", "共振", "沖", "沖射", "三合", "對宮",
];

const WARNING_KEYWORDS: &[&str] = &[
    "警世",
    "注意",
    "警告",
    "風險",
    "危機",
    "破蕩",
    "刑傷",
    "血光",
    "官非",
    "糾紛",
    "分離",
    "災難",
    "煞氣",
    "破耗",
    "破局",
    "破損",
    "破壞",
    "水災",
    "止損",
    "沉沒成本",
    "內耗",
    "磨損",
    "殘酷",
    "紅色警報",
    "警報",
    "隱形債務",
];

const VERDICT_KEYWORDS: &[&str] = &[
    "機率極大",
    "極大",
    "必然",
    "肯定",
    "絕對",
    "優勢",
    "核心",
    "關鍵",
    "必定",
    "機率高",
    "指數高",
    "做多",
    "唯一解",
    "突破口",
    "戰略批註",
    "紅樓夢原型",
    "終局對齊",
    "戰略總結",
    "執行方案",
    "機率偏高",
    "風險偏高",
    "突破",
    "格局總覽",
    "判斷：",
    "綜合判定：",
    "座標定位：",
    "星曜取證：",
    "四化盤點：",
    "命盤讀取確認",
    "格局定位",
    "空間座標",
    "本命底色",
    "大限環境",
    "關鍵能量",
];
