// ==========================================
// 商品目录导入系统 - CSV 读取配置
// ==========================================
// 职责: 坏数据容忍策略 + 价格源映射变体选择
// 存储: JSON 配置文件（可选，缺省时使用默认值）
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 价格源的两种映射变体
///
/// 同一份价格数据存在两种投递格式：
/// - Positional: 无表头，按列下标取值
/// - Named: 带表头，按列名取值
///
/// 两者只是映射策略不同，解析与后续管道完全一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceFeedVariant {
    #[default]
    Positional,
    Named,
}

/// CSV 读取配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvSettings {
    /// 坏数据策略: false = 结构性坏行直接终止本次导入（默认），
    /// true = 跳过坏行并计数，导入继续
    pub ignore_bad_data: bool,

    /// 价格源映射变体
    pub price_feed_variant: PriceFeedVariant,
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self {
            ignore_bad_data: false,
            price_feed_variant: PriceFeedVariant::Positional,
        }
    }
}

impl CsvSettings {
    /// 从 JSON 文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }
}
