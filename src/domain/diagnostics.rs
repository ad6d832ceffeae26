// ==========================================
// 商品目录导入系统 - 导入诊断模型
// ==========================================
// 红线: 核心管道只产出结构化诊断数据，不自行格式化文本；
//       展示方式由调用方（CLI/日志汇报方）决定
// ==========================================

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// ReconcileDiagnostics - 键汇聚诊断
// ==========================================
// 对应汇聚阶段的两类数据质量事件:
// - 空键记录: 剔除并计数
// - 重复键: 首条保留，后续剔除；键去重后逐一列出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileDiagnostics {
    pub source: String,           // 源标识（Products/Inventory/Prices）
    pub total: usize,             // 进入汇聚的记录数
    pub retained: usize,          // 汇聚后保留的唯一键记录数
    pub missing_key: usize,       // 空键/空白键剔除数
    pub duplicate_keys: Vec<String>, // 重复键列表（每键一次，首见顺序）
}

// ==========================================
// FeedSummary - 单源读取与汇聚汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSummary {
    pub rows_read: usize,        // 解析出的数据行数
    pub skipped_bad_rows: usize, // 容忍模式下跳过的结构性坏行数
    pub reconcile: ReconcileDiagnostics,
}

// ==========================================
// RejectedPrice / RejectedPriceReport - 价格拒绝报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectedPrice {
    pub sku: String,
    pub net_price: Option<Decimal>, // None = 解析失败/缺失
}

/// 价格拒绝报告
///
/// total 始终为全量拒绝数；sample 为面向人读的样本，
/// 上限见 price_validator::REJECTED_SAMPLE_LIMIT，按 SKU 排序保证稳定输出。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectedPriceReport {
    pub total: usize,
    pub sample: Vec<RejectedPrice>,
}

impl RejectedPriceReport {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

// ==========================================
// LoadCounts - 落库行数
// ==========================================
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoadCounts {
    pub products: usize,
    pub inventory: usize,
    pub prices: usize,
}

// ==========================================
// ImportSummary - 一次导入的完整汇总
// ==========================================
// 导入要么整体成功（附带本汇总），要么整体失败（无数据变更）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub run_id: String,                // 本次导入运行 ID（UUID）
    pub started_at: DateTime<Utc>,
    pub products: FeedSummary,
    pub inventory: FeedSummary,
    pub prices: FeedSummary,
    pub filtered_products: usize,      // 业务规则剔除的商品数（非错误）
    pub rejected_prices: RejectedPriceReport,
    pub loaded: LoadCounts,
    pub elapsed_ms: u64,
}
