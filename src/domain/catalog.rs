// ==========================================
// 商品目录导入系统 - 目录领域模型
// ==========================================
// 三条数据链: 原始记录（字符串态）→ 规范实体（已定型）→ 查询视图
// 红线: 原始记录只在一次导入流程内存活，规范实体每次导入整体重建
// ==========================================

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// RawProductRecord - 商品源原始记录
// ==========================================
// 用途: 导入管道中间产物（文件解析 → 字段映射 → 此结构）
// 所有字段保持字符串态，缺失/乱码在此层被容忍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProductRecord {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub ean: Option<String>,
    pub producer_name: Option<String>,
    pub category: Option<String>,      // 层级路径，如 "A|B|C" 或 "A/B/C"
    pub is_wire: Option<String>,       // 线缆标记令牌（业务过滤用）
    pub shipping: Option<String>,      // 发货时长令牌，如 "24 days"
    pub available: Option<String>,     // 可售令牌（业务过滤用）
    pub default_image: Option<String>,

    // 元信息
    pub row_number: usize, // 原始文件行号（用于诊断）
}

// ==========================================
// RawInventoryRecord - 库存源原始记录
// ==========================================
// manufacturer_name/manufacturer_ref_num/shipping 为源文件携带的
// 透传字段，转换阶段丢弃，不进入规范实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInventoryRecord {
    pub sku: Option<String>,
    pub unit: Option<String>,
    pub qty: Option<String>,
    pub manufacturer_name: Option<String>,
    pub manufacturer_ref_num: Option<String>,
    pub shipping: Option<String>,
    pub shipping_cost: Option<String>,

    pub row_number: usize,
}

// ==========================================
// RawPriceRecord - 价格源原始记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPriceRecord {
    pub sku: Option<String>,
    pub net_price: Option<String>,

    pub row_number: usize,
}

// ==========================================
// Product - 商品规范实体
// ==========================================
// 用途: 导入层写入 products 表，查询层只读
// category 为层级路径的末级叶子（见 data_cleaner::extract_last_category）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub sku: String, // 唯一键
    pub name: Option<String>,
    pub ean: Option<String>,
    pub manufacturer: Option<String>,
    pub category: String, // 末级类目，源路径缺失时为空串
    pub image_url: Option<String>,
}

// ==========================================
// Inventory - 库存规范实体
// ==========================================
// qty/shipping_cost 采用宽容解析: 解析失败落为 None，从不报错
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub sku: String, // 唯一键
    pub qty: Option<i32>,
    pub shipping_cost: Option<Decimal>,
    pub unit: Option<String>,
}

// ==========================================
// Price - 价格规范实体
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    pub sku: String, // 唯一键
    pub net_price: Option<Decimal>,
}

// ==========================================
// ProductView - 单品联表查询视图
// ==========================================
// 用途: 查询时即席构建（products LEFT JOIN inventory/prices），不落库
// 缺少库存/价格数据的商品返回 None 字段而非查询失败
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductView {
    pub sku: String,
    pub name: Option<String>,
    pub ean: Option<String>,
    pub manufacturer: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub qty: Option<i32>,
    pub shipping_cost: Option<Decimal>,
    pub unit: Option<String>,
    pub net_price: Option<Decimal>,
}
