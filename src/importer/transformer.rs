// ==========================================
// 商品目录导入系统 - 转换/过滤阶段
// ==========================================
// 职责: 汇聚后的原始记录 → 规范实体
// 商品源: 先业务过滤再转换；被过滤是业务规则而非数据错误，
//         静默剔除（仅计数），不进诊断报告
// 库存/价格源: 宽容解析定型，失败字段落 None
// ==========================================

use crate::domain::catalog::{
    Inventory, Price, Product, RawInventoryRecord, RawPriceRecord, RawProductRecord,
};
use crate::importer::data_cleaner::{
    extract_last_category, extract_shipping_days, parse_decimal, parse_int,
};
use std::collections::HashMap;

/// 商品导入上限: 发货天数（数字提取后）
pub const MAX_SHIPPING_DAYS: i32 = 24;

/// 商品业务过滤
///
/// 仅当线缆标记为 "0"、可售标记为 "1"、发货天数 <= 24 时导入。
/// 标记缺失视为不满足；发货令牌不可解析时天数回退为 0，
/// 因而总能通过天数条件（既定口径，见 data_cleaner）。
fn passes_import_filter(record: &RawProductRecord) -> bool {
    record.is_wire.as_deref() == Some("0")
        && record.available.as_deref() == Some("1")
        && extract_shipping_days(record.shipping.as_deref()) <= MAX_SHIPPING_DAYS
}

/// 商品源转换: 过滤 + 类目派生
///
/// # 返回
/// - (规范商品列表, 被业务规则剔除的记录数)
pub fn transform_products(
    records: HashMap<String, RawProductRecord>,
) -> (Vec<Product>, usize) {
    let mut products = Vec::with_capacity(records.len());
    let mut filtered = 0usize;

    for (sku, record) in records {
        if !passes_import_filter(&record) {
            filtered += 1;
            continue;
        }

        products.push(Product {
            sku,
            name: record.name,
            ean: record.ean,
            manufacturer: record.producer_name,
            category: extract_last_category(record.category.as_deref()),
            image_url: record.default_image,
        });
    }

    (products, filtered)
}

/// 库存源转换: qty/运费宽容定型，透传字段在此丢弃
pub fn transform_inventory(records: HashMap<String, RawInventoryRecord>) -> Vec<Inventory> {
    records
        .into_iter()
        .map(|(sku, record)| Inventory {
            sku,
            qty: parse_int(record.qty.as_deref()),
            shipping_cost: parse_decimal(record.shipping_cost.as_deref()),
            unit: record.unit,
        })
        .collect()
}

/// 价格源转换: 净价宽容定型
pub fn transform_prices(records: HashMap<String, RawPriceRecord>) -> Vec<Price> {
    records
        .into_iter()
        .map(|(sku, record)| Price {
            sku,
            net_price: parse_decimal(record.net_price.as_deref()),
        })
        .collect()
}
