// ==========================================
// 商品目录导入系统 - 字段映射器
// ==========================================
// 职责: 原始行记录 → 各源原始记录结构
// 红线: 此层保持字符串态（string-in, coerce-later），
//       类型定型与业务规则留给转换阶段
// ==========================================

use crate::domain::catalog::{RawInventoryRecord, RawPriceRecord, RawProductRecord};
use crate::importer::file_parser::RawRow;

pub struct FieldMapper;

impl FieldMapper {
    /// 映射商品源行
    pub fn map_to_raw_product(&self, row: RawRow) -> RawProductRecord {
        RawProductRecord {
            sku: row.get("sku"),
            name: row.get("name"),
            ean: row.get("ean"),
            producer_name: row.get("producer_name"),
            category: row.get("category"),
            is_wire: row.get("is_wire"),
            shipping: row.get("shipping"),
            available: row.get("available"),
            default_image: row.get("default_image"),
            row_number: row.row_number,
        }
    }

    /// 映射库存源行
    pub fn map_to_raw_inventory(&self, row: RawRow) -> RawInventoryRecord {
        RawInventoryRecord {
            sku: row.get("sku"),
            unit: row.get("unit"),
            qty: row.get("qty"),
            manufacturer_name: row.get("manufacturer_name"),
            manufacturer_ref_num: row.get("manufacturer_ref_num"),
            shipping: row.get("shipping"),
            shipping_cost: row.get("shipping_cost"),
            row_number: row.row_number,
        }
    }

    /// 映射价格源行
    pub fn map_to_raw_price(&self, row: RawRow) -> RawPriceRecord {
        RawPriceRecord {
            sku: row.get("sku"),
            net_price: row.get("net_price"),
            row_number: row.row_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_row(pairs: &[(&str, &str)]) -> RawRow {
        let mut fields = HashMap::new();
        for (k, v) in pairs {
            fields.insert((*k).to_string(), (*v).to_string());
        }
        RawRow {
            row_number: 1,
            fields,
        }
    }

    #[test]
    fn test_map_product_basic() {
        let row = make_row(&[
            ("sku", "P001"),
            ("name", "Widget"),
            ("is_wire", "0"),
            ("available", "1"),
        ]);

        let record = FieldMapper.map_to_raw_product(row);
        assert_eq!(record.sku, Some("P001".to_string()));
        assert_eq!(record.name, Some("Widget".to_string()));
        assert_eq!(record.is_wire, Some("0".to_string()));
        assert_eq!(record.ean, None);
    }

    #[test]
    fn test_map_empty_value_as_none() {
        let row = make_row(&[("sku", "P001"), ("qty", "")]);

        let record = FieldMapper.map_to_raw_inventory(row);
        assert_eq!(record.sku, Some("P001".to_string()));
        assert_eq!(record.qty, None);
    }

    #[test]
    fn test_map_price_keeps_row_number() {
        let mut row = make_row(&[("sku", "P001"), ("net_price", "9.99")]);
        row.row_number = 7;

        let record = FieldMapper.map_to_raw_price(row);
        assert_eq!(record.row_number, 7);
        assert_eq!(record.net_price, Some("9.99".to_string()));
    }
}
