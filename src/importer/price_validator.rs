// ==========================================
// 商品目录导入系统 - 价格校验器
// ==========================================
// 职责: 将定型后的价格集划分为有效/拒绝两组
// 规则: 净价缺失或超过上限即拒绝；拒绝记录只报告不落库
// ==========================================

use crate::domain::catalog::Price;
use crate::domain::diagnostics::{RejectedPrice, RejectedPriceReport};
use rust_decimal::Decimal;

/// 面向人读的拒绝样本上限（总数不受此限，始终全量报告）
pub const REJECTED_SAMPLE_LIMIT: usize = 10;

/// 净价上限: 9 999 999 999 999 999.99
pub fn max_net_price() -> Decimal {
    Decimal::new(999_999_999_999_999_999, 2)
}

/// 价格校验结果
#[derive(Debug)]
pub struct PriceValidation {
    pub valid: Vec<Price>,
    pub rejected: RejectedPriceReport,
}

/// 划分有效/拒绝价格集
///
/// 拒绝样本按 SKU 排序后截取前 REJECTED_SAMPLE_LIMIT 条，保证稳定输出。
pub fn validate_prices(prices: Vec<Price>) -> PriceValidation {
    let bound = max_net_price();
    let mut valid = Vec::with_capacity(prices.len());
    let mut rejected: Vec<RejectedPrice> = Vec::new();

    for price in prices {
        match price.net_price {
            Some(net) if net <= bound => valid.push(price),
            _ => rejected.push(RejectedPrice {
                sku: price.sku,
                net_price: price.net_price,
            }),
        }
    }

    rejected.sort_by(|a, b| a.sku.cmp(&b.sku));
    let total = rejected.len();
    rejected.truncate(REJECTED_SAMPLE_LIMIT);

    PriceValidation {
        valid,
        rejected: RejectedPriceReport {
            total,
            sample: rejected,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn price(sku: &str, net: Option<&str>) -> Price {
        Price {
            sku: sku.to_string(),
            net_price: net.map(|v| Decimal::from_str(v).unwrap()),
        }
    }

    #[test]
    fn test_validate_boundary() {
        let result = validate_prices(vec![
            price("P001", Some("9999999999999999.99")), // 恰在上限，有效
            price("P002", Some("10000000000000000.00")), // 超限，拒绝
        ]);

        assert_eq!(result.valid.len(), 1);
        assert_eq!(result.valid[0].sku, "P001");
        assert_eq!(result.rejected.total, 1);
        assert_eq!(result.rejected.sample[0].sku, "P002");
    }

    #[test]
    fn test_validate_missing_net_price_rejected() {
        let result = validate_prices(vec![price("P001", None)]);

        assert!(result.valid.is_empty());
        assert_eq!(result.rejected.total, 1);
        assert_eq!(result.rejected.sample[0].net_price, None);
    }

    #[test]
    fn test_validate_sample_capped_total_exact() {
        let prices: Vec<Price> = (0..15)
            .map(|i| price(&format!("P{:03}", i), None))
            .collect();

        let result = validate_prices(prices);
        assert_eq!(result.rejected.total, 15);
        assert_eq!(result.rejected.sample.len(), REJECTED_SAMPLE_LIMIT);
        // 按 SKU 排序后的前 10 条
        assert_eq!(result.rejected.sample[0].sku, "P000");
        assert_eq!(result.rejected.sample[9].sku, "P009");
    }

    #[test]
    fn test_validate_empty_input() {
        let result = validate_prices(Vec::new());
        assert!(result.valid.is_empty());
        assert!(result.rejected.is_empty());
    }
}
