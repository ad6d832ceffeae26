// ==========================================
// 商品目录导入系统 - 数值清洗与字段派生
// ==========================================
// 职责: 宽容解析（失败落 None）+ 发货天数提取 + 类目派生
// 红线: 两种回退策略并存且不可合并：
//       qty/运费/净价解析失败落 None；
//       发货天数解析失败落 0（随后参与 <=24 过滤）
// ==========================================

use rust_decimal::Decimal;
use std::str::FromStr;

/// 宽容整数解析: 失败返回 None，从不报错
pub fn parse_int(value: Option<&str>) -> Option<i32> {
    value.and_then(|v| v.trim().parse::<i32>().ok())
}

/// 宽容十进制解析: 失败返回 None，从不报错
///
/// 固定 `.` 为小数分隔符（不依赖区域设置）。
pub fn parse_decimal(value: Option<&str>) -> Option<Decimal> {
    value.and_then(|v| Decimal::from_str(v.trim()).ok())
}

/// 从发货令牌中提取天数
///
/// 只保留数字字符后解析；解析失败（含空串与溢出）回退为 0。
/// 例: "24 days" → 24，"abc" → 0，None → 0。
pub fn extract_shipping_days(value: Option<&str>) -> i32 {
    let digits: String = value
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<i32>().unwrap_or(0)
}

/// 从层级类目路径派生末级类目
///
/// 以 `|` 或 `/` 切分，丢弃空段，取最后一段并去除首尾空白；
/// 路径缺失/空白时返回空串。
pub fn extract_last_category(value: Option<&str>) -> String {
    let raw = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return String::new(),
    };

    raw.split(['|', '/'])
        .filter(|segment| !segment.is_empty())
        .last()
        .map(|segment| segment.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(Some("5")), Some(5));
        assert_eq!(parse_int(Some(" 5 ")), Some(5));
        assert_eq!(parse_int(Some("-3")), Some(-3));
        assert_eq!(parse_int(Some("abc")), None);
        assert_eq!(parse_int(Some("5.5")), None);
        assert_eq!(parse_int(Some("")), None);
        assert_eq!(parse_int(None), None);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(
            parse_decimal(Some("10.50")),
            Some(Decimal::from_str("10.50").unwrap())
        );
        assert_eq!(
            parse_decimal(Some("-1.25")),
            Some(Decimal::from_str("-1.25").unwrap())
        );
        assert_eq!(parse_decimal(Some("abc")), None);
        assert_eq!(parse_decimal(None), None);
    }

    #[test]
    fn test_extract_shipping_days() {
        assert_eq!(extract_shipping_days(Some("24 days")), 24);
        assert_eq!(extract_shipping_days(Some("2")), 2);
        assert_eq!(extract_shipping_days(Some("ok 3-5")), 35);
        // 解析失败回退为 0
        assert_eq!(extract_shipping_days(Some("abc")), 0);
        assert_eq!(extract_shipping_days(Some("")), 0);
        assert_eq!(extract_shipping_days(None), 0);
        // 数字串溢出 i32 同样回退为 0
        assert_eq!(extract_shipping_days(Some("99999999999")), 0);
    }

    #[test]
    fn test_extract_last_category() {
        assert_eq!(
            extract_last_category(Some("Electronics|Audio|Headphones")),
            "Headphones"
        );
        assert_eq!(extract_last_category(Some("Tools/Hand")), "Hand");
        assert_eq!(extract_last_category(Some("A|B/C")), "C");
        assert_eq!(extract_last_category(Some("Single")), "Single");
        assert_eq!(extract_last_category(Some("A||B")), "B");
        assert_eq!(extract_last_category(Some("A|B| ")), "");
        assert_eq!(extract_last_category(Some("")), "");
        assert_eq!(extract_last_category(Some("   ")), "");
        assert_eq!(extract_last_category(None), "");
    }
}
