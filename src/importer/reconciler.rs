// ==========================================
// 商品目录导入系统 - 键汇聚器
// ==========================================
// 职责: 原始记录序列 → 以键去重的映射
// 规则: 空键剔除并计数；重复键首条保留，后续剔除，
//       每个重复键只报告一次（与重复次数无关）
// ==========================================

use crate::domain::diagnostics::ReconcileDiagnostics;
use std::collections::{HashMap, HashSet};

/// 将记录序列按键汇聚为唯一映射
///
/// # 参数
/// - records: 原始记录列表
/// - key_fn: 键提取函数（返回 None 或空白视为缺键）
/// - source: 源标识（进入诊断）
///
/// # 返回
/// - (键 → 首见记录, 结构化诊断)；诊断由调用方汇报，此处不格式化输出
pub fn reconcile_by_key<T, F>(
    records: Vec<T>,
    key_fn: F,
    source: &str,
) -> (HashMap<String, T>, ReconcileDiagnostics)
where
    F: Fn(&T) -> Option<&str>,
{
    let total = records.len();
    let mut keyed: HashMap<String, T> = HashMap::new();
    let mut missing_key = 0usize;
    let mut duplicate_keys: Vec<String> = Vec::new();
    let mut seen_duplicates: HashSet<String> = HashSet::new();

    for record in records {
        let key = match key_fn(&record) {
            Some(k) if !k.trim().is_empty() => k.trim().to_string(),
            _ => {
                missing_key += 1;
                continue;
            }
        };

        if keyed.contains_key(&key) {
            if seen_duplicates.insert(key.clone()) {
                duplicate_keys.push(key);
            }
            continue;
        }

        keyed.insert(key, record);
    }

    let diagnostics = ReconcileDiagnostics {
        source: source.to_string(),
        total,
        retained: keyed.len(),
        missing_key,
        duplicate_keys,
    };

    (keyed, diagnostics)
}
