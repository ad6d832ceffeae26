// ==========================================
// 商品目录导入系统 - CSV 文件解析器
// ==========================================
// 职责: 按 FeedSpec 将 CSV 文件解析为原始行记录，不含业务逻辑
// 策略: 缺列/短行不视为结构性错误（读作缺失值）；
//       结构性坏行（如非法编码）按严格/容忍策略处理
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::feed_spec::{ColumnRef, FeedSpec};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

// ==========================================
// RawRow - 解析产物：规范字段名 → 字符串值
// ==========================================
#[derive(Debug, Clone)]
pub struct RawRow {
    /// 物理行号（1 起，表头行计入）
    pub row_number: usize,
    /// 规范字段名 → 去除首尾空白后的值（缺列读作空串）
    pub fields: HashMap<String, String>,
}

impl RawRow {
    /// 提取字段值；空串视为缺失
    pub fn get(&self, field: &str) -> Option<String> {
        self.fields
            .get(field)
            .filter(|v| !v.is_empty())
            .cloned()
    }
}

// ==========================================
// ParsedFeed - 单源解析结果
// ==========================================
#[derive(Debug)]
pub struct ParsedFeed {
    pub rows: Vec<RawRow>,
    /// 容忍模式下跳过的结构性坏行数
    pub skipped_bad_rows: usize,
}

// ==========================================
// CsvFeedParser - 解析器实现
// ==========================================
pub struct CsvFeedParser;

impl CsvFeedParser {
    /// 按映射声明解析 CSV 文件
    ///
    /// # 参数
    /// - file_path: 文件路径
    /// - spec: 源映射声明（分隔符/表头/列绑定）
    /// - tolerate_bad_data: true = 跳过结构性坏行并计数；
    ///   false = 首个坏行即终止，报告行号与错误内容
    pub fn parse(
        &self,
        file_path: &Path,
        spec: &FeedSpec,
        tolerate_bad_data: bool,
    ) -> ImportResult<ParsedFeed> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(spec.delimiter)
            .has_headers(spec.has_headers)
            .flexible(true) // 行宽不一致不是错误：缺列读作缺失值
            .from_path(file_path)?;

        // 解析列绑定为下标（列名匹配不区分大小写，重名列取首个）
        let bindings = if spec.has_headers {
            let mut header_index: HashMap<String, usize> = HashMap::new();
            for (idx, header) in reader.headers()?.iter().enumerate() {
                header_index
                    .entry(header.trim().to_lowercase())
                    .or_insert(idx);
            }
            resolve_bindings(spec, Some(&header_index))
        } else {
            resolve_bindings(spec, None)
        };

        let mut rows = Vec::new();
        let mut skipped_bad_rows = 0usize;
        let header_offset = if spec.has_headers { 1 } else { 0 };

        for (idx, result) in reader.records().enumerate() {
            let row_number = idx + 1 + header_offset;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    if tolerate_bad_data {
                        warn!(
                            source = spec.label,
                            row = row_number,
                            error = %e,
                            "跳过结构性坏行"
                        );
                        skipped_bad_rows += 1;
                        continue;
                    }
                    return Err(ImportError::BadRow {
                        source_label: spec.label.to_string(),
                        row: row_number,
                        message: e.to_string(),
                    });
                }
            };

            // 跳过完全空白的行
            if record.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            let mut fields = HashMap::new();
            for (field, col_idx) in &bindings {
                let value = col_idx
                    .and_then(|i| record.get(i))
                    .unwrap_or("")
                    .trim()
                    .to_string();
                fields.insert((*field).to_string(), value);
            }

            rows.push(RawRow { row_number, fields });
        }

        Ok(ParsedFeed {
            rows,
            skipped_bad_rows,
        })
    }
}

/// 将列绑定解析为 (字段名, 列下标) 表
///
/// 按列名绑定且表头中无该列时下标为 None，对应字段整列读作缺失，
/// 与“缺列不报错”的源契约一致。
fn resolve_bindings(
    spec: &FeedSpec,
    header_index: Option<&HashMap<String, usize>>,
) -> Vec<(&'static str, Option<usize>)> {
    spec.columns
        .iter()
        .map(|(field, col_ref)| {
            let idx = match col_ref {
                ColumnRef::Index(i) => Some(*i),
                ColumnRef::Name(name) => {
                    header_index.and_then(|m| m.get(&name.to_lowercase()).copied())
                }
            };
            (*field, idx)
        })
        .collect()
}
