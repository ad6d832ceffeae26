// ==========================================
// 商品目录导入系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
///
/// 数据质量问题（空键/重复键/数值解析失败/价格越界）不在此列，
/// 它们在管道内就地消化并进入诊断汇总；此处只承载使整次导入
/// 失败的结构性错误。
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 结构性坏行（严格模式）=====
    #[error("CSV 坏行 ({source_label} 第 {row} 行): {message}")]
    BadRow {
        source_label: String,
        row: usize,
        message: String,
    },

    // ===== 落库错误 =====
    #[error("目录落库失败: {0}")]
    Load(#[from] RepositoryError),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
