// ==========================================
// 跨境电商库存利润分析系统 - 存储层错误类型
// ==========================================
// 职责: 内存存储操作的类型化错误
// 红线: 所有错误信息必须包含显式原因 (可解释性)
// ==========================================

use thiserror::Error;

/// 存储层错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("资源未找到: {entity}(sku={sku})不存在")]
    NotFound { entity: &'static str, sku: String },

    #[error("SKU 重复: {0} 已存在于产品档案")]
    DuplicateSku(String),

    #[error("索引越界: index={index}, len={len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("非法取值: {field}={value}, {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
