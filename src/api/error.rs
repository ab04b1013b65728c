// ==========================================
// 跨境电商库存利润分析系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换存储层错误为用户友好的错误消息
// 红线: 所有错误信息必须包含显式原因 (可解释性)
// ==========================================

use crate::store::error::StoreError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("业务规则违反: {0}")]
    BusinessRuleViolation(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置校验失败: {0}")]
    InvalidSettings(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 StoreError 转换
// 目的: 将存储层的技术错误转换为用户友好的业务错误
// ==========================================
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, sku } => {
                ApiError::NotFound(format!("{}(sku={})不存在", entity, sku))
            }
            StoreError::DuplicateSku(sku) => {
                ApiError::BusinessRuleViolation(format!("SKU {} 已存在,不允许重复建档", sku))
            }
            StoreError::IndexOutOfRange { index, len } => {
                ApiError::InvalidInput(format!("行号越界: index={}, len={}", index, len))
            }
            StoreError::InvalidValue {
                field,
                value,
                reason,
            } => ApiError::InvalidInput(format!("字段{}取值非法({}): {}", field, value, reason)),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
