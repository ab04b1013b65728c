// ==========================================
// 跨境电商库存利润分析系统 - 领域类型定义
// ==========================================
// 职责: 定义跨模块共享的枚举类型
// 红线: 等级制分类,不是评分制
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 订单类型 (Sale Kind)
// ==========================================
// 序列化格式与销售台账导出列一致 ("Sale"/"Refund")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleKind {
    Sale,   // 销售
    Refund, // 退款
}

impl fmt::Display for SaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleKind::Sale => write!(f, "Sale"),
            SaleKind::Refund => write!(f, "Refund"),
        }
    }
}

// ==========================================
// 销速趋势 (Trend Direction)
// ==========================================
// 由 7 天/30 天双轨销速比较得出,仅作提示信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,   // 上升 (7天销速明显高于30天基线)
    Down, // 下降
    Flat, // 平稳
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "up"),
            TrendDirection::Down => write!(f, "down"),
            TrendDirection::Flat => write!(f, "flat"),
        }
    }
}

// ==========================================
// 库存健康度 (Stock Health)
// ==========================================
// 按可售天数 (DOS) 分档: <30 断货风险, >120 库存积压
// 档位阈值为固定策略常量,不随滞销阈值配置变化
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockHealth {
    Critical,    // 断货风险 (红)
    Healthy,     // 健康 (绿)
    Overstocked, // 积压 (深灰)
}

impl fmt::Display for StockHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockHealth::Critical => write!(f, "CRITICAL"),
            StockHealth::Healthy => write!(f, "HEALTHY"),
            StockHealth::Overstocked => write!(f, "OVERSTOCKED"),
        }
    }
}
