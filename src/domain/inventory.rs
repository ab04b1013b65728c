// ==========================================
// 跨境电商库存利润分析系统 - 库存快照领域模型
// ==========================================
// 职责: 每 SKU 一条的库存校准状态
// 生命周期: 首次引用即创建,随产品删除,不独立删除
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// InventorySnapshot - 库存快照
// ==========================================
// 现货不直接存储: 由盘点基数减去盘点日之后的销量实时推算
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySnapshot {
    // ===== 盘点校准点 =====
    pub base_qty: i64,                 // 盘点基数 (最近一次实物清点数量)
    pub base_date: Option<NaiveDate>,  // 盘点日期 (None = 从未盘点)

    // ===== 在途 =====
    pub inbound: i64,                   // 在途库存
    pub inbound_date: Option<NaiveDate>, // 预计到货日 (None = 无在途或未知)

    // ===== 人工干预 =====
    pub daily_override: f64, // 人工日销 (0 = 不干预,使用算法销速)
}

impl Default for InventorySnapshot {
    /// 首次引用时的空快照: 未盘点、无在途、无人工干预
    fn default() -> Self {
        Self {
            base_qty: 0,
            base_date: None,
            inbound: 0,
            inbound_date: None,
            daily_override: 0.0,
        }
    }
}

impl InventorySnapshot {
    /// 是否存在人工日销干预
    pub fn has_manual_daily(&self) -> bool {
        self.daily_override > 0.0
    }
}
