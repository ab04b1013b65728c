// ==========================================
// 跨境电商库存利润分析系统 - 销售台账领域模型
// ==========================================
// 职责: 销售/退款事件实体
// 红线: 台账只追加/修正,核心引擎只读
// ==========================================

use crate::domain::types::SaleKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// SaleEvent - 销售事件
// ==========================================
// 一行 = 一件: 台账按订单行展开,数量恒为 1,
// 库存扣减与销速统计均按事件条数计数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleEvent {
    pub order_id: String,  // 订单号
    pub date: NaiveDate,   // 订单日期
    pub sku: String,       // 子体 SKU
    pub kind: SaleKind,    // 类型 (Sale/Refund)
    pub amount: f64,       // 金额 (USD)
    pub shipping_fee: f64, // 实际尾程运费 (USD)
    pub storage_fee: f64,  // 订单仓储费 (USD)
}

impl SaleEvent {
    /// 是否计入库存扣减与销速统计
    ///
    /// 退款不回补库存: 盘点是唯一的库存上调路径。
    pub fn counts_as_sale(&self) -> bool {
        self.kind == SaleKind::Sale
    }
}
