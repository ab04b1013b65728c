// ==========================================
// 跨境电商库存利润分析系统 - 产品领域模型
// ==========================================
// 职责: 产品档案实体
// 用途: 产品档案维护写入,引擎层只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Product - 产品档案
// ==========================================
// 成本字段分两种币别: 采购/头程为人民币(CNY),仓储/尾程为美元(USD)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    // ===== 主键 =====
    pub sku: String, // 子体 SKU (唯一标识)

    // ===== 归属 =====
    pub parent_sku: String, // 父体 SKU (变体归组键)
    pub name: String,       // 中文名称

    // ===== 采购侧成本 (CNY) =====
    pub cost_cny: f64, // 采购成本
    pub ship_cny: f64, // 头程运费

    // ===== 海外仓侧成本 (USD) =====
    pub storage_usd: f64,   // 单件月度仓储费
    pub last_mile_usd: f64, // 默认尾程运费
}

impl Product {
    /// 单件到岸成本 (USD)
    ///
    /// 采购成本与头程运费按结算汇率折算为美元。
    ///
    /// # 参数
    /// - exchange_rate: CNY→USD 汇率 (调用方保证 > 0)
    pub fn landed_unit_cost_usd(&self, exchange_rate: f64) -> f64 {
        (self.cost_cny + self.ship_cny) / exchange_rate
    }
}
