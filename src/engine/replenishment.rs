// ==========================================
// 跨境电商库存利润分析系统 - 补货决策引擎
// ==========================================
// 职责: 目标水位换算空运/海运分单 + 滞销资金敞口估值
// 输入: 现货/在途 + 缺口量 + 最终日销 + 策略配置 + 产品成本
// 输出: RestockDecision
// 红线: 空运只覆盖紧急缺口,其余走海运
// ==========================================

use crate::config::PolicySettings;
use crate::domain::product::Product;
use serde::{Deserialize, Serialize};

// ==========================================
// RestockDecision - 补货决策结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockDecision {
    // ===== 补货分单 =====
    pub target_qty: i64,           // 目标库存水位 = ceil(日销*(备货周期+安全库存))
    pub total_restock_needed: i64, // 总补货需求 = max(0, 目标水位 - 现货 - 在途)
    pub air_restock: i64,          // 空运量 (= 缺口量)
    pub sea_restock: i64,          // 海运量 (= 总需求扣除空运,非负)

    // ===== 滞销敞口 =====
    pub dead_qty: f64,          // 滞销数量
    pub dead_value_usd: f64,    // 滞销占用资金 (USD)
    pub monthly_bleed_usd: f64, // 滞销月度仓储流失 (USD)
}

// ==========================================
// ReplenishmentEngine - 补货决策引擎
// ==========================================
pub struct ReplenishmentEngine {
    // 无状态引擎,不需要注入依赖
}

impl ReplenishmentEngine {
    /// 创建新的补货决策引擎
    pub fn new() -> Self {
        Self {}
    }

    /// 计算单 SKU 补货决策
    ///
    /// 规则:
    /// 1) 目标水位 = ceil(日销 * (备货周期 + 安全库存))
    /// 2) 总需求 = max(0, 目标水位 - (现货 + 在途))
    /// 3) 紧急缺口优先走空运: air = gap_qty; 剩余走海运: sea = max(0, 总需求 - air)
    /// 4) 滞销量 = max(0, (现货+在途) - 日销*滞销阈值)
    ///    占用资金 = 滞销量 * 单件到岸成本(USD)
    ///    月度流失 = 滞销量 * 单件月度仓储费
    ///
    /// # 参数
    /// - settings: 全局策略配置 (单轮重算内不可变)
    pub fn decide(
        &self,
        product: &Product,
        current_stock: i64,
        inbound: i64,
        gap_qty: i64,
        final_daily: f64,
        settings: &PolicySettings,
    ) -> RestockDecision {
        let cycle_days = settings.lead_time_days + settings.safety_stock_days;
        let target_qty = (final_daily * cycle_days as f64).ceil() as i64;

        let total_inventory = current_stock + inbound;
        let total_restock_needed = (target_qty - total_inventory).max(0);

        let air_restock = gap_qty.max(0);
        let sea_restock = (total_restock_needed - air_restock).max(0);

        let dead_qty = (total_inventory as f64
            - final_daily * settings.dead_stock_threshold_days as f64)
            .max(0.0);
        let unit_cost_usd = product.landed_unit_cost_usd(settings.exchange_rate);
        let dead_value_usd = dead_qty * unit_cost_usd;
        let monthly_bleed_usd = dead_qty * product.storage_usd;

        RestockDecision {
            target_qty,
            total_restock_needed,
            air_restock,
            sea_restock,
            dead_qty,
            dead_value_usd,
            monthly_bleed_usd,
        }
    }
}

impl Default for ReplenishmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            sku: "A-1".to_string(),
            parent_sku: "A".to_string(),
            name: "测试产品".to_string(),
            cost_cny: 50.0,
            ship_cny: 22.0,
            storage_usd: 0.4,
            last_mile_usd: 5.5,
        }
    }

    fn settings() -> PolicySettings {
        PolicySettings::default() // 7.2 / 60 / 30 / 120
    }

    #[test]
    fn test_scenario_1_air_sea_split() {
        // 场景1: 日销5,周期60+30 → 目标450; 现货50,在途0 → 总需求400
        // 缺口25件走空运,剩余375走海运
        let engine = ReplenishmentEngine::new();

        let decision = engine.decide(&product(), 50, 0, 25, 5.0, &settings());

        assert_eq!(decision.target_qty, 450, "目标水位 = ceil(5*90)");
        assert_eq!(decision.total_restock_needed, 400);
        assert_eq!(decision.air_restock, 25, "空运只覆盖缺口");
        assert_eq!(decision.sea_restock, 375, "海运承接剩余需求");
    }

    #[test]
    fn test_scenario_2_no_gap_all_sea() {
        // 场景2: 无缺口 → 全部走海运
        let engine = ReplenishmentEngine::new();

        let decision = engine.decide(&product(), 50, 0, 0, 5.0, &settings());

        assert_eq!(decision.air_restock, 0);
        assert_eq!(decision.sea_restock, 400);
    }

    #[test]
    fn test_scenario_3_gap_exceeds_total_needed() {
        // 场景3: 缺口量超过总需求 → 海运钳制为0 (空运可超过总需求)
        let engine = ReplenishmentEngine::new();

        // 目标 = ceil(0.5*90) = 45; 现货40 → 总需求5; 缺口20 > 5
        let decision = engine.decide(&product(), 40, 0, 20, 0.5, &settings());

        assert_eq!(decision.total_restock_needed, 5);
        assert_eq!(decision.air_restock, 20);
        assert_eq!(decision.sea_restock, 0, "海运不允许为负");
    }

    #[test]
    fn test_scenario_4_inventory_above_target() {
        // 场景4: 现有库存高于目标水位 → 总需求钳制为0
        let engine = ReplenishmentEngine::new();

        let decision = engine.decide(&product(), 500, 100, 0, 5.0, &settings());

        assert_eq!(decision.total_restock_needed, 0);
        assert_eq!(decision.air_restock, 0);
        assert_eq!(decision.sea_restock, 0);
    }

    #[test]
    fn test_scenario_5_dead_stock_valuation() {
        // 场景5: 库存1000,日销1,阈值120 → 滞销880
        // 单件到岸成本 = (50+22)/7.2 = 10 USD → 占用资金 8800
        // 月度流失 = 880 * 0.4 = 352
        let engine = ReplenishmentEngine::new();

        let decision = engine.decide(&product(), 1000, 0, 0, 1.0, &settings());

        assert!((decision.dead_qty - 880.0).abs() < 1e-9, "滞销量应为880");
        assert!((decision.dead_value_usd - 8800.0).abs() < 1e-6);
        assert!((decision.monthly_bleed_usd - 352.0).abs() < 1e-9);
    }

    #[test]
    fn test_scenario_6_no_dead_stock_under_threshold() {
        // 场景6: 库存可在阈值窗口内消化 → 无滞销
        let engine = ReplenishmentEngine::new();

        // 120天窗口可消化 5*120=600 件 > 库存550
        let decision = engine.decide(&product(), 500, 50, 0, 5.0, &settings());

        assert_eq!(decision.dead_qty, 0.0);
        assert_eq!(decision.dead_value_usd, 0.0);
        assert_eq!(decision.monthly_bleed_usd, 0.0);
    }

    #[test]
    fn test_scenario_7_target_rounds_up() {
        // 场景7: 目标水位向上取整
        let engine = ReplenishmentEngine::new();

        // 0.001 * 90 = 0.09 → ceil = 1 (下限销速也保有最小目标)
        let decision = engine.decide(&product(), 0, 0, 0, 0.001, &settings());

        assert_eq!(decision.target_qty, 1);
    }

    #[test]
    fn test_inbound_counts_toward_dead_stock() {
        // 在途计入滞销口径 (现货+在途)
        let engine = ReplenishmentEngine::new();

        let decision = engine.decide(&product(), 100, 100, 0, 1.0, &settings());

        // (100+100) - 1*120 = 80
        assert!((decision.dead_qty - 80.0).abs() < 1e-9);
    }
}
