// ==========================================
// 跨境电商库存利润分析系统 - 预测编排引擎
// ==========================================
// 职责: 串联四段流水线,输出单 SKU 预测快照
// 流程: 库存校准 → 销速估计 → 时间线推演 → 补货决策
// 红线: 纯函数重算,无缓存无增量; 所有规则必须输出 reason
// ==========================================

use crate::config::PolicySettings;
use crate::domain::forecast::SkuForecast;
use crate::domain::inventory::InventorySnapshot;
use crate::domain::product::Product;
use crate::domain::sale::SaleEvent;
use crate::engine::reconciliation::{StockPosition, StockReconciler};
use crate::engine::replenishment::{ReplenishmentEngine, RestockDecision};
use crate::engine::timeline::{TimelineEngine, TimelineProjection};
use crate::engine::velocity::{VelocityEngine, VelocityEstimate};
use chrono::NaiveDate;
use serde_json::json;
use tracing::instrument;

// ==========================================
// ForecastEngine - 预测编排引擎
// ==========================================
pub struct ForecastEngine {
    reconciler: StockReconciler,
    velocity: VelocityEngine,
    timeline: TimelineEngine,
    replenishment: ReplenishmentEngine,
}

impl ForecastEngine {
    /// 创建新的预测编排引擎
    pub fn new() -> Self {
        Self {
            reconciler: StockReconciler::new(),
            velocity: VelocityEngine::new(),
            timeline: TimelineEngine::new(),
            replenishment: ReplenishmentEngine::new(),
        }
    }

    /// 批量预测 (推荐使用)
    ///
    /// 对档案内每个产品执行一次完整流水线。
    /// 整轮使用同一份策略配置,保证同轮结果口径一致。
    #[instrument(skip(self, products, ledger, settings), fields(count = products.len()))]
    pub fn evaluate_batch(
        &self,
        products: &[(Product, InventorySnapshot)],
        ledger: &[SaleEvent],
        settings: &PolicySettings,
        today: NaiveDate,
    ) -> Vec<SkuForecast> {
        products
            .iter()
            .map(|(product, snapshot)| {
                self.evaluate_single(product, snapshot, ledger, settings, today)
            })
            .collect()
    }

    /// 单 SKU 预测
    ///
    /// # 参数
    /// - today: 当前日期 (显式传入,保证可重现)
    pub fn evaluate_single(
        &self,
        product: &Product,
        snapshot: &InventorySnapshot,
        ledger: &[SaleEvent],
        settings: &PolicySettings,
        today: NaiveDate,
    ) -> SkuForecast {
        // 1. 库存校准
        let position = self.reconciler.reconcile(&product.sku, snapshot, ledger);

        // 2. 销速估计
        let velocity =
            self.velocity
                .estimate(&product.sku, snapshot.daily_override, ledger, today);

        // 3. 时间线推演
        let projection = self.timeline.project(
            position.current_stock,
            snapshot.inbound,
            snapshot.inbound_date,
            velocity.final_daily,
            today,
        );

        // 4. 补货决策
        let decision = self.replenishment.decide(
            product,
            position.current_stock,
            snapshot.inbound,
            projection.gap_qty,
            velocity.final_daily,
            settings,
        );

        // 5. 决策原因 (可解释性输出)
        let decision_reason =
            self.build_reason(&position, &velocity, &projection, &decision, today);

        SkuForecast {
            sku: product.sku.clone(),
            parent_sku: product.parent_sku.clone(),
            name: product.name.clone(),
            sales_since: position.sales_since,
            current_stock: position.current_stock,
            avg7: velocity.avg7,
            avg30: velocity.avg30,
            algo_daily: velocity.algo_daily,
            final_daily: velocity.final_daily,
            is_manual: velocity.is_manual,
            trend: velocity.trend,
            run_out_date: projection.run_out_date,
            gap_days: projection.gap_days,
            gap_qty: projection.gap_qty,
            dos: projection.dos,
            health: projection.health,
            target_qty: decision.target_qty,
            total_restock_needed: decision.total_restock_needed,
            air_restock: decision.air_restock,
            sea_restock: decision.sea_restock,
            dead_qty: decision.dead_qty,
            dead_value_usd: decision.dead_value_usd,
            monthly_bleed_usd: decision.monthly_bleed_usd,
            decision_reason,
        }
    }

    /// 组装决策原因 JSON
    ///
    /// primary_action 优先级: 空运补缺 > 海运补货 > 清滞销 > 持有观察
    fn build_reason(
        &self,
        position: &StockPosition,
        velocity: &VelocityEstimate,
        projection: &TimelineProjection,
        decision: &RestockDecision,
        today: NaiveDate,
    ) -> String {
        let mut factors = Vec::new();

        if velocity.is_manual {
            factors.push(format!("manual_daily={}", velocity.final_daily));
        } else if velocity.algo_daily > 0.0 {
            factors.push(format!(
                "algo_daily={:.3} (avg7={:.3}, avg30={:.3})",
                velocity.algo_daily, velocity.avg7, velocity.avg30
            ));
        } else {
            factors.push("velocity_floor: no sales in either window".to_string());
        }

        if projection.gap_days > 0 {
            factors.push(format!(
                "supply_gap: run_out={}, {} days uncovered before arrival",
                projection.run_out_date, projection.gap_days
            ));
        }

        if decision.total_restock_needed > 0 {
            // 此分支未触发非负钳制: 现货+在途 = 目标水位 - 总需求
            factors.push(format!(
                "below_target: target={}, on_hand_plus_inbound={}",
                decision.target_qty,
                decision.target_qty - decision.total_restock_needed
            ));
        }

        if decision.dead_qty > 0.0 {
            factors.push(format!(
                "dead_stock: {:.1} units beyond threshold window",
                decision.dead_qty
            ));
        }

        if factors.is_empty() {
            factors.push("no action required".to_string());
        }

        let primary_action = if decision.air_restock > 0 {
            "AIR_EXPEDITE"
        } else if decision.sea_restock > 0 {
            "SEA_RESTOCK"
        } else if decision.dead_qty > 0.0 {
            "CLEARANCE"
        } else {
            "HOLD"
        };

        let reason = json!({
            "health": projection.health,
            "primary_action": primary_action,
            "factors": factors,
            "details": {
                "today": today.to_string(),
                "current_stock": position.current_stock,
                "final_daily": velocity.final_daily,
                "dos": projection.dos,
                "target_qty": decision.target_qty,
                "gap_days": projection.gap_days,
            }
        });

        reason.to_string()
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}
