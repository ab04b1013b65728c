// ==========================================
// 跨境电商库存利润分析系统 - 库存状态存储
// ==========================================
// 职责: SKU → 库存快照 映射,逐字段更新
// 红线: 盘点基数被编辑时,盘点日期必须同步重置为当天
// ==========================================

use crate::domain::inventory::InventorySnapshot;
use crate::store::error::{StoreError, StoreResult};
use chrono::NaiveDate;
use std::collections::HashMap;

// ==========================================
// InventoryStore - 库存状态存储
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    state: HashMap<String, InventorySnapshot>,
}

impl InventoryStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 按 SKU 查询快照
    pub fn get(&self, sku: &str) -> Option<&InventorySnapshot> {
        self.state.get(sku)
    }

    /// 按 SKU 查询快照,缺失时返回空快照
    ///
    /// 首次引用即创建语义: 从未录入库存的 SKU 视为
    /// 未盘点、无在途、无人工干预。
    pub fn get_or_default(&self, sku: &str) -> InventorySnapshot {
        self.state.get(sku).cloned().unwrap_or_default()
    }

    /// 取得可变快照,缺失时原位创建
    fn ensure(&mut self, sku: &str) -> &mut InventorySnapshot {
        self.state.entry(sku.to_string()).or_default()
    }

    // ==========================================
    // 逐字段更新 (人工录入路径)
    // ==========================================

    /// 更新盘点基数
    ///
    /// 基数被编辑即视为完成一次实物清点,盘点日期同步重置为当天。
    ///
    /// # 参数
    /// - today: 当前日期 (显式传入,不读环境时钟)
    pub fn set_base_qty(&mut self, sku: &str, qty: i64, today: NaiveDate) -> StoreResult<()> {
        if qty < 0 {
            return Err(StoreError::InvalidValue {
                field: "base_qty",
                value: qty.to_string(),
                reason: "盘点基数不能为负",
            });
        }
        let snapshot = self.ensure(sku);
        snapshot.base_qty = qty;
        snapshot.base_date = Some(today);
        Ok(())
    }

    /// 直接修改盘点日期 (不经过基数编辑的校准微调)
    pub fn set_base_date(&mut self, sku: &str, date: Option<NaiveDate>) {
        self.ensure(sku).base_date = date;
    }

    /// 更新在途数量
    pub fn set_inbound(&mut self, sku: &str, qty: i64) -> StoreResult<()> {
        if qty < 0 {
            return Err(StoreError::InvalidValue {
                field: "inbound",
                value: qty.to_string(),
                reason: "在途库存不能为负",
            });
        }
        self.ensure(sku).inbound = qty;
        Ok(())
    }

    /// 更新预计到货日 (None = 清除)
    pub fn set_inbound_date(&mut self, sku: &str, date: Option<NaiveDate>) {
        self.ensure(sku).inbound_date = date;
    }

    /// 更新人工日销 (0 = 取消干预)
    pub fn set_daily_override(&mut self, sku: &str, daily: f64) -> StoreResult<()> {
        if !daily.is_finite() || daily < 0.0 {
            return Err(StoreError::InvalidValue {
                field: "daily_override",
                value: daily.to_string(),
                reason: "人工日销必须为非负有限值",
            });
        }
        self.ensure(sku).daily_override = daily;
        Ok(())
    }

    // ==========================================
    // 批量与生命周期
    // ==========================================

    /// 批量写入 (上游导入口径,同 SKU 整条覆盖)
    pub fn apply_bulk(&mut self, entries: Vec<(String, InventorySnapshot)>) {
        for (sku, snapshot) in entries {
            self.state.insert(sku, snapshot);
        }
    }

    /// 随产品删除快照 (快照不独立删除)
    pub fn remove(&mut self, sku: &str) -> Option<InventorySnapshot> {
        self.state.remove(sku)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}
