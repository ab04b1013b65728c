// ==========================================
// 跨境电商库存利润分析系统 - 销售台账存储
// ==========================================
// 职责: 销售事件的无序集合,支持追加/修正/删除
// 用途: 上游导入与订单修正写入,引擎层只读
// ==========================================

use crate::domain::sale::SaleEvent;
use crate::store::error::{StoreError, StoreResult};
use chrono::NaiveDate;

// ==========================================
// SalesLedger - 销售台账
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    events: Vec<SaleEvent>,
}

impl SalesLedger {
    /// 创建空台账
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加单条事件
    pub fn append(&mut self, event: SaleEvent) {
        self.events.push(event);
    }

    /// 批量追加 (上游导入口径)
    pub fn append_bulk(&mut self, events: Vec<SaleEvent>) {
        self.events.extend(events);
    }

    /// 按索引修正事件 (订单管理的行内编辑)
    pub fn update(&mut self, index: usize, event: SaleEvent) -> StoreResult<()> {
        let len = self.events.len();
        match self.events.get_mut(index) {
            Some(slot) => {
                *slot = event;
                Ok(())
            }
            None => Err(StoreError::IndexOutOfRange { index, len }),
        }
    }

    /// 按索引删除事件
    pub fn remove(&mut self, index: usize) -> StoreResult<SaleEvent> {
        if index >= self.events.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.events.len(),
            });
        }
        Ok(self.events.remove(index))
    }

    /// 全量事件 (引擎层输入)
    pub fn events(&self) -> &[SaleEvent] {
        &self.events
    }

    /// 按 SKU / 日期区间过滤 (闭区间,None 表示不限)
    pub fn filter(
        &self,
        sku: Option<&str>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<&SaleEvent> {
        self.events
            .iter()
            .filter(|e| sku.map_or(true, |s| e.sku == s))
            .filter(|e| from.map_or(true, |d| e.date >= d))
            .filter(|e| to.map_or(true, |d| e.date <= d))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 全量替换 (备份恢复口径)
    pub fn replace_all(&mut self, events: Vec<SaleEvent>) {
        self.events = events;
    }
}
