// ==========================================
// 跨境电商库存利润分析系统 - 库存预算 API
// ==========================================
// 职责: 聚合三个存储 + 策略配置 + 预测引擎,对外提供业务接口
// 架构: API 层 → 存储层 / 引擎层
// 红线: 预测为只读重算; 单轮重算内配置视为不可变快照
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::PolicySettings;
use crate::domain::forecast::SkuForecast;
use crate::domain::inventory::InventorySnapshot;
use crate::domain::product::Product;
use crate::domain::sale::SaleEvent;
use crate::engine::ForecastEngine;
use crate::store::{InventoryStore, ProductCatalog, SalesLedger};
use chrono::NaiveDate;
use tracing::{info, instrument};

// ==========================================
// InventoryApi - 库存预算 API
// ==========================================

/// 库存预算API
///
/// 职责:
/// 1. 持有产品档案/销售台账/库存状态三个协作方集合
/// 2. 人工录入路径的校验与联动 (基数编辑 → 盘点日重置)
/// 3. 按需全量重算预测 (无持久化的预测对象)
pub struct InventoryApi {
    catalog: ProductCatalog,
    ledger: SalesLedger,
    inventory: InventoryStore,
    settings: PolicySettings,
    engine: ForecastEngine,
}

impl InventoryApi {
    /// 以出厂默认配置创建
    pub fn new() -> Self {
        Self::with_settings(PolicySettings::default())
    }

    /// 以指定配置创建
    pub fn with_settings(settings: PolicySettings) -> Self {
        Self {
            catalog: ProductCatalog::new(),
            ledger: SalesLedger::new(),
            inventory: InventoryStore::new(),
            settings,
            engine: ForecastEngine::new(),
        }
    }

    // ==========================================
    // 预测查询接口
    // ==========================================

    /// 全量预测 (档案内每个 SKU 一条)
    ///
    /// 每次调用从头重算; 配置在进入本轮前克隆一次,
    /// 中途的配置修改不影响本轮任何 SKU 的口径。
    #[instrument(skip(self), fields(sku_count = self.catalog.len()))]
    pub fn forecast_all(&self, today: NaiveDate) -> Vec<SkuForecast> {
        let settings = self.settings.clone();

        let pairs: Vec<(Product, InventorySnapshot)> = self
            .catalog
            .list()
            .iter()
            .map(|p| (p.clone(), self.inventory.get_or_default(&p.sku)))
            .collect();

        self.engine
            .evaluate_batch(&pairs, self.ledger.events(), &settings, today)
    }

    /// 单 SKU 预测
    pub fn forecast_sku(&self, sku: &str, today: NaiveDate) -> ApiResult<SkuForecast> {
        let product = self
            .catalog
            .get(sku)
            .ok_or_else(|| ApiError::NotFound(format!("Product(sku={})不存在", sku)))?;

        let snapshot = self.inventory.get_or_default(sku);
        let settings = self.settings.clone();

        Ok(self.engine.evaluate_single(
            product,
            &snapshot,
            self.ledger.events(),
            &settings,
            today,
        ))
    }

    /// 按父体 SKU 预测变体家族
    pub fn forecast_family(&self, parent_sku: &str, today: NaiveDate) -> Vec<SkuForecast> {
        let settings = self.settings.clone();

        let pairs: Vec<(Product, InventorySnapshot)> = self
            .catalog
            .list_by_parent(parent_sku)
            .into_iter()
            .map(|p| (p.clone(), self.inventory.get_or_default(&p.sku)))
            .collect();

        self.engine
            .evaluate_batch(&pairs, self.ledger.events(), &settings, today)
    }

    // ==========================================
    // 产品档案接口
    // ==========================================

    /// 新增产品
    pub fn add_product(&mut self, product: Product) -> ApiResult<()> {
        if product.sku.trim().is_empty() {
            return Err(ApiError::InvalidInput("SKU不能为空".to_string()));
        }
        self.catalog.add(product)?;
        Ok(())
    }

    /// 更新产品
    pub fn update_product(&mut self, sku: &str, product: Product) -> ApiResult<()> {
        self.catalog.update(sku, product)?;
        Ok(())
    }

    /// 删除产品 (库存快照随之删除,不独立保留)
    pub fn remove_product(&mut self, sku: &str) -> ApiResult<Product> {
        let removed = self.catalog.remove(sku)?;
        self.inventory.remove(sku);
        info!(sku = %sku, "产品已删除,关联库存快照同步清理");
        Ok(removed)
    }

    /// 产品列表
    pub fn list_products(&self) -> &[Product] {
        self.catalog.list()
    }

    /// 按父体列出变体家族
    pub fn list_family(&self, parent_sku: &str) -> Vec<&Product> {
        self.catalog.list_by_parent(parent_sku)
    }

    /// 批量合并导入的产品 (同 SKU 以导入行为准)
    pub fn merge_products(&mut self, incoming: Vec<Product>) {
        self.catalog.merge(incoming);
    }

    // ==========================================
    // 销售台账接口
    // ==========================================

    /// 追加销售事件
    pub fn append_sale(&mut self, event: SaleEvent) -> ApiResult<()> {
        if event.sku.trim().is_empty() {
            return Err(ApiError::InvalidInput("销售事件SKU不能为空".to_string()));
        }
        self.ledger.append(event);
        Ok(())
    }

    /// 批量追加销售事件 (上游导入口径)
    pub fn append_sales_bulk(&mut self, events: Vec<SaleEvent>) {
        self.ledger.append_bulk(events);
    }

    /// 修正销售事件
    pub fn update_sale(&mut self, index: usize, event: SaleEvent) -> ApiResult<()> {
        self.ledger.update(index, event)?;
        Ok(())
    }

    /// 删除销售事件
    pub fn remove_sale(&mut self, index: usize) -> ApiResult<SaleEvent> {
        Ok(self.ledger.remove(index)?)
    }

    /// 按 SKU / 日期区间查询台账
    pub fn query_sales(
        &self,
        sku: Option<&str>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<&SaleEvent> {
        self.ledger.filter(sku, from, to)
    }

    // ==========================================
    // 库存录入接口 (人工数据录入路径)
    // ==========================================

    /// 更新盘点基数 (盘点日期联动重置为当天)
    pub fn set_base_qty(&mut self, sku: &str, qty: i64, today: NaiveDate) -> ApiResult<()> {
        self.require_product(sku)?;
        self.inventory.set_base_qty(sku, qty, today)?;
        Ok(())
    }

    /// 直接修改盘点日期
    pub fn set_base_date(&mut self, sku: &str, date: Option<NaiveDate>) -> ApiResult<()> {
        self.require_product(sku)?;
        self.inventory.set_base_date(sku, date);
        Ok(())
    }

    /// 更新在途数量
    pub fn set_inbound(&mut self, sku: &str, qty: i64) -> ApiResult<()> {
        self.require_product(sku)?;
        self.inventory.set_inbound(sku, qty)?;
        Ok(())
    }

    /// 更新预计到货日
    pub fn set_inbound_date(&mut self, sku: &str, date: Option<NaiveDate>) -> ApiResult<()> {
        self.require_product(sku)?;
        self.inventory.set_inbound_date(sku, date);
        Ok(())
    }

    /// 更新人工日销 (0 = 取消干预)
    pub fn set_daily_override(&mut self, sku: &str, daily: f64) -> ApiResult<()> {
        self.require_product(sku)?;
        self.inventory.set_daily_override(sku, daily)?;
        Ok(())
    }

    /// 查询库存快照 (缺失返回空快照)
    pub fn snapshot(&self, sku: &str) -> InventorySnapshot {
        self.inventory.get_or_default(sku)
    }

    /// 批量写入库存快照 (上游导入口径)
    pub fn apply_inventory_bulk(&mut self, entries: Vec<(String, InventorySnapshot)>) {
        self.inventory.apply_bulk(entries);
    }

    // ==========================================
    // 策略配置接口
    // ==========================================

    /// 当前策略配置
    pub fn settings(&self) -> &PolicySettings {
        &self.settings
    }

    /// 更新策略配置 (先校验后生效)
    pub fn update_settings(&mut self, settings: PolicySettings) -> ApiResult<()> {
        settings
            .validate()
            .map_err(|e| ApiError::InvalidSettings(e.to_string()))?;
        self.settings = settings;
        info!("策略配置已更新");
        Ok(())
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 库存录入前置校验: SKU 必须已建档
    fn require_product(&self, sku: &str) -> ApiResult<()> {
        if self.catalog.get(sku).is_none() {
            return Err(ApiError::NotFound(format!(
                "Product(sku={})不存在,请先建档再录入库存",
                sku
            )));
        }
        Ok(())
    }
}

impl Default for InventoryApi {
    fn default() -> Self {
        Self::new()
    }
}
