// ==========================================
// 跨境电商库存利润分析系统 - 产品档案存储
// ==========================================
// 职责: 产品档案的有序集合,SKU 唯一
// 用途: 档案维护/批量导入写入,引擎层只读
// ==========================================

use crate::domain::product::Product;
use crate::store::error::{StoreError, StoreResult};
use std::collections::HashSet;

// ==========================================
// ProductCatalog - 产品档案
// ==========================================
// 保序: 批量导入的行序即展示序
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    items: Vec<Product>,
}

impl ProductCatalog {
    /// 创建空档案
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增产品
    ///
    /// # 返回
    /// - Err(DuplicateSku): SKU 已存在
    pub fn add(&mut self, product: Product) -> StoreResult<()> {
        if self.get(&product.sku).is_some() {
            return Err(StoreError::DuplicateSku(product.sku));
        }
        self.items.push(product);
        Ok(())
    }

    /// 按 SKU 更新产品 (原位替换,不改变顺序)
    pub fn update(&mut self, sku: &str, product: Product) -> StoreResult<()> {
        match self.items.iter_mut().find(|p| p.sku == sku) {
            Some(slot) => {
                *slot = product;
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "Product",
                sku: sku.to_string(),
            }),
        }
    }

    /// 删除产品
    pub fn remove(&mut self, sku: &str) -> StoreResult<Product> {
        match self.items.iter().position(|p| p.sku == sku) {
            Some(idx) => Ok(self.items.remove(idx)),
            None => Err(StoreError::NotFound {
                entity: "Product",
                sku: sku.to_string(),
            }),
        }
    }

    /// 按 SKU 查询
    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.items.iter().find(|p| p.sku == sku)
    }

    /// 全量列表 (保持插入序)
    pub fn list(&self) -> &[Product] {
        &self.items
    }

    /// 按父体 SKU 列出变体家族
    pub fn list_by_parent(&self, parent_sku: &str) -> Vec<&Product> {
        self.items
            .iter()
            .filter(|p| p.parent_sku == parent_sku)
            .collect()
    }

    /// 批量合并 (上游导入口径)
    ///
    /// 同 SKU 以导入行为准: 先剔除与导入集合冲突的现有行,再追加导入行。
    pub fn merge(&mut self, incoming: Vec<Product>) {
        let incoming_skus: HashSet<&str> = incoming.iter().map(|p| p.sku.as_str()).collect();
        self.items.retain(|p| !incoming_skus.contains(p.sku.as_str()));
        self.items.extend(incoming);
    }

    /// 全量替换 (备份恢复口径)
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.items = products;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
