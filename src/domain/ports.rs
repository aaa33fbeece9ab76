use crate::domain::model::{DonorQuery, RequestQuery, Severity};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// 顯示一則短暫訊息
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }
}

/// 儀表板使用的 REST 捷徑
#[async_trait]
pub trait BloodBankApi: Send + Sync {
    async fn dashboard_stats(&self) -> Result<Value>;
    async fn donor_summary(&self) -> Result<Value>;
    async fn add_donor(&self, donor: &Value) -> Result<Value>;
    async fn record_donation(&self, donation: &Value) -> Result<Value>;
    async fn inventory_stock(&self) -> Result<Value>;
    async fn pending_requests(&self) -> Result<Value>;
    async fn fulfill_request(&self, request_id: u64, units_supplied: u32) -> Result<Value>;
    async fn donor_distribution(&self) -> Result<Value>;
}

/// 捐血者、醫院申請與庫存的管理端點
#[async_trait]
pub trait ManagementApi: Send + Sync {
    async fn health_check(&self) -> Result<Value>;
    async fn login(&self, username: &str, password: &str) -> Result<Value>;
    async fn critical_stock(&self) -> Result<Value>;
    async fn recent_donations(&self) -> Result<Value>;
    async fn expiring_stock(&self) -> Result<Value>;
    async fn list_donors(&self, query: &DonorQuery) -> Result<Value>;
    async fn update_donor(&self, donor_id: u64, donor: &Value) -> Result<Value>;
    async fn delete_donor(&self, donor_id: u64) -> Result<Value>;
    async fn list_requests(&self, query: &RequestQuery) -> Result<Value>;
    async fn add_request(&self, request: &Value) -> Result<Value>;
    async fn approve_request(&self, request_id: u64) -> Result<Value>;
    async fn reject_request(&self, request_id: u64) -> Result<Value>;
    async fn full_inventory(&self) -> Result<Value>;
}
