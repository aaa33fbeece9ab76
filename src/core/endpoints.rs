use crate::core::api::{ApiClient, RequestOptions};
use crate::core::{BloodBankApi, ManagementApi, Notifier, Result};
use crate::domain::model::{DonorQuery, FulfillRequest, LoginRequest, RequestQuery};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

#[async_trait]
impl<N: Notifier> BloodBankApi for ApiClient<N> {
    async fn dashboard_stats(&self) -> Result<Value> {
        self.call("/api/dashboard/stats", RequestOptions::get()).await
    }

    async fn donor_summary(&self) -> Result<Value> {
        self.call("/api/donors/summary", RequestOptions::get()).await
    }

    async fn add_donor(&self, donor: &Value) -> Result<Value> {
        self.call("/api/donors", RequestOptions::post_json(donor)?)
            .await
    }

    async fn record_donation(&self, donation: &Value) -> Result<Value> {
        self.call("/api/donations", RequestOptions::post_json(donation)?)
            .await
    }

    async fn inventory_stock(&self) -> Result<Value> {
        self.call("/api/inventory/stock", RequestOptions::get()).await
    }

    async fn pending_requests(&self) -> Result<Value> {
        self.call("/api/requests/pending", RequestOptions::get())
            .await
    }

    async fn fulfill_request(&self, request_id: u64, units_supplied: u32) -> Result<Value> {
        let body = FulfillRequest {
            request_id,
            units_supplied,
        };
        self.call("/api/requests/fulfill", RequestOptions::post_json(&body)?)
            .await
    }

    async fn donor_distribution(&self) -> Result<Value> {
        self.call("/api/analytics/donor_distribution", RequestOptions::get())
            .await
    }
}

#[async_trait]
impl<N: Notifier> ManagementApi for ApiClient<N> {
    async fn health_check(&self) -> Result<Value> {
        self.call("/api/test", RequestOptions::get()).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<Value> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.call("/login", RequestOptions::post_json(&body)?).await
    }

    async fn critical_stock(&self) -> Result<Value> {
        self.call("/api/dashboard/critical-stock", RequestOptions::get())
            .await
    }

    async fn recent_donations(&self) -> Result<Value> {
        self.call("/api/dashboard/recent-donations", RequestOptions::get())
            .await
    }

    async fn expiring_stock(&self) -> Result<Value> {
        self.call("/api/dashboard/expiring-stock", RequestOptions::get())
            .await
    }

    async fn list_donors(&self, query: &DonorQuery) -> Result<Value> {
        self.call(
            "/api/donors/all",
            RequestOptions::get().query(query.to_query_pairs()),
        )
        .await
    }

    async fn update_donor(&self, donor_id: u64, donor: &Value) -> Result<Value> {
        let path = format!("/api/donors/update/{}", donor_id);
        self.call(&path, RequestOptions::with_method(Method::PUT).json(donor)?)
            .await
    }

    async fn delete_donor(&self, donor_id: u64) -> Result<Value> {
        let path = format!("/api/donors/delete/{}", donor_id);
        self.call(&path, RequestOptions::with_method(Method::DELETE))
            .await
    }

    async fn list_requests(&self, query: &RequestQuery) -> Result<Value> {
        self.call(
            "/api/requests/all",
            RequestOptions::get().query(query.to_query_pairs()),
        )
        .await
    }

    async fn add_request(&self, request: &Value) -> Result<Value> {
        self.call("/api/requests/add", RequestOptions::post_json(request)?)
            .await
    }

    async fn approve_request(&self, request_id: u64) -> Result<Value> {
        let path = format!("/api/requests/approve/{}", request_id);
        self.call(&path, RequestOptions::with_method(Method::POST))
            .await
    }

    async fn reject_request(&self, request_id: u64) -> Result<Value> {
        let path = format!("/api/requests/reject/{}", request_id);
        self.call(&path, RequestOptions::with_method(Method::POST))
            .await
    }

    async fn full_inventory(&self) -> Result<Value> {
        self.call("/api/inventory/all", RequestOptions::get()).await
    }
}
