pub mod api;
pub mod endpoints;
pub mod notification;

pub use crate::domain::model::Severity;
pub use crate::domain::ports::{BloodBankApi, ManagementApi, Notifier};
pub use crate::utils::error::Result;
