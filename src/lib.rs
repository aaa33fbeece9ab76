pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::ClientConfig;

pub use crate::core::{
    api::{ApiClient, RequestOptions},
    notification::{LogNotifier, NotificationTiming, Toast, ToastBoard},
    BloodBankApi, ManagementApi, Notifier,
};
pub use domain::model::{
    DonorQuery, Eligibility, FulfillRequest, RequestQuery, Severity, StatusColor,
    ELIGIBILITY_WINDOW_DAYS,
};
pub use utils::debounce::{debounce, Debounced};
pub use utils::error::{ApiError, Result};
pub use utils::format::{eligibility_status, format_date, parse_date, stock_status_color};
