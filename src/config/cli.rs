use crate::config::ClientConfig;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bloodbank")]
#[command(about = "Command-line client for the blood bank management API")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Server base URL (overrides the configuration file)")]
    pub base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Dashboard statistics
    Stats,
    /// Donor summary
    Donors,
    /// Register a donor from a JSON object
    AddDonor {
        #[arg(long)]
        data: String,
    },
    /// Record a donation from a JSON object
    RecordDonation {
        #[arg(long)]
        data: String,
    },
    /// Current stock per blood group
    Inventory,
    /// Pending hospital requests
    Pending,
    /// Fulfill a hospital request
    Fulfill {
        #[arg(long)]
        request_id: u64,
        #[arg(long)]
        units: u32,
    },
    /// Donor distribution analytics
    Distribution,
    /// Check that the API is reachable
    Health,
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    CriticalStock,
    RecentDonations,
    ExpiringStock,
    /// Search donors
    ListDonors {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "all")]
        blood_type: String,
    },
    UpdateDonor {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        data: String,
    },
    DeleteDonor {
        #[arg(long)]
        id: u64,
    },
    /// Search hospital requests
    ListRequests {
        #[arg(long)]
        search: Option<String>,
    },
    AddRequest {
        #[arg(long)]
        data: String,
    },
    Approve {
        #[arg(long)]
        id: u64,
    },
    Reject {
        #[arg(long)]
        id: u64,
    },
    FullInventory,
    /// Render a date the way the dashboard does
    FormatDate { date: String },
    /// Classify a stock level
    StockStatus { units: i64 },
    /// Donor eligibility as of now
    Eligibility {
        #[arg(long)]
        last_donation: Option<String>,
    },
}

impl CliConfig {
    /// 合併設定檔與命令列參數
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }

        Ok(config)
    }
}
