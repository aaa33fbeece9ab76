use anyhow::Context;
use bloodbank_client::utils::{logger, validation::Validate};
use bloodbank_client::{
    eligibility_status, format_date, stock_status_color, ApiClient, BloodBankApi, CliConfig,
    ClientConfig, Command, DonorQuery, LogNotifier, ManagementApi, RequestQuery,
};
use clap::Parser;
use serde_json::Value;

fn parse_payload(data: &str) -> anyhow::Result<Value> {
    serde_json::from_str(data).context("--data must be a JSON object")
}

async fn run(cli: &CliConfig, config: &ClientConfig) -> anyhow::Result<Value> {
    let client = ApiClient::from_config(config, LogNotifier)?;
    tracing::debug!("Using server {}", client.base_url());

    let data = match &cli.command {
        Command::Stats => client.dashboard_stats().await?,
        Command::Donors => client.donor_summary().await?,
        Command::AddDonor { data } => client.add_donor(&parse_payload(data)?).await?,
        Command::RecordDonation { data } => client.record_donation(&parse_payload(data)?).await?,
        Command::Inventory => client.inventory_stock().await?,
        Command::Pending => client.pending_requests().await?,
        Command::Fulfill { request_id, units } => {
            client.fulfill_request(*request_id, *units).await?
        }
        Command::Distribution => client.donor_distribution().await?,
        Command::Health => client.health_check().await?,
        Command::Login { username, password } => client.login(username, password).await?,
        Command::CriticalStock => client.critical_stock().await?,
        Command::RecentDonations => client.recent_donations().await?,
        Command::ExpiringStock => client.expiring_stock().await?,
        Command::ListDonors { search, blood_type } => {
            let query = DonorQuery {
                search: search.clone(),
                blood_type: blood_type.clone(),
            };
            client.list_donors(&query).await?
        }
        Command::UpdateDonor { id, data } => client.update_donor(*id, &parse_payload(data)?).await?,
        Command::DeleteDonor { id } => client.delete_donor(*id).await?,
        Command::ListRequests { search } => {
            let query = RequestQuery {
                search: search.clone(),
            };
            client.list_requests(&query).await?
        }
        Command::AddRequest { data } => client.add_request(&parse_payload(data)?).await?,
        Command::Approve { id } => client.approve_request(*id).await?,
        Command::Reject { id } => client.reject_request(*id).await?,
        Command::FullInventory => client.full_inventory().await?,
        // 不需要連線的輔助指令
        Command::FormatDate { date } => Value::String(format_date(Some(date.as_str()))),
        Command::StockStatus { units } => {
            let color = stock_status_color(*units);
            let (background, text) = color.stock_classes();
            serde_json::json!({
                "color": color,
                "background": background,
                "text": text,
            })
        }
        Command::Eligibility { last_donation } => {
            let status = eligibility_status(last_donation.as_deref(), chrono::Utc::now());
            serde_json::json!({
                "text": status.text(),
                "color": status.color().text_class(),
                "eligible": status.is_eligible(),
            })
        }
    };

    Ok(data)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(&config.logging.level, config.logging.format, cli.verbose);
    tracing::info!("🩸 Blood bank client starting");

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match run(&cli, &config).await {
        Ok(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
        Err(e) => {
            // 請求失敗時錯誤已由通知器記錄
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}
