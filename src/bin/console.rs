//! Minimal terminal client for the registry, talking to the HTTP surface
//! configured at `PAYBOARD_BASE_URL`.

use payboard::client::views::{
    account_line, payment_line, ListView, LOAD_ACCOUNTS_FAILED, LOAD_PAYMENTS_FAILED, NO_ACCOUNTS,
    NO_PAYMENTS,
};
use payboard::client::ApiClient;
use payboard::config::CONFIG;

const USAGE: &str = "usage: payboard-console <list-accounts | show-account <id> | list-payments>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let client = ApiClient::new(CONFIG.base_url.clone());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("list-accounts") => {
            let view = ListView::from_fetch(
                client.fetch_accounts().await,
                NO_ACCOUNTS,
                LOAD_ACCOUNTS_FAILED,
            );
            for line in view.render(account_line) {
                println!("{line}");
            }
        }
        Some("show-account") => {
            let id: i64 = args
                .get(1)
                .ok_or(USAGE)?
                .parse()
                .map_err(|_| "account id must be a number")?;
            let detail = client.fetch_account_with_payments(id).await?;
            println!("{}", account_line(&detail.account));
            if detail.payments.is_empty() {
                println!("No payments found for {}.", detail.account.name);
            }
            for p in &detail.payments {
                println!(
                    "  #{} {} ({}) [{}]",
                    p.id,
                    p.recipient_name,
                    p.amount,
                    p.status.label()
                );
            }
        }
        Some("list-payments") => {
            let view = ListView::from_fetch(
                client.fetch_payments().await,
                NO_PAYMENTS,
                LOAD_PAYMENTS_FAILED,
            );
            for line in view.render(payment_line) {
                println!("{line}");
            }
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
    Ok(())
}
