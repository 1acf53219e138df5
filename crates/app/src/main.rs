use orderdesk_app::{AppConfig, run};

fn main() -> anyhow::Result<()> {
    orderdesk_observability::init();

    let config = AppConfig::from_env();
    match run(&config) {
        Ok(total) => {
            tracing::info!(total, "demo order placed");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "demo order failed");
            Err(err)
        }
    }
}
