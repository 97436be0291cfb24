use tokio_util::sync::CancellationToken;

use homework_bot::api::PracticumClient;
use homework_bot::config::Config;
use homework_bot::logger;
use homework_bot::poller::Poller;
use homework_bot::telegram::TelegramNotifier;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let _log_guard = logger::init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Required environment variables are missing");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting homework status bot");

    let api = PracticumClient::new(&config.practicum_token, &config.endpoint);
    let notifier = TelegramNotifier::new(&config.telegram_token, &config.telegram_chat_id);
    let poller = Poller::new(api, notifier);

    let cancel = install_shutdown_handler();
    poller.run(cancel).await;

    tracing::info!("Poller stopped");
}

/// Cancels the returned token on ctrl-c so the poller can stop between cycles.
fn install_shutdown_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received ctrl-c, initiating shutdown");
            token_clone.cancel();
        }
    });

    token
}
