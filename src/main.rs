//! matrix-notify - Forward Checkmk notifications to a Matrix room.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use matrix_notify::cli::{Cli, LogFormat};
use matrix_notify::config::{MatrixConfig, load_context, load_matrix_config};
use matrix_notify::error::{EXIT_CONFIG, EXIT_OTHER};
use matrix_notify::{
    ConfigError, Dispatcher, MatrixMessage, MatrixNotifier, NotificationContext, NotifyError,
    Outcome, prepare,
};

/// Initialize the tracing subscriber with the specified log format.
///
/// Logs go to stderr; stdout is reserved for the status line the
/// dispatcher records in its notification log.
fn init_logging(format: LogFormat) {
    // RUST_LOG wins; info when unset or unparsable.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match format {
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .with_env_filter(filter)
                .init();
        }
    }
}

/// Map a failure to the exit code the dispatcher sees.
fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<ConfigError>() {
        return e.exit_code();
    }
    if let Some(e) = err.downcast_ref::<NotifyError>() {
        return e.exit_code();
    }
    EXIT_OTHER
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format);

    let code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            let code = exit_code(&e);
            error!(error = %format!("{:#}", e), exit_code = code, "matrix-notify failed");
            if code == EXIT_CONFIG {
                println!("Configuration error: {:#}", e);
            } else {
                println!("Failed to send message: {:#}", e);
            }
            code
        }
    };

    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<()> {
    // Endpoint settings are required before anything else happens.
    let config = load_matrix_config().context("loading Matrix endpoint configuration")?;
    let ctx = load_context();

    if cli.dry_run {
        return dry_run(&config, &ctx);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building async runtime")?;

    runtime.block_on(deliver(config, ctx, Duration::from_secs(cli.timeout)))
}

/// Classify, render and send the event.
async fn deliver(config: MatrixConfig, ctx: NotificationContext, timeout: Duration) -> Result<()> {
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("building HTTP client")?;

    let notifier = MatrixNotifier::new(&config, http_client);
    let dispatcher = Dispatcher::new(Arc::new(notifier));

    match dispatcher.dispatch(&ctx).await? {
        Outcome::NoMessage => {
            println!("No message to send.");
        }
        Outcome::Delivered { kind, delivery } => {
            info!(
                kind = %kind,
                txn_id = %delivery.txn_id,
                event_id = delivery.event_id.as_deref().unwrap_or(""),
                "Delivery complete"
            );
            println!(
                "Message sent successfully. Status code: {}",
                delivery.status
            );
        }
    }

    Ok(())
}

/// Print the request that would be sent, without sending it.
fn dry_run(config: &MatrixConfig, ctx: &NotificationContext) -> Result<()> {
    let Some(message) = prepare(ctx) else {
        println!("No message to send.");
        return Ok(());
    };

    let notifier = MatrixNotifier::new(config, reqwest::Client::new());
    let url = notifier.send_url(&notifier.next_txn_id());
    let payload = serde_json::to_string_pretty(&MatrixMessage::from_rendered(&message))
        .context("encoding message payload")?;

    println!("PUT {}", url);
    println!("Authorization: Bearer {}", config.access_token());
    println!("{}", payload);

    Ok(())
}
