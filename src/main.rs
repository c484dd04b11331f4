use clap::Parser;
use std::process::ExitCode;

use multidesk::cli::{Cli, Commands, ConfigAction, generate_completions};
use multidesk::commands::{
    CreateOptions, cmd_config_get, cmd_config_set, cmd_config_show, cmd_create, cmd_dashboard,
    cmd_delete, cmd_ls, cmd_message, cmd_metrics, cmd_show, cmd_status, cmd_toggle, cmd_topic,
    cmd_whatsapp,
};
use multidesk::config::Config;
use multidesk::error::Result;
use multidesk::logging::{self, LogTarget};

async fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Dashboard);

    // Config commands manage the file itself and never reach the service
    match command {
        Commands::Config { action } => {
            return match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            };
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            return Ok(());
        }
        _ => {}
    }

    let mut config = Config::load()?;
    config.apply_overrides(cli.api_url.as_deref());

    if let Commands::Dashboard = command {
        return cmd_dashboard(&config, cli.verbose).await;
    }

    logging::init(&LogTarget::Stderr, cli.verbose)?;
    tracing::debug!(api_url = %config.api_url, "using ticket service");

    match command {
        Commands::Ls {
            channel,
            search,
            json,
        } => cmd_ls(&config, channel, search.as_deref(), json).await,
        Commands::Show { id, all, json } => cmd_show(&config, &id, all, json).await,
        Commands::Toggle { id, json } => cmd_toggle(&config, &id, json).await,
        Commands::Status { id, status, json } => cmd_status(&config, &id, status, json).await,
        Commands::Topic { id, topic, json } => cmd_topic(&config, &id, &topic, json).await,
        Commands::Create {
            subject,
            channel,
            priority,
            client_name,
            topic,
            json,
        } => {
            cmd_create(
                &config,
                CreateOptions {
                    subject,
                    channel,
                    priority,
                    client_name,
                    topic,
                },
                json,
            )
            .await
        }
        Commands::Delete { id, json } => cmd_delete(&config, &id, json).await,
        Commands::Message {
            id,
            text,
            agent,
            json,
        } => cmd_message(&config, &id, &text.join(" "), agent, json).await,
        Commands::Whatsapp { to, text, json } => {
            cmd_whatsapp(&config, &to, &text.join(" "), json).await
        }
        Commands::Metrics { json } => cmd_metrics(&config, json).await,
        Commands::Dashboard | Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
