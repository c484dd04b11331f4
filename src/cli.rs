use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::str::FromStr;

use crate::types::{
    Channel, TicketPriority, TicketStatus, VALID_CHANNELS, VALID_PRIORITIES, VALID_STATUSES,
};

#[derive(Parser, Debug)]
#[command(name = "multidesk")]
#[command(about = "Multichannel support ticket dashboard")]
#[command(version)]
pub struct Cli {
    /// Ticket service base URL (overrides config and MULTIDESK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Debug-level logging for multidesk
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (default: dashboard)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the full-screen support dashboard
    #[command(visible_alias = "d")]
    Dashboard,

    /// List tickets by most recent activity
    Ls {
        /// Only tickets of this channel: whatsapp, email, chat
        #[arg(short, long, value_parser = parse_channel)]
        channel: Option<Channel>,

        /// Fuzzy search over client, subject and contact
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the client panel and interaction history of a ticket
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID
        #[arg(value_parser = parse_ticket_id)]
        id: String,

        /// Show every message instead of the most recent one
        #[arg(short, long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve an open ticket, or reopen a resolved one
    Toggle {
        /// Ticket ID
        #[arg(value_parser = parse_ticket_id)]
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a ticket's status
    Status {
        /// Ticket ID
        #[arg(value_parser = parse_ticket_id)]
        id: String,

        /// New status: novo, em_andamento, resolvido
        #[arg(value_parser = parse_status)]
        status: TicketStatus,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a ticket's topic (no request when unchanged)
    Topic {
        /// Ticket ID
        #[arg(value_parser = parse_ticket_id)]
        id: String,

        /// Topic value, e.g. geral, suporte, comercial, financeiro
        topic: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new ticket
    #[command(visible_alias = "c")]
    Create {
        /// Ticket subject
        #[arg(long)]
        subject: String,

        /// Channel: whatsapp, email, chat
        #[arg(long, value_parser = parse_channel)]
        channel: Channel,

        /// Priority: baixa, media, alta
        #[arg(short, long, default_value = "media", value_parser = parse_priority)]
        priority: TicketPriority,

        /// Client display name
        #[arg(long)]
        client_name: Option<String>,

        /// Topic (default: geral)
        #[arg(long)]
        topic: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a ticket
    Delete {
        /// Ticket ID
        #[arg(value_parser = parse_ticket_id)]
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append a message to a ticket
    Message {
        /// Ticket ID
        #[arg(value_parser = parse_ticket_id)]
        id: String,

        /// Message text
        #[arg(trailing_var_arg = true, required = true)]
        text: Vec<String>,

        /// Message sent by the support team instead of the client
        #[arg(long)]
        agent: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send an outbound WhatsApp message
    Whatsapp {
        /// Recipient number
        to: String,

        /// Message text
        #[arg(trailing_var_arg = true, required = true)]
        text: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show aggregate ticket metrics
    Metrics {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Key: api_url, request_timeout, timezone
        key: String,
        /// Value to set (empty timezone resets to the system zone)
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Key: api_url, request_timeout, timezone
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_channel(s: &str) -> Result<Channel, String> {
    parse_with_validation(
        s,
        |v| Channel::from_str(v).map_err(|_| String::new()),
        "channel",
        VALID_CHANNELS,
    )
}

fn parse_priority(s: &str) -> Result<TicketPriority, String> {
    parse_with_validation(
        s,
        |v| TicketPriority::from_str(v).map_err(|_| String::new()),
        "priority",
        VALID_PRIORITIES,
    )
}

fn parse_status(s: &str) -> Result<TicketStatus, String> {
    parse_with_validation(
        s,
        |v| TicketStatus::from_str(v).map_err(|_| String::new()),
        "status",
        VALID_STATUSES,
    )
}

fn parse_ticket_id(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("ID cannot be empty".to_string());
    }
    Ok(s.to_string())
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "multidesk", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("multidesk").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_defaults_to_none() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.api_url.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["ls", "--api-url", "http://x/api", "-v"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://x/api"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_channel_valid() {
        assert_eq!(parse_channel("whatsapp").unwrap(), Channel::WhatsApp);
        assert_eq!(parse_channel("EMAIL").unwrap(), Channel::Email);
        assert_eq!(parse_channel("chat").unwrap(), Channel::Chat);
    }

    #[test]
    fn test_parse_channel_error_lists_values() {
        let err = parse_channel("fax").unwrap_err();
        assert!(err.contains("Invalid channel"));
        assert!(err.contains("whatsapp, email, chat"));
    }

    #[test]
    fn test_parse_status_valid() {
        assert_eq!(parse_status("novo").unwrap(), TicketStatus::Novo);
        assert_eq!(
            parse_status("em_andamento").unwrap(),
            TicketStatus::EmAndamento
        );
        assert_eq!(parse_status("resolvido").unwrap(), TicketStatus::Resolvido);
    }

    #[test]
    fn test_parse_status_invalid() {
        let err = parse_status("closed").unwrap_err();
        assert!(err.contains("novo, em_andamento, resolvido"));
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("alta").unwrap(), TicketPriority::Alta);
        assert!(parse_priority("urgent").is_err());
    }

    #[test]
    fn test_parse_ticket_id_rejects_blank() {
        assert!(parse_ticket_id("").is_err());
        assert!(parse_ticket_id("   ").is_err());
        assert_eq!(parse_ticket_id("abc123").unwrap(), "abc123");
    }

    #[test]
    fn test_message_joins_trailing_text() {
        let cli = parse(&["message", "T1", "olá", "tudo", "bem"]);
        match cli.command {
            Some(Commands::Message { id, text, agent, .. }) => {
                assert_eq!(id, "T1");
                assert_eq!(text.join(" "), "olá tudo bem");
                assert!(!agent);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_message_agent_flag_before_text() {
        let cli = parse(&["message", "--agent", "T1", "resposta"]);
        match cli.command {
            Some(Commands::Message { text, agent, .. }) => {
                assert_eq!(text, vec!["resposta"]);
                assert!(agent);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_create_defaults() {
        let cli = parse(&["create", "--subject", "Boleto", "--channel", "email"]);
        match cli.command {
            Some(Commands::Create {
                subject,
                channel,
                priority,
                topic,
                ..
            }) => {
                assert_eq!(subject, "Boleto");
                assert_eq!(channel, Channel::Email);
                assert_eq!(priority, TicketPriority::Media);
                assert!(topic.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_create_requires_channel() {
        let args = ["multidesk", "create", "--subject", "x"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
