#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::MockServer;

pub fn multidesk_binary() -> &'static str {
    env!("CARGO_BIN_EXE_multidesk")
}

/// Runs the multidesk binary against a mock ticket service with an isolated config file
pub struct DeskTest {
    pub temp_dir: TempDir,
    pub api_url: String,
}

impl DeskTest {
    pub fn new(server: &MockServer) -> Self {
        Self::with_api_url(format!("{}/api", server.uri()))
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        DeskTest {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
            api_url: api_url.into(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(multidesk_binary());
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env("MULTIDESK_CONFIG", self.config_path())
            .env("MULTIDESK_API_URL", &self.api_url)
            .env("MULTIDESK_LOG", "off")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Run on a blocking thread so the mock server keeps serving meanwhile
    pub async fn run(&self, args: &[&str]) -> Output {
        let mut cmd = self.command(args);
        tokio::task::spawn_blocking(move || cmd.output())
            .await
            .expect("command thread panicked")
            .expect("Failed to execute multidesk command")
    }

    pub async fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args).await;
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub async fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args).await;
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Synchronous run for commands that never reach the service
    pub fn run_offline(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute multidesk command")
    }
}

/// Ticket as returned by the service
pub fn ticket_json(id: &str, channel: &str, status: &str) -> Value {
    json!({
        "id": id,
        "clientName": format!("Cliente {}", id),
        "subject": format!("Assunto {}", id),
        "channel": channel,
        "status": status,
        "priority": "media",
        "lastUpdate": "2024-05-10T12:00:00Z",
        "messages": [],
    })
}

/// Ticket with a client record and a short conversation
pub fn ticket_with_history(id: &str) -> Value {
    json!({
        "id": id,
        "clientName": "Maria Souza",
        "subject": "Segunda via do boleto",
        "channel": "email",
        "status": "em_andamento",
        "priority": "alta",
        "topic": "financeiro",
        "lastUpdate": "2024-05-10T15:30:00Z",
        "updatedAt": "2024-05-10T15:30:00Z",
        "client": {
            "id": "c1",
            "name": "Maria Souza",
            "email": "maria@example.com",
            "whatsapp": "+5511999990000"
        },
        "messages": [
            {"message": "Preciso da segunda via", "timestamp": "2024-05-10T12:00:00Z", "fromClient": true},
            {"message": "Enviamos por e-mail", "timestamp": "2024-05-10T15:30:00Z", "fromClient": false}
        ],
    })
}
