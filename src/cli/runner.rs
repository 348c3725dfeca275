//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, RemoteCommand};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::qiniu::{generate_key, FileHost, QiniuClient, UploadFile};
use serde_json::{json, Value};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing its JSON result to stdout
    pub async fn run(&self) -> Result<()> {
        let output = self.execute().await?;
        self.emit(&output)
    }

    /// Run the CLI command and return its JSON result
    pub async fn execute(&self) -> Result<Value> {
        match &self.cli.command {
            Commands::Key { name } => Ok(json!({ "key": generate_key(name) })),
            Commands::Remote(command) => {
                let client = QiniuClient::new(self.resolve_config()?)?;
                debug!("Using image bed at {}", client.config().base_url);
                execute_remote(&client, command).await
            }
        }
    }

    /// Merge defaults, the config file and command-line flags
    ///
    /// Flags win over the file, the file wins over defaults.
    pub fn resolve_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(timeout_ms) = self.cli.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        if self.cli.no_credentials {
            config.with_credentials = false;
        }
        config.cookies.extend(self.cli.cookies.iter().cloned());

        config.validate()?;
        Ok(config)
    }

    fn emit(&self, value: &Value) -> Result<()> {
        let line = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{line}");
        Ok(())
    }
}

/// Execute one remote command against any file host
pub async fn execute_remote(host: &dyn FileHost, command: &RemoteCommand) -> Result<Value> {
    match command {
        RemoteCommand::Token => {
            let token = host.request_upload_token().await?;
            Ok(json!({ "token": token }))
        }
        RemoteCommand::Upload { path } => {
            let file = UploadFile::from_path(path).await?;
            let key_hint = file.key();
            info!("Uploading {} ({} bytes)", path.display(), file.len());
            let result = host.upload_file(file).await?;
            Ok(json!({
                "key_hint": key_hint,
                "status": result.status,
                "body": result.body,
            }))
        }
        RemoteCommand::Delete { key } => {
            let result = host.delete_file(key).await?;
            info!("Deleted {}", key);
            Ok(json!({ "status": result.status, "body": result.body }))
        }
        RemoteCommand::Domain => {
            let domain = host.fetch_domain().await?;
            Ok(json!({ "domain": domain }))
        }
    }
}
