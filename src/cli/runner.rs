//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::LicenseJetClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::pagination::CollectionRequest;
use crate::resource::Resource;
use crate::types::{JsonObject, JsonValue, PageSize};
use futures::TryStreamExt;
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = LicenseJetClient::new(self.client_config()?)?;

        match &self.cli.command {
            Commands::Permissions => {
                let permissions = client.root().permissions().await?;
                self.emit(&permissions.unwrap_or(JsonValue::Null))
            }
            Commands::Projects => self.list(client.projects().list()).await,
            Commands::Project { id } => {
                let project = client.projects().get(*id).await?;
                self.emit(&project.to_value())
            }
            Commands::Licenses {
                page,
                limit,
                stream,
                per_page,
            } => {
                let request = client.licenses().list();
                if *stream {
                    self.stream(request, *per_page).await
                } else {
                    let limit = limit.and_then(PageSize::limited).unwrap_or_default();
                    self.list(request.page(*page).limit(limit)).await
                }
            }
            Commands::License { id } => {
                let license = client.licenses().get(*id).await?;
                self.emit(&license.to_value())
            }
            Commands::Renew { id, term, length } => {
                let license = client
                    .licenses()
                    .renew(*id, term.as_deref(), *length)
                    .await?;
                info!("Renewed license {}", id);
                self.emit(&license.to_value())
            }
            Commands::LicenseKeys => self.list(client.license_keys().list()).await,
            Commands::LicensingPlans => self.list(client.licensing_plans().list()).await,
            Commands::Users => self.list(client.users().list()).await,
            Commands::Terms => self.list(client.terms().list()).await,
            Commands::ProjectOptions => self.list(client.project_options().list()).await,
        }
    }

    /// Resolve the client config from the config file and flags
    ///
    /// Flags (and their environment variables) win over the file.
    fn client_config(&self) -> Result<ClientConfig> {
        let mut builder = ClientConfig::builder();

        if let Some(path) = &self.cli.config {
            let file = ClientConfig::from_file(path)?;
            builder = builder
                .base_url(file.base_url)
                .api_key(file.api_key)
                .timeout(file.timeout)
                .user_agent(file.user_agent);
        }
        if let Some(url) = &self.cli.api_url {
            builder = builder.base_url(url.clone());
        }
        if let Some(key) = &self.cli.api_key {
            builder = builder.api_key(key.clone());
        }
        if let Some(secs) = self.cli.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Print one page of a listing as an array
    async fn list<R: Resource>(&self, request: CollectionRequest<R>) -> Result<()> {
        let collection = request.get(&JsonObject::new()).await?;
        self.emit(&JsonValue::Array(collection.to_values()))
    }

    /// Print every item of a listing, walking it page by page
    async fn stream<R>(&self, request: CollectionRequest<R>, per_page: u32) -> Result<()>
    where
        R: Resource + Clone + Send + 'static,
    {
        let sequence = request.iter(per_page, JsonObject::new())?;
        let mut items = Box::pin(sequence.into_stream());
        let mut count = 0usize;
        while let Some(item) = items.try_next().await? {
            self.emit(&item.to_value())?;
            count += 1;
        }
        info!("Streamed {} items", count);
        Ok(())
    }

    fn emit(&self, value: &JsonValue) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{rendered}");
        Ok(())
    }
}
