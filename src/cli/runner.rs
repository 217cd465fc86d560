//! CLI runner - executes commands

use crate::api::device_types::{self, DeviceTypeFilter};
use crate::api::devices::{self, DeviceFilter};
use crate::api::rules::{self, RuleFilter, RuleScope};
use crate::api::tags;
use crate::cli::commands::{
    Cli, Commands, DeviceCommands, DeviceTypeCommands, OutputFormat, PageArgs, RuleCommands,
    TagCommands,
};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::Page;
use serde::Serialize;
use std::time::Instant;
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

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = HttpClient::with_config(self.client_config()?.http_config())?;
        debug!(base_url = client.base_url(), "client ready");
        let started = Instant::now();

        match &self.cli.command {
            Commands::Rules(command) => self.rules(&client, command).await?,
            Commands::Devices(command) => self.devices(&client, command).await?,
            Commands::DeviceTypes(command) => self.device_types(&client, command).await?,
            Commands::Tags(command) => self.tags(&client, command).await?,
        }

        info!(elapsed_ms = started.elapsed().as_millis() as u64, "done");
        Ok(())
    }

    /// Config file (or defaults) with command-line overrides applied
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(token) = &self.cli.token {
            config.token = Some(token.clone());
        }

        config.validate()?;
        if config.token.is_none() {
            return Err(Error::config(
                "no access token, pass --token or set ARTIK_TOKEN",
            ));
        }
        Ok(config)
    }

    async fn rules(&self, client: &HttpClient, command: &RuleCommands) -> Result<()> {
        match command {
            RuleCommands::Get { id } => self.output(&rules::get(client, id).await?),
            RuleCommands::List {
                uid,
                page,
                scope,
                exclude_disabled,
            } => {
                let filter = RuleFilter {
                    scope: scope.parse::<RuleScope>()?,
                    exclude_disabled: *exclude_disabled,
                };
                let result = if page.all {
                    rules::list_all(client, uid, &filter).await?
                } else {
                    rules::list(client, uid, page.count, page.offset, &filter).await?
                };
                self.output_page(&result, page)
            }
        }
    }

    async fn devices(&self, client: &HttpClient, command: &DeviceCommands) -> Result<()> {
        match command {
            DeviceCommands::Get { id, properties } => {
                self.output(&devices::get(client, id, *properties).await?)
            }
            DeviceCommands::List {
                uid,
                page,
                include_shared,
            } => {
                let filter = DeviceFilter {
                    include_shared_devices: *include_shared,
                    ..DeviceFilter::default()
                };
                let result = if page.all {
                    devices::list_all(client, uid, &filter).await?
                } else {
                    devices::list(client, uid, page.count, page.offset, &filter).await?
                };
                self.output_page(&result, page)
            }
        }
    }

    async fn device_types(&self, client: &HttpClient, command: &DeviceTypeCommands) -> Result<()> {
        match command {
            DeviceTypeCommands::List { name, tags, page } => {
                let filter = DeviceTypeFilter {
                    name: name.clone(),
                    tags: tags.clone(),
                };
                let result = if page.all {
                    device_types::list_all(client, &filter).await?
                } else {
                    device_types::list(client, page.count, page.offset, &filter).await?
                };
                self.output_page(&result, page)
            }
        }
    }

    async fn tags(&self, client: &HttpClient, command: &TagCommands) -> Result<()> {
        let result = match command {
            TagCommands::List => tags::list(client).await?,
            TagCommands::Categories => tags::categories(client).await?,
        };
        self.output(&result)
    }

    fn output_page<T: Serialize>(&self, page: &Page<T>, args: &PageArgs) -> Result<()> {
        info!(
            received = page.len(),
            total = page.total(),
            all = args.all,
            "listed"
        );
        self.output(page)
    }

    fn output<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{rendered}");
        Ok(())
    }
}
