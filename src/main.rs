//! awxctl - main entry point

use clap::Parser;
use log::{debug, info};

use awxctl::{
    run_link_command, run_org_command, run_org_resource_command, run_role_command,
    run_role_resource_command, run_token_command, run_user_token_command, AwxClient, AwxError,
    Cli, Command, GetResource,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting awxctl v{}", env!("CARGO_PKG_VERSION"));

    let host = cli.host.as_deref().ok_or_else(|| {
        AwxError::Config("AWX host is required (--host or AWX_HOST)".to_string())
    })?;
    debug!("Using AWX host: {}", host);

    let client = AwxClient::new(host, cli.token.clone())?;

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Org(_) => run_org_command(&client, cli).await,
            GetResource::OrgResource(_) => run_org_resource_command(&client, cli).await,
            GetResource::Role(_) => run_role_command(&client, cli).await,
            GetResource::RoleResource(_) => run_role_resource_command(&client, cli).await,
            GetResource::Token(_) => run_token_command(&client, cli).await,
            GetResource::UserToken(_) => run_user_token_command(&client, cli).await,
        },
        Command::Associate(_) | Command::Disassociate(_) => run_link_command(&client, cli).await,
    }
}
