//! Token command handlers

use chrono::Utc;
use log::debug;

use crate::awx::AwxClient;
use crate::cli::to_query_params;
use crate::output::output_tokens;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, GetResource};

use super::Token;

/// Run the token list command
pub async fn run_token_command(
    client: &AwxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Token(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let params = to_query_params(&args.params);
    let spinner = create_spinner("Fetching tokens...", cli.batch);

    let result = match args.id {
        Some(id) => client.get_token(id, &params).await.map(|t| vec![t]),
        None => client.list_tokens(&params).await,
    };
    finish_spinner(spinner);
    let mut tokens = result?;

    if args.active {
        retain_active(&mut tokens);
    }

    output_tokens(&tokens, args.output, cli.no_header);
    Ok(())
}

/// Drop tokens that expired already
pub(crate) fn retain_active(tokens: &mut Vec<Token>) {
    let now = Utc::now();
    let before = tokens.len();
    tokens.retain(|t| !t.is_expired(now));
    debug!("Dropped {} expired tokens", before - tokens.len());
}
