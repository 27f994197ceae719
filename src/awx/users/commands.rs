//! User token command handlers

use log::debug;

use crate::awx::tokens::retain_active;
use crate::awx::AwxClient;
use crate::cli::{to_query_params, TokenKind};
use crate::output::output_tokens;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, GetResource};

/// Run the user-token command
pub async fn run_user_token_command(
    client: &AwxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::UserToken(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let params = to_query_params(&args.params);
    let user = args.user;
    debug!("Fetching {} tokens of user {}", args.kind, user);

    let spinner = create_spinner(
        &format!("Fetching {} tokens of user {}...", args.kind, user),
        cli.batch,
    );

    let result = match (args.kind, args.id) {
        (TokenKind::Regular, Some(id)) => client
            .get_user_token(user, id, &params)
            .await
            .map(|t| vec![t]),
        (TokenKind::Regular, None) => client.list_user_tokens(user, &params).await,
        (TokenKind::Authorized, Some(id)) => client
            .get_user_authorized_token(user, id, &params)
            .await
            .map(|t| vec![t]),
        (TokenKind::Authorized, None) => client.list_user_authorized_tokens(user, &params).await,
        (TokenKind::Personal, Some(id)) => client
            .get_user_personal_token(user, id, &params)
            .await
            .map(|t| vec![t]),
        (TokenKind::Personal, None) => client.list_user_personal_tokens(user, &params).await,
    };
    finish_spinner(spinner);
    let mut tokens = result?;

    if args.active {
        retain_active(&mut tokens);
    }

    output_tokens(&tokens, args.output, cli.no_header);
    Ok(())
}
