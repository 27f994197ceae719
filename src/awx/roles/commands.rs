//! Role command handlers

use log::debug;
use serde::Serialize;

use crate::awx::traits::AwxResource;
use crate::awx::AwxClient;
use crate::cli::{to_query_params, OutputFormat, RoleRelation};
use crate::output::{output_resources, output_roles};
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, GetResource};

/// Run the role list command
pub async fn run_role_command(
    client: &AwxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Role(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let params = to_query_params(&args.params);
    let spinner = create_spinner("Fetching roles...", cli.batch);

    let result = match args.id {
        Some(id) => client.get_role(id, &params).await.map(|role| vec![role]),
        None => client.list_roles(&params).await,
    };
    finish_spinner(spinner);
    let mut roles = result?;

    if let Some(filter) = &args.filter {
        roles.retain(|role| role.name_contains(filter));
        debug!("Filtered to {} roles matching '{}'", roles.len(), filter);
    }

    output_roles(&roles, args.output, cli.no_header);
    Ok(())
}

/// Run the role-resource command
pub async fn run_role_resource_command(
    client: &AwxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::RoleResource(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let params = to_query_params(&args.params);
    let spinner = create_spinner(
        &format!("Fetching {} of role {}...", args.relation, args.role),
        cli.batch,
    );
    let filter = args.filter.as_deref();

    match args.relation {
        RoleRelation::Teams => {
            let result = client.list_role_teams(args.role, &params).await;
            finish_spinner(spinner);
            output_filtered(result?, filter, args.output, cli.no_header);
        }
        RoleRelation::Users => {
            let result = client.list_role_users(args.role, &params).await;
            finish_spinner(spinner);
            output_filtered(result?, filter, args.output, cli.no_header);
        }
        RoleRelation::JobTemplates => {
            let result = client.list_role_job_templates(args.role, &params).await;
            finish_spinner(spinner);
            output_filtered(result?, filter, args.output, cli.no_header);
        }
    }
    Ok(())
}

fn output_filtered<T>(mut items: Vec<T>, filter: Option<&str>, format: OutputFormat, no_header: bool)
where
    T: AwxResource + Serialize,
{
    if let Some(filter) = filter {
        items.retain(|item| item.name_contains(filter));
    }
    output_resources(&items, format, no_header);
}
