//! Organization command handlers

use std::future::Future;

use log::debug;
use serde::Serialize;

use crate::awx::helpers::{collect_parent_results, fetch_from_parents, log_completion};
use crate::awx::traits::AwxResource;
use crate::awx::AwxClient;
use crate::cli::{to_query_params, OrgRelation, OrgResourceArgs};
use crate::error::Result;
use crate::output::{output_related, output_resources};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_status};
use crate::{Cli, Command, GetResource};

/// Run the org list command
pub async fn run_org_command(
    client: &AwxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Org(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching organizations...", cli.batch);

    let result = match args.id {
        Some(id) => {
            debug!("Fetching organization {}", id);
            client.get_organization(id).await.map(|org| vec![org])
        }
        None => {
            debug!("Fetching all organizations");
            client.list_organizations(&to_query_params(&args.params)).await
        }
    };
    finish_spinner(spinner);
    let mut organizations = result?;

    if let Some(filter) = &args.filter {
        organizations.retain(|org| org.name_contains(filter));
        debug!(
            "Filtered to {} organizations matching '{}'",
            organizations.len(),
            filter
        );
    }

    output_resources(&organizations, args.output, cli.no_header);
    Ok(())
}

/// Run the org-resource command (one related collection, many organizations)
pub async fn run_org_resource_command(
    client: &AwxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::OrgResource(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let params = &to_query_params(&args.params);

    match args.relation {
        OrgRelation::Admins => {
            list_for_orgs(cli, args, |id| client.list_organization_admins(id, params)).await
        }
        OrgRelation::Users => {
            list_for_orgs(cli, args, |id| client.list_organization_users(id, params)).await
        }
        OrgRelation::Teams => {
            list_for_orgs(cli, args, |id| client.list_organization_teams(id, params)).await
        }
        OrgRelation::Applications => {
            list_for_orgs(cli, args, |id| {
                client.list_organization_applications(id, params)
            })
            .await
        }
        OrgRelation::Credentials => {
            list_for_orgs(cli, args, |id| {
                client.list_organization_credentials(id, params)
            })
            .await
        }
        OrgRelation::Inventories => {
            list_for_orgs(cli, args, |id| {
                client.list_organization_inventories(id, params)
            })
            .await
        }
        OrgRelation::JobTemplates => {
            list_for_orgs(cli, args, |id| {
                client.list_organization_job_templates(id, params)
            })
            .await
        }
        OrgRelation::ObjectRoles => {
            list_for_orgs(cli, args, |id| {
                client.list_organization_object_roles(id, params)
            })
            .await
        }
    }
}

/// Fetch one related collection from every requested organization concurrently
///
/// Organizations that fail are reported on stderr; the rest are still
/// printed. The command fails only when no organization succeeded.
async fn list_for_orgs<T, F, Fut>(
    cli: &Cli,
    args: &OrgResourceArgs,
    fetcher: F,
) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    T: AwxResource + Serialize,
    F: Fn(i64) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let relation = args.relation.to_string();
    let spinner = create_spinner(
        &format!(
            "Fetching {} of {} organization(s)...",
            relation,
            args.org.len()
        ),
        cli.batch,
    );

    let results = fetch_from_parents(args.org.clone(), |org_id| {
        let request = fetcher(org_id);
        async move {
            request
                .await
                .map(|items| (org_id, items))
                .map_err(|e| (org_id, e))
        }
    })
    .await;

    let (mut groups, had_errors) = collect_parent_results(results, &spinner, &relation);
    finish_spinner_with_status(spinner, &groups, had_errors);
    log_completion(had_errors);

    if had_errors && groups.is_empty() {
        return Err(format!("Failed to fetch {} for any organization", relation).into());
    }

    if let Some(filter) = &args.filter {
        for (_, items) in groups.iter_mut() {
            items.retain(|item| item.name_contains(filter));
        }
    }

    output_related(&groups, "ORG", args.output, cli.no_header);
    Ok(())
}
