//! Associate/disassociate command handler

use log::debug;

use crate::awx::AwxClient;
use crate::cli::{Cli, Command, LinkCollection};
use crate::config::api::related;
use crate::ui::{create_spinner, finish_spinner};

use super::{AssociationRequest, LinkMode};

/// Run the associate or disassociate command
pub async fn run_link_command(
    client: &AwxClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (args, mode) = match &cli.command {
        Command::Associate(args) => (args, LinkMode::Associate),
        Command::Disassociate(args) => (args, LinkMode::Disassociate),
        _ => unreachable!(),
    };

    let collection = args.collection.as_path();
    debug!(
        "{} {} {} on {} {}",
        mode, args.relation, args.id, collection, args.parent_id
    );

    let spinner = create_spinner(
        &format!("Updating {} of {} {}...", args.relation, collection, args.parent_id),
        cli.batch,
    );

    // Host/group links echo the host back; report it when present
    if args.collection == LinkCollection::Hosts && args.relation == related::GROUPS {
        let payload = AssociationRequest { id: args.id, mode }.into_payload();
        let result = match mode {
            LinkMode::Associate => client.associate_host_group(args.parent_id, payload).await,
            LinkMode::Disassociate => {
                client
                    .disassociate_host_group(args.parent_id, payload)
                    .await
            }
        };
        finish_spinner(spinner);
        if let Some(host) = result? {
            debug!("Server returned host {} ({})", host.id, host.name);
        }
    } else {
        let result = client
            .link_resource(collection, args.parent_id, &args.relation, args.id, mode)
            .await;
        finish_spinner(spinner);
        result?;
    }

    let (verb, preposition) = match mode {
        LinkMode::Associate => ("Associated", "with"),
        LinkMode::Disassociate => ("Disassociated", "from"),
    };
    println!(
        "{} {} {} {} {} {}",
        verb, args.relation, args.id, preposition, collection, args.parent_id
    );
    Ok(())
}
