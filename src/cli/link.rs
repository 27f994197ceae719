//! Associate/disassociate command arguments

use clap::Parser;

use super::enums::LinkCollection;

/// Arguments for 'associate' and 'disassociate'
#[derive(Parser, Debug)]
pub struct LinkArgs {
    /// Parent collection
    #[arg(value_enum)]
    pub collection: LinkCollection,

    /// Parent resource ID
    pub parent_id: i64,

    /// Related collection of the parent (e.g. admins, teams, groups)
    #[arg(value_parser = parse_relation)]
    pub relation: String,

    /// ID of the resource to link or unlink
    pub id: i64,
}

/// Relation names are single path segments
fn parse_relation(s: &str) -> Result<String, String> {
    let relation = s.trim().trim_matches('/');
    if relation.is_empty() || relation.contains('/') {
        return Err(format!("invalid relation '{}'", s));
    }
    Ok(relation.replace('-', "_"))
}
