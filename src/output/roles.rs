//! Role output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{escape_csv, opt_id, print_json, print_yaml};
use crate::awx::Role;
use crate::cli::OutputFormat;

/// Serializable role for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableRole {
    id: i64,
    name: String,
    description: String,
    resource_type: String,
    resource_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_id: Option<i64>,
}

impl From<&Role> for SerializableRole {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            description: role.description.clone(),
            resource_type: role.resource_type().to_string(),
            resource_name: role.resource_name().to_string(),
            resource_id: role.summary_fields.resource_id,
        }
    }
}

/// Output roles in the specified format
pub fn output_roles(roles: &[Role], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => output_table(roles, no_header),
        OutputFormat::Csv => output_csv(roles, no_header),
        OutputFormat::Json => print_json(&serializable(roles)),
        OutputFormat::Yaml => print_yaml(&serializable(roles)),
    }
}

fn serializable(roles: &[Role]) -> Vec<SerializableRole> {
    roles.iter().map(SerializableRole::from).collect()
}

fn output_table(roles: &[Role], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["ID", "NAME", "RESOURCE TYPE", "RESOURCE", "RESOURCE ID"]);
    }

    for role in roles {
        table.add_row(vec![
            role.id.to_string(),
            role.name.clone(),
            role.resource_type().to_string(),
            role.resource_name().to_string(),
            opt_id(role.summary_fields.resource_id),
        ]);
    }

    println!("{table}");
    if !no_header {
        println!("\nTotal: {} roles", roles.len());
    }
}

fn output_csv(roles: &[Role], no_header: bool) {
    if !no_header {
        println!("id,name,resource_type,resource_name,resource_id");
    }
    for role in roles {
        println!(
            "{},{},{},{},{}",
            role.id,
            escape_csv(&role.name),
            escape_csv(role.resource_type()),
            escape_csv(role.resource_name()),
            opt_id(role.summary_fields.resource_id)
        );
    }
}
