//! Generic output for AWX resources
//!
//! Table and CSV show the fields every resource shares (id, name,
//! description); JSON and YAML serialize the full records.

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{escape_csv, print_json, print_yaml};
use crate::awx::AwxResource;
use crate::cli::OutputFormat;

/// Resource tagged with the parent it was listed under
#[derive(Serialize)]
struct RelatedEntry<'a, T> {
    parent_id: i64,
    #[serde(flatten)]
    resource: &'a T,
}

/// Output a flat list of resources
pub fn output_resources<T>(items: &[T], format: OutputFormat, no_header: bool)
where
    T: AwxResource + Serialize,
{
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["ID", "NAME", "DESCRIPTION"]);
            }
            for item in items {
                table.add_row(vec![item.id().to_string().as_str(), item.name(), item.description()]);
            }
            println!("{table}");
            if !no_header {
                println!("\nTotal: {}", items.len());
            }
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("id,name,description");
            }
            for item in items {
                println!(
                    "{},{},{}",
                    item.id(),
                    escape_csv(item.name()),
                    escape_csv(item.description())
                );
            }
        }
        OutputFormat::Json => print_json(items),
        OutputFormat::Yaml => print_yaml(items),
    }
}

/// Output resources grouped by the parent they were listed under
///
/// `parent_label` names the parent column (e.g. "ORG").
pub fn output_related<T>(
    groups: &[(i64, Vec<T>)],
    parent_label: &str,
    format: OutputFormat,
    no_header: bool,
) where
    T: AwxResource + Serialize,
{
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec![parent_label, "ID", "NAME", "DESCRIPTION"]);
            }
            let mut total = 0;
            for (parent_id, items) in groups {
                for item in items {
                    total += 1;
                    table.add_row(vec![
                        parent_id.to_string().as_str(),
                        item.id().to_string().as_str(),
                        item.name(),
                        item.description(),
                    ]);
                }
            }
            println!("{table}");
            if !no_header {
                println!("\nTotal: {}", total);
            }
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("{},id,name,description", parent_label.to_lowercase());
            }
            for (parent_id, items) in groups {
                for item in items {
                    println!(
                        "{},{},{},{}",
                        parent_id,
                        item.id(),
                        escape_csv(item.name()),
                        escape_csv(item.description())
                    );
                }
            }
        }
        OutputFormat::Json => print_json(&related_entries(groups)),
        OutputFormat::Yaml => print_yaml(&related_entries(groups)),
    }
}

fn related_entries<T>(groups: &[(i64, Vec<T>)]) -> Vec<RelatedEntry<'_, T>> {
    groups
        .iter()
        .flat_map(|(parent_id, items)| {
            items.iter().map(move |resource| RelatedEntry {
                parent_id: *parent_id,
                resource,
            })
        })
        .collect()
}
