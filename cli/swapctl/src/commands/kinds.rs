//! Identifier kind catalog.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use swapsafe_identifiers::IdentifierKind;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct KindsCommand {}

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,

    #[tabled(rename = "Label")]
    label: &'static str,

    #[tabled(rename = "Max")]
    max_input_length: usize,

    #[tabled(rename = "Example")]
    example: &'static str,

    #[tabled(rename = "Where to find it")]
    hint: &'static str,
}

fn rows() -> Vec<KindRow> {
    IdentifierKind::ALL
        .iter()
        .map(|kind| {
            let info = kind.info();
            KindRow {
                kind: kind.as_str(),
                label: info.label,
                max_input_length: info.max_input_length,
                example: info.example,
                hint: info.hint,
            }
        })
        .collect()
}

impl KindsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        print_output(&rows(), ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_all_kinds() {
        let kinds: Vec<_> = rows().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, ["imei", "vin", "isbn", "mac", "serial"]);
    }
}
