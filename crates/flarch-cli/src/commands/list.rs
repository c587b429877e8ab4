//! Implementation of the `flarch list` command.

use flarch_core::application::{ArchitectureInfo, architectures};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let catalog = architectures();

    // `--output-format json` wins over the list-specific format.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Supported Architectures:")?;
            for line in table_rows(&catalog) {
                output.print(&line)?;
            }
        }

        // Data formats bypass quiet mode: they are the command's result.
        ListFormat::Json => output.json(&catalog)?,

        ListFormat::List => {
            for info in &catalog {
                println!("{}", info.slug);
            }
        }

        ListFormat::Csv => {
            for line in csv_rows(&catalog) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn packages(info: &ArchitectureInfo) -> String {
    let mut packages = if info.packages.is_empty() {
        "-".to_string()
    } else {
        info.packages.join(" ")
    };
    if info.codegen {
        packages.push_str(" (+ build_runner)");
    }
    packages
}

fn table_rows(catalog: &[ArchitectureInfo]) -> Vec<String> {
    let slug_width = catalog.iter().map(|i| i.slug.len()).max().unwrap_or(0);
    let label_width = catalog.iter().map(|i| i.label.len()).max().unwrap_or(0);

    catalog
        .iter()
        .map(|info| {
            format!(
                "  {:<slug_width$}  {:<label_width$}  {}",
                info.slug,
                info.label,
                packages(info)
            )
        })
        .collect()
}

fn csv_rows(catalog: &[ArchitectureInfo]) -> Vec<String> {
    let mut rows = vec!["slug,label,packages,codegen,files".to_string()];
    rows.extend(catalog.iter().map(|info| {
        format!(
            "{},\"{}\",{},{},{}",
            info.slug,
            info.label,
            info.packages.join(" "),
            info.codegen,
            info.files.len()
        )
    }));
    rows
}
