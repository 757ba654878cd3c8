//! Command handlers

use std::path::PathBuf;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use loadplan_app::config::Config;
use loadplan_app::items_csv::load_items_from_csv;
use loadplan_app::query_service;
use loadplan_app::repository::{open_history_store, open_template_store};
use loadplan_domain::model::{CalculationRecord, LineItem, TruckSpec};
use loadplan_domain::service::advisor::{DEFAULT_TARGET_UTILIZATION, MODERATE_UTILIZATION_PCT};
use loadplan_domain::service::{compare_truck_types, Advisor, Allocator};
use loadplan_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands, TemplateAction};
use crate::output::{self, CalcOutput};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Calc {
            items,
            template,
            destination,
            truck,
            truck_volume,
            truck_weight,
            save,
            seed,
            no_suggestions,
        } => cmd_calc(
            &config,
            output_format,
            cli.verbose,
            items.clone(),
            template.clone(),
            destination.clone(),
            truck.clone(),
            *truck_volume,
            *truck_weight,
            *save,
            *seed,
            *no_suggestions,
        ),

        Commands::Compare { items } => cmd_compare(&config, output_format, items.clone()),

        Commands::Recommend {
            items,
            truck,
            target,
        } => cmd_recommend(&config, output_format, items.clone(), truck.clone(), *target),

        Commands::History { limit, clear } => cmd_history(&config, output_format, *limit, *clear),

        Commands::Stats => cmd_stats(&config, output_format),

        Commands::Template { action } => cmd_template(&config, output_format, action),

        Commands::Config {
            show,
            set_output,
            set_default_truck,
            set_data_dir,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            set_default_truck.clone(),
            set_data_dir.clone(),
            *reset,
        ),
    }
}

/// Resolve the line items from a CSV path or a saved template
fn resolve_items(
    config: &Config,
    items_path: Option<PathBuf>,
    template: Option<String>,
) -> Result<Vec<LineItem>> {
    match (items_path, template) {
        (Some(path), None) => load_items_from_csv(path),
        (None, Some(name)) => {
            let store = open_template_store(config)?;
            Ok(query_service::load_template(&store, &name)?.items)
        }
        (Some(_), Some(_)) => Err(Error::InvalidInput(
            "pass either an items CSV or --template, not both".to_string(),
        )),
        (None, None) => Err(Error::InvalidInput(
            "an items CSV or --template is required".to_string(),
        )),
    }
}

/// Resolve the truck spec from capacity overrides or a named type
fn resolve_truck(
    config: &Config,
    truck: Option<String>,
    truck_volume: Option<f64>,
    truck_weight: Option<f64>,
) -> Result<(String, TruckSpec)> {
    match (truck_volume, truck_weight) {
        (Some(volume), Some(weight)) => {
            if truck.is_some() {
                return Err(Error::InvalidInput(
                    "--truck cannot be combined with --truck-volume/--truck-weight".to_string(),
                ));
            }
            Ok(("Custom".to_string(), TruckSpec::new(volume, weight)?))
        }
        (None, None) => {
            config.truck_spec(truck.as_deref().unwrap_or(&config.default_truck_type))
        }
        _ => Err(Error::InvalidConfiguration(
            "--truck-volume and --truck-weight must be given together".to_string(),
        )),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_calc(
    config: &Config,
    output_format: OutputFormat,
    verbose: bool,
    items_path: Option<PathBuf>,
    template: Option<String>,
    destination: Option<String>,
    truck: Option<String>,
    truck_volume: Option<f64>,
    truck_weight: Option<f64>,
    save: bool,
    seed: Option<u64>,
    no_suggestions: bool,
) -> Result<()> {
    let items = resolve_items(config, items_path, template)?;
    let (truck_type, spec) = resolve_truck(config, truck, truck_volume, truck_weight)?;

    if verbose {
        eprintln!(
            "Calculating for {} line item(s) on truck type '{}'",
            items.len(),
            truck_type
        );
    }

    let allocator = Allocator::new(spec)?;
    let result = allocator.compute_requirements(&items)?;
    let spare_capacity = allocator.spare_capacity(&result);

    // Suggestions are only worth showing below 70% utilization
    let suggestions = if !no_suggestions
        && result.trucks_needed > 0
        && result.utilization_percentage < MODERATE_UTILIZATION_PCT
    {
        let advisor = Advisor::new(spec)?;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        advisor.generate_suggestions(&result, &items, &mut rng)
    } else {
        Vec::new()
    };

    output::output_result(
        output_format,
        &CalcOutput {
            truck_type: &truck_type,
            truck_spec: spec,
            result: &result,
            spare_capacity,
            suggestions: &suggestions,
        },
    )?;

    if save {
        let destination = destination.ok_or_else(|| {
            Error::InvalidInput("--destination is required with --save".to_string())
        })?;
        let mut store = open_history_store(config)?;
        store.add_record(CalculationRecord {
            destination,
            truck_type,
            truck_spec: spec,
            items,
            result,
            timestamp: Utc::now(),
        })?;
        println!("\nSaved to history ({} entries)", store.count());
    }

    Ok(())
}

fn cmd_compare(config: &Config, output_format: OutputFormat, items_path: PathBuf) -> Result<()> {
    let items = load_items_from_csv(items_path)?;
    let comparisons = compare_truck_types(&items, &config.truck_types)?;
    output::output_comparison(output_format, &comparisons)
}

fn cmd_recommend(
    config: &Config,
    output_format: OutputFormat,
    items_path: PathBuf,
    truck: Option<String>,
    target: Option<f64>,
) -> Result<()> {
    let target = target.unwrap_or(DEFAULT_TARGET_UTILIZATION);
    if !target.is_finite() || target <= 0.0 || target > 100.0 {
        return Err(Error::InvalidInput(format!(
            "target utilization must be in (0, 100], got {}",
            target
        )));
    }

    let items = load_items_from_csv(items_path)?;
    let (_, spec) = resolve_truck(config, truck, None, None)?;
    let advisor = Advisor::new(spec)?;
    let plan = advisor.recommend_optimal_quantities(&items, target);
    output::output_plan(output_format, &plan)
}

fn cmd_history(
    config: &Config,
    output_format: OutputFormat,
    limit: usize,
    clear: bool,
) -> Result<()> {
    let mut store = open_history_store(config)?;

    if clear {
        query_service::clear_history(&mut store)?;
        println!("Calculation history cleared");
        return Ok(());
    }

    let entries = query_service::recent_calculations(&store, limit)?;

    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&entries)?;
        println!("{}", content);
        return Ok(());
    }

    println!("Calculation History");
    println!("===================");
    println!("Total entries: {}", store.count());
    println!();

    if entries.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    println!(
        "{:<20} {:<10} {:>7} {:>7} {:>12}",
        "Destination", "Truck", "Trucks", "Util%", "Date"
    );
    println!("{}", "-".repeat(62));

    for entry in &entries {
        println!(
            "{:<20} {:<10} {:>7} {:>6.1}% {:>12}",
            output::truncate(&entry.destination, 20),
            output::truncate(&entry.truck_type, 10),
            entry.result.trucks_needed,
            entry.result.utilization_percentage,
            entry.timestamp.format("%m/%d %H:%M")
        );
    }

    Ok(())
}

fn cmd_stats(config: &Config, output_format: OutputFormat) -> Result<()> {
    let store = open_history_store(config)?;
    let summary = store.summary();

    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&summary)?;
        println!("{}", content);
        return Ok(());
    }

    if summary.total_calculations == 0 {
        println!("No calculations stored.");
        println!("Use 'loadplan calc <items.csv> --save -d <destination>' to build history.");
        return Ok(());
    }

    println!("History Statistics");
    println!("==================");
    println!("Calculations:         {}", summary.total_calculations);
    println!("Avg utilization:      {:.1}%", summary.avg_utilization);
    println!("Avg trucks needed:    {:.2}", summary.avg_trucks_needed);
    println!("Total volume shipped: {:.2} m³", summary.total_volume_shipped);
    println!("Total weight shipped: {:.2} kg", summary.total_weight_shipped);

    Ok(())
}

fn cmd_template(
    config: &Config,
    output_format: OutputFormat,
    action: &TemplateAction,
) -> Result<()> {
    match action {
        TemplateAction::Save { name, items } => {
            let items = load_items_from_csv(items)?;
            if items.is_empty() {
                return Err(Error::InvalidInput(
                    "no items to save as template".to_string(),
                ));
            }
            let mut store = open_template_store(config)?;
            let count = items.len();
            store.save_template(name, items)?;
            println!("Template '{}' saved ({} item(s))", name, count);
            Ok(())
        }

        TemplateAction::List => {
            let store = open_template_store(config)?;
            let templates = query_service::list_templates(&store)?;

            if output_format == OutputFormat::Json {
                let content = serde_json::to_string_pretty(&templates)?;
                println!("{}", content);
                return Ok(());
            }

            if templates.is_empty() {
                println!("No saved templates found.");
                return Ok(());
            }

            println!(
                "{:<24} {:>7} {:>14}",
                "Template", "Items", "Updated"
            );
            println!("{}", "-".repeat(48));
            for template in &templates {
                println!(
                    "{:<24} {:>7} {:>14}",
                    output::truncate(&template.template_name, 24),
                    template.items.len(),
                    template.updated_at.format("%m/%d %H:%M")
                );
            }
            Ok(())
        }

        TemplateAction::Show { name } => {
            let store = open_template_store(config)?;
            let template = query_service::load_template(&store, name)?;

            if output_format == OutputFormat::Json {
                let content = serde_json::to_string_pretty(&template)?;
                println!("{}", content);
                return Ok(());
            }

            println!("Template: {}", template.template_name);
            println!();
            println!(
                "{:<24} {:>9} {:>12} {:>12}",
                "Item", "Quantity", "Vol/unit", "Wt/unit"
            );
            println!("{}", "-".repeat(60));
            for item in &template.items {
                println!(
                    "{:<24} {:>9} {:>9.3} m³ {:>9.2} kg",
                    output::truncate(&item.name, 24),
                    item.quantity,
                    item.volume_per_unit,
                    item.weight_per_unit
                );
            }
            Ok(())
        }

        TemplateAction::Delete { name } => {
            let mut store = open_template_store(config)?;
            query_service::delete_template(&mut store, name)?;
            println!("Template '{}' deleted", name);
            Ok(())
        }
    }
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_default_truck: Option<String>,
    set_data_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(truck_type) = set_default_truck {
        // Store the canonical catalog name
        let (name, _) = config.truck_spec(&truck_type)?;
        config.default_truck_type = name;
        modified = true;
    }

    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_truck_named() {
        let config = Config::default();
        let (name, spec) =
            resolve_truck(&config, Some("large".to_string()), None, None).unwrap();
        assert_eq!(name, "Large");
        assert!((spec.volume_capacity - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_truck_falls_back_to_default() {
        let config = Config::default();
        let (name, _) = resolve_truck(&config, None, None, None).unwrap();
        assert_eq!(name, "Medium");
    }

    #[test]
    fn test_resolve_truck_override() {
        let config = Config::default();
        let (name, spec) = resolve_truck(&config, None, Some(25.0), Some(5000.0)).unwrap();
        assert_eq!(name, "Custom");
        assert!((spec.weight_capacity - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_truck_rejects_name_with_override() {
        let config = Config::default();
        let result = resolve_truck(&config, Some("Large".to_string()), Some(25.0), Some(5000.0));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_resolve_truck_requires_both_overrides() {
        let config = Config::default();
        let result = resolve_truck(&config, None, Some(25.0), None);
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }
}
