//! Output formatting module

use std::collections::HashMap;

use serde::Serialize;

use loadplan_domain::model::{
    AllocationResult, SpareCapacity, TruckSpec, TruckTypeComparison,
};
use loadplan_domain::service::QuantityPlan;
use loadplan_types::{OutputFormat, Result};

/// Everything the calc command prints for one calculation
#[derive(Serialize)]
pub struct CalcOutput<'a> {
    pub truck_type: &'a str,
    pub truck_spec: TruckSpec,
    pub result: &'a AllocationResult,
    pub spare_capacity: SpareCapacity,
    pub suggestions: &'a [String],
}

pub fn output_result(output_format: OutputFormat, calc: &CalcOutput) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(calc)?;
        println!("{}", content);
        return Ok(());
    }

    let result = calc.result;
    println!("\nAllocation Result");
    println!("=================");
    println!(
        "Truck type:      {} ({:.1} m³ / {:.1} kg)",
        calc.truck_type, calc.truck_spec.volume_capacity, calc.truck_spec.weight_capacity
    );
    println!("Total volume:    {:.2} m³", result.total_volume);
    println!("Total weight:    {:.2} kg", result.total_weight);
    println!(
        "Trucks needed:   {} (by volume: {}, by weight: {})",
        result.trucks_needed, result.trucks_needed_by_volume, result.trucks_needed_by_weight
    );
    println!("Limiting factor: {}", result.limiting_factor);
    println!(
        "Utilization:     {:.1}% (volume {:.1}%, weight {:.1}%)",
        result.utilization_percentage, result.volume_utilization, result.weight_utilization
    );
    println!(
        "Spare capacity:  {:.2} m³ / {:.2} kg",
        calc.spare_capacity.spare_volume, calc.spare_capacity.spare_weight
    );

    if !calc.suggestions.is_empty() {
        println!("\nSuggestions:");
        for (i, suggestion) in calc.suggestions.iter().enumerate() {
            println!("  {}. {}", i + 1, suggestion);
        }
    }

    Ok(())
}

pub fn output_comparison(
    output_format: OutputFormat,
    comparisons: &HashMap<String, TruckTypeComparison>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(comparisons)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nTruck Type Comparison");
    println!("=====================");
    println!(
        "{:<12} {:>7} {:>8} {:>12} {:>12}",
        "Type", "Trucks", "Util%", "Volume cap", "Weight cap"
    );
    println!("{}", "-".repeat(56));

    let mut names: Vec<_> = comparisons.keys().collect();
    names.sort();
    for name in names {
        let comparison = &comparisons[name];
        println!(
            "{:<12} {:>7} {:>7.1}% {:>9.1} m³ {:>9.1} kg",
            name,
            comparison.trucks_needed,
            comparison.utilization,
            comparison.total_volume_capacity,
            comparison.total_weight_capacity
        );
    }

    Ok(())
}

pub fn output_plan(output_format: OutputFormat, plan: &QuantityPlan) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(plan)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nQuantity Recommendations");
    println!("========================");
    println!("Target utilization:  {:.1}%", plan.target_utilization);
    println!("Current utilization: {:.1}%", plan.current_utilization);
    println!("Trucks (estimate):   {}", plan.trucks_needed);

    if plan.recommendations.is_empty() {
        println!("\nNo items have headroom for additional units.");
        return Ok(());
    }

    println!();
    println!(
        "{:<24} {:>9} {:>12} {:>10}",
        "Item", "Current", "Additional", "New total"
    );
    println!("{}", "-".repeat(58));

    let mut names: Vec<_> = plan.recommendations.keys().collect();
    names.sort();
    for name in names {
        let rec = &plan.recommendations[name];
        println!(
            "{:<24} {:>9} {:>12} {:>10}",
            truncate(name, 24),
            rec.current_quantity,
            rec.recommended_additional,
            rec.new_total
        );
    }

    Ok(())
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
