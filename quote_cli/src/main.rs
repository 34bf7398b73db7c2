//! # SolidGround Quick Quote CLI
//!
//! Terminal front end for the quoting engine: prompts for the project
//! basics, prints the estimate range, and echoes the result as JSON.

use std::io::{self, BufRead, Write};

use quote_core::pricing::{
    estimate, parse_square_footage, Complexity, EstimateInput, RateSchedule, ServiceType, Timeline,
};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn main() {
    println!("SolidGround Quick Quote - Concrete Project Estimator");
    println!("====================================================");
    println!();
    println!("Services: {}", ServiceType::ALL.map(|s| s.slug()).join(", "));
    println!();

    let raw_area = prompt_line("Project area (sq ft): ");
    let Some(area) = parse_square_footage(&raw_area) else {
        // Same behavior as the site widget: bad footage, no estimate shown.
        println!();
        println!("No estimate - enter a positive square footage to get a quote.");
        return;
    };

    let service = prompt_line("Service slug [stamped-concrete]: ");
    let service = if service.is_empty() {
        "stamped-concrete".to_string()
    } else {
        service
    };

    let complexity = Complexity::from_str_flexible(&prompt_line("Complexity (simple/standard/complex/premium) [standard]: "))
        .unwrap_or_default();
    let timeline = Timeline::from_str_flexible(&prompt_line("Timeline (urgent/standard/flexible) [standard]: "))
        .unwrap_or_default();

    let input = EstimateInput {
        service: Some(service.clone()),
        square_footage: area.value(),
        complexity,
        timeline: Some(timeline),
    };

    // Positive footage makes both schedules total, so these can't miss.
    let Some(full) = estimate(&input, RateSchedule::FullIntake) else {
        return;
    };
    let quick_input = EstimateInput {
        timeline: None,
        ..input.clone()
    };
    let Some(quick) = estimate(&quick_input, RateSchedule::QuickQuote) else {
        return;
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  PROJECT ESTIMATE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Area:       {:.0} sq ft", area.value());
    println!("  Service:    {}", service);
    println!("  Complexity: {}", complexity);
    println!("  Timeline:   {}", timeline);
    println!();
    println!("Estimate:");
    println!("  Midpoint:   {}", full.midpoint.rounded());
    println!("  Range:      {}", full.range_label());
    println!();
    println!("Quick-widget comparison (flat ${:.0}/sq ft, no timeline):",
        RateSchedule::QUICK_QUOTE_RATE.value()
    );
    println!("  Range:      {}", quick.range_label());
    println!();
    println!("═══════════════════════════════════════");
    println!("  *Rough estimate - final pricing may vary with site conditions.");
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&full) {
        println!("{}", json);
    }
}
