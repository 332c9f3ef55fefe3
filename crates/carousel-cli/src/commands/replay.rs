use std::path::Path;

use anyhow::{Context, Result};

use carousel_core::{trace, AppConfig, GestureTrace};

pub fn run(config: &AppConfig, file: &Path) -> Result<()> {
    let gesture = GestureTrace::load(file)
        .with_context(|| format!("Failed to load trace {}", file.display()))?;
    let report = trace::replay(&gesture, config)?;

    if report.metrics.disabled {
        println!(
            "Slider disabled: {} visible cells but only {} items.",
            gesture
                .slider
                .as_ref()
                .unwrap_or(&config.slider)
                .visible_cell_count,
            report.metrics.total_cell_count
        );
    }

    println!(
        "Track: {} cells, width {:.1}px, offsets [{:.1}, 0]\n",
        report.metrics.total_cell_count, report.metrics.track_width, report.metrics.end_position
    );
    println!(
        "{:>8}  {:<15} {:<9} {:>10} {:>10} {:>10}",
        "t (ms)", "event", "phase", "offset", "target", "resting"
    );

    for step in &report.steps {
        println!(
            "{:>8}  {:<15} {:<9} {:>10.1} {:>10.1} {:>10.1}",
            step.event.at_ms(),
            step.event.label(),
            format!("{:?}", step.phase),
            step.offset,
            step.target,
            step.resting_offset
        );

        if let Some(settlement) = &step.settlement {
            let inertia = settlement
                .inertia
                .map(|i| format!("{:.1}", i))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "          released at {:.1}, inertia {}, settling to {:.1}{}",
                settlement.release_offset,
                inertia,
                settlement.offset,
                if settlement.corrected { " (aligned)" } else { "" }
            );
        }
    }

    println!("\nFinal offset: {:.1}", report.final_offset);

    Ok(())
}
