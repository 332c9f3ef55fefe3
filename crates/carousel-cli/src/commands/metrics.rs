use anyhow::Result;

use carousel_core::{AppConfig, TrackMetrics, Transition};

pub fn run(config: &AppConfig, items: usize) -> Result<()> {
    let slider = &config.slider;
    let metrics = TrackMetrics::new(slider, items);

    println!(
        "Viewport:       {:.1}px, {} visible cells",
        slider.visible_width, slider.visible_cell_count
    );
    println!(
        "Cell:           {:.1}px + {:.1}px margin = {:.1}px",
        slider.cell_width, slider.cell_margin, metrics.full_cell_width
    );
    println!(
        "Cells:          {} total, {} rendered",
        metrics.total_cell_count, metrics.rendered_cell_count
    );
    println!("Track width:    {:.1}px", metrics.track_width);
    println!("Resting range:  [{:.1}, 0]", metrics.end_position);
    println!("Pull limit:     {:.1}px", config.pull.limit);
    println!("Free scroll:    {}", slider.free_scroll);
    println!("Transition:     {}", Transition::settle(slider).css());

    if metrics.disabled {
        println!("\nToo few items to scroll: gestures are ignored.");
    }

    Ok(())
}
