// ABOUTME: `steps` command - prints the effective step list

use anyhow::Result;

use super::OutputFormat;
use walkthrough::app::demo::demo_steps;
use walkthrough::config::AppConfig;

pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let steps = if config.tour.steps.is_empty() {
        demo_steps()
    } else {
        config.tour.steps.clone()
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&steps)?),
        OutputFormat::Text => {
            println!("{:<4} {:<20} {:<8} TIP", "#", "TARGET", "PLACE");
            for (index, step) in steps.iter().enumerate() {
                let (place, content) = step.tip.as_ref().map_or(("-", ""), |tip| {
                    let place = match (tip.is_above_element, tip.is_right_justified) {
                        (false, false) => "below",
                        (false, true) => "below/r",
                        (true, false) => "above",
                        (true, true) => "above/r",
                    };
                    (place, tip.content.as_str())
                });
                let target = if step.target_id.is_empty() { "<empty>" } else { step.target_id.as_str() };
                println!("{:<4} {:<20} {:<8} {}", index + 1, target, place, content);
            }
        }
    }
    Ok(())
}
