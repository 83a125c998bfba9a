//! Interactive analysis command.
//!
//! Walks the user through criteria, weights, variants, and ratings with
//! prompts, then scores and renders the result table. Weights can be
//! adjusted and the analysis re-run without re-entering ratings.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use crate::commands::output::render_table;
use crate::config::Config;
use crate::session::Session;

/// Options for the run command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Number of variants, skipping the prompt
    pub variants: Option<usize>,
}

/// Execute the run command
pub fn execute_run(options: RunOptions, config: Config) -> Result<()> {
    println!(
        "{} Make-or-Buy Utility Value Analysis\n",
        style("→").cyan()
    );

    let mut session = Session::new(config);

    collect_criteria(&mut session)?;
    if session.criteria().is_empty() {
        println!(
            "{} No criteria defined; every utility will be 0",
            style("⚠").yellow()
        );
    }

    collect_variants(&mut session, options.variants)?;

    loop {
        let results = session.run();

        println!("\n{}", style("Utility value analysis results").bold());
        println!("{}", render_table(session.criteria(), &results));

        let zero_weights =
            !session.criteria().is_empty() && session.criteria().iter().all(|c| c.weight == 0.0);
        if zero_weights {
            println!(
                "{} All weights are zero, so weighted scores are zero",
                style("⚠").yellow()
            );
        }

        let rerun = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Adjust weights and re-run?")
            .default(false)
            .interact()?;
        if !rerun {
            break;
        }
        adjust_weights(&mut session)?;
    }

    Ok(())
}

fn collect_criteria(session: &mut Session) -> Result<()> {
    println!("{}", style("Criteria and weights").bold());

    loop {
        let mut items: Vec<String> = session
            .config()
            .predefined_criteria
            .iter()
            .filter(|name| !session.criteria().iter().any(|c| c.name == **name))
            .cloned()
            .collect();
        items.push("Custom criterion...".to_string());
        items.push("Done adding criteria".to_string());
        let custom_index = items.len() - 2;
        let done_index = items.len() - 1;

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Add criterion")
            .items(&items)
            .default(0)
            .interact()?;

        if selection == done_index {
            break;
        }

        let name = if selection == custom_index {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt("Criterion name")
                .interact_text()?
        } else {
            items[selection].clone()
        };

        if let Err(e) = session.add_criterion(&name) {
            println!("{} {}", style("✗").red(), e);
            continue;
        }

        let index = session.criteria().len() - 1;
        let weight = prompt_number(
            &format!("{} weight", name.trim()),
            session.config().weight_max / 2.0,
            session.config().weight_max,
        )?;
        session.set_weight(index, weight)?;
    }

    if !session.criteria().is_empty() {
        let remove = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Remove any criteria?")
            .default(false)
            .interact()?;
        if remove {
            let names: Vec<String> = session.criteria().iter().map(|c| c.name.clone()).collect();
            let selected = MultiSelect::with_theme(&ColorfulTheme::default())
                .with_prompt("Select criteria to remove")
                .items(&names)
                .interact()?;
            session.remove_criteria(&selected)?;
        }
    }

    Ok(())
}

fn collect_variants(session: &mut Session, preset_count: Option<usize>) -> Result<()> {
    println!("\n{}", style("Variants and ratings").bold());

    let max = session.config().max_variants;
    let count = match preset_count {
        Some(n) => n,
        None => Input::<usize>::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Number of variants (1 to {})", max))
            .default(2)
            .validate_with(move |n: &usize| {
                if (1..=max).contains(n) {
                    Ok(())
                } else {
                    Err(format!("enter a value between 1 and {}", max))
                }
            })
            .interact_text()?,
    };
    session.set_variant_count(count)?;

    for index in 0..count {
        let name = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Name of variant {}", index + 1))
            .default(format!("Variant {}", index + 1))
            .validate_with(|s: &String| {
                if s.trim().is_empty() {
                    Err("name must not be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        session.rename_variant(index, &name)?;
    }

    let criteria: Vec<String> = session.criteria().iter().map(|c| c.name.clone()).collect();
    for index in 0..count {
        let variant_name = session.variants()[index].name.clone();
        if !criteria.is_empty() {
            println!("\nRatings for {}", style(&variant_name).cyan());
        }
        for criterion in &criteria {
            let rating = prompt_number(
                &format!("{} rating for {}", criterion, variant_name),
                session.config().default_rating,
                session.config().rating_max,
            )?;
            session.set_rating(index, criterion, rating)?;
        }
    }

    Ok(())
}

fn adjust_weights(session: &mut Session) -> Result<()> {
    let current: Vec<(String, f64)> = session
        .criteria()
        .iter()
        .map(|c| (c.name.clone(), c.weight))
        .collect();

    for (index, (name, weight)) in current.into_iter().enumerate() {
        let new_weight = prompt_number(
            &format!("{} weight", name),
            weight,
            session.config().weight_max,
        )?;
        session.set_weight(index, new_weight)?;
    }
    Ok(())
}

/// Prompt for a number in 0..=max with a default value.
fn prompt_number(prompt: &str, default: f64, max: f64) -> Result<f64> {
    let value = Input::<f64>::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} (0 to {})", prompt, max))
        .default(default)
        .validate_with(move |v: &f64| {
            if (0.0..=max).contains(v) {
                Ok(())
            } else {
                Err(format!("enter a value between 0 and {}", max))
            }
        })
        .interact_text()?;
    Ok(value)
}
