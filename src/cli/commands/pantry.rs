use oasis_core::{storage::OasisStorage, PantryFilter, PantryService};
use oasis_domain::{Displayable, FoodPantry};

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "pantries",
            "List nearby food pantries",
            "pantries [all|open|walk-in]",
            cmd_pantries,
        ),
        CommandEntry::new(
            "pantry",
            "Show hours, inventory and directions for one pantry",
            "pantry <id>",
            cmd_pantry,
        ),
    ]
}

fn cmd_pantries(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = match args {
        [] => PantryFilter::default(),
        [value] => value.parse::<PantryFilter>()?,
        _ => {
            return Err(CommandError::InvalidArguments(
                "Usage: pantries [all|open|walk-in]".into(),
            ))
        }
    };

    let pantries = context.storage.load_pantries()?;
    let matches = PantryService::filter(&pantries, filter);

    output::section(format!("Food Pantries near {}", context.config.location));
    if matches.is_empty() {
        output::line("  No pantries match this filter.");
    }
    for pantry in &matches {
        output::line(format!("  {:>3}. {}", pantry.id, pantry.display_label()));
        output::line(format!("       {}", pantry.full_address()));
        output::line(format!("       {}", pantry.phone));
    }
    output::hint(format!(
        "Showing {} of {} pantries ({filter}). Use `pantry <id>` for details.",
        matches.len(),
        pantries.len()
    ));
    Ok(())
}

fn cmd_pantry(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [id] = args else {
        return Err(CommandError::InvalidArguments("Usage: pantry <id>".into()));
    };
    let pantries = context.storage.load_pantries()?;
    let pantry = PantryService::find(&pantries, id)?;
    print_pantry(pantry);
    Ok(())
}

fn print_pantry(pantry: &FoodPantry) {
    output::section(&pantry.name);
    let status = if pantry.open_now {
        "Open now"
    } else {
        "Closed"
    };
    output::fields(&[
        ("Status", format!("{status}, ~{} min wait", pantry.wait_time)),
        ("Address", pantry.full_address()),
        ("Phone", pantry.phone.clone()),
        ("Call", PantryService::dial_uri(&pantry.phone)),
        ("Directions", PantryService::directions_url(pantry)),
    ]);

    output::section("Hours");
    let hours: Vec<(&str, String)> = pantry
        .hours
        .entries()
        .into_iter()
        .map(|(day, hours)| (day, hours.to_string()))
        .collect();
    if hours.is_empty() {
        output::line("  Call for hours.");
    }
    output::fields(&hours);

    output::section("Current Inventory");
    let inventory: Vec<(&str, String)> = pantry
        .inventory
        .entries()
        .into_iter()
        .map(|(label, level)| (label, format!("{} {}", level.dots(), level)))
        .collect();
    output::fields(&inventory);

    list_section("Services", &pantry.services);
    list_section("What to Bring", &pantry.requirements);

    let access = pantry.accessibility;
    let features: Vec<String> = [
        (access.wheelchair_accessible, "Wheelchair accessible"),
        (access.parking, "Parking available"),
        (access.public_transit, "Near public transit"),
    ]
    .into_iter()
    .filter(|(available, _)| *available)
    .map(|(_, label)| label.to_string())
    .collect();
    list_section("Accessibility", &features);
}

fn list_section(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    output::section(title);
    for item in items {
        output::line(format!("  * {item}"));
    }
}
