use oasis_core::{storage::OasisStorage, ShutdownService};
use oasis_domain::{ChecklistItem, Displayable, RiskLevel, ShutdownRisk};
use tracing::info;

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "shutdown",
            "Show government shutdown risk and your preparation checklist",
            "shutdown",
            cmd_shutdown,
        ),
        CommandEntry::new(
            "checklist",
            "Mark a preparation checklist item done or not done",
            "checklist <id>",
            cmd_checklist,
        ),
    ]
}

fn cmd_shutdown(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let risk = context.storage.load_shutdown_risk()?;
    let level = ShutdownService::level(&risk);

    output::section("Government Shutdown Risk");
    let headline = format!("{}% chance, {} RISK", risk.percentage, level);
    match level {
        RiskLevel::Low => output::success(headline),
        RiskLevel::Medium => output::warning(headline),
        RiskLevel::High => output::error(headline),
    }
    output::hint(format!(
        "Last updated {}",
        risk.last_updated.format("%Y-%m-%d %H:%M UTC")
    ));

    if !risk.factors.is_empty() {
        output::section("Key Factors");
        for factor in &risk.factors {
            output::line(format!("  * {factor}"));
        }
    }

    output::section("What This Means for You");
    output::line(format!("  {}", ShutdownService::guidance(level)));

    print_checklist(&risk);
    output::hint("Use `checklist <id>` to mark an item done.");
    Ok(())
}

fn cmd_checklist(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [id] = args else {
        return Err(CommandError::InvalidArguments(
            "Usage: checklist <id>".into(),
        ));
    };

    let risk = context.storage.load_shutdown_risk()?;
    let checklist = ShutdownService::toggle_checklist_item(&risk.preparation_checklist, id)?;
    let updated = ShutdownRisk {
        preparation_checklist: checklist,
        ..risk
    };
    context.storage.save_shutdown_risk(&updated)?;

    if let Some(item) = updated
        .preparation_checklist
        .iter()
        .find(|item| item.id == *id)
    {
        info!(item = %item.id, completed = item.completed, "checklist item toggled");
        output::success(item.display_label());
    }
    print_progress(&updated.preparation_checklist);
    Ok(())
}

fn print_checklist(risk: &ShutdownRisk) {
    output::section("Preparation Checklist");
    for item in &risk.preparation_checklist {
        output::line(format!("  {:>3}. {}", item.id, item.display_label()));
    }
    print_progress(&risk.preparation_checklist);
}

fn print_progress(checklist: &[ChecklistItem]) {
    let (completed, total) = ShutdownService::progress(checklist);
    output::line(format!("  {completed} of {total} complete"));
}
