//! Shutdown risk guidance and preparation checklist updates.

use oasis_domain::{ChecklistItem, RiskLevel, ShutdownRisk};

use crate::CoreError;

pub struct ShutdownService;

impl ShutdownService {
    /// Level derived from the published percentage; the stored `level` field is
    /// informational only.
    pub fn level(risk: &ShutdownRisk) -> RiskLevel {
        RiskLevel::from_percentage(risk.percentage)
    }

    pub fn guidance(level: RiskLevel) -> &'static str {
        match level {
            RiskLevel::Low => "Risk is low right now. Congress has plenty of time to pass funding, and there's bipartisan support. Your benefits are safe for now, but it's always good to have a backup plan.",
            RiskLevel::Medium => "There's moderate risk of a shutdown. Start preparing now by stocking non-perishables and knowing where food pantries are located. Your benefits may be delayed if a shutdown happens.",
            RiskLevel::High => "Risk is high. A shutdown is likely within the next few weeks. Take action now: stock up on essentials, apply for emergency assistance, and make a backup plan. SNAP benefits may be delayed or interrupted.",
        }
    }

    /// Returns a new checklist with the item `id` flipped.
    pub fn toggle_checklist_item(
        checklist: &[ChecklistItem],
        id: &str,
    ) -> Result<Vec<ChecklistItem>, CoreError> {
        if !checklist.iter().any(|item| item.id == id) {
            return Err(CoreError::ChecklistItemNotFound(id.to_string()));
        }
        Ok(checklist
            .iter()
            .map(|item| {
                let mut next = item.clone();
                if next.id == id {
                    next.completed = !next.completed;
                }
                next
            })
            .collect())
    }

    /// `(completed, total)` counts.
    pub fn progress(checklist: &[ChecklistItem]) -> (usize, usize) {
        let completed = checklist.iter().filter(|item| item.completed).count();
        (completed, checklist.len())
    }
}
