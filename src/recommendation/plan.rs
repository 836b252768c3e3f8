use std::io::Write;

use serde::Serialize;

use crate::catalog::Catalog;

/// One confirmed module in the action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanRow {
    pub code: String,
    pub name: String,
    pub category: String,
    pub estimated_minutes: u16,
    pub cost: u32,
}

/// The user's confirmed module selection rendered as an ordered work plan
/// with time and cost totals, suitable for spreadsheet handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionPlan {
    pub rows: Vec<PlanRow>,
    pub total_minutes: u32,
    pub total_cost: u32,
}

impl ActionPlan {
    /// Builds a plan from confirmed module ids, preserving the given order.
    /// Ids absent from the catalog are skipped; they carry no time or cost
    /// and the saved ids themselves are preserved elsewhere untouched.
    pub fn from_module_ids(catalog: &Catalog, module_ids: &[String]) -> Self {
        let mut rows = Vec::new();
        let mut total_minutes: u32 = 0;
        let mut total_cost: u32 = 0;

        for module_id in module_ids {
            let Some(module) = catalog.module(module_id) else {
                continue;
            };
            total_minutes += u32::from(module.estimated_minutes);
            total_cost += module.cost;
            rows.push(PlanRow {
                code: module.code.to_string(),
                name: module.name.to_string(),
                category: module.category.label().to_string(),
                estimated_minutes: module.estimated_minutes,
                cost: module.cost,
            });
        }

        Self {
            rows,
            total_minutes,
            total_cost,
        }
    }

    /// Writes the plan as CSV: a header, one row per module, and a closing
    /// totals row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["code", "name", "category", "estimated_minutes", "cost"])?;

        for row in &self.rows {
            let minutes = row.estimated_minutes.to_string();
            let cost = row.cost.to_string();
            csv_writer.write_record([
                row.code.as_str(),
                row.name.as_str(),
                row.category.as_str(),
                minutes.as_str(),
                cost.as_str(),
            ])?;
        }

        let total_minutes = self.total_minutes.to_string();
        let total_cost = self.total_cost.to_string();
        csv_writer.write_record([
            "TOTAL",
            "",
            "",
            total_minutes.as_str(),
            total_cost.as_str(),
        ])?;
        csv_writer.flush()?;
        Ok(())
    }
}
