//! Milestone display formatting

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::i18n::Catalog;
use crate::models::Milestone;

/// Format milestones as a table in the given date format
pub fn format_milestone_table(milestones: &[Milestone], date_format: &str, catalog: &Catalog) -> String {
    if milestones.is_empty() {
        return catalog.t("no_milestones").to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Date", "Title", "Description", "Done"]);
    for milestone in milestones {
        builder.push_record([
            milestone.id.short().to_string(),
            milestone.date.format(date_format).to_string(),
            milestone.title.clone(),
            milestone.description.clone(),
            if milestone.is_completed { "✓" } else { "" }.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentId, MilestoneFields};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_table_uses_date_format() {
        let date = Utc.with_ymd_and_hms(2026, 5, 20, 18, 0, 0).unwrap();
        let milestone = Milestone::from_fields(
            DocumentId::from("abc"),
            MilestoneFields::new("상견례", date, "", date),
        );

        let output = format_milestone_table(&[milestone], "%d/%m/%Y", &Catalog::builtin("en"));
        assert!(output.contains("20/05/2026"));
        assert!(output.contains("상견례"));
    }

    #[test]
    fn test_empty_list() {
        let output = format_milestone_table(&[], "%Y-%m-%d", &Catalog::builtin("ko"));
        assert_eq!(output, "일정이 없습니다.");
    }
}
