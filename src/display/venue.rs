//! Venue comparison display

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::{Currency, VenueSortKey};
use crate::services::VenueTable;

/// Format the venue table; the sorted column carries an arrow
pub fn format_venue_table(table: &VenueTable, currency: Currency) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        table.header(VenueSortKey::Name, "Name"),
        table.header(VenueSortKey::HallFee, "Hall fee"),
        table.header(VenueSortKey::MealCost, "Meal cost"),
        table.header(VenueSortKey::MinGuarantee, "Min guests"),
        table.header(VenueSortKey::Score, "Score"),
    ]);

    for venue in table.venues() {
        builder.push_record([
            venue.name.clone(),
            currency.format(venue.hall_fee),
            currency.format(venue.meal_cost),
            venue.min_guarantee.to_string(),
            format!("{:.1}", venue.score),
        ]);
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    rendered.to_string()
}
