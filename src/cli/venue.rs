//! Venue CLI commands

use clap::Subcommand;

use crate::display::format_venue_table;
use crate::error::PlannerResult;
use crate::models::{sample_venues, SortOrder, VenueSortKey};
use crate::services::VenueTable;

use super::PlannerContext;

/// Venue subcommands
#[derive(Subcommand, Debug)]
pub enum VenueCommands {
    /// Compare venues side by side
    List {
        /// Column to sort on: name, hall-fee, meal-cost, min-guarantee, score
        #[arg(short, long)]
        sort: Option<VenueSortKey>,
        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },
}

/// Handle a venue command
pub fn handle_venue_command(ctx: &PlannerContext, cmd: VenueCommands) -> PlannerResult<()> {
    match cmd {
        VenueCommands::List { sort, desc } => {
            let mut table = VenueTable::new(sample_venues());
            if let Some(key) = sort {
                let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
                table.sort_with(key, order);
            }

            println!("{}", ctx.catalog.t("venue"));
            println!("{}", ctx.catalog.t("venue_sort_hint"));
            println!("{}", format_venue_table(&table, ctx.settings.currency));
        }
    }

    Ok(())
}
