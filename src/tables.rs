use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    pricing::BandBreakdown,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    tariff::Schedule,
};

#[must_use]
pub fn build_schedule_table(schedule: &Schedule) -> Table {
    let cheapest =
        schedule.bands().iter().map(|band| band.rate).min().unwrap_or(KilowattHourRate::ZERO);
    let priciest =
        schedule.bands().iter().map(|band| band.rate).max().unwrap_or(KilowattHourRate::ZERO);

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Band", "Hours", "Rate"]);
    for band in schedule.bands() {
        table.add_row(vec![
            Cell::new(&band.name),
            Cell::new(format!("{:02}–{:02}", band.start_hour, band.end_hour)),
            Cell::new(band.rate).set_alignment(CellAlignment::Right).fg(if band.rate == priciest {
                Color::Red
            } else if band.rate == cheapest {
                Color::Green
            } else {
                Color::DarkYellow
            }),
        ]);
    }
    table
}

#[must_use]
pub fn build_breakdown_table(breakdowns: &[BandBreakdown]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Band", "Rate", "Records", "Consumption", "Cost"]);
    for breakdown in breakdowns {
        table.add_row(vec![
            Cell::new(&breakdown.name),
            Cell::new(breakdown.rate).set_alignment(CellAlignment::Right),
            Cell::new(breakdown.record_count).set_alignment(CellAlignment::Right),
            Cell::new(breakdown.consumption).set_alignment(CellAlignment::Right),
            Cell::new(breakdown.cost).set_alignment(CellAlignment::Right),
        ]);
    }

    let total_records: usize = breakdowns.iter().map(|breakdown| breakdown.record_count).sum();
    let total_consumption: KilowattHours =
        breakdowns.iter().map(|breakdown| breakdown.consumption).sum();
    let total_cost: Cost = breakdowns.iter().map(|breakdown| breakdown.cost).sum();
    table.add_row(vec![
        Cell::new("total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(total_records).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        Cell::new(total_consumption)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(total_cost).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}
