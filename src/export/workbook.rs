use crate::engine::{AggregateResult, ChartKind, ChartSet, Leaderboards, SummaryCards, TableView};
use crate::error::Result;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

/// Write the full dashboard result to an Excel workbook with
/// Summary, Leaderboards, Charts and Table sheets
pub fn write_report_xlsx(result: &AggregateResult, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, result)?;

    let leaders_sheet = workbook.add_worksheet();
    write_leaderboards_sheet(leaders_sheet, &result.leaderboards)?;

    let charts_sheet = workbook.add_worksheet();
    write_charts_sheet(charts_sheet, &result.charts)?;

    let table_sheet = workbook.add_worksheet();
    write_table_sheet(table_sheet, &result.table)?;

    workbook.save(path)?;
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border_bottom(FormatBorder::Thin)
}

fn write_summary_sheet(sheet: &mut Worksheet, result: &AggregateResult) -> Result<()> {
    sheet.set_column_width(0, 24)?;
    sheet.set_column_width(1, 18)?;

    let header_format = header_format();
    sheet.write_string_with_format(0, 0, "Metric", &header_format)?;
    sheet.write_string_with_format(0, 1, "Value", &header_format)?;

    let right_format = Format::new().set_align(FormatAlign::Right);

    for (idx, (label, value)) in SummaryCards::LABELS
        .iter()
        .zip(result.summary.as_array())
        .enumerate()
    {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, *label)?;
        sheet.write_string_with_format(row, 1, value, &right_format)?;
    }

    // Raw counts below the cards
    let row = (SummaryCards::LABELS.len() + 2) as u32;
    sheet.write_string(row, 0, "Filtered Players")?;
    sheet.write_number_with_format(row, 1, result.filtered_count as f64, &right_format)?;
    sheet.write_string(row + 1, 0, "U23 Players (count)")?;
    sheet.write_number_with_format(row + 1, 1, result.u23_count as f64, &right_format)?;

    sheet.set_name("Summary")?;
    Ok(())
}

fn write_leaderboards_sheet(sheet: &mut Worksheet, leaderboards: &Leaderboards) -> Result<()> {
    sheet.set_column_width(0, 18)?; // Card
    sheet.set_column_width(1, 24)?; // Player
    sheet.set_column_width(2, 14)?; // Stat
    sheet.set_column_width(3, 10)?; // Value

    let header_format = header_format();
    for (col, header) in ["Card", "Player", "Stat", "Value"].iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    let center_format = Format::new().set_align(FormatAlign::Center);

    let mut row = 1u32;
    for card in leaderboards.cards() {
        for (label, value) in card.fields() {
            sheet.write_string(row, 0, card.kind.title())?;
            sheet.write_string(row, 1, &card.name)?;
            sheet.write_string(row, 2, label)?;
            sheet.write_string_with_format(row, 3, value, &center_format)?;
            row += 1;
        }
    }

    sheet.set_name("Leaderboards")?;
    Ok(())
}

/// One block per series: title, header row, then the bars
fn write_charts_sheet(sheet: &mut Worksheet, charts: &ChartSet) -> Result<()> {
    sheet.set_column_width(0, 24)?;
    sheet.set_column_width(1, 20)?;
    sheet.set_column_width(2, 12)?;

    let title_format = Format::new().set_bold();
    let header_format = header_format();
    let value_format = Format::new().set_align(FormatAlign::Right).set_num_format("0");

    let mut row = 0u32;
    for series in charts.all() {
        sheet.write_string_with_format(row, 0, &series.title, &title_format)?;
        row += 1;

        let label = match series.kind {
            ChartKind::TeamGoals => "Team",
            _ => "Player",
        };
        sheet.write_string_with_format(row, 0, label, &header_format)?;
        sheet.write_string_with_format(row, 1, "Team", &header_format)?;
        sheet.write_string_with_format(row, 2, series.kind.value_label(), &header_format)?;
        row += 1;

        if series.is_empty() {
            sheet.write_string(row, 0, "No data")?;
            row += 1;
        }
        for bar in &series.rows {
            sheet.write_string(row, 0, &bar.label)?;
            if let Some(ref team) = bar.team {
                sheet.write_string(row, 1, team)?;
            }
            sheet.write_number_with_format(row, 2, bar.value, &value_format)?;
            row += 1;
        }

        row += 1;
    }

    sheet.set_name("Charts")?;
    Ok(())
}

fn write_table_sheet(sheet: &mut Worksheet, table: &TableView) -> Result<()> {
    let header_format = header_format();
    for (col, def) in table.columns.iter().enumerate() {
        let width = if col == 0 { 24 } else { 10 };
        sheet.set_column_width(col as u16, width)?;
        sheet.write_string_with_format(0, col as u16, &def.name, &header_format)?;
    }

    let number_format = Format::new().set_align(FormatAlign::Right);

    for (row_idx, values) in table.rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, value) in values.iter().enumerate() {
            let Some(value) = value else { continue };
            // Formatted numbers go in as numbers so the sheet can sort them
            match value.parse::<f64>() {
                Ok(n) if n.is_finite() => {
                    sheet.write_number_with_format(row, col as u16, n, &number_format)?
                }
                _ => sheet.write_string(row, col as u16, value)?,
            };
        }
    }

    sheet.set_name("Table")?;
    Ok(())
}
