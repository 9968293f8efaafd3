use crate::application::read_models::{CategoryRowView, OutdatedListView, RotReadModel};
use crate::ports::outbound::RotFormatter;
use crate::shared::Result;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, CellAlignment, Table};
use std::fmt::Write;

/// Shown for versions npm did not report
const MISSING_VERSION: &str = "-";

/// TableFormatter adapter for the human-readable report
///
/// Renders a header, three summary sentences and a score table. When the
/// read model carries outdated package lists (`--long`), one extra table
/// per category follows.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl TableFormatter {
    fn render_header(&self, output: &mut String, model: &RotReadModel) -> Result<()> {
        writeln!(
            output,
            "Rotten deps results for {}@{}",
            model.package.name, model.package.version
        )?;
        output.push('\n');
        Ok(())
    }

    fn render_summary(&self, output: &mut String, model: &RotReadModel) -> Result<()> {
        let all = model.result.all();
        let summary = &model.summary;

        writeln!(
            output,
            "{:.2}% of installed packages ({}) are outdated ({})",
            summary.rotten_deps_percentage, all.installed, all.outdated
        )?;
        writeln!(
            output,
            "{:.2}% of installed packages ({}) are behind the version wanted by their range ({})",
            summary.rotten_wanted_deps_percentage, all.installed, all.outdated_wanted
        )?;
        writeln!(
            output,
            "{:.2}% of installed packages ({}) are behind their latest version ({})",
            summary.rotten_latest_deps_percentage, all.installed, all.outdated_latest
        )?;
        output.push('\n');
        Ok(())
    }

    fn render_scores(&self, output: &mut String, rows: &[CategoryRowView]) -> Result<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec![
            Cell::new("CATEGORY"),
            Cell::new("INSTALLED"),
            Cell::new("OUTDATED"),
            Cell::new("OUTDATED %"),
            Cell::new("WANTED"),
            Cell::new("WANTED %"),
            Cell::new("LATEST"),
            Cell::new("LATEST %"),
        ]);

        for row in rows {
            table.add_row(vec![
                Cell::new(row.category),
                Self::number(row.installed),
                Self::number(row.outdated),
                Self::percent(row.percentages.rotten_deps_percentage),
                Self::number(row.outdated_wanted),
                Self::percent(row.percentages.rotten_wanted_deps_percentage),
                Self::number(row.outdated_latest),
                Self::percent(row.percentages.rotten_latest_deps_percentage),
            ]);
        }

        writeln!(output, "{table}")?;
        Ok(())
    }

    fn render_outdated_list(&self, output: &mut String, list: &OutdatedListView) -> Result<()> {
        output.push('\n');
        writeln!(output, "List of outdated {}:", list.category)?;

        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec![
            Cell::new("PACKAGE"),
            Cell::new("CURRENT"),
            Cell::new("WANTED"),
            Cell::new("LATEST"),
        ]);

        for package in &list.packages {
            table.add_row(vec![
                Cell::new(&package.name),
                Cell::new(package.current.as_deref().unwrap_or(MISSING_VERSION)),
                Cell::new(package.wanted.as_deref().unwrap_or(MISSING_VERSION)),
                Cell::new(package.latest.as_deref().unwrap_or(MISSING_VERSION)),
            ]);
        }

        writeln!(output, "{table}")?;
        Ok(())
    }

    fn number(value: u64) -> Cell {
        Cell::new(value).set_alignment(CellAlignment::Right)
    }

    fn percent(value: f64) -> Cell {
        Cell::new(format!("{:.2}%", value)).set_alignment(CellAlignment::Right)
    }
}

impl RotFormatter for TableFormatter {
    fn format(&self, model: &RotReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model)?;
        self.render_summary(&mut output, model)?;
        self.render_scores(&mut output, &model.rows)?;

        for list in &model.outdated_lists {
            self.render_outdated_list(&mut output, list)?;
        }

        Ok(output)
    }
}
