use elementary::core::error::DataError;
use elementary::core::io::strings::Strings;
use elementary::core::models::element::{Block, CATEGORY_COUNT};
use elementary::core::palette::Rgb;
use elementary::settings::Settings;
use elementary::view::color::ColorKey;
use elementary::view::details::ElementDetails;
use elementary::view::grid::GridPosition;
use elementary::view::list::ListItem;
use elementary::view::subtext::subtext_options;
use elementary::workflows::catalog::TableCell;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;

const CELL_WIDTH: usize = 9;
const LABEL_WIDTH: usize = 22;

/// Colour is used only on an interactive stdout and when not switched off.
pub fn color_enabled(no_color: bool) -> bool {
    !no_color && std::io::stdout().is_terminal()
}

fn swatch(color: Option<Rgb>, enabled: bool) -> String {
    match color {
        Some(Rgb(r, g, b)) if enabled => format!("{} ", "  ".on_truecolor(r, g, b)),
        _ => String::new(),
    }
}

fn paint(text: &str, color: Option<Rgb>, enabled: bool) -> String {
    match color {
        Some(Rgb(r, g, b)) if enabled => text.on_truecolor(r, g, b).black().to_string(),
        _ => text.to_string(),
    }
}

fn emphasize(text: &str, enabled: bool) -> String {
    if enabled {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn row(label: &str, value: &str) -> String {
    format!("{:<width$}{}", label, value, width = LABEL_WIDTH)
}

pub fn render_details(details: &ElementDetails, color: bool) -> Result<String, DataError> {
    let element = details.element();
    let mut lines = vec![
        format!(
            "{}{} {}  {}",
            swatch(details.color(), color),
            element.number,
            emphasize(&element.symbol, color),
            details.name()
        ),
        String::new(),
        row("Group, period, block", &details.group_period_block()),
        row("Atomic weight", &details.weight()),
        row("Category", details.category()?),
        row("Density", &details.density()),
        row("Melting point", &details.melt()),
        row("Boiling point", &details.boil()),
        row("Specific heat", &details.heat()),
        row("Electronegativity", &details.negativity()),
        row("Abundance", &details.abundance()),
        row("Configuration", &details.configuration()),
        row("Electrons per shell", &details.electrons()),
    ];

    let isotopes = details.isotopes();
    if !isotopes.is_empty() {
        lines.push(String::new());
        lines.push(format!("{:<8}{:<16}{}", "Isotope", "Mass", "Composition"));
        for isotope in isotopes {
            lines.push(format!(
                "{:<8}{:<16}{}",
                isotope.symbol, isotope.mass, isotope.composition
            ));
        }
    }

    let links: Vec<String> = [("Wikipedia", details.wiki_url()), ("Video", details.video_url())]
        .into_iter()
        .filter_map(|(label, url)| url.map(|url| row(label, &url)))
        .collect();
    if !links.is_empty() {
        lines.push(String::new());
        lines.extend(links);
    }

    Ok(lines.join("\n") + "\n")
}

pub fn render_list(items: &[ListItem], key: ColorKey, color: bool) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{}{:>3}  {:<3} {}\n",
                swatch(item.color(key), color),
                item.entry.number,
                item.entry.symbol,
                item.name
            )
        })
        .collect()
}

/// The periodic table as two text lines per grid row: symbols, then the active subtext.
pub fn render_table(
    cells: &[TableCell],
    settings: &Settings,
    strings: &Strings,
    color: bool,
) -> String {
    let by_position: BTreeMap<GridPosition, &TableCell> =
        cells.iter().map(|cell| (cell.position, cell)).collect();

    let label = subtext_options(strings, settings.temperature_unit)
        .into_iter()
        .find(|option| option.field == settings.subtext)
        .map(|option| option.label)
        .unwrap_or_else(|| settings.subtext.to_string());
    let mut out = format!("{}\n\n", label);

    for row in 1..=GridPosition::ROWS {
        let mut symbols = String::new();
        let mut values = String::new();
        for column in 1..=GridPosition::COLUMNS {
            match by_position.get(&GridPosition { row, column }) {
                Some(cell) => {
                    let fill = settings
                        .color_key
                        .color(cell.entry.block, cell.entry.category);
                    let subtext = settings
                        .subtext
                        .format(&cell.entry, settings.temperature_unit);
                    symbols.push_str(&paint(&pad(&cell.entry.symbol), fill, color));
                    values.push_str(&paint(&pad(&subtext), fill, color));
                }
                None => {
                    symbols.push_str(&pad(""));
                    values.push_str(&pad(""));
                }
            }
        }
        out.push_str(symbols.trim_end());
        out.push('\n');
        out.push_str(values.trim_end());
        out.push('\n');
    }

    if color {
        out.push('\n');
        out.push_str(&render_legend(settings.color_key, strings));
    }
    out
}

fn pad(text: &str) -> String {
    let clipped: String = text.chars().take(CELL_WIDTH - 1).collect();
    format!("{:<width$}", clipped, width = CELL_WIDTH)
}

fn render_legend(key: ColorKey, strings: &Strings) -> String {
    let entries: Vec<(Option<Rgb>, String)> = match key {
        ColorKey::Category => (0..CATEGORY_COUNT)
            .map(|category| {
                let name = strings
                    .category_name(category)
                    .unwrap_or(strings.unknown())
                    .to_string();
                (key.color(Block::S, category), name)
            })
            .collect(),
        ColorKey::Block => Block::ALL
            .into_iter()
            .map(|block| (key.color(block, 0), format!("{}-block", block)))
            .collect(),
    };
    entries
        .into_iter()
        .map(|(fill, name)| format!("{}{}\n", swatch(fill, true), name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use elementary::settings::SettingsStore;
    use elementary::view::subtext::SubtextField;
    use elementary::workflows::catalog::Catalog;

    #[test]
    fn table_without_color_is_plain_text_grid() {
        let catalog = Catalog::bundled().unwrap();
        let cells = catalog.periodic_table().unwrap();
        let settings = Settings::default();
        let out = render_table(&cells, &settings, catalog.strings(), false);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Atomic weight");
        assert_eq!(lines.len(), 2 + 2 * GridPosition::ROWS as usize);
        let period_one = lines[2];
        assert!(period_one.starts_with("H "));
        assert!(period_one.ends_with("He"));
        assert!(lines[3].starts_with("1.008"));
        assert!(lines[16].is_empty());
        assert!(lines[17].is_empty());
        assert!(lines[18].trim_start().starts_with("La"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn table_subtext_follows_settings() {
        let catalog = Catalog::bundled().unwrap();
        let cells = catalog.periodic_table().unwrap();
        let settings = Settings {
            subtext: SubtextField::Melt,
            temperature_unit: elementary::core::units::TemperatureUnit::Celsius,
            ..Settings::default()
        };
        let out = render_table(&cells, &settings, catalog.strings(), false);
        assert!(out.starts_with("Melting point (℃)\n"));
    }

    #[test]
    fn list_rows_show_number_symbol_and_name() {
        let catalog = Catalog::bundled().unwrap();
        let items = catalog.list("sul", Default::default()).unwrap();
        assert_eq!(render_list(&items, ColorKey::Category, false), " 16  S   Sulfur\n");
    }

    #[test]
    fn details_list_every_property() {
        let catalog = Catalog::bundled().unwrap();
        let element = catalog.find_by_text("sulfur").unwrap().unwrap();
        let store = SettingsStore::default();
        let details = catalog.details(&element, &store);
        let out = render_details(&details, false).unwrap();

        assert!(out.starts_with("16 S  Sulfur\n"));
        assert!(out.contains(&row("Group, period, block", "16, 3, p")));
        assert!(out.contains(&row("Melting point", "388.36 K")));
        assert!(out.contains(&row("Configuration", "[Ne] 3s² 3p⁴")));
        assert!(out.contains("https://en.wikipedia.org/wiki/Sulfur"));
    }

    #[test]
    fn colored_cells_carry_escape_codes() {
        let painted = paint("S", Some(Rgb(255, 255, 0)), true);
        assert!(painted.contains('\u{1b}'));
        assert_eq!(paint("S", Some(Rgb(255, 255, 0)), false), "S");
        assert_eq!(swatch(None, true), "");
    }
}
