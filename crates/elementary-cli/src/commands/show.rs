use crate::cli::ShowArgs;
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use crate::ui;
use crate::utils::parser::{self, ElementQuery};
use elementary::workflows::catalog::{Catalog, CatalogError};
use tracing::info;

pub fn run(args: ShowArgs, config: &AppConfig) -> Result<()> {
    let query = parser::parse_element_query(&args.query)
        .map_err(|e| CliError::Argument(e.to_string()))?;
    let catalog = Catalog::open(&config.catalog)?;

    let element = match &query {
        ElementQuery::Number(number) => catalog.find_by_number(*number)?,
        ElementQuery::Text(text) => catalog.find_by_text(text)?,
    }
    .ok_or_else(|| CliError::NotFound(args.query.clone()))?;
    info!("Showing {} ({})", element.symbol, element.number);

    let details = catalog.details(&element, &config.settings);
    let rendered = ui::render_details(&details, config.color_output).map_err(CatalogError::from)?;
    print!("{}", rendered);
    Ok(())
}
