use crate::config::models::AppConfig;
use crate::error::Result;
use elementary::workflows::catalog::Catalog;

pub fn run(config: &AppConfig) -> Result<()> {
    let catalog = Catalog::open(&config.catalog)?;
    let report = catalog.verify()?;
    println!(
        "Verified {} elements ({} with isotope data).",
        report.elements, report.elements_with_isotopes
    );
    Ok(())
}
