use crate::cli::TableArgs;
use crate::config::models::AppConfig;
use crate::error::Result;
use crate::ui;
use elementary::workflows::catalog::Catalog;

pub fn run(args: TableArgs, config: &AppConfig) -> Result<()> {
    if let Some(field) = args.subtext {
        config.settings.set_subtext(field);
    }
    let catalog = Catalog::open(&config.catalog)?;
    let cells = catalog.periodic_table()?;
    print!(
        "{}",
        ui::render_table(
            &cells,
            &config.settings.snapshot(),
            catalog.strings(),
            config.color_output
        )
    );
    Ok(())
}
