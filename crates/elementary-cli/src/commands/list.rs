use crate::cli::ListArgs;
use crate::config::models::AppConfig;
use crate::error::Result;
use crate::ui;
use elementary::workflows::catalog::Catalog;

pub fn run(args: ListArgs, config: &AppConfig) -> Result<()> {
    if let Some(field) = args.sort {
        config.settings.set_sort_field(field);
    }
    if let Some(direction) = args.direction() {
        config.settings.set_sort_direction(direction);
    }
    let settings = config.settings.snapshot();

    let catalog = Catalog::open(&config.catalog)?;
    let items = catalog.list(&args.filter, settings.sort)?;
    if items.is_empty() {
        println!("No elements match '{}'.", args.filter);
        return Ok(());
    }
    print!(
        "{}",
        ui::render_list(&items, settings.color_key, config.color_output)
    );
    Ok(())
}
