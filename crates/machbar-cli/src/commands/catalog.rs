use machbar_catalog::Catalog;
use machbar_core::Result;

use super::render;

pub(super) fn cmd_catalog(catalog: &Catalog, json: bool, export: bool) -> Result<()> {
    if export {
        print!("{}", catalog.to_toml()?);
    } else if json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
    } else {
        print!("{}", render::catalog(catalog));
    }
    Ok(())
}
