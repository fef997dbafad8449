//! One-shot catalog commands: `units`, `unit` and `search`

use anyhow::{Context, Result};

use lessons_core::CatalogStore;

use crate::render;
use crate::AppContext;

pub async fn execute_units(ctx: &AppContext, json_output: bool) -> Result<()> {
    let loaded = ctx.load_catalog().await;
    let store = CatalogStore::new(loaded.catalog);

    if json_output {
        let units: Vec<serde_json::Value> = store.list_units().iter().map(render::unit_json).collect();
        println!("{}", serde_json::to_string_pretty(&units)?);
    } else {
        println!("{}", render::units(store.list_units()));
    }

    Ok(())
}

pub async fn execute_unit(ctx: &AppContext, number: u32, json_output: bool) -> Result<()> {
    let loaded = ctx.load_catalog().await;
    let mut store = CatalogStore::new(loaded.catalog);

    let unit = store
        .select_unit(number)
        .with_context(|| format!("Unit {number} is not part of this catalog"))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&render::unit_json(unit))?);
    } else {
        println!("{}", render::unit(unit));
    }

    Ok(())
}

pub async fn execute_search(ctx: &AppContext, query: &str, json_output: bool) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("Search query must not be empty");
    }

    let loaded = ctx.load_catalog().await;
    let mut store = CatalogStore::new(loaded.catalog);
    let results = store.search(query);

    if json_output {
        let json_results: Vec<serde_json::Value> = results.iter().map(render::lesson_json).collect();
        println!("{}", serde_json::to_string_pretty(&json_results)?);
    } else {
        println!("{}", render::search_results(results));
    }

    Ok(())
}
