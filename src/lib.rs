pub mod analysis;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod ocr;
pub mod parsing;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::database::DbPool;
use crate::services::{analytics, fixture_import};
use crate::services::{AnalyticsService, FixtureImportService, ImportService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_store() -> Result<DbPool> {
    let pool = database::create_pool(&config::database_path())?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::init_schema(&mut conn)?;
    Ok(pool)
}

pub fn handle_import(match_id: Option<i64>, image_path: &Path) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ImportService::new(open_store()?, &AppConfig::new())?;
        let image = read_image(image_path)?;
        let saved = service.import_image(match_id, image).await?;
        println!("Saved observation for match {}", saved.match_id);
        Ok(())
    })
}

pub fn handle_import_text(match_id: Option<i64>, file: &Path) -> Result<()> {
    let service = ImportService::new(open_store()?, &AppConfig::new())?;
    let raw_text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read stats text from {}", file.display()))?;
    let saved = service.import_text(match_id, &raw_text)?;
    println!("Saved observation for match {}", saved.match_id);
    Ok(())
}

pub fn handle_demo(match_id: Option<i64>) -> Result<()> {
    let service = ImportService::new(open_store()?, &AppConfig::new())?;
    let saved = service.import_demo(match_id)?;
    println!("Saved demo observation for match {}", saved.match_id);
    Ok(())
}

pub fn handle_report(match_id: i64) -> Result<()> {
    let service = AnalyticsService::new(open_store()?, AppConfig::new());
    match service.match_report(match_id)? {
        Some(report) => analytics::print_match_report(&report),
        None => println!("No observation recorded for match {match_id}"),
    }
    Ok(())
}

pub fn handle_season() -> Result<()> {
    let service = AnalyticsService::new(open_store()?, AppConfig::new());
    let season = service.season_report()?;
    analytics::print_season_report(&season);
    Ok(())
}

pub fn handle_fixtures(file: &Path, image: bool) -> Result<()> {
    let service = FixtureImportService::new(&AppConfig::new())?;

    let fixtures = if image {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(service.from_image(read_image(file)?))?
    } else {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read fixture list from {}", file.display()))?;
        service.from_text(&text)
    };

    fixture_import::print_fixtures(&fixtures);
    Ok(())
}

pub fn handle_reset(match_id: i64) -> Result<()> {
    let service = ImportService::new(open_store()?, &AppConfig::new())?;
    if service.reset(match_id)? {
        println!("Observation for match {match_id} deleted");
    } else {
        println!("No observation stored for match {match_id}");
    }
    Ok(())
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read image {}", path.display()))
}
