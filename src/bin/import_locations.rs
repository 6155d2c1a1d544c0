//! Load the facility CSV into the SQLite `location` table.
//!
//! ```text
//! import-locations --csv ./data.csv --database ./database.db
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use youandme_api::config::DEFAULT_DATABASE_PATH;
use youandme_api::core::db::connect_writable;
use youandme_api::core::persistence::location::location_import::import_csv;
use youandme_api::core::persistence::location::location_schema::ensure_schema;
use youandme_api::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "import-locations", about = "Import facility CSV rows into the location table")]
struct Args {
    /// UTF-8 CSV export of the facility dataset.
    #[arg(long, default_value = "./data.csv")]
    csv: PathBuf,

    /// SQLite file to create or append to.
    #[arg(long, env = "DATABASE_PATH", default_value = DEFAULT_DATABASE_PATH)]
    database: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(None, "info");

    let args = Args::parse();

    let pool = connect_writable(&args.database).await?;
    ensure_schema(&pool).await?;

    let summary = import_csv(&pool, &args.csv).await?;
    pool.close().await;

    info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        database = %args.database.display(),
        "Import finished"
    );
    Ok(())
}
