//! Hondana CLI - Command-line interface for the book collection

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hondana")]
#[command(author, version, about = "Personal book-collection manager", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the persisted collection
    #[arg(long, global = true, default_value = ".hondana")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a book by hand
    Add {
        /// Book title
        title: String,

        /// Author; repeat for co-authored books
        #[arg(short, long = "author")]
        authors: Vec<String>,

        /// Release date in compact form (2024, 202403, or 20240305)
        #[arg(short, long)]
        date: Option<String>,

        /// 13-digit ISBN
        #[arg(long)]
        isbn: Option<String>,

        /// Series name
        #[arg(short, long)]
        series: Option<String>,

        /// Cover image URL
        #[arg(long)]
        cover: Option<String>,
    },

    /// List the collection, newest first
    List {
        /// Only books in this series
        #[arg(long)]
        series: Option<String>,

        /// Only books by this author
        #[arg(long)]
        author: Option<String>,

        /// Order by release date instead of insertion order
        #[arg(long)]
        sort_date: bool,

        /// With --sort-date, put books with no release date last
        #[arg(long)]
        unknown_last: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch a book from the remote catalog by ISBN
    Import {
        /// 13-digit ISBN
        isbn: String,

        /// Commit the fetched book to the collection
        #[arg(long)]
        save: bool,

        /// Catalog application id (falls back to HONDANA_APP_ID)
        #[arg(long)]
        app_id: Option<String>,
    },

    /// Search the remote catalog by keyword
    Search {
        /// Free-text title keyword
        keyword: String,

        /// Result page
        #[arg(short, long)]
        page: Option<u32>,

        /// Catalog application id (falls back to HONDANA_APP_ID)
        #[arg(long)]
        app_id: Option<String>,
    },

    /// Look up a cover image URL for an ISBN
    Cover {
        /// 13-digit ISBN
        isbn: String,

        /// Id of the record being edited, so its own ISBN is not a duplicate
        #[arg(long)]
        edit_id: Option<u32>,

        /// Catalog application id (falls back to HONDANA_APP_ID)
        #[arg(long)]
        app_id: Option<String>,
    },

    /// Edit fields of an existing record
    Update {
        /// Record id
        id: u32,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// Replace the author list; repeat for co-authored books
        #[arg(short, long = "author")]
        authors: Vec<String>,

        /// New release date in compact form
        #[arg(short, long)]
        date: Option<String>,

        /// New 13-digit ISBN
        #[arg(long)]
        isbn: Option<String>,

        /// New series name
        #[arg(short, long)]
        series: Option<String>,

        /// New cover image URL
        #[arg(long)]
        cover: Option<String>,

        /// Lending state: none, lent, or returned
        #[arg(short, long)]
        lending: Option<String>,

        /// Remove the series name
        #[arg(long, conflicts_with = "series")]
        clear_series: bool,

        /// Remove the cover image URL
        #[arg(long, conflicts_with = "cover")]
        clear_cover: bool,
    },

    /// Remove a record
    Delete {
        /// Record id
        id: u32,
    },

    /// Rename a series across the collection
    RenameSeries {
        /// Current series name
        old: String,

        /// New series name
        new: String,
    },

    /// Rename an author across the collection
    RenameAuthor {
        /// Current author name
        old: String,

        /// New author name
        new: String,
    },

    /// Clear the collection and its persisted slot
    Reset {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "hondana_cli=debug,hondana_core=debug"
    } else {
        "hondana_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = cli.data_dir;

    match cli.command {
        Commands::Add {
            title,
            authors,
            date,
            isbn,
            series,
            cover,
        } => commands::add(&data_dir, title, authors, date, isbn, series, cover).await,

        Commands::List {
            series,
            author,
            sort_date,
            unknown_last,
            json,
        } => commands::list(&data_dir, series, author, sort_date, unknown_last, json).await,

        Commands::Import { isbn, save, app_id } => {
            commands::import(&data_dir, &isbn, save, app_id).await
        }

        Commands::Search {
            keyword,
            page,
            app_id,
        } => commands::search(&keyword, page, app_id).await,

        Commands::Cover {
            isbn,
            edit_id,
            app_id,
        } => commands::cover(&data_dir, &isbn, edit_id, app_id).await,

        Commands::Update {
            id,
            title,
            authors,
            date,
            isbn,
            series,
            cover,
            lending,
            clear_series,
            clear_cover,
        } => {
            commands::update(
                &data_dir,
                id,
                commands::UpdateFields {
                    title,
                    authors,
                    date,
                    isbn,
                    series,
                    cover,
                    lending,
                    clear_series,
                    clear_cover,
                },
            )
            .await
        }

        Commands::Delete { id } => commands::delete(&data_dir, id).await,

        Commands::RenameSeries { old, new } => {
            commands::rename_series(&data_dir, &old, &new).await
        }

        Commands::RenameAuthor { old, new } => {
            commands::rename_author(&data_dir, &old, &new).await
        }

        Commands::Reset { yes } => commands::reset(&data_dir, yes).await,
    }
}
