use std::path::PathBuf;

use contact_book::config::Config;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so they never mix with command replies.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut import_path: Option<PathBuf> = None;
    let mut export_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => match args.next() {
                Some(path) => config.book_file = PathBuf::from(path),
                None => {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            },
            "--import" => {
                import_path = args.next().map(PathBuf::from);
                if import_path.is_none() {
                    eprintln!("Error: --import requires a JSON file path");
                    std::process::exit(1);
                }
            }
            "--export" => {
                export_path = args.next().map(PathBuf::from);
                if export_path.is_none() {
                    eprintln!("Error: --export requires a JSON file path");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("contact-book - address book with birthday reminders");
                println!();
                println!("Usage: contact-book [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>      Contact book file (default: .data/contacts.db)");
                println!("  --import <JSON_PATH>   Create the contact book from a JSON file");
                println!("  --export <JSON_PATH>   Write the contact book to a JSON file");
                println!("  -h, --help             Show this help");
                println!();
                println!("Environment:");
                println!("  CONTACT_BOOK_FILE      Contact book file");
                println!("  BIRTHDAY_WINDOW_DAYS   Days ahead shown by 'birthdays' (default: 7)");
                println!("  LOG_LEVEL              Log filter when RUST_LOG is unset (default: warn)");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let db_path = config.book_file.clone();

    if let Some(json_path) = import_path {
        println!("Importing from {}...", json_path.display());
        if db_path.exists() {
            eprintln!("Error: Contact book {} already exists.", db_path.display());
            eprintln!("Remove it first or use --file to specify a different path.");
            std::process::exit(1);
        }
        match contact_book::migrate::import_json(&json_path, &db_path) {
            Ok(stats) => {
                println!("Import complete!");
                println!("  Contacts: {}", stats.contacts);
                println!("  Phones: {}", stats.phones);
                println!("  Birthdays: {}", stats.birthdays);
            }
            Err(e) => {
                error!(error = %e, "import failed");
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(json_path) = export_path {
        match contact_book::migrate::export_json(&db_path, &json_path) {
            Ok(stats) => println!("Exported {} contacts to {}", stats.contacts, json_path.display()),
            Err(e) => {
                error!(error = %e, "export failed");
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = contact_book::cli::run(config) {
        error!(error = %e, "contact book session failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
