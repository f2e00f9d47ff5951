use clap::Parser;
use vent::application::{
    init::init, list_categories, list_entries, show_entry, storage_report, AddEntryService,
    ConfigService, RemoveEntryService,
};
use vent::cli::{
    format_capacity, format_category_list, format_entry_detail, format_entry_list, Cli, Commands,
    ConsoleNotifier,
};
use vent::error::VentError;
use vent::infrastructure::{EntryStore, Workspace};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), VentError> {
    match cli.command {
        Commands::Init { path } => init(&path),

        Commands::Add { text, categories } => {
            let workspace = Workspace::discover()?;
            let config = workspace.load_config()?;
            let store = EntryStore::new(workspace.storage());
            let service = AddEntryService::new(store, ConsoleNotifier::new(config.notifications));

            let report = service.execute(&text, categories)?;
            println!("Entry id: {}", report.entry.id);
            println!("{}", format_capacity(&report.capacity));
            Ok(())
        }

        Commands::List {
            query,
            category,
            limit,
        } => {
            let workspace = Workspace::discover()?;
            let store = EntryStore::new(workspace.storage());

            let entries = list_entries(&store, &query, &category, limit)?;
            println!("{}", format_entry_list(&entries));
            Ok(())
        }

        Commands::Show { id } => {
            let workspace = Workspace::discover()?;
            let store = EntryStore::new(workspace.storage());

            let entry = show_entry(&store, id)?;
            println!("{}", format_entry_detail(&entry));
            Ok(())
        }

        Commands::Delete { id } => {
            let workspace = Workspace::discover()?;
            let config = workspace.load_config()?;
            let store = EntryStore::new(workspace.storage());
            let service =
                RemoveEntryService::new(store, ConsoleNotifier::new(config.notifications));

            let report = service.execute(id)?;
            if report.removed {
                println!("{}", format_capacity(&report.capacity));
            } else {
                println!("No entry with id {}", id);
            }
            Ok(())
        }

        Commands::Categories => {
            let workspace = Workspace::discover()?;
            let store = EntryStore::new(workspace.storage());

            let categories = list_categories(&store)?;
            println!("{}", format_category_list(&categories));
            Ok(())
        }

        Commands::Storage => {
            let workspace = Workspace::discover()?;
            let store = EntryStore::new(workspace.storage());

            let snapshot = storage_report(&store)?;
            println!("{}", format_capacity(&snapshot));
            Ok(())
        }

        Commands::Config { key, value, list } => {
            let workspace = Workspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                println!("notifications = {}", config.notifications);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: vent config [--list | <key> [<value>]]");
                println!("Valid keys: notifications, created");
                Ok(())
            }
        }
    }
}
