use crate::cli::commands::{Cli, Commands};
use crate::cli::output;
use crate::io::config_io::load_config;
use crate::io::data_io::load_records;
use crate::ops::filter::filter_records;
use crate::ops::store::RecordStore;

/// Dispatch a CLI subcommand.
///
/// Unlike the TUI (which comes up with an empty list on a broken source, so
/// the user can see the failure on the status row), the CLI propagates load
/// errors — a script wants the nonzero exit.
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;
    let records = load_records(cli.data.as_deref())?;
    let store = RecordStore::load(records);
    let policy = config.age_field;
    let today = chrono::Local::now().date_naive();

    let Some(command) = cli.command else {
        // The TUI path is handled in main.rs
        return Ok(());
    };

    match command {
        Commands::List => {
            let all: Vec<_> = store.records().iter().collect();
            if cli.json {
                let json: Vec<_> = all
                    .iter()
                    .map(|r| output::record_json(r, policy, today))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                output::print_records(&all, policy, today);
            }
        }
        Commands::Search(args) => {
            let matches = filter_records(store.records(), &args.term);
            if cli.json {
                let json: Vec<_> = matches
                    .iter()
                    .map(|r| output::record_json(r, policy, today))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                output::print_records(&matches, policy, today);
            }
        }
        Commands::Show(args) => {
            let record = store
                .get(&args.id)
                .ok_or_else(|| format!("no record with id \"{}\"", args.id))?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::record_json(record, policy, today))?
                );
            } else {
                output::print_record_detail(record, policy, today);
            }
        }
    }

    Ok(())
}
