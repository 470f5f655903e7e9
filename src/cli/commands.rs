use crate::cli::printer::{print_count, print_detail, print_rows};
use crate::collection::coin::{Coin, CoinDraft};
use crate::collection::collection_service::CollectionService;
use crate::repository::storage_error::StorageError;
use clap::ArgMatches;
use std::io::{self, Write};

/// Runs the chosen subcommand. `Ok(false)` means a notice went to `err` and
/// the process should exit non-zero.
pub fn run(
    matches: &ArgMatches,
    service: &CollectionService,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<bool> {
    match matches.subcommand() {
        Some(("list", _)) => {
            let coins = service.load();

            if coins.is_empty() {
                writeln!(out, "No coins in the collection yet")?;
            } else {
                print_rows(out, &coins)?;
            }

            Ok(true)
        }
        Some(("search", sub_matches)) => {
            let query = sub_matches.value_of("query").unwrap_or_default();
            let coins = service.search(query);

            if coins.is_empty() {
                writeln!(out, "No coins found matching \"{}\"", query)?;
            } else {
                print_rows(out, &coins)?;
            }

            Ok(true)
        }
        Some(("add", sub_matches)) => {
            let result = service.add(draft_from_matches(sub_matches));

            report_mutation(out, err, result, "Cannot save coin")
        }
        Some(("delete", sub_matches)) => {
            let id = sub_matches.value_of("id").unwrap_or_default();
            let result = service.delete(id);

            report_mutation(out, err, result, "Cannot delete coin")
        }
        Some(("show", sub_matches)) => {
            let id = sub_matches.value_of("id").unwrap_or_default();

            match service.find(id) {
                Some(coin) => {
                    print_detail(out, &coin)?;

                    Ok(true)
                }
                None => {
                    writeln!(err, "No coin with id {}", id)?;

                    Ok(false)
                }
            }
        }
        Some(("count", _)) => {
            print_count(out, service.count())?;

            Ok(true)
        }
        Some((other, _)) => {
            writeln!(err, "Unknown command: {}", other)?;

            Ok(false)
        }
        None => Ok(false),
    }
}

fn draft_from_matches(matches: &ArgMatches) -> CoinDraft {
    let text = |key: &str| matches.value_of(key).unwrap_or_default().to_string();
    let optional = |key: &str| {
        matches
            .value_of(key)
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    };

    CoinDraft {
        title: text("title"),
        country: text("country"),
        year: text("year"),
        description: text("description"),
        image: text("image"),
        estimated_value: optional("estimated_value"),
        composition: optional("composition"),
    }
}

fn report_mutation(
    out: &mut dyn Write,
    err: &mut dyn Write,
    result: Result<Vec<Coin>, StorageError>,
    notice: &str,
) -> io::Result<bool> {
    match result {
        Ok(coins) => {
            print_count(out, coins.len())?;

            Ok(true)
        }
        Err(e) => {
            error!("{}: {}", notice, e);
            writeln!(err, "{}: {}", notice, e)?;

            Ok(false)
        }
    }
}
