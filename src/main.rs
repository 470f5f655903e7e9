use crate::cli::commands::run;
use crate::collection::collection_service::CollectionService;
use crate::config_scheme::config_scheme::ConfigScheme;
use crate::repository::repositories::Repositories;
use std::io;
use std::process;

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod cli;
mod collection;
mod config_scheme;
mod repository;


fn main() {
    let config = match ConfigScheme::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    let repositories = Repositories::new(&config.service);
    let service = CollectionService::new(repositories.coins);

    let stdout = io::stdout();
    let stderr = io::stderr();

    match run(
        &config.matches,
        &service,
        &mut stdout.lock(),
        &mut stderr.lock(),
    ) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
