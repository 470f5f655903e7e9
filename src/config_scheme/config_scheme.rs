use crate::config_scheme::config_error::ConfigError;
use crate::config_scheme::helper_functions::set_log_level;
use crate::config_scheme::service_config::ServiceConfig;
use clap::{App, AppSettings, Arg, ArgMatches, ValueHint};

#[derive(Clone)]
pub struct ConfigScheme {
    pub service: ServiceConfig,
    pub matches: ArgMatches,
}

impl ConfigScheme {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_matches(Self::make_app().get_matches())
    }

    pub fn from_matches(matches: ArgMatches) -> Result<Self, ConfigError> {
        let service = ServiceConfig::new(&matches)?;

        set_log_level(service.log_level);

        Ok(Self { service, matches })
    }

    pub fn make_app() -> App<'static> {
        App::new("coin-vault")
            .version("0.1.0")
            .about("Personal coin collection")
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .arg(
                Arg::new("service_config")
                    .long("service_config")
                    .value_name("PATH")
                    .takes_value(true)
                    .help("Service config file path")
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(App::new("list").about("Print every coin in the collection"))
            .subcommand(
                App::new("search")
                    .about("Print coins whose title, country or year contain QUERY")
                    .arg(Arg::new("query").value_name("QUERY")),
            )
            .subcommand(
                App::new("add")
                    .about("Add a coin to the collection")
                    .arg(Self::text_arg("title").required(true))
                    .arg(Self::text_arg("country").required(true))
                    .arg(Self::text_arg("year").required(true))
                    .arg(Self::text_arg("description"))
                    .arg(Self::text_arg("image").help("Encoded image payload (base64 or data URL)"))
                    .arg(Self::text_arg("estimated_value").long("estimated-value"))
                    .arg(Self::text_arg("composition")),
            )
            .subcommand(
                App::new("delete")
                    .about("Delete a coin by id")
                    .arg(Arg::new("id").value_name("ID").required(true)),
            )
            .subcommand(
                App::new("show")
                    .about("Print every field of one coin")
                    .arg(Arg::new("id").value_name("ID").required(true)),
            )
            .subcommand(App::new("count").about("Print how many coins are collected"))
    }

    fn text_arg(name: &'static str) -> Arg<'static> {
        Arg::new(name).long(name).value_name("TEXT").takes_value(true)
    }
}
