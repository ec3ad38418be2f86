use clap::{App, AppSettings, Arg};

pub struct Args {
    pub catalogue_file: String,
    pub sales_file: String,
}

impl Args {
    /// Parses the two required positional arguments. Any other argument
    /// count makes clap print the usage message and exit with status 1.
    ///
    /// There are no flags: `--help` and `-V` count as arguments like any
    /// other, and paths may start with `-`.
    pub fn parse() -> Self {
        let matches = App::new("compute_sales")
            .about("Computes the total cost of a sales record against a price catalogue")
            .setting(AppSettings::DisableHelpFlags)
            .setting(AppSettings::DisableVersion)
            .setting(AppSettings::AllowLeadingHyphen)
            .arg(
                Arg::with_name("price_catalogue")
                    .takes_value(true)
                    .required(true)
                    .allow_hyphen_values(true)
                    .help("path of the JSON price catalogue"),
            )
            .arg(
                Arg::with_name("sales_record")
                    .takes_value(true)
                    .required(true)
                    .allow_hyphen_values(true)
                    .help("path of the JSON sales record"),
            )
            .get_matches();

        Self {
            catalogue_file: matches
                .value_of("price_catalogue")
                .unwrap_or_default()
                .to_string(),
            sales_file: matches
                .value_of("sales_record")
                .unwrap_or_default()
                .to_string(),
        }
    }
}
