//! CLI tool for the card form.
//!
//! # Usage
//!
//! ```bash
//! # Format a field the way the form does while typing
//! cardform format number 4111111111111111
//! cardform format cvc 12345 --network amex
//!
//! # Detect the card network
//! cardform detect 5067
//!
//! # Render the card preview
//! cardform preview --number 41111111 --name "Jane Doe"
//!
//! # Validate a complete form
//! cardform validate --number 4111111111111111 --name "Jane Doe" \
//!     --month 05 --year 27 --cvc 123 --output json
//!
//! # List the network catalog
//! cardform networks
//! ```

use card_form::form::Field;
use card_form::{
    all_networks, detect_network, format, network, validate_form, CardForm, CardNetwork,
    CardPreview, FieldError,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Credit card form formatting and validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a single field value as the form would while typing
    Format {
        /// Field to format
        field: FieldArg,

        /// Raw field value
        value: String,

        /// Card network id for CVC formatting (visa, mastercard, amex, elo, hipercard)
        #[arg(short, long)]
        network: Option<CardNetwork>,
    },

    /// Detect the card network from a (partial) card number
    Detect {
        /// Card number or prefix
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Render the card preview for the given field values
    Preview {
        #[command(flatten)]
        fields: FormArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate a complete form
    Validate {
        #[command(flatten)]
        fields: FormArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// List the supported card networks in detection order
    Networks,
}

/// Raw form values; each one goes through the field formatter first.
#[derive(Args)]
struct FormArgs {
    /// Card number
    #[arg(long, default_value = "")]
    number: String,

    /// Cardholder name
    #[arg(long, default_value = "")]
    name: String,

    /// Expiry month
    #[arg(long, default_value = "")]
    month: String,

    /// Expiry year (2 digits)
    #[arg(long, default_value = "")]
    year: String,

    /// Card verification code
    #[arg(long, default_value = "")]
    cvc: String,
}

impl FormArgs {
    /// Feeds the values through a session in form order, so the CVC is cut
    /// for the network of the number.
    fn into_session(self) -> CardForm {
        let mut form = CardForm::new();
        form.input_card_number(&self.number);
        form.input_holder_name(&self.name);
        form.input_month(&self.month);
        form.input_year(&self.year);
        form.input_cvc(&self.cvc);
        form
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldArg {
    Number,
    Name,
    Month,
    Year,
    Cvc,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Number => Field::CardNumber,
            FieldArg::Name => Field::HolderName,
            FieldArg::Month => Field::Month,
            FieldArg::Year => Field::Year,
            FieldArg::Cvc => Field::Cvc,
        }
    }
}

#[derive(Serialize)]
struct DetectOutput {
    network: &'static str,
    name: Option<&'static str>,
    asset_id: &'static str,
    cvc_length: usize,
}

#[derive(Serialize)]
struct ErrorOutput {
    field: Field,
    message: String,
}

#[derive(Serialize)]
struct ValidateOutput {
    valid: bool,
    errors: Vec<ErrorOutput>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            field,
            value,
            network,
        } => {
            cmd_format(field.into(), &value, network);
        }
        Commands::Detect {
            card_number,
            output,
        } => {
            cmd_detect(&card_number, output);
        }
        Commands::Preview { fields, output } => {
            cmd_preview(fields, output);
        }
        Commands::Validate { fields, output } => {
            cmd_validate(fields, output);
        }
        Commands::Networks => {
            cmd_networks();
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn cmd_format(field: Field, value: &str, network: Option<CardNetwork>) {
    let formatted = match field {
        Field::CardNumber => format::format_card_number(value),
        Field::HolderName => format::format_holder_name(value),
        Field::Month => format::format_month(value),
        Field::Year => format::format_year(value),
        Field::Cvc => format::format_cvc(value, network),
    };
    println!("{}", formatted);
}

fn cmd_detect(card_number: &str, output: OutputFormat) {
    let detected = detect_network(card_number);
    let result = DetectOutput {
        network: network::network_id(detected),
        name: detected.map(|n| n.name()),
        asset_id: card_form::preview::project_network_asset(detected),
        cvc_length: network::cvc_length_for(detected),
    };

    match output {
        OutputFormat::Text => {
            println!("Network: {}", result.name.unwrap_or("Unknown"));
            println!("Id: {}", result.network);
            println!("Asset: {}", result.asset_id);
            println!("CVC Length: {}", result.cvc_length);
        }
        OutputFormat::Json => print_json(&result),
    }
}

fn print_preview(preview: &CardPreview) {
    println!("Number: {}", preview.number_line());
    println!("Name: {}", preview.holder_name);
    println!("Expiry: {}", preview.expiry);
    println!("CVC: {}", preview.cvc);
    println!("Logo: {}", preview.asset_id);
}

fn cmd_preview(fields: FormArgs, output: OutputFormat) {
    let preview = fields.into_session().preview();

    match output {
        OutputFormat::Text => print_preview(&preview),
        OutputFormat::Json => print_json(&preview),
    }
}

fn cmd_validate(fields: FormArgs, output: OutputFormat) {
    let form = fields.into_session();
    let report = validate_form(form.state());

    match output {
        OutputFormat::Text => {
            if report.is_valid() {
                println!("Valid: yes");
                println!("Network: {}", network::network_id(form.network()));
            } else {
                println!("Valid: no");
                for error in report.errors() {
                    println!("Error ({}): {}", error.field(), error);
                }
            }
        }
        OutputFormat::Json => {
            let errors = report
                .errors()
                .iter()
                .map(|e: &FieldError| ErrorOutput {
                    field: e.field(),
                    message: e.message(),
                })
                .collect();
            print_json(&ValidateOutput {
                valid: report.is_valid(),
                errors,
            });
        }
    }

    std::process::exit(if report.is_valid() { 0 } else { 1 });
}

fn cmd_networks() {
    for (priority, def) in all_networks().iter().enumerate() {
        println!(
            "{}. {} ({}) prefixes: {} | CVC: {} | asset: {}",
            priority + 1,
            def.network.name(),
            def.network.id(),
            def.prefixes.join(", "),
            def.network.cvc_length(),
            def.asset_id
        );
    }
}
