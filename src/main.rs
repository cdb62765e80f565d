use clap::{Parser, Subcommand};
use netcalc::config::{Config, OutputFormat};
use netcalc::output::{format_error, Report};
use netcalc::{classify, convert, logging, numeric};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "netcalc", version)]
#[command(about = "IPv4 address, network mask and number calculator", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Reject network masks whose bits are not contiguous
    #[arg(long, global = true)]
    strict: bool,
    /// log4rs YAML configuration file
    #[arg(long, global = true)]
    log_config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dotted decimal IPv4 address to hexadecimal
    ToHex { address: String },
    /// Dotted decimal IPv4 address to nibble grouped binary
    ToBin { address: String },
    /// 32 bit binary to dotted decimal (spaces allowed)
    FromBin {
        #[arg(required = true, num_args = 1..)]
        binary: Vec<String>,
    },
    /// 8 digit hexadecimal to dotted decimal (spaces allowed)
    FromHex {
        #[arg(required = true, num_args = 1..)]
        hex: Vec<String>,
    },
    /// Network mask to CIDR slash value
    MaskToCidr { mask: String },
    /// CIDR slash value (e.g. /24) to network mask
    CidrToMask { cidr: String },
    /// Network address of a host under a mask
    Network { host: String, mask: String },
    /// Private / loopback / link-local unicast / multicast flags of an IP address
    Info { address: String },
    /// Decimal number to hexadecimal and binary
    Dec {
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// Hexadecimal number to decimal and binary
    Hex {
        #[arg(required = true, num_args = 1..)]
        value: Vec<String>,
    },
    /// Binary number to decimal and hexadecimal
    Bin {
        #[arg(required = true, num_args = 1..)]
        value: Vec<String>,
    },
    /// Group a binary number into nibbles
    Nibbles {
        #[arg(required = true, num_args = 1..)]
        binary: Vec<String>,
    },
    /// Bitwise AND of two binary numbers
    And { first: String, second: String },
}

#[derive(Serialize)]
struct Bases {
    decimal: String,
    hexadecimal: String,
    binary: String,
}

fn run(command: Commands, config: &Config) -> netcalc::Result<Report> {
    let report = match command {
        Commands::ToHex { address } => {
            let hex = convert::address_to_hex(&address)?;
            Report::new("to-hex", vec![address], hex)
        }
        Commands::ToBin { address } => {
            let bin = convert::address_to_binary(&address)?;
            Report::new("to-bin", vec![address], bin)
        }
        Commands::FromBin { binary } => {
            let binary = binary.join(" ");
            let addr = convert::binary_to_address(&binary)?;
            Report::new("from-bin", vec![binary], addr)
        }
        Commands::FromHex { hex } => {
            let hex = hex.join(" ");
            let addr = convert::hex_to_address(&hex)?;
            Report::new("from-hex", vec![hex], addr)
        }
        Commands::MaskToCidr { mask } => {
            let cidr = if config.strict_mask {
                convert::mask_to_cidr_strict(&mask)?
            } else {
                convert::mask_to_cidr(&mask)?
            };
            Report::new("mask-to-cidr", vec![mask], cidr)
        }
        Commands::CidrToMask { cidr } => {
            let mask = convert::cidr_to_mask(&cidr)?;
            Report::new("cidr-to-mask", vec![cidr], mask)
        }
        Commands::Network { host, mask } => {
            if config.strict_mask {
                convert::mask_to_cidr_strict(&mask)?;
            }
            let network = convert::network_address(&host, &mask)?;
            Report::new("network", vec![host, mask], network)
        }
        Commands::Info { address } => {
            let info = classify::classify(&address)?;
            Report::new("info", vec![address], info)
        }
        Commands::Dec { value } => {
            let decimal = value.trim().to_string();
            let bases = Bases {
                hexadecimal: numeric::decimal_to_hex(&decimal)?,
                binary: numeric::format_in_nibbles(&numeric::decimal_to_binary(&decimal)?),
                decimal,
            };
            Report::new("dec", vec![value], bases)
        }
        Commands::Hex { value } => {
            let hex = value.join(" ");
            let bases = Bases {
                decimal: numeric::hex_to_decimal(&hex)?,
                binary: numeric::hex_to_binary(&hex)?,
                hexadecimal: numeric::strip_spaces(&hex).to_uppercase(),
            };
            Report::new("hex", vec![hex], bases)
        }
        Commands::Bin { value } => {
            let bin = value.join(" ");
            let bases = Bases {
                decimal: numeric::binary_to_decimal(&bin)?,
                hexadecimal: numeric::binary_to_hex(&bin)?,
                binary: numeric::format_in_nibbles(&bin),
            };
            Report::new("bin", vec![bin], bases)
        }
        Commands::Nibbles { binary } => {
            let binary = binary.join(" ");
            let grouped = numeric::format_in_nibbles(&binary);
            Report::new("nibbles", vec![binary], grouped)
        }
        Commands::And { first, second } => {
            let result = numeric::and_binary(&first, &second)?;
            Report::new("and", vec![first, second], result)
        }
    };
    Ok(report)
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Keep main() small, the operations live in the library
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(path) = cli.log_config {
        config.log_config = path;
    }
    if cli.strict {
        config.strict_mask = true;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }

    logging::init(&config.log_config)?;
    if let Some(path) = &config.env_file {
        log::debug!("Loaded environment from {}", path.display());
    }
    log::debug!("Start netcalc with {config:?}");

    match run(cli.command, &config) {
        Ok(report) => {
            match config.output {
                OutputFormat::Text => println!("{}", report.to_text()),
                OutputFormat::Json => println!("{}", report.to_json()?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::info!("{e}");
            eprintln!("{}", format_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
