use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tablegen::{CoeffMethod, DataType, Family, TableSpec, report};
use tracing::Level;

/// Headers are written here, relative to the working directory.
const OUT_DIR: &str = "tables";

#[derive(Parser, Debug)]
#[command(name = "tablegen")]
#[command(about = "Precompute wave/parameter tables as C headers", long_about = None)]
struct Args {
    /// C integer data type
    #[arg(short = 'T', long, value_enum, default_value_t = DataType::U16)]
    dtype: DataType,

    /// Table length
    #[arg(short = 'L', long, default_value = "1024")]
    length: usize,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    table: TableCommand,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
enum TableCommand {
    /// One period of a sine wave
    Sine,
    /// Exponential frequency table
    Exp {
        /// Max/Min ratio
        #[arg(allow_negative_numbers = true)]
        ratio: f64,
    },
    /// Volts per octave table
    Voct {
        /// Reference frequency in (0, 0.5)
        #[arg(value_name = "REF", allow_negative_numbers = true)]
        reference: f64,
        /// Number of octaves
        #[arg(allow_negative_numbers = true)]
        n_octs: f64,
    },
    /// One-pole low-pass coefficient table
    Coeff {
        /// Coefficient calculation method
        #[arg(value_enum)]
        method: CoeffMethod,
        /// Minimum frequency in (0, 0.5)
        #[arg(allow_negative_numbers = true)]
        fmin: f64,
        /// Maximum frequency in (0, 0.5)
        #[arg(allow_negative_numbers = true)]
        fmax: f64,
    },
}

impl From<TableCommand> for Family {
    fn from(command: TableCommand) -> Self {
        match command {
            TableCommand::Sine => Family::Sine,
            TableCommand::Exp { ratio } => Family::Exp { ratio },
            TableCommand::Voct { reference, n_octs } => Family::Voct {
                reference,
                octaves: n_octs,
            },
            TableCommand::Coeff { method, fmin, fmax } => Family::Coeff { method, fmin, fmax },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let spec = TableSpec::new(args.table.into(), args.dtype, args.length);
    let (table, path) = spec
        .write(Path::new(OUT_DIR))
        .with_context(|| format!("could not generate {}", spec.name()))?;

    report::log_summary(&table);
    println!("{}", path.display());

    Ok(())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_are_u16_by_1024() {
        let args = Args::try_parse_from(["tablegen", "sine"]).unwrap();

        assert_eq!(args.dtype, DataType::U16);
        assert_eq!(args.length, 1024);
        assert_eq!(args.table, TableCommand::Sine);
    }

    #[test]
    fn global_options_and_subcommand_arguments() {
        let args = Args::try_parse_from([
            "tablegen", "-T", "u8", "-L", "256", "coeff", "tpt", "0.001", "0.4",
        ])
        .unwrap();

        assert_eq!(args.dtype, DataType::U8);
        assert_eq!(args.length, 256);
        assert_eq!(
            Family::from(args.table),
            Family::Coeff {
                method: CoeffMethod::Tpt,
                fmin: 0.001,
                fmax: 0.4
            }
        );
    }

    #[test]
    fn voct_maps_to_explicit_parameters() {
        let args =
            Args::try_parse_from(["tablegen", "--dtype", "u32", "voct", "0.028", "8"]).unwrap();

        assert_eq!(
            Family::from(args.table),
            Family::Voct {
                reference: 0.028,
                octaves: 8.0
            }
        );
    }

    #[test]
    fn negative_parameters_reach_validation() {
        let args = Args::try_parse_from(["tablegen", "exp", "-5"]).unwrap();
        assert_eq!(args.table, TableCommand::Exp { ratio: -5.0 });

        let args = Args::try_parse_from(["tablegen", "coeff", "z", "-0.1", "0.2"]).unwrap();
        assert_eq!(
            Family::from(args.table),
            Family::Coeff {
                method: CoeffMethod::Z,
                fmin: -0.1,
                fmax: 0.2
            }
        );
    }

    #[test]
    fn rejects_unknown_types_and_methods() {
        assert!(Args::try_parse_from(["tablegen", "-T", "u64", "sine"]).is_err());
        assert!(Args::try_parse_from(["tablegen", "coeff", "bilinear", "0.1", "0.2"]).is_err());
        assert!(Args::try_parse_from(["tablegen", "exp"]).is_err());
        assert!(Args::try_parse_from(["tablegen"]).is_err());
    }
}
