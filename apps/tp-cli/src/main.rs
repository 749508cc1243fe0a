use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tp_app::{CellValue, Evaluated, PropsError};
use tp_core::timing::{self, native_timing};
use tp_fluids::{Vocabulary, classify, resolve};
use tp_native::EngineConfig;

#[derive(Parser)]
#[command(name = "tp-cli")]
#[command(about = "thermoprops CLI - CoolProp property queries with unit and alias handling", long_about = None)]
struct Cli {
    /// YAML file with library location settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Print a native call timing breakdown after the command
    #[arg(long, global = true)]
    timing: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Values: `300` is a scalar, `300,310,320` a row, `300;310;320` a column.
#[derive(Subcommand)]
enum Commands {
    /// State property in engineering units (°C, bar, kJ)
    #[command(alias = "tmpr")]
    Props {
        output: String,
        name1: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value1: CellValue,
        name2: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value2: CellValue,
        fluid: String,
    },
    /// State property in SI units
    PropsSi {
        output: String,
        name1: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value1: CellValue,
        name2: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value2: CellValue,
        fluid: String,
    },
    /// Phase name, engineering inputs
    Phase {
        name1: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value1: CellValue,
        name2: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value2: CellValue,
        fluid: String,
    },
    /// Phase name, SI inputs
    PhaseSi {
        name1: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value1: CellValue,
        name2: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value2: CellValue,
        fluid: String,
    },
    /// Single-input property (e.g. Tcrit, molar mass), engineering units
    Props1 { output: String, fluid: String },
    /// Single-input property, SI units
    Props1Si { output: String, fluid: String },
    /// Humid-air property in engineering units
    #[command(alias = "tmpa")]
    HaProps {
        output: String,
        name1: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value1: CellValue,
        name2: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value2: CellValue,
        name3: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value3: CellValue,
    },
    /// Humid-air property in SI units
    HaPropsSi {
        output: String,
        name1: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value1: CellValue,
        name2: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value2: CellValue,
        name3: String,
        #[arg(allow_hyphen_values = true, value_parser = parse_cell)]
        value3: CellValue,
    },
    /// Global engine parameter (version, gitrevision, ...)
    GlobalParam { param: String },
    /// Fluid parameter (CAS, aliases, formula, ...)
    FluidParam { fluid: String, param: String },
    /// Build a HEOS mixture string
    Mixture {
        /// Comma-separated component names
        #[arg(long, value_delimiter = ',')]
        elements: Vec<String>,
        /// Comma-separated fractions, one per component
        #[arg(long, value_delimiter = ',')]
        fractions: Vec<String>,
    },
    /// Show where the native library is searched for
    Diag,
    /// Resolve raw tokens to canonical names
    Resolve {
        /// property, fluid or humid-air
        #[arg(long, default_value = "property")]
        vocab: Vocabulary,
        tokens: Vec<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Props(#[from] PropsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.timing {
        timing::enable_timing();
    }
    if let Some(path) = &cli.config {
        let config =
            EngineConfig::from_yaml_file(path)?.with_env_overrides(|key| std::env::var(key).ok());
        if !tp_native::configure(config) {
            tracing::warn!("engine already configured; ignoring {}", path.display());
        }
    }

    let out = Output { json: cli.json };
    let result = run(cli.command, &out);
    if cli.timing {
        eprint!("{}", native_timing::summary());
    }
    result
}

fn run(command: Commands, out: &Output) -> Result<(), CliError> {
    match command {
        Commands::Props {
            output,
            name1,
            value1,
            name2,
            value2,
            fluid,
        } => out.evaluated(
            tp_app::session()?.props(&output, &name1, &value1, &name2, &value2, &fluid)?,
        ),
        Commands::PropsSi {
            output,
            name1,
            value1,
            name2,
            value2,
            fluid,
        } => out.evaluated(
            tp_app::session()?.props_si(&output, &name1, &value1, &name2, &value2, &fluid)?,
        ),
        Commands::Phase {
            name1,
            value1,
            name2,
            value2,
            fluid,
        } => out.text(&tp_app::session()?.phase(&name1, &value1, &name2, &value2, &fluid)?),
        Commands::PhaseSi {
            name1,
            value1,
            name2,
            value2,
            fluid,
        } => out.text(&tp_app::session()?.phase_si(&name1, &value1, &name2, &value2, &fluid)?),
        Commands::Props1 { output, fluid } => {
            out.evaluated(Evaluated::Scalar(tp_app::session()?.props1(&output, &fluid)?))
        }
        Commands::Props1Si { output, fluid } => {
            out.evaluated(Evaluated::Scalar(tp_app::session()?.props1_si(&output, &fluid)?))
        }
        Commands::HaProps {
            output,
            name1,
            value1,
            name2,
            value2,
            name3,
            value3,
        } => {
            let session = tp_app::session()?;
            out.evaluated(session.ha_props(
                &output, &name1, &value1, &name2, &value2, &name3, &value3,
            )?)
        }
        Commands::HaPropsSi {
            output,
            name1,
            value1,
            name2,
            value2,
            name3,
            value3,
        } => {
            let session = tp_app::session()?;
            out.evaluated(session.ha_props_si(
                &output, &name1, &value1, &name2, &value2, &name3, &value3,
            )?)
        }
        Commands::GlobalParam { param } => out.text(&tp_app::session()?.global_param(&param)?),
        Commands::FluidParam { fluid, param } => {
            out.text(&tp_app::session()?.fluid_param(&fluid, &param)?)
        }
        Commands::Mixture {
            elements,
            fractions,
        } => {
            let elements = column(elements.iter().map(|e| CellValue::Text(e.clone())));
            let fractions = column(fractions.iter().map(|f| scalar_cell(f)));
            out.text(&tp_app::mixture_string(&elements, &fractions)?)
        }
        Commands::Diag => {
            let report = tp_app::diagnostics();
            if out.json {
                println!("{}", report.to_json()?);
            } else {
                print!("{report}");
            }
            Ok(())
        }
        Commands::Resolve { vocab, tokens } => cmd_resolve(vocab, &tokens, out),
    }
}

#[derive(Serialize)]
struct Resolved<'a> {
    token: &'a str,
    canonical: String,
    category: String,
}

fn cmd_resolve(vocab: Vocabulary, tokens: &[String], out: &Output) -> Result<(), CliError> {
    let rows: Vec<Resolved> = tokens
        .iter()
        .map(|token| {
            let canonical = resolve(vocab, token).into_owned();
            let category = classify(&canonical).to_string();
            Resolved {
                token,
                canonical,
                category,
            }
        })
        .collect();

    if out.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    println!("{} vocabulary ({} aliases):", vocab.label(), vocab.table().len());
    for r in &rows {
        if vocab == Vocabulary::Fluid {
            println!("  {} -> {}", r.token, r.canonical);
        } else {
            println!("  {} -> {} [{}]", r.token, r.canonical, r.category);
        }
    }
    Ok(())
}

struct Output {
    json: bool,
}

impl Output {
    fn evaluated(&self, value: Evaluated) -> Result<(), CliError> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }
        match value {
            Evaluated::Scalar(x) => println!("{x}"),
            Evaluated::Row(values) => println!(
                "{}",
                values
                    .iter()
                    .map(f64::to_string)
                    .collect::<Vec<_>>()
                    .join("\t")
            ),
            Evaluated::Column(values) => {
                for x in values {
                    println!("{x}");
                }
            }
        }
        Ok(())
    }

    fn text(&self, value: &str) -> Result<(), CliError> {
        if self.json {
            println!("{}", serde_json::to_string(value)?);
        } else {
            println!("{value}");
        }
        Ok(())
    }
}

fn scalar_cell(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        CellValue::Empty
    } else if let Ok(x) = s.parse::<f64>() {
        CellValue::Number(x)
    } else {
        CellValue::Text(s.to_string())
    }
}

fn column(cells: impl Iterator<Item = CellValue>) -> CellValue {
    CellValue::Grid(cells.map(|c| vec![c]).collect())
}

fn parse_cell(s: &str) -> Result<CellValue, String> {
    if s.contains(';') {
        Ok(column(s.split(';').map(scalar_cell)))
    } else if s.contains(',') {
        Ok(CellValue::Grid(vec![s.split(',').map(scalar_cell).collect()]))
    } else {
        Ok(scalar_cell(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_syntax() {
        assert_eq!(parse_cell("300").unwrap(), CellValue::Number(300.0));
        assert_eq!(parse_cell("-5.5").unwrap(), CellValue::Number(-5.5));
        assert_eq!(parse_cell("1,2").unwrap(), CellValue::row([1.0, 2.0]));
        assert_eq!(parse_cell("1;2;3").unwrap(), CellValue::column([1.0, 2.0, 3.0]));
        assert_eq!(parse_cell("").unwrap(), CellValue::Empty);
        assert_eq!(parse_cell("abc").unwrap(), CellValue::Text("abc".into()));
    }

    #[test]
    fn cli_parses_aliases() {
        let cli =
            Cli::try_parse_from(["tp-cli", "tmpr", "H", "T", "25", "P", "1,2", "Water"]).unwrap();
        assert!(matches!(cli.command, Commands::Props { .. }));

        let cli = Cli::try_parse_from([
            "tp-cli", "--json", "tmpa", "W", "T", "-10", "R", "0.5", "P", "1.01325",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::HaProps { .. }));
    }

    #[test]
    fn resolve_vocab_flag() {
        let cli = Cli::try_parse_from(["tp-cli", "resolve", "--vocab", "fluid", "R-134a"]).unwrap();
        let Commands::Resolve { vocab, tokens } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(vocab, Vocabulary::Fluid);
        assert_eq!(tokens, ["R-134a"]);
    }
}
