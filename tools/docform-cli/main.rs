use clap::{Parser, Subcommand, ValueEnum};
use docform::canonical::{IntoCanonical, WizardConfig};
use docform::layout::{AutoPlacer, PlacementInput, UiMode};
use docform::prelude::*;
use docform::validation::VoucherErrors;
use itertools::Itertools;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Values for a voucher: a header value map plus one map per line row.
#[derive(Deserialize)]
struct VoucherValues {
    #[serde(default)]
    header: serde_json::Value,
    #[serde(default)]
    lines: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeCli {
    Classic,
    Windows,
}

impl From<ModeCli> for UiMode {
    fn from(mode: ModeCli) -> Self {
        match mode {
            ModeCli::Classic => UiMode::Classic,
            ModeCli::Windows => UiMode::Windows,
        }
    }
}

/// Evaluate, validate and lay out declarative form definitions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log engine decisions (equivalent to RUST_LOG=docform=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the ids of the fields hidden by the form's visibility rules
    Visibility {
        form_path: String,
        values_path: String,
        /// Print why each rule matched or not
        #[arg(long)]
        explain: bool,
    },
    /// Validate values against a form definition
    Validate {
        form_path: String,
        values_path: String,
        /// Skip fields hidden by the visibility rules
        #[arg(long)]
        respect_visibility: bool,
    },
    /// Validate a voucher's header and line rows
    Voucher {
        voucher_path: String,
        values_path: String,
    },
    /// Coerce raw values into their submission types
    Coerce {
        form_path: String,
        values_path: String,
    },
    /// Auto-place a field selection and print the layout
    Layout {
        selection_path: String,
        /// Only print this UI mode
        #[arg(short, long, value_enum)]
        mode: Option<ModeCli>,
        /// Do not reserve the system fields at the top of the header
        #[arg(long)]
        no_system_fields: bool,
    },
    /// Convert a wizard config into its canonical document
    Canonical { wizard_path: String },
}

fn main() {
    let cli = Cli::parse();

    let default_directive = if cli.verbose { "docform=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Visibility {
            form_path,
            values_path,
            explain,
        } => run_visibility(&form_path, &values_path, explain),
        Command::Validate {
            form_path,
            values_path,
            respect_visibility,
        } => run_validate(&form_path, &values_path, respect_visibility),
        Command::Voucher {
            voucher_path,
            values_path,
        } => run_voucher(&voucher_path, &values_path),
        Command::Coerce {
            form_path,
            values_path,
        } => run_coerce(&form_path, &values_path),
        Command::Layout {
            selection_path,
            mode,
            no_system_fields,
        } => run_layout(&selection_path, mode, no_system_fields),
        Command::Canonical { wizard_path } => run_canonical(&wizard_path),
    }
}

fn run_visibility(form_path: &str, values_path: &str, explain: bool) {
    let form = load_form(form_path);
    let values = load_values(values_path);

    if explain {
        for trace in explain_visibility(&form.rules, &values) {
            let verdict = if trace.matched { "hides" } else { "keeps" };
            println!(
                "{} {} {}: {}",
                trace.rule_id,
                verdict,
                trace.target_field_id,
                TraceFormatter::format_rule(&trace)
            );
        }
        return;
    }

    let hidden = evaluate_visibility(&form.rules, &values);
    let hidden: Vec<_> = hidden.into_iter().sorted().collect();
    print_json(&hidden);
}

fn run_validate(form_path: &str, values_path: &str, respect_visibility: bool) {
    let form = load_form(form_path);
    let values = load_values(values_path);
    let validator = FormValidator::new(&form)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid form definition: {}", e)));

    let errors = if respect_visibility {
        let hidden = evaluate_visibility(&form.rules, &values);
        validator.validate_visible(&values, &hidden)
    } else {
        validator.validate(&values)
    };

    let failed = !errors.is_empty();
    print_json(&sorted(errors));
    if failed {
        std::process::exit(2);
    }
}

fn run_voucher(voucher_path: &str, values_path: &str) {
    let voucher = VoucherTypeDefinition::from_json(&read_file(voucher_path))
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid voucher definition: {}", e)));
    let values: VoucherValues = parse_json(values_path);

    let header = value_map_from_json(values.header);
    let lines: Vec<ValueMap> = values.lines.into_iter().map(value_map_from_json).collect();

    let validator = VoucherValidator::new(&voucher)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid voucher definition: {}", e)));
    let hidden = evaluate_visibility(&voucher.header.rules, &header);
    let VoucherErrors { header, lines } = validator.validate_visible(&header, &lines, &hidden);

    let failed = !header.is_empty() || !lines.is_empty();
    let report = serde_json::json!({
        "header": sorted(header),
        "lines": lines
            .into_iter()
            .map(|l| serde_json::json!({ "row": l.row, "errors": sorted(l.errors) }))
            .collect::<Vec<_>>(),
    });
    print_json(&report);
    if failed {
        std::process::exit(2);
    }
}

fn run_coerce(form_path: &str, values_path: &str) {
    let form = load_form(form_path);
    let values = load_values(values_path);
    print_json(&sorted(map_values_to_dto(&form.fields, &values)));
}

fn run_layout(selection_path: &str, mode: Option<ModeCli>, no_system_fields: bool) {
    let input: PlacementInput = parse_json(selection_path);
    let mut builder = AutoPlacer::builder();
    if no_system_fields {
        builder = builder.system_fields(Vec::<String>::new());
    }
    let layout = builder.build().place(&input);

    for (section, row) in UiMode::ALL
        .iter()
        .flat_map(|m| layout.mode(*m).overflowing_rows())
    {
        tracing::warn!(%section, row, "row wider than the grid");
    }

    match mode {
        Some(mode) => print_json(layout.mode(mode.into())),
        None => print_json(&layout),
    }
}

fn run_canonical(wizard_path: &str) {
    let wizard: WizardConfig = parse_json(wizard_path);
    let canonical = wizard
        .into_canonical()
        .unwrap_or_else(|e| exit_with_error(&format!("Conversion failed: {}", e)));
    print_json(&canonical);
}

fn load_form(path: &str) -> FormDefinition {
    let form = FormDefinition::from_json(&read_file(path))
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid form definition: {}", e)));
    for issue in form.reference_issues() {
        tracing::warn!(form = %form.id, "{}", issue);
    }
    form
}

fn load_values(path: &str) -> ValueMap {
    value_map_from_json(parse_json(path))
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read file '{}': {}", path, e)))
}

fn parse_json<T: DeserializeOwned>(path: &str) -> T {
    serde_json::from_str(&read_file(path))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse '{}': {}", path, e)))
}

fn sorted<V>(map: ahash::AHashMap<String, V>) -> BTreeMap<String, V> {
    map.into_iter().collect()
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&format!("Failed to serialize output: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
