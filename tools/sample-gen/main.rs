use clap::Parser;
use docform::schema::{FieldDefinition, FieldType, FormDefinition};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::{Map, Value as Json, json};
use std::fs;

const WORDS: [&str; 8] = [
    "alpha", "invoice", "north", "cash", "pending", "export", "retail", "42",
];

/// Generates random value maps for a form definition, for exercising the
/// rule and validation engines
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the form definition JSON file
    form_path: String,

    /// The path to write the generated JSON array to
    #[arg(short, long, default_value = "generated_values.json")]
    output: String,

    /// How many value maps to generate
    #[arg(short, long, default_value_t = 100)]
    count: usize,

    /// Probability that a field is left empty
    #[arg(long, default_value_t = 0.1)]
    empty_ratio: f64,

    /// Probability that a NUMBER value is written as text
    #[arg(long, default_value_t = 0.3)]
    text_numbers: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.empty_ratio) || !(0.0..=1.0).contains(&cli.text_numbers) {
        eprintln!("Error: ratios must be between 0 and 1");
        std::process::exit(1);
    }

    let form = FormDefinition::from_json(&fs::read_to_string(&cli.form_path)?)?;
    let mut rng = rand::rng();

    println!(
        "Generating {} value maps for form '{}' ({} fields)...",
        cli.count,
        form.name,
        form.fields.len()
    );

    let samples: Vec<Json> = (0..cli.count)
        .map(|_| {
            let map: Map<String, Json> = form
                .fields
                .iter()
                .filter_map(|field| {
                    if rng.random_bool(cli.empty_ratio) {
                        // Alternate between a missing key and an empty string.
                        return rng.random_bool(0.5).then(|| (field.name.clone(), json!("")));
                    }
                    Some((field.name.clone(), generate_value(&mut rng, field, cli.text_numbers)))
                })
                .collect();
            Json::Object(map)
        })
        .collect();

    fs::write(&cli.output, serde_json::to_string_pretty(&samples)?)?;
    println!("Successfully wrote {} samples to '{}'", samples.len(), cli.output);
    Ok(())
}

fn generate_value<R: Rng>(rng: &mut R, field: &FieldDefinition, text_numbers: f64) -> Json {
    match field.field_type {
        FieldType::Text | FieldType::Textarea => json!(WORDS.choose(rng).copied().unwrap_or("")),
        FieldType::Number => {
            // Reach a little past the bounds so min/max violations show up.
            let low = field.min.unwrap_or(0.0) - 10.0;
            let high = field.max.unwrap_or(1000.0) + 10.0;
            let n = if high > low {
                (rng.random_range(low..high) * 100.0).round() / 100.0
            } else {
                low
            };
            if rng.random_bool(text_numbers) {
                json!(n.to_string())
            } else {
                json!(n)
            }
        }
        FieldType::Date => json!(format!(
            "2024-{:02}-{:02}",
            rng.random_range(1..=12),
            rng.random_range(1..=28)
        )),
        FieldType::Select => match field.options.as_deref().and_then(|o| o.choose(rng)) {
            Some(option) => serde_json::to_value(&option.value).unwrap_or(Json::Null),
            None => json!(WORDS.choose(rng).copied().unwrap_or("")),
        },
        FieldType::Checkbox => json!(rng.random_bool(0.5)),
        FieldType::Relation => json!(format!("REL-{:04}", rng.random_range(0..10_000))),
    }
}
