use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CalculatorManifest {
    min_area: u32,
    max_area: u32,
    conditions: BTreeMap<String, f64>,
    rates: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct WidgetsManifest {
    schema_version: u32,
    calculator: CalculatorManifest,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("widgets.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: WidgetsManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "widget config schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let calculator = &manifest.calculator;
    if calculator.min_area >= calculator.max_area {
        panic!(
            "calculator area bounds are inverted in {}: {}..{}",
            path.display(),
            calculator.min_area,
            calculator.max_area
        );
    }
    if calculator.rates.is_empty() || calculator.conditions.is_empty() {
        panic!("calculator rates and conditions must not be empty in {}", path.display());
    }
    if let Some((name, value)) = calculator
        .conditions
        .iter()
        .find(|(_, value)| !(value.is_finite() && **value > 0.0))
    {
        panic!(
            "condition coefficient `{name}` must be positive in {}: {value}",
            path.display()
        );
    }

    let value: toml::Value = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    let json = serde_json::to_string_pretty(&value).expect("serialize widget config");
    let generated = format!(
        "/// Build-time generated widget configuration JSON.\n\
pub const WIDGETS_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("widgets_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
