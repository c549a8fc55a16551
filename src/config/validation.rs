//! Config validation: unknown-key detection with Levenshtein suggestions
//! and physical range checks.
//!
//! Two-pass parse: the raw TOML is first walked as a `toml::Value` tree and
//! every dotted key compared against the known schema, producing "did you
//! mean?" warnings. Serde deserialization runs afterwards. Unknown keys
//! only warn; range checks on the parsed config may fail.

use std::collections::HashSet;

use super::defaults::DUTY_SUM_TOLERANCE;
use super::LifeConfig;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for LifeConfig.
///
/// Array-of-table entries share their parent path (`scenarios.name`).
/// Must be kept in step with the structs in life_config.rs.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [bearing]
        "bearing",
        "bearing.kind",
        "bearing.rows",
        "bearing.elements_per_row",
        "bearing.element_diameter_mm",
        "bearing.contact_angle_deg",
        "bearing.outside_diameter_mm",
        "bearing.bore_diameter_mm",
        "bearing.fatigue_limit_load_n",
        "bearing.unit_height_mm",
        "bearing.manufacturer_rating_n",
        "bearing.catalogue_fc",
        // [lubrication]
        "lubrication",
        "lubrication.contamination_level",
        "lubrication.k",
        // [life]
        "life",
        "life.reliability_percent",
        "life.iso_correction",
        // [ingestion]
        "ingestion",
        "ingestion.data_dir",
        "ingestion.header_row",
        "ingestion.columns",
        "ingestion.columns.radial_force",
        "ingestion.columns.axial_force",
        "ingestion.columns.moment",
        "ingestion.columns.oscillation_angle",
        // [[scenarios]]
        "scenarios",
        "scenarios.name",
        "scenarios.duty_cycle",
        "scenarios.file",
        "scenarios.reduced",
        "scenarios.reduced.radial_rms",
        "scenarios.reduced.axial_rms",
        "scenarios.reduced.moment_rms",
        "scenarios.reduced.amplitude_deg",
        "scenarios.reduced.speed_opm",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// A table `{ a = { b = 1 } }` yields `["a", "a.b"]`. Tables inside arrays
/// are walked under the array's own path, so `[[s]] x = 1` yields
/// `["s", "s.x"]`. Duplicates are removed, order of first sight kept.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(value, prefix, &mut keys);
    let mut seen = HashSet::new();
    keys.retain(|k| seen.insert(k.clone()));
    keys
}

fn collect_keys(value: &toml::Value, prefix: &str, keys: &mut Vec<String>) {
    match value {
        toml::Value::Table(table) => {
            for (k, v) in table {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                keys.push(path.clone());
                collect_keys(v, &path, keys);
            }
        }
        toml::Value::Array(items) => {
            for item in items.iter().filter(|v| v.is_table()) {
                collect_keys(item, prefix, keys);
            }
        }
        _ => {}
    }
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties go to the alphabetically first key so suggestions are stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (levenshtein(unknown, k), k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// Never fails: TOML syntax errors are left for the serde pass to report.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Physical Range Validation
// ============================================================================

/// Validate physical ranges on a parsed LifeConfig.
///
/// Returns (errors, warnings). Errors are impossible values that must stop
/// the calculation; warnings are suspicious but not fatal. Bearing kind,
/// contamination, reliability and the ISO flag are checked by
/// `LifeConfig::validate` through their typed parsers.
pub fn validate_physical_ranges(config: &LifeConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let b = &config.bearing.params;

    // Bore must sit inside the outside diameter
    if b.bore_diameter_mm >= b.outside_diameter_mm {
        errors.push(format!(
            "bearing.bore_diameter_mm = {:.1} must be smaller than outside_diameter_mm = {:.1}",
            b.bore_diameter_mm, b.outside_diameter_mm
        ));
    }

    if let Some(fc) = config.bearing.catalogue_fc {
        if !(fc.is_finite() && fc > 0.0) {
            errors.push(format!("bearing.catalogue_fc = {fc} must be > 0"));
        }
    }

    // Element larger than the raceway section
    let section = (b.outside_diameter_mm - b.bore_diameter_mm) / 2.0;
    if section > 0.0 && b.element_diameter_mm >= section {
        warnings.push(ValidationWarning {
            field: "bearing.element_diameter_mm".to_string(),
            message: format!(
                "element_diameter_mm = {:.1} is not smaller than the ring section ({:.1} mm)",
                b.element_diameter_mm, section
            ),
            suggestion: None,
        });
    }

    // A radial contact angle carries no axial load
    if b.contact_angle_deg == 0.0 {
        warnings.push(ValidationWarning {
            field: "bearing.contact_angle_deg".to_string(),
            message: "contact_angle_deg = 0 gives no axial load capacity".to_string(),
            suggestion: None,
        });
    }

    // Lubrication adequacy constant: positive, typically 0.01-4
    let k = config.lubrication.k;
    if !(k.is_finite() && k > 0.0) {
        errors.push(format!("lubrication.k = {k} must be > 0"));
    } else if !(0.01..=4.0).contains(&k) {
        warnings.push(ValidationWarning {
            field: "lubrication.k".to_string(),
            message: format!("lubrication.k = {k} is outside typical range (0.01-4)"),
            suggestion: None,
        });
    }

    validate_scenarios(config, &mut errors, &mut warnings);

    (errors, warnings)
}

fn validate_scenarios(
    config: &LifeConfig,
    errors: &mut Vec<String>,
    warnings: &mut Vec<ValidationWarning>,
) {
    if config.scenarios.is_empty() {
        errors.push("no [[scenarios]] defined".to_string());
        return;
    }

    let mut names = HashSet::new();
    for s in &config.scenarios {
        if !names.insert(s.name.as_str()) {
            errors.push(format!("scenario '{}' is defined more than once", s.name));
        }

        if !(s.duty_cycle.is_finite() && s.duty_cycle >= 0.0) {
            errors.push(format!(
                "scenario '{}': duty_cycle = {} must be a non-negative fraction",
                s.name, s.duty_cycle
            ));
        }

        match (&s.file, &s.reduced) {
            (Some(_), Some(_)) => errors.push(format!(
                "scenario '{}': set either 'file' or 'reduced', not both",
                s.name
            )),
            (None, None) => errors.push(format!(
                "scenario '{}': needs a 'file' or a 'reduced' table",
                s.name
            )),
            (None, Some(r)) => {
                let fields = [
                    ("radial_rms", r.radial_rms),
                    ("axial_rms", r.axial_rms),
                    ("moment_rms", r.moment_rms),
                    ("amplitude_deg", r.amplitude_deg),
                    ("speed_opm", r.speed_opm),
                ];
                for (field, value) in fields {
                    if !(value.is_finite() && value >= 0.0) {
                        errors.push(format!(
                            "scenario '{}': reduced.{field} = {value} must be non-negative",
                            s.name
                        ));
                    }
                }
            }
            (Some(_), None) => {}
        }
    }

    let sum = config.duty_cycle_sum();
    if (sum - 1.0).abs() > DUTY_SUM_TOLERANCE {
        warnings.push(ValidationWarning {
            field: "scenarios.duty_cycle".to_string(),
            message: format!("duty cycles sum to {sum:.4}, not 1; they are used as given"),
            suggestion: None,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
