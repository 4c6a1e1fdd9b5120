use crate::model::Packing;
use serde_json::{Value, json};

/// Serialize one packed input as a JSON object `{ input, capacity, bins, rendered, stats }`.
/// `bins` is an array of arrays of sizes; `rendered` is the text form using `separator`.
pub fn to_json_report(input: &str, packing: &Packing, separator: &str) -> Value {
    json!({
        "input": input,
        "capacity": packing.capacity,
        "bins": &packing.bins,
        "rendered": packing.render(separator),
        "stats": packing.stats(),
    })
}

/// JSON object for an input that could not be packed: `{ input, error }`.
pub fn to_json_error(input: &str, error: &dyn std::fmt::Display) -> Value {
    json!({ "input": input, "error": error.to_string() })
}
