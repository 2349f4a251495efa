use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::ipsum::{Format, Units};

pub const DEFAULT_COUNT: u32 = 3;
pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 100;

/// Parameters as they arrive in a query string. Everything is text until validated.
#[derive(Deserialize, Debug, Default)]
pub struct GenerationQuery {
    pub count: Option<String>,
    pub units: Option<String>,
    pub format: Option<String>,
}

/// Parameters as they arrive in a JSON body. Any JSON value is accepted for every field so that
/// type mistakes surface as validation errors rather than body rejections.
#[derive(Deserialize, Debug, Default)]
pub struct GenerationBody {
    pub count: Option<Value>,
    pub units: Option<Value>,
    pub format: Option<Value>,
}

/// A validated request, ready to hand to a generator.
#[derive(Debug, PartialEq)]
pub struct GenerationRequest {
    pub count: u32,
    pub units: Units,
    pub format: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct GenerationResponse {
    pub text: String,
}

impl GenerationQuery {
    pub fn validate(self) -> Result<GenerationRequest, ValidationError> {
        let count = self.count.as_deref().map(coerce_str);
        validate(count, self.units.as_deref(), self.format)
    }
}

impl GenerationBody {
    pub fn validate(self) -> Result<GenerationRequest, ValidationError> {
        let count = self.count.as_ref().map(coerce_value);
        let units = self.units.as_ref().map(units_value);
        let format = self.format.map(format_value);
        validate(count, units, format)
    }
}

/// `None` means the parameter was absent (a JSON `null` counts as absent). Values that are not
/// numbers coerce to NaN.
fn validate(
    count: Option<f64>,
    units: Option<&str>,
    format: Option<String>,
) -> Result<GenerationRequest, ValidationError> {
    let count = count.unwrap_or(f64::from(DEFAULT_COUNT));
    if !count.is_finite() || count < f64::from(MIN_COUNT) || count > f64::from(MAX_COUNT) {
        return Err(ValidationError::InvalidCount);
    }

    let units = match units {
        Some(units) => units
            .parse::<Units>()
            .map_err(|_| ValidationError::InvalidUnits)?,
        None => Units::default(),
    };

    Ok(GenerationRequest {
        count: count.trunc() as u32,
        units,
        format: format.unwrap_or_else(|| Format::default().to_string()),
    })
}

fn coerce_str(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}

fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(string) => coerce_str(string),
        _ => f64::NAN,
    }
}

/// Units that are not a string become empty, which no unit matches.
fn units_value(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

fn format_value(value: Value) -> String {
    match value {
        Value::String(string) => string,
        other => other.to_string(),
    }
}
