//! Field validation for form input.
//!
//! A [`Validatable`] bundles a value with optional constraints. [`validate`] is
//! the conjunction of every constraint that is present; an absent constraint
//! passes. Length constraints only look at text values and numeric bounds only
//! look at numbers, so a mismatched constraint is ignored rather than failing.
//! Lengths are measured in UTF-16 code units, the unit a browser text field
//! counts in, so a character outside the Basic Multilingual Plane counts twice.

/// The value under test.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    fn as_display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
    pub max: Option<f64>,
    pub min: Option<f64>,
}

impl Validatable {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            max_length: None,
            min_length: None,
            max: None,
            min: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max(mut self, n: f64) -> Self {
        self.max = Some(n);
        self
    }

    pub fn min(mut self, n: f64) -> Self {
        self.min = Some(n);
        self
    }
}

pub fn validate(input: &Validatable) -> bool {
    let mut ok = true;

    if input.required {
        ok = ok && !input.value.as_display().trim().is_empty();
    }

    if let FieldValue::Text(text) = &input.value {
        let len = text.trim().encode_utf16().count();
        if let Some(max) = input.max_length {
            ok = ok && len <= max;
        }
        if let Some(min) = input.min_length {
            ok = ok && len >= min;
        }
    }

    // NaN fails both comparisons
    if let FieldValue::Number(n) = input.value {
        if let Some(max) = input.max {
            ok = ok && n <= max;
        }
        if let Some(min) = input.min {
            ok = ok && n >= min;
        }
    }

    ok
}
