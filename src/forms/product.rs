use serde::{de, Deserialize, Deserializer, Serialize};
use serde_valid::Validate;

/// Product submitted from the admin panel.
///
/// HTML number inputs arrive as strings, so `price` and `stock` accept both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub name: String,
    #[serde(default)]
    #[validate(max_length = 5000)]
    pub description: String,
    #[serde(deserialize_with = "number_or_string")]
    #[validate(minimum = 1)]
    pub price: i64,
    #[serde(default)]
    #[validate(max_length = 2048)]
    pub image: String,
    #[serde(deserialize_with = "number_or_string")]
    #[validate(minimum = 0)]
    #[validate(maximum = 2147483647)]
    pub stock: i64,
}

impl ProductForm {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            ..self
        }
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let float_to_int = |value: f64| -> Result<i64, D::Error> {
        if value.is_finite() {
            Ok(value.round() as i64)
        } else {
            Err(de::Error::custom("expected a finite number"))
        }
    };

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(value) => Ok(value),
        NumberOrString::Float(value) => float_to_int(value),
        NumberOrString::Text(text) => {
            let text = text.trim();
            match text.parse::<i64>() {
                Ok(value) => Ok(value),
                Err(_) => text
                    .parse::<f64>()
                    .map_err(|_| de::Error::custom(format!("`{}` is not a number", text)))
                    .and_then(float_to_int),
            }
        }
    }
}
