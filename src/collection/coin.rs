use crate::collection::helper_functions::{generate_id, now_millis};

/// A single collected specimen.
///
/// Serialized with camelCase keys; optional attributes are left out of the
/// stored payload when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub id: String,
    pub title: String,
    pub country: String,
    /// Text, so that ranges like "1921-1928" or "c. 1800" survive.
    pub year: String,
    pub description: String,
    /// Encoded image payload (base64 or data URL), never a file reference.
    pub image: String,
    /// Milliseconds since epoch.
    pub date_added: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
}

/// Everything the add form collects. `id` and `date_added` are assigned when
/// the draft becomes a [`Coin`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinDraft {
    pub title: String,
    pub country: String,
    pub year: String,
    pub description: String,
    pub image: String,
    pub estimated_value: Option<String>,
    pub composition: Option<String>,
}

impl CoinDraft {
    pub fn into_coin(self) -> Coin {
        Coin {
            id: generate_id(),
            title: self.title,
            country: self.country,
            year: self.year,
            description: self.description,
            image: self.image,
            date_added: now_millis(),
            estimated_value: self.estimated_value,
            composition: self.composition,
        }
    }
}
