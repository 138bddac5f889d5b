use serde::{Deserialize, Serialize};

/// Statistics for one surname as published on its detail page.
///
/// A value of this type is always complete: lookups that cannot fill every
/// required field produce no record at all. The serde names match the JSON
/// documents written to the cache and printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurnameRecord {
    /// Surname as written in kanji.
    #[serde(rename = "myojiKanji")]
    pub kanji: String,

    /// Phonetic readings, in the order the page lists them.
    #[serde(rename = "myojiYomis")]
    pub readings: Vec<String>,

    /// National population rank.
    #[serde(rename = "rankInCountry")]
    pub rank_in_country: u32,

    /// Estimated national population sharing the surname.
    #[serde(rename = "countInCountry")]
    pub count_in_country: u64,

    /// Origin narrative, line breaks preserved. `None` when the page marks
    /// the explanation as not yet registered.
    #[serde(rename = "myojiOrigin", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub origin: Option<String>,

    /// Link to the origin detail page, when the narrative carries one.
    #[serde(
        rename = "myojiOriginDetailUri",
        skip_serializing_if = "Option::is_none"
    )]
    #[serde(default)]
    pub origin_detail_uri: Option<String>,
}
