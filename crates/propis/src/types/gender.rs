use serde::{Deserialize, Serialize};

/// Grammatical gender of the noun a numeral counts.
///
/// Only the digits 1 and 2 change form with gender ("один"/"одна",
/// "два"/"две"); every other digit word is gender-invariant. The thousands
/// group is feminine because "тысяча" is, every other group is masculine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}
