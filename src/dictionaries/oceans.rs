use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Country (lower case) → ocean or sea bordering it
pub const COUNTRY_OCEANS: &[(&str, &str)] = &[
    ("morocco", "Atlantic Ocean"),
    ("jamaica", "Caribbean Sea"),
    ("belize", "Caribbean Sea"),
    ("australia", "Indian Ocean and Pacific Ocean"),
    ("usa", "Atlantic Ocean and Pacific Ocean"),
    ("maldive islands", "Indian Ocean"),
    ("turks and caicos", "Atlantic Ocean"),
    ("french polynesia", "Pacific Ocean"),
    ("tobago", "Caribbean Sea"),
    ("bahamas", "Atlantic Ocean"),
    ("india", "Indian Ocean"),
    ("trinidad", "Caribbean Sea"),
    ("south africa", "Atlantic Ocean and Indian Ocean"),
    ("mexico", "Pacific Ocean and Gulf of Mexico"),
    ("new zealand", "Pacific Ocean"),
    ("egypt", "Red Sea"),
    ("spain", "Atlantic Ocean and Mediterranean Sea"),
    ("portugal", "Atlantic Ocean"),
    ("samoa", "Pacific Ocean"),
    ("colombia", "Pacific Ocean and Caribbean Sea"),
    ("ecuador", "Pacific Ocean"),
    ("cuba", "Caribbean Sea"),
    ("brazil", "Atlantic Ocean"),
    ("seychelles", "Indian Ocean"),
    ("new caledonia", "Pacific Ocean"),
    ("argentina", "Atlantic Ocean"),
    ("fiji", "Pacific Ocean"),
    ("maldives", "Indian Ocean"),
    ("england", "Atlantic Ocean"),
    ("japan", "Pacific Ocean"),
    ("indonesia", "Indian Ocean and Pacific Ocean"),
    ("thailand", "Indian Ocean and Andaman Sea"),
    ("costa rica", "Pacific Ocean and Caribbean Sea"),
    ("canada", "Atlantic Ocean, Pacific Ocean, and Arctic Ocean"),
    ("jordan", "Red Sea"),
    ("papua new guinea", "Pacific Ocean"),
    ("reunion island", "Indian Ocean"),
    ("china", "Pacific Ocean"),
    ("ireland", "Atlantic Ocean"),
    ("italy", "Mediterranean Sea"),
    ("malaysia", "Indian Ocean and South China Sea"),
    ("mauritius", "Indian Ocean"),
    ("solomon islands", "Pacific Ocean"),
    ("united kingdom", "Atlantic Ocean"),
    ("united arab emirates", "Persian Gulf"),
    ("philippines", "Pacific Ocean"),
    ("cape verde", "Atlantic Ocean"),
    ("dominican republic", "Caribbean Sea"),
    ("cayman islands", "Caribbean Sea"),
    ("aruba", "Caribbean Sea"),
    ("mozambique", "Indian Ocean"),
    ("puerto rico", "Caribbean Sea"),
    ("greece", "Mediterranean Sea"),
    ("france", "Atlantic Ocean and Mediterranean Sea"),
    ("kiribati", "Pacific Ocean"),
    ("taiwan", "Pacific Ocean"),
    ("guam", "Pacific Ocean"),
    ("nigeria", "Atlantic Ocean"),
    ("tonga", "Pacific Ocean"),
    ("scotland", "Atlantic Ocean"),
    ("croatia", "Adriatic Sea"),
    ("saudi arabia", "Red Sea and Persian Gulf"),
    ("chile", "Pacific Ocean"),
    ("kenya", "Indian Ocean"),
    ("russia", "Arctic Ocean and Pacific Ocean"),
    ("south korea", "Pacific Ocean"),
    ("malta", "Mediterranean Sea"),
    ("vietnam", "South China Sea"),
    ("madagascar", "Indian Ocean"),
    ("panama", "Pacific Ocean and Caribbean Sea"),
    ("somalia", "Indian Ocean"),
    ("norway", "Atlantic Ocean and Arctic Ocean"),
    ("senegal", "Atlantic Ocean"),
    ("yemen", "Red Sea and Gulf of Aden"),
    ("sri lanka", "Indian Ocean"),
    ("uruguay", "Atlantic Ocean"),
    ("micronesia", "Pacific Ocean"),
    ("tanzania", "Indian Ocean"),
    ("marshall islands", "Pacific Ocean"),
    ("hong kong", "Pacific Ocean"),
    ("el salvador", "Pacific Ocean"),
    ("bermuda", "Atlantic Ocean"),
    ("montenegro", "Adriatic Sea"),
    ("iran", "Persian Gulf and Caspian Sea"),
    ("tunisia", "Mediterranean Sea"),
    ("namibia", "Atlantic Ocean"),
    ("bangladesh", "Bay of Bengal"),
    ("western samoa", "Pacific Ocean"),
    ("palau", "Pacific Ocean"),
    ("grenada", "Caribbean Sea"),
    ("turkey", "Mediterranean Sea and Black Sea"),
    ("singapore", "Indian Ocean"),
    ("sudan", "Red Sea"),
    ("nicaragua", "Pacific Ocean and Caribbean Sea"),
    ("american samoa", "Pacific Ocean"),
    ("guatemala", "Pacific Ocean and Caribbean Sea"),
    ("netherlands antilles", "Caribbean Sea"),
    ("iceland", "Atlantic Ocean"),
    ("barbados", "Caribbean Sea"),
    ("guyana", "Atlantic Ocean"),
    ("haiti", "Caribbean Sea"),
    ("kuwait", "Persian Gulf"),
    ("cyprus", "Mediterranean Sea"),
    ("lebanon", "Mediterranean Sea"),
    ("martinique", "Caribbean Sea"),
    ("paraguay", "Landlocked"),
    ("peru", "Pacific Ocean"),
    ("ghana", "Atlantic Ocean"),
    ("greenland", "Atlantic Ocean and Arctic Ocean"),
    ("sweden", "Baltic Sea"),
    ("djibouti", "Red Sea and Gulf of Aden"),
];

static OCEAN_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRY_OCEANS.iter().copied().collect());

/// Ocean/sea descriptor for a lower-cased, trimmed country name
pub fn ocean_for(country_key: &str) -> Option<&'static str> {
    OCEAN_MAP.get(country_key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocean_for() {
        assert_eq!(ocean_for("usa"), Some("Atlantic Ocean and Pacific Ocean"));
        assert_eq!(
            ocean_for("canada"),
            Some("Atlantic Ocean, Pacific Ocean, and Arctic Ocean")
        );
        assert_eq!(ocean_for("paraguay"), Some("Landlocked"));
        assert_eq!(ocean_for("atlantis"), None);
    }

    #[test]
    fn test_keys_are_lookup_form() {
        for (country, _) in COUNTRY_OCEANS {
            assert_eq!(*country, country.trim().to_lowercase());
        }
    }
}
