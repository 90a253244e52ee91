//! Ingredient name canonicalization.
//!
//! Free-text ingredient names are canonicalized so that "Tomatoes!",
//! " tomato" and "tomatoes" all match the same token. The pipeline is:
//!
//! 1. Trim and lowercase
//! 2. Strip non-alphanumeric, non-space characters
//! 3. Naive English depluralization (trailing "es", then trailing "s")
//! 4. Synonym-table replacement to one canonical spelling
//!
//! The depluralization is deliberately naive: "tomatoes" becomes "tomato",
//! and "glass" becomes "glas". No linguistic exceptions are handled; the
//! corpus and the query pass through the same pipeline, so matching stays
//! consistent either way.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Alternate spellings mapped to one canonical form.
///
/// Lookup happens after depluralization, so plural keys only fire when the
/// stripped form still matches a key (e.g. "garbanzo beans" strips to
/// "garbanzo bean", which maps to "chickpea").
const SYNONYMS: &[(&str, &str)] = &[
    ("chickpeas", "garbanzo beans"),
    ("garbanzo bean", "chickpea"),
    ("bell pepper", "capsicum"),
    ("capsicums", "bell pepper"),
    ("tomatoes", "tomato"),
    ("potatoes", "potato"),
    ("onions", "onion"),
    ("eggs", "egg"),
    ("greens", "lettuce"),
    ("spinaches", "spinach"),
    ("carrots", "carrot"),
    ("beans", "bean"),
    ("apples", "apple"),
    ("bananas", "banana"),
    ("berries", "berry"),
    ("strawberries", "strawberry"),
    ("blueberries", "blueberry"),
    ("raspberries", "raspberry"),
    ("yogurts", "yogurt"),
    ("milks", "milk"),
    ("cheeses", "cheese"),
    ("breads", "bread"),
    ("pastas", "pasta"),
    ("rices", "rice"),
    ("meats", "meat"),
    ("fishes", "fish"),
    ("chickens", "chicken"),
    ("turkeys", "turkey"),
    ("beefs", "beef"),
    ("porks", "pork"),
    ("sausages", "sausage"),
    ("hams", "ham"),
    ("bacons", "bacon"),
    ("tofus", "tofu"),
    ("tempehs", "tempeh"),
    ("lentils", "lentil"),
    ("peas", "pea"),
    ("nuts", "nut"),
    ("seeds", "seed"),
    ("oils", "oil"),
    ("butters", "butter"),
    ("creams", "cream"),
    ("sugars", "sugar"),
    ("honeys", "honey"),
    ("jams", "jam"),
    ("marmalades", "marmalade"),
    ("juices", "juice"),
    ("teas", "tea"),
    ("coffees", "coffee"),
    ("waters", "water"),
    ("sodas", "soda"),
    ("beers", "beer"),
    ("wines", "wine"),
    ("vodkas", "vodka"),
    ("whiskeys", "whiskey"),
    ("gins", "gin"),
    ("rums", "rum"),
    ("liqueurs", "liqueur"),
    ("spices", "spice"),
    ("herbs", "herb"),
    ("seasonings", "seasoning"),
    ("condiments", "condiment"),
    ("sauces", "sauce"),
    ("dressings", "dressing"),
    ("mayonnaises", "mayonnaise"),
    ("mustards", "mustard"),
    ("ketchups", "ketchup"),
    ("vinegars", "vinegar"),
    ("pickles", "pickle"),
    ("olives", "olive"),
    ("mushrooms", "mushroom"),
    ("peppers", "pepper"),
    ("chilies", "chili"),
    ("jalapenos", "jalapeno"),
    ("avocados", "avocado"),
    ("lemons", "lemon"),
    ("limes", "lime"),
    ("oranges", "orange"),
    ("grapefruits", "grapefruit"),
    ("grapes", "grape"),
    ("melons", "melon"),
    ("watermelons", "watermelon"),
    ("cantaloupes", "cantaloupe"),
    ("honeydews", "honeydew"),
    ("pineapples", "pineapple"),
    ("mangoes", "mango"),
    ("peaches", "peach"),
    ("plums", "plum"),
    ("apricots", "apricot"),
    ("cherries", "cherry"),
    ("figs", "fig"),
    ("dates", "date"),
    ("prunes", "prune"),
    ("raisins", "raisin"),
    ("currants", "currant"),
    ("gooseberries", "gooseberry"),
    ("kiwis", "kiwi"),
    ("persimmons", "persimmon"),
    ("pomegranates", "pomegranate"),
    ("starfruits", "starfruit"),
    ("passionfruits", "passionfruit"),
    ("dragonfruits", "dragonfruit"),
    ("lychees", "lychee"),
    ("guavas", "guava"),
    ("papayas", "papaya"),
    ("coconuts", "coconut"),
    ("tangerines", "tangerine"),
    ("mandarins", "mandarin"),
    ("kumquats", "kumquat"),
    ("mulberries", "mulberry"),
    ("loganberries", "loganberry"),
    ("boysenberries", "boysenberry"),
    ("cranberries", "cranberry"),
    ("elderberries", "elderberry"),
    ("cloudberries", "cloudberry"),
    ("rowanberries", "rowanberry"),
    ("salmonberries", "salmonberry"),
    ("huckleberries", "huckleberry"),
    ("serviceberries", "serviceberry"),
    ("saskatoons", "saskatoon"),
    ("chokecherries", "chokecherry"),
    ("aronias", "aronia"),
    ("medlars", "medlar"),
    ("quince", "quince"),
    ("loquats", "loquat"),
    ("rambutans", "rambutan"),
    ("longans", "longan"),
    ("sapotes", "sapote"),
    ("soursops", "soursop"),
    ("cherimoyas", "cherimoya"),
    ("custard apples", "custard apple"),
    ("santols", "santol"),
    ("tamarinds", "tamarind"),
    ("ackees", "ackee"),
    ("breadfruits", "breadfruit"),
    ("durian", "durian"),
    ("langsat", "langsat"),
    ("mangosteen", "mangosteen"),
];

/// The synonym table, materialized once per process.
fn synonym_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| SYNONYMS.iter().copied().collect())
}

/// Canonicalizes a raw ingredient name.
///
/// Always returns a string; the result is empty when the input contains no
/// alphanumeric characters.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let mut name = stripped.trim().to_string();

    if name.ends_with("es") {
        name.truncate(name.len() - 2);
    } else if name.ends_with('s') {
        name.truncate(name.len() - 1);
    }

    match synonym_table().get(name.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => name,
    }
}

/// Normalizes a list of raw names, keeping the first occurrence of each
/// distinct canonical token in input order.
#[must_use]
pub fn deduplicate<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for name in raw {
        let token = normalize(name.as_ref());
        if seen.insert(token.clone()) {
            result.push(token);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("  Cherry Tomato!  "), "cherry tomato");
        assert_eq!(normalize("half-and-half"), "halfandhalf");
    }

    #[test]
    fn depluralizes_naively() {
        assert_eq!(normalize("tomatoes"), "tomato");
        assert_eq!(normalize("carrots"), "carrot");
        // Accepted defect of the naive rule.
        assert_eq!(normalize("glass"), "glas");
    }

    #[test]
    fn maps_synonyms_after_depluralization() {
        // "garbanzo beans" -> "garbanzo bean" -> synonym -> "chickpea"
        assert_eq!(normalize("Garbanzo Beans"), "chickpea");
        assert_eq!(normalize("bell pepper"), "capsicum");
        assert_eq!(normalize("bell peppers"), "capsicum");
        // Whole-string lookup: multi-word names only match multi-word keys.
        assert_eq!(normalize("mixed greens"), "mixed green");
    }

    #[test]
    fn all_punctuation_input_yields_empty_token() {
        assert_eq!(normalize("!!! ---"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalization_is_idempotent_on_ingredient_names() {
        for raw in [
            "Chicken Breast",
            "tomatoes",
            "Garbanzo Beans",
            "olive oil",
            "EGGS",
            "bell peppers",
            "fresh basil!",
            "lettuce",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn deduplicate_preserves_first_occurrence_order() {
        let tokens = deduplicate(&["Tomatoes", "onion", "tomato", "Onions", "egg"]);
        assert_eq!(tokens, vec!["tomato", "onion", "egg"]);
    }

    #[test]
    fn deduplicate_never_grows_the_list() {
        let raw = vec!["a", "b", "a", "c", "b", "a"];
        let tokens = deduplicate(&raw);
        assert!(tokens.len() <= raw.len());
        let unique: HashSet<_> = tokens.iter().collect();
        assert_eq!(unique.len(), tokens.len());
    }
}
