//! Display-name formatting for company names typed by visitors.

/// Known names and acronyms with a fixed capitalization.
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("hubspot", "HubSpot"),
    ("linkedin", "LinkedIn"),
    ("loreal", "L'Oreal"),
    ("l'oreal", "L'Oreal"),
    ("l oreal", "L'Oreal"),
    ("nasdaq", "Nasdaq"),
    ("google", "Google"),
    ("walmart", "Walmart"),
    ("mastercard", "Mastercard"),
    ("evp", "EVP"),
    ("ai", "AI"),
    ("vr", "VR"),
    ("ar", "AR"),
    ("hr", "HR"),
    ("ui", "UI"),
    ("ux", "UX"),
    ("ceo", "CEO"),
    ("cfo", "CFO"),
    ("cto", "CTO"),
    ("saas", "SaaS"),
    ("b2b", "B2B"),
    ("b2c", "B2C"),
];

fn special_case(lower: &str) -> Option<&'static str> {
    SPECIAL_CASES
        .iter()
        .find(|(key, _)| *key == lower)
        .map(|(_, display)| *display)
}

/// Title-cases `text` word by word, honoring the special cases both for the
/// whole string and for individual words.
pub fn display_name(text: &str) -> String {
    let text = text.trim();
    if let Some(display) = special_case(&text.to_lowercase()) {
        return display.to_string();
    }

    text.split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            if let Some(display) = special_case(&lower) {
                return display.to_string();
            }
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
