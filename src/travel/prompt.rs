//! Prompt construction for travel summaries.

use super::summary::Purpose;

/// Build the generation prompt for a place and trip purpose.
///
/// The place and purpose are echoed verbatim into the JSON template so the
/// model returns them unchanged.
pub fn build_prompt(place: &str, purpose: Purpose) -> String {
    let focus = match purpose {
        Purpose::Leisure => {
            "sightseeing, local culture, food, and relaxed ways to spend the days"
        }
        Purpose::Business => {
            "business districts, venues, connectivity, and getting around efficiently on a tight schedule"
        }
    };

    format!(
        r#"You are a concise, accurate travel assistant.

Write a travel summary for "{place}" for a {purpose} trip. Focus on {focus}.

Respond with ONLY one JSON object, no markdown and no commentary, matching exactly this template:

{{
  "place": "{place}",
  "purpose": "{purpose}",
  "overview": ["3 to 5 short bullet points describing the place"],
  "things_to_know": ["practical tips: currency, language, safety, customs, tipping"],
  "nearby_transport": ["nearest airports, train stations and transit options"],
  "how_to_get_there": "a short paragraph on reaching the place",
  "best_time_to_travel": "a short paragraph on the best season or months to visit"
}}

Rules:
- Keep "place" exactly "{place}" and "purpose" exactly "{purpose}".
- Every list must contain plain strings only.
- Do not add any other keys."#,
        place = place,
        purpose = purpose.as_str(),
        focus = focus,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_place_and_purpose() {
        for purpose in [Purpose::Leisure, Purpose::Business] {
            let prompt = build_prompt("Reykjavík", purpose);
            assert!(!prompt.is_empty());
            assert!(prompt.contains("Reykjavík"));
            assert!(prompt.contains(purpose.as_str()));
        }
    }

    #[test]
    fn test_prompt_keeps_quotes_in_place_verbatim() {
        let prompt = build_prompt("St. John's", Purpose::Leisure);
        assert!(prompt.contains("St. John's"));
    }

    #[test]
    fn test_prompt_lists_every_field() {
        let prompt = build_prompt("Paris", Purpose::Business);
        for field in [
            "\"place\"",
            "\"purpose\"",
            "\"overview\"",
            "\"things_to_know\"",
            "\"nearby_transport\"",
            "\"how_to_get_there\"",
            "\"best_time_to_travel\"",
        ] {
            assert!(prompt.contains(field), "prompt is missing {}", field);
        }
    }

    #[test]
    fn test_prompt_differs_by_purpose() {
        assert_ne!(
            build_prompt("Paris", Purpose::Leisure),
            build_prompt("Paris", Purpose::Business)
        );
    }
}
