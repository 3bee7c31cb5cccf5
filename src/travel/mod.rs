//! Travel summary generation: prompt, normalization, and validation.

pub mod normalize;
pub mod prompt;
pub mod summary;

pub use normalize::normalize;
pub use prompt::build_prompt;
pub use summary::{Purpose, TravelSummary};

use serde_json::Value;
use tracing::info;

use crate::error::SummaryError;
use crate::llm::{GenerationParams, RetryPolicy, TextGenerator, generate_json};

/// Generate, normalize and validate a travel summary for `place`.
pub async fn summarize<G: TextGenerator + ?Sized>(
    generator: &G,
    place: &str,
    purpose: Purpose,
    policy: &RetryPolicy,
    params: &GenerationParams,
) -> Result<TravelSummary, SummaryError> {
    let prompt = build_prompt(place, purpose);

    let mut generation = generate_json(generator, &prompt, policy, params).await?;
    info!(
        model = %generation.model,
        failed_attempts = generation.failures.len(),
        "travel summary generated"
    );

    normalize(&mut generation.object);

    serde_json::from_value(Value::Object(generation.object)).map_err(SummaryError::Schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use crate::llm::generator::MockTextGenerator;

    const PARIS: &str = r#"```json
{
  "place": "Paris",
  "purpose": "leisure",
  "overview": [" Capital of France ", "Home of the Louvre"],
  "things_to_know": ["Museums close on Mondays or Tuesdays  "],
  "nearby_transport": ["CDG airport", "Gare du Nord"],
  "how_to_get_there": "Fly into CDG and take the RER B.",
  "best_time_to_travel": "April to June"
}
```"#;

    #[tokio::test(start_paused = true)]
    async fn test_summarize_normalizes_and_validates() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|_, prompt, _| prompt.contains("Paris") && prompt.contains("leisure"))
            .times(1)
            .returning(|_, _, _| Ok(PARIS.to_string()));

        let summary = summarize(
            &mock,
            "Paris",
            Purpose::Leisure,
            &RetryPolicy::default(),
            &GenerationParams::default(),
        )
        .await
        .unwrap();

        assert_eq!(summary.place, "Paris");
        assert_eq!(summary.purpose, Purpose::Leisure);
        assert_eq!(summary.overview[0], "Capital of France");
        assert_eq!(summary.things_to_know[0], "Museums close on Mondays or Tuesdays");
    }

    #[tokio::test(start_paused = true)]
    async fn test_summarize_rejects_wrong_shape() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .times(1)
            .returning(|_, _, _| Ok(r#"{"place": "Paris", "overview": "not a list"}"#.to_string()));

        let result = summarize(
            &mock,
            "Paris",
            Purpose::Leisure,
            &RetryPolicy::default(),
            &GenerationParams::default(),
        )
        .await;

        assert!(matches!(result, Err(SummaryError::Schema(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_summarize_propagates_parse_abort() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .times(1)
            .returning(|_, _, _| Ok("I cannot answer that.".to_string()));

        let result = summarize(
            &mock,
            "Paris",
            Purpose::Business,
            &RetryPolicy::default(),
            &GenerationParams::default(),
        )
        .await;

        assert!(matches!(
            result,
            Err(SummaryError::Generation(GenerateError::Unparseable { .. }))
        ));
    }
}
