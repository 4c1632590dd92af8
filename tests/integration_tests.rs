//! Integration tests for the kelly library.
//! These tests require an API key in the environment to run.

#[cfg(test)]
mod tests {
    use kelly::{ChatCompletionParams, ChatMessage, Groq, KnownModel, Model};

    #[tokio::test]
    async fn simple_completion_request() {
        // This test requires GROQ_API_KEY to be set
        let api_key = std::env::var("GROQ_API_KEY").ok();
        if api_key.is_none() {
            eprintln!("Skipping test: GROQ_API_KEY not set");
            return;
        }

        let client = Groq::new(api_key).expect("Failed to create client");

        let params = ChatCompletionParams::new(
            32,
            vec![
                ChatMessage::system("Respond with exactly the words 'test passed'."),
                ChatMessage::user("Say 'test passed'"),
            ],
            Model::Known(KnownModel::Llama31_8bInstant),
        );

        let response = client.complete(params).await;
        assert!(
            response.is_ok(),
            "Request should succeed with valid API key"
        );
        let completion = response.unwrap();
        assert!(
            completion.into_reply().is_some(),
            "Response should carry at least one choice"
        );
    }
}
