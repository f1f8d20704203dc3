use std::error::Error;

use tribrief::SummarizeError;

#[test]
fn test_summarize_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizeError::EmptyInput;
    assert_error(&error);
}

#[test]
fn test_summarize_error_display() {
    assert_eq!(format!("{}", SummarizeError::EmptyInput), "No text provided");
    assert_eq!(
        format!("{}", SummarizeError::MissingCredential),
        "No API key provided"
    );

    // ApiError carries the server message (or synthesized status line)
    // verbatim so the SummaryResult reason matches what the server said
    let error = SummarizeError::ApiError("API request failed: 401".to_string());
    assert_eq!(format!("{error}"), "API request failed: 401");

    let error = SummarizeError::HttpError("connection refused".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: connection refused"
    );
}

#[test]
fn test_summarize_error_from_reqwest() {
    // Verify the From<reqwest::Error> conversion exists and maps to
    // the transport variant; never called, just needs to compile
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummarizeError {
        SummarizeError::from(err)
    }
}
