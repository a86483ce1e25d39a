
use bsm_lib::session::{BANNER, CONTINUE_PROMPT, FAREWELL, INVALID_PARAMETERS_MESSAGE};
use bsm_lib::ReportConfig;
use test_utils::{batch, run_session};

/// One valid batch followed by "n" prints a single report and the farewell.
#[test]
fn test_single_calculation() {
    let input = batch(100.0, 100.0, 1.0, 0.05, 0.2) + "n\n";
    let (priced, output) = run_session(&input, ReportConfig::default());

    assert_eq!(priced, 1);
    assert!(output.starts_with(BANNER));
    assert!(output.contains("Enter the following parameters:"));
    assert!(output.contains("Current Stock Price: $"));
    assert!(output.contains("Volatility (as decimal, e.g., 0.20 for 20%): "));
    assert!(output.contains("  Call Price: $10.4506"));
    assert!(output.contains("  Put Price: $5.5735"));
    assert!(output.contains("=== Scenario Analysis ==="));
    assert!(output.contains(CONTINUE_PROMPT));
    assert!(output.trim_end().ends_with(FAREWELL));
}

/// Answering "Y" (any case) runs another calculation.
#[test]
fn test_continue_is_case_insensitive() {
    let input = batch(100.0, 100.0, 1.0, 0.05, 0.2)
        + "Y\n"
        + &batch(100.0, 90.0, 0.0, 0.05, 0.2)
        + "yes\n"
        + &batch(50.0, 60.0, 0.5, 0.01, 0.3)
        + "q\n";
    let (priced, output) = run_session(&input, ReportConfig::default());

    assert_eq!(priced, 3);
    assert_eq!(output.matches(CONTINUE_PROMPT).count(), 3);
    // second batch is expired: intrinsic call value
    assert!(output.contains("  Call Price: $10.0000"));
}

/// Invalid batches are reported and the whole batch is re-prompted.
#[test]
fn test_invalid_batch_reprompts() {
    let input = batch(0.0, 100.0, 1.0, 0.05, 0.2)
        + &batch(100.0, 100.0, 1.0, 0.05, 0.0)
        + &batch(100.0, 100.0, -1.0, 0.05, 0.2)
        + &batch(100.0, 100.0, 0.0, -0.02, 0.2)
        + "n\n";
    let (priced, output) = run_session(&input, ReportConfig::default());

    assert_eq!(priced, 1);
    assert_eq!(output.matches(INVALID_PARAMETERS_MESSAGE).count(), 3);
    assert_eq!(output.matches(BANNER).count(), 4);
    // T = 0 with a negative rate is accepted
    assert!(output.contains("  Risk-free Rate (r): -2.0000%"));
}

/// Non-numeric text discards the batch; every field is asked again from the start.
#[test]
fn test_malformed_input_restarts_batch() {
    let input = "abc\n50\n60\n\n".to_string() + &batch(100.0, 100.0, 1.0, 0.05, 0.2) + "n\n";
    let (priced, output) = run_session(&input, ReportConfig::default());

    assert_eq!(priced, 1);
    assert_eq!(output.matches(BANNER).count(), 3);
    assert!(output.contains("malformed input for spot"));
    assert!(output.contains("malformed input for time_to_expiry"));
    assert_eq!(output.matches("Current Stock Price: $").count(), 3);
    assert_eq!(output.matches("Strike Price: $").count(), 2);
    // nothing typed before the bad entry survives
    assert!(output.contains("  Stock Price (S): $100.0000"));
    assert!(output.contains("  Strike Price (K): $100.0000"));
    assert!(!output.contains("$50.0000"));
    assert!(!output.contains("$60.0000"));
}

/// Blank lines at the continue prompt are skipped until an answer arrives.
#[test]
fn test_continue_prompt_skips_blank_lines() {
    let input = batch(100.0, 100.0, 1.0, 0.05, 0.2)
        + "\n   \ny\n"
        + &batch(100.0, 90.0, 0.0, 0.05, 0.2)
        + "\n\n";
    let (priced, output) = run_session(&input, ReportConfig::default());

    assert_eq!(priced, 2);
    assert_eq!(output.matches(CONTINUE_PROMPT).count(), 2);
    assert!(output.trim_end().ends_with(FAREWELL));
}

/// End of input ends the session cleanly, with or without a completed report.
#[test]
fn test_eof_ends_session() {
    let (priced, output) = run_session("", ReportConfig::default());
    assert_eq!(priced, 0);
    assert!(output.trim_end().ends_with(FAREWELL));

    let (priced, output) = run_session("100\n100\n", ReportConfig::default());
    assert_eq!(priced, 0);
    assert!(output.trim_end().ends_with(FAREWELL));

    let input = batch(100.0, 100.0, 1.0, 0.05, 0.2);
    let (priced, output) = run_session(&input, ReportConfig::default());
    assert_eq!(priced, 1);
    assert!(output.trim_end().ends_with(FAREWELL));
}

/// The session honours the report configuration.
#[test]
fn test_session_uses_config() {
    let config = ReportConfig {
        precision: 2,
        show_parameters: false,
        scenarios: Vec::new(),
    };
    let input = batch(100.0, 100.0, 1.0, 0.05, 0.2) + "n\n";
    let (_, output) = run_session(&input, config);

    assert!(output.contains("  Call Price: $10.45\n"));
    assert!(!output.contains("Parameters:"));
    assert!(!output.contains("Scenario Analysis"));
}
