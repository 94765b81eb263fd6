//! End-to-end integration tests
//!
//! These tests validate the complete batch pipeline using predefined CSV test
//! fixtures. Each fixture directory under tests/fixtures/ contains:
//! - `account_balances.csv` and `transactions.csv` (inputs)
//! - either `expected.csv` (the output of a successful run)
//! - or `expected_error.txt` (the error message of a failed run; no output
//!   file may be created)
//!
//! Each test is run twice: once with the synchronous reader and once with the
//! async reader.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use simple_banking_service::cli::StrategyType;
    use simple_banking_service::io::{parse_accounts_file, write_accounts_csv};
    use simple_banking_service::strategy::{create_strategy, BatchFiles, ReaderConfig};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Run a test fixture and compare with its expected output or error
    ///
    /// # Panics
    ///
    /// Panics if fixture files cannot be read, or if the run's result does not
    /// match the expectation.
    fn run_test_fixture(fixture_name: &str, strategy_type: StrategyType) {
        let fixture_dir = Path::new("tests/fixtures").join(fixture_name);
        let expected_path = fixture_dir.join("expected.csv");
        let expected_error_path = fixture_dir.join("expected_error.txt");

        assert!(
            expected_path.exists() || expected_error_path.exists(),
            "No expectation found in {}",
            fixture_dir.display()
        );

        let output_dir = TempDir::new().expect("Failed to create temp dir");
        let files = BatchFiles {
            account_balances: fixture_dir.join("account_balances.csv"),
            transactions: fixture_dir.join("transactions.csv"),
            output: output_dir.path().join("output.csv"),
        };

        // A small batch size makes the async reader cross batch boundaries
        let strategy = create_strategy(strategy_type.clone(), Some(ReaderConfig::new(2)));
        let result = strategy.process(&files);

        if expected_path.exists() {
            if let Err(e) = result {
                panic!(
                    "Failed to process fixture {} (strategy: {:?}): {}",
                    fixture_name, strategy_type, e
                );
            }

            let actual_output = fs::read_to_string(&files.output)
                .unwrap_or_else(|e| panic!("Failed to read output file: {}", e));
            let expected_output = fs::read_to_string(&expected_path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", expected_path.display(), e));

            assert_eq!(
                actual_output, expected_output,
                "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
                fixture_name, strategy_type, actual_output, expected_output
            );
        } else {
            let expected_error = fs::read_to_string(&expected_error_path)
                .unwrap_or_else(|e| panic!("Failed to read expected error: {}", e));

            match result {
                Ok(_) => panic!(
                    "Fixture {} (strategy: {:?}) succeeded, expected: {}",
                    fixture_name, strategy_type, expected_error
                ),
                Err(e) => assert_eq!(e.to_string(), expected_error.trim()),
            }
            assert!(
                !files.output.exists(),
                "Output must not be written for failing fixture {}",
                fixture_name
            );
        }
    }

    /// End-to-end test for all fixtures with both reading strategies
    #[rstest]
    #[case("happy_path")]
    #[case("short_account_numbers")]
    #[case("no_transactions")]
    #[case("empty_inputs")]
    #[case("insufficient_balance")]
    #[case("temporary_overdraft")]
    #[case("duplicate_account")]
    #[case("invalid_account_number")]
    #[case("negative_balance")]
    #[case("same_account")]
    #[case("unknown_account")]
    #[case("invalid_amount")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, strategy);
    }

    #[rstest]
    #[case(StrategyType::Sync)]
    #[case(StrategyType::Async)]
    fn test_missing_transactions_file(#[case] strategy_type: StrategyType) {
        let output_dir = TempDir::new().expect("Failed to create temp dir");
        let files = BatchFiles {
            account_balances: Path::new("tests/fixtures/happy_path/account_balances.csv")
                .to_path_buf(),
            transactions: output_dir.path().join("nonexistent.csv"),
            output: output_dir.path().join("output.csv"),
        };

        let error = create_strategy(strategy_type, None)
            .process(&files)
            .unwrap_err();

        assert!(error.to_string().starts_with("File not found:"));
        assert!(!files.output.exists());
    }

    /// Writing balances and parsing them back yields the same table
    #[test]
    fn test_output_round_trips_through_parser() {
        let accounts =
            parse_accounts_file(Path::new("tests/fixtures/happy_path/account_balances.csv"))
                .expect("Failed to parse fixture");

        let output_dir = TempDir::new().expect("Failed to create temp dir");
        let output_path = output_dir.path().join("round_trip.csv");
        let mut output = Vec::new();
        write_accounts_csv(&accounts, &mut output).expect("Failed to write accounts");
        fs::write(&output_path, output).expect("Failed to write output file");

        let reparsed = parse_accounts_file(&output_path).expect("Failed to reparse output");
        assert_eq!(reparsed, accounts);
    }
}
