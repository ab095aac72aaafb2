use std::{fs, path::PathBuf, process::Command, process::Output};

const BIN: &str = env!("CARGO_BIN_EXE_transaction-data-fetcher");

fn run(args: &[&str]) -> Output {
    // Running command directly to prove everything works as expected
    let output = Command::new(BIN)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(args)
        .output()
        .unwrap();

    println!("{}", String::from_utf8_lossy(&output.stderr));

    output
}

#[test]
fn example_files() {
    let input_dir = PathBuf::from("./resources/test-examples/inputs");
    let expected_dir = PathBuf::from("./resources/test-examples/expected");

    let cases: [(&str, &[&str], &str); 3] = [
        (
            "transactions_1.json",
            &["--sender", "Tom Shelby", "--client", "Aunt Polly"],
            "report_1.txt",
        ),
        (
            "transactions_2.csv",
            &["--sender", "Mehran Kamal", "--client", "Ali Khan"],
            "report_2.txt",
        ),
        ("transactions_3.json", &[], "report_3.txt"),
    ];

    for (input, flags, expected) in cases {
        let input_file = input_dir.join(input);
        let expected_file = expected_dir.join(expected);

        println!("Testing input: {input_file:?}");
        println!("Expected: {expected_file:?}");

        let mut args = vec![input_file.to_str().unwrap()];
        args.extend_from_slice(flags);

        let output = run(&args);

        assert!(output.status.success());

        let actual = String::from_utf8(output.stdout).unwrap();
        let expected = fs::read_to_string(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(expected_file)).unwrap();

        assert_eq!(actual, expected);
    }
}

#[test]
fn json_format() {
    let output = run(&[
        "./resources/test-examples/inputs/transactions_1.json",
        "--sender",
        "Tom Shelby",
        "--format",
        "json",
    ]);

    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(report["uniqueClientCount"], 13);
    assert_eq!(report["topSender"], "Grace Burgess");
    assert_eq!(report["sentBy"]["sender"], "Tom Shelby");
    assert_eq!(report["clientIssues"], serde_json::Value::Null);
    assert_eq!(report["unsolvedIssueIds"], serde_json::json!([1, 3, 15, 78]));
    assert_eq!(
        report["solvedIssueMessages"].as_array().unwrap().len(),
        4
    );
    assert_eq!(
        report["transactionsByBeneficiary"]["Michael Gray"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
    assert_eq!(report["top3ByAmount"][0]["mtn"], 5465465);
}

#[test]
fn missing_file() {
    let output = run(&["./resources/test-examples/inputs/does_not_exist.json"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_argument() {
    let output = run(&[]);

    assert!(!output.status.success());
}
