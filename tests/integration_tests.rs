use fitcalc::{config, dispatch, import, message, models};
use fitcalc::{TrainingError, WorkoutCalculator};

/// Integration tests that exercise the complete package → report workflow

#[cfg(test)]
mod integration_tests {
    use super::*;
    use fitcalc::message::OutputFormat;
    use fitcalc::models::Package;

    fn report_line(code: &str, data: &[f64]) -> String {
        dispatch::read_package(code, data)
            .unwrap()
            .build_report()
            .unwrap()
            .get_message()
    }

    /// Reference swimming package: 25 m pool, 40 laps in one hour
    #[test]
    fn test_swimming_end_to_end() {
        assert_eq!(
            report_line("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            "Kind: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories: 336.000."
        );
    }

    #[test]
    fn test_running_end_to_end() {
        assert_eq!(
            report_line("RUN", &[15000.0, 1.0, 75.0]),
            "Kind: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories: 797.805."
        );
    }

    #[test]
    fn test_sports_walking_end_to_end() {
        assert_eq!(
            report_line("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            "Kind: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories: 349.252."
        );
    }

    #[test]
    fn test_running_report_fields() {
        let report = dispatch::read_package("RUN", &[15000.0, 1.0, 75.0])
            .unwrap()
            .build_report()
            .unwrap();

        assert_eq!(report.training_type, "Running");
        assert!((report.distance - 9.75).abs() < 1e-9);
        assert!((report.speed - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_dispatch_failures_are_distinct() {
        let unknown = dispatch::read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(unknown, TrainingError::UnrecognizedKind { .. }));

        let short = dispatch::read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            short,
            TrainingError::ArityMismatch { expected: 4, actual: 3, .. }
        ));
    }

    /// CSV batch → dispatch → JSON output
    #[test]
    fn test_batch_workflow() {
        let csv = "SWM,720,1,80,25,40\nRUN,15000,1,75\nWLK,9000,1,75,180\n";
        let packages = import::read_packages(csv.as_bytes()).unwrap();
        assert_eq!(packages, Package::demo_packages());

        let coefficients = config::CoefficientConfig::default();
        let reports = packages
            .iter()
            .map(|package| package.read(&coefficients)?.build_report())
            .collect::<fitcalc::Result<Vec<_>>>()
            .unwrap();

        let json = message::render_reports(&reports, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let kinds: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["training_type"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, vec!["Swimming", "Running", "SportsWalking"]);

        let text = message::render_reports(&reports, OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    /// Overriding a coefficient in TOML changes the computed report
    #[test]
    fn test_custom_coefficients_workflow() {
        let coefficients = config::CoefficientConfig::load_from_string(
            r#"
[swimming]
weight_multiplier = 1.0
"#,
        )
        .unwrap();

        let report = dispatch::read_package_with(&coefficients, "SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
            .unwrap()
            .build_report()
            .unwrap();

        // (1.0 + 1.1) * 1 * 80 * 1
        assert!((report.calories - 168.0).abs() < 1e-9);
    }

    #[test]
    fn test_every_code_dispatches_with_its_arity() {
        for code in models::WorkoutCode::ALL {
            let data = vec![1000.0; code.arity()];
            let training = dispatch::read_package(code.as_str(), &data).unwrap();
            assert_eq!(training.code(), code);
            assert_eq!(training.training_type(), code.training_type());
        }
    }
}
