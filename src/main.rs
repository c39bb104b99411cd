use shot_dispersion::{AnalyzerParams, DispersionAnalyzer};

fn main() {
    // Demo stub: analyzes a synthetic 7-iron group with one pushed shot
    let seven_iron = vec![
        [-2.4, 148.0],
        [1.1, 151.5],
        [0.2, 150.0],
        [2.8, 154.5],
        [-1.0, 149.0],
        [0.6, 152.2],
        [-1.8, 147.5],
        [1.9, 153.0],
        [24.0, 150.5],
    ];

    let analyzer = DispersionAnalyzer::new(AnalyzerParams::default());
    let report = analyzer.analyze(&seven_iron);

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("Failed to serialize report: {err}"),
    }
}
