// Street-scale polylines around 32.8° N, the latitude the rulers in these
// tests are calibrated at.

fn fixture_lines() -> Vec<LineString<f64>> {
    vec![
        line_string![
            (x: -96.920341, y: 32.838261),
            (x: -96.920421, y: 32.838295),
            (x: -96.920421, y: 32.838295),
            (x: -96.920536, y: 32.838297),
            (x: -96.920684, y: 32.838293),
            (x: -96.920818, y: 32.838301),
        ],
        line_string![
            (x: -96.799712, y: 32.779331),
            (x: -96.798814, y: 32.779908),
            (x: -96.797635, y: 32.780611),
            (x: -96.796112, y: 32.781405),
            (x: -96.794409, y: 32.782207),
            (x: -96.793315, y: 32.782844),
        ],
        line_string![
            (x: -96.851604, y: 32.902214),
            (x: -96.851604, y: 32.903881),
            (x: -96.850011, y: 32.905122),
            (x: -96.847932, y: 32.905169),
            (x: -96.846018, y: 32.904410),
            (x: -96.845220, y: 32.902774),
            (x: -96.846105, y: 32.901226),
        ],
        // doubles back on itself
        line_string![
            (x: -96.771203, y: 32.853120),
            (x: -96.768855, y: 32.853117),
            (x: -96.766410, y: 32.853122),
            (x: -96.768855, y: 32.853301),
            (x: -96.771203, y: 32.853309),
        ],
        line_string![
            (x: -97.112460, y: 32.735601),
            (x: -97.104388, y: 32.741920),
            (x: -97.095113, y: 32.746882),
            (x: -97.082946, y: 32.749014),
            (x: -97.070102, y: 32.752307),
            (x: -97.061539, y: 32.760411),
            (x: -97.052776, y: 32.764090),
        ],
    ]
}

fn fixture_points() -> Vec<Point<f64>> {
    fixture_lines()
        .iter()
        .flat_map(|line| line.points())
        .collect()
}

fn assert_rel(actual: f64, expected: f64, max_err: f64, what: &str) {
    assert!(!actual.is_nan() && !expected.is_nan(), "{what} produced NaN");
    let err = ((actual - expected) / expected).abs();
    assert!(err <= max_err, "{what}: actual {actual}, expected {expected}, err {err}");
}
