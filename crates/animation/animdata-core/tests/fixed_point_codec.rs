use animdata_core::{
    decode, decode_curve, encode, encode_curve, encode_curve_with, try_encode, AnimDataError,
    Curve, CurveSample, KeyFrame, OverflowPolicy, FIXED_POINT_SCALE,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

const STEP: f32 = 1.0 / FIXED_POINT_SCALE as f32;

/// Deterministic pseudo-random floats in [-range, range].
fn sample_values(count: usize, range: f32) -> Vec<f32> {
    let mut rng = Pcg64::seed_from_u64(0x5eed);
    (0..count).map(|_| rng.random_range(-range..=range)).collect()
}

#[test]
fn encodes_four_decimal_digits() {
    assert_eq!(encode(1.2345), 12345);
    assert_eq!(decode(12345), 1.2345);
    assert_eq!(encode(0.0), 0);
    assert_eq!(encode(-2.5), -25000);
    assert_eq!(decode(-25000), -2.5);
}

#[test]
fn truncates_instead_of_rounding() {
    // 0.7071f32 is slightly below 0.7071, so the cast lands on 7070, not 7071.
    assert_eq!(encode(0.7071), 7070);
    assert_eq!(encode(0.00009), 0);
    assert_eq!(encode(-0.00009), 0);
    assert_eq!(encode(3.99999), 39999);
    assert_eq!(encode(-3.99999), -39999);
}

#[test]
fn round_trip_stays_within_one_step_and_never_grows() {
    for v in sample_values(5000, 1000.0) {
        let back = decode(encode(v));
        let err = (back - v).abs();
        assert!(
            err <= STEP + v.abs() * f32::EPSILON,
            "v={v} back={back} err={err}"
        );
        assert!(back.abs() <= v.abs(), "v={v} back={back}");
        // truncation keeps the sign (or lands on zero)
        assert!(back == 0.0 || back.signum() == v.signum(), "v={v} back={back}");
    }
}

#[test]
fn curve_round_trip_preserves_length_and_order() {
    let values = sample_values(64, 50.0);
    let samples: Vec<CurveSample> = values
        .chunks(4)
        .enumerate()
        .map(|(i, c)| CurveSample::new(i as f32 * 0.25, c[0], c[1], c[2] + c[3]))
        .collect();

    let curve = encode_curve(&samples).expect("encode curve");
    assert_eq!(curve.len(), samples.len());
    for (kf, s) in curve.points.iter().zip(&samples) {
        assert_eq!(kf.time, encode(s.time));
        assert_eq!(kf.value, encode(s.value));
        assert_eq!(kf.in_tangent, encode(s.in_tangent));
        assert_eq!(kf.out_tangent, encode(s.out_tangent));
    }

    let decoded = decode_curve(&curve);
    assert_eq!(decoded.len(), samples.len());
    for (d, s) in decoded.iter().zip(&samples) {
        for (a, b) in [
            (d.time, s.time),
            (d.value, s.value),
            (d.in_tangent, s.in_tangent),
            (d.out_tangent, s.out_tangent),
        ] {
            assert!((a - b).abs() <= STEP + b.abs() * f32::EPSILON, "{a} vs {b}");
        }
    }
}

#[test]
fn codec_does_not_resort_or_dedup() {
    let samples = vec![
        CurveSample::new(1.0, 5.0, 0.0, 0.0),
        CurveSample::new(0.5, 5.0, 0.0, 0.0),
        CurveSample::new(0.5, 5.0, 0.0, 0.0),
    ];
    let curve = encode_curve(&samples).unwrap();
    let times: Vec<i32> = curve.points.iter().map(|k| k.time).collect();
    assert_eq!(times, vec![10000, 5000, 5000]);
}

#[test]
fn empty_channel_encodes_and_decodes_empty() {
    let curve = encode_curve(&[]).unwrap();
    assert!(curve.is_empty());
    assert_eq!(curve, Curve::default());
    assert!(decode_curve(&curve).is_empty());
}

#[test]
fn overflow_is_rejected_by_default() {
    let samples = vec![
        CurveSample::new(0.0, 1.0, 0.0, 0.0),
        CurveSample::new(1.0, 500_000.0, 0.0, 0.0),
    ];
    let err = encode_curve(&samples).unwrap_err();
    assert!(
        matches!(&err, AnimDataError::ChannelOverflow { value } if value == "500000"),
        "{err:?}"
    );

    let err = try_encode(f32::NAN).unwrap_err();
    assert_eq!(err.category(), "codec");
}

#[test]
fn saturate_policy_clamps_to_i32_range() {
    let samples = vec![CurveSample::new(0.0, 500_000.0, -500_000.0, f32::NAN)];
    let curve = encode_curve_with(&samples, OverflowPolicy::Saturate).unwrap();
    assert_eq!(
        curve.points,
        vec![KeyFrame {
            value: i32::MAX,
            time: 0,
            in_tangent: i32::MIN,
            out_tangent: 0,
        }]
    );
}

#[test]
fn largest_representable_magnitude_is_accepted() {
    // 2^31 / 10000 ~= 214748.36; whole values up to 214748 fit.
    assert_eq!(try_encode(214_748.0).unwrap(), 2_147_480_000);
    assert_eq!(try_encode(-214_748.0).unwrap(), -2_147_480_000);
    assert!(try_encode(-214_749.0).is_err());
}
