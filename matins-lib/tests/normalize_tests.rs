mod common;

use approx::assert_relative_eq;
use matins::{melt, min_max_scale, pivot, subset};

#[test]
fn test_scaled_values_within_unit_interval() {
    let cols: [&[Option<f64>]; 3] = [
        &[Some(-3.0), Some(7.5), None, Some(0.25), Some(1e6)],
        &[Some(1e-9), Some(2e-9), Some(3e-9)],
        &[Some(-1.0), None, Some(-1.5)],
    ];
    for col in cols {
        for v in min_max_scale(col, 1e-12).into_iter().flatten() {
            assert!((0.0..=1.0).contains(&v), "{v} outside [0, 1]");
        }
    }
}

#[test]
fn test_single_present_value_scales_to_zero() {
    let scaled = min_max_scale(&[None, Some(-7.25), None], 1e-12);
    assert_eq!(scaled, vec![None, Some(0.0), None]);
}

#[test]
fn test_missing_values_propagate() {
    let scaled = min_max_scale(&[Some(1.0), None, Some(3.0)], 1e-12);
    assert!(scaled[1].is_none());
    assert_relative_eq!(scaled[0].unwrap(), 0.0);
    assert_relative_eq!(scaled[2].unwrap(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_constant_column_scales_to_zero() {
    let scaled = min_max_scale(&[Some(10.0), Some(10.0), Some(10.0)], 1e-12);
    assert_eq!(scaled, vec![Some(0.0); 3]);
}

#[test]
fn test_normalization_is_bit_identical_on_repeat() {
    let col = [Some(0.1), Some(0.7), None, Some(0.3333333333), Some(-2.2)];
    let first = min_max_scale(&col, 1e-12);
    let second = min_max_scale(&col, 1e-12);
    let bits = |v: &[Option<f64>]| v.iter().map(|x| x.map(f64::to_bits)).collect::<Vec<_>>();
    assert_eq!(bits(&first[..]), bits(&second[..]));
}

#[test]
fn test_scale_depends_on_selected_rows() {
    let ds = common::iron_oxides();
    let pair = subset(&ds, &["Fe2O3", "FeO"], &["density"]).unwrap().unwrap();
    let all = subset(&ds, &["Fe2O3", "FeO", "Al2O3"], &["density"])
        .unwrap()
        .unwrap();
    let pair_fe2o3 = pair.normalized(1e-12).values[0][0].unwrap();
    let all_fe2o3 = all.normalized(1e-12).values[0][0].unwrap();
    assert_relative_eq!(pair_fe2o3, 0.0);
    assert!(all_fe2o3 > 0.5);
}

#[test]
fn test_subset_rows_follow_dataset_order() {
    let ds = common::iron_oxides();
    let wide = subset(&ds, &["FeS2", "Fe2O3"], &["band_gap", "density"])
        .unwrap()
        .unwrap();
    assert_eq!(wide.entities, vec!["Fe2O3", "FeS2"]);
    assert_eq!(wide.properties, vec!["band_gap", "density"]);
    assert_eq!(wide.values[1], vec![None, Some(5.0)]);
}

#[test]
fn test_subset_empty_intersection_is_none() {
    let ds = common::iron_oxides();
    assert!(subset(&ds, &["CuO"], &["density"]).unwrap().is_none());
    assert!(subset(&ds, &["FeO"], &[] as &[&str]).unwrap().is_none());
}

#[test]
fn test_subset_rejects_non_numeric_property() {
    let ds = common::iron_oxides();
    let err = subset(&ds, &["FeO"], &["is_stable"]).unwrap_err();
    assert!(matches!(err, matins::MatinsError::NonNumericColumn(_)));
    let err = subset(&ds, &["FeO"], &["hardness"]).unwrap_err();
    assert!(matches!(err, matins::MatinsError::UnknownColumn(_)));
}

#[test]
fn test_melt_three_by_four_and_back() {
    let ds = common::iron_oxides();
    let props = ["nsites", "density", "formation_energy_per_atom", "band_gap"];
    let wide = subset(&ds, &["Fe2O3", "FeO", "Al2O3"], &props)
        .unwrap()
        .unwrap();

    let long = melt(&wide);
    assert_eq!(long.len(), 12);
    assert_eq!(long[0].entity, "Fe2O3");
    assert_eq!(long[0].property, "nsites");
    assert_eq!(long[4].entity, "FeO");
    assert_eq!(long[11].property, "band_gap");

    assert_eq!(pivot(&long), wide);
}
