mod common;

use matins::{ChartKind, ChartOutcome, CompareConfig, Explorer};

const PROPS: [&str; 3] = ["density", "nsites", "band_gap"];

fn explorer() -> Explorer {
    Explorer::new(common::iron_oxides(), CompareConfig::default()).unwrap()
}

#[test]
fn test_entity_choices_follow_filter() {
    let explorer = explorer();
    assert_eq!(
        explorer.entity_choices(""),
        vec!["Fe2O3", "FeO", "Al2O3", "Fe3O4", "FeS2"]
    );
    assert_eq!(explorer.entity_choices("   "), explorer.entity_choices(""));
    assert_eq!(explorer.entity_choices("AL"), vec!["Al2O3"]);
    assert_eq!(explorer.entity_choices("fe"), vec!["Fe2O3", "FeO", "Fe3O4", "FeS2"]);
    assert!(explorer.entity_choices("cu").is_empty());
}

#[test]
fn test_radar_filtered_out_material_leaves_one() {
    let outcome = explorer().radar("fe", &["Fe2O3", "Al2O3"], &PROPS).unwrap();
    match outcome {
        ChartOutcome::Incomplete { guidance } => {
            assert!(guidance.contains("materials (currently 1)"), "{guidance}")
        }
        other => panic!("expected guidance, got {other:?}"),
    }
}

#[test]
fn test_heatmap_and_parallel_filtered_out_material_leaves_one() {
    let explorer = explorer();
    let heat = explorer.heatmap("fe", &["Fe2O3", "Al2O3"], &PROPS).unwrap();
    assert!(matches!(heat, ChartOutcome::Incomplete { .. }));
    let pc = explorer.parallel("fe", &["Fe2O3", "Al2O3"], &PROPS).unwrap();
    assert!(matches!(pc, ChartOutcome::Incomplete { .. }));
}

#[test]
fn test_charts_ready_when_selection_stays_in_view() {
    let explorer = explorer();
    let selected = ["Fe2O3", "FeO", "Al2O3"];

    let radar = explorer
        .radar("fe", &selected[..2], &explorer.default_properties(ChartKind::Radar))
        .unwrap()
        .into_ready()
        .unwrap();
    assert!(radar.points.iter().all(|p| p.entity != "Al2O3"));

    let heat = explorer
        .heatmap("O", &selected, &["density", "band_gap"])
        .unwrap()
        .into_ready()
        .unwrap();
    assert_eq!(heat.row_labels, vec!["Fe2O3", "FeO", "Al2O3"]);

    let pc = explorer
        .parallel("o", &selected, &["density", "formation_energy_per_atom"])
        .unwrap()
        .into_ready()
        .unwrap();
    assert_eq!(pc.entities, selected);
}

#[test]
fn test_filter_rescales_over_remaining_materials() {
    // Al2O3 is filtered out, so density scales over the iron compounds only.
    let radar = explorer()
        .radar("fe", &["Fe2O3", "FeO", "Al2O3", "FeS2"], &PROPS)
        .unwrap()
        .into_ready()
        .unwrap();
    let density: Vec<_> = radar
        .points
        .iter()
        .filter(|p| p.property == "density")
        .map(|p| (p.entity.as_str(), p.value))
        .collect();
    assert_eq!(density.len(), 3);
    assert_eq!(density[0].0, "Fe2O3");
    assert_eq!(density[2], ("FeS2", Some(0.0)));
    assert!(density[1].1.unwrap() > 0.99);
}

#[test]
fn test_scatter_follows_filter() {
    let explorer = explorer();
    let scatter = explorer.scatter("s2", "density", "nsites").unwrap();
    assert_eq!(scatter.points.len(), 1);
    assert_eq!(scatter.points[0].label, "FeS2");
    assert_eq!(explorer.scatter("", "density", "nsites").unwrap().points.len(), 5);
}
