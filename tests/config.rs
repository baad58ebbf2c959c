// tests/config.rs
use idle_economy::{Economy, EconomyConfig, EconomyError, UnitDef};

#[test]
fn json_roster_builds_a_working_economy() {
    let json = r#"{
        "starting_currency": 20.0,
        "units": [
            { "name": "Lemonade", "base_rate": 1.0, "base_cost": 20.0, "upgrade_base_cost": 200.0 },
            { "name": "Bakery", "base_rate": 6.0, "base_cost": 150.0, "upgrade_base_cost": 1500.0, "unlocked": true }
        ]
    }"#;
    let cfg = EconomyConfig::from_json_str(json).expect("valid json");
    assert_eq!(cfg.debug_grant, 100_000.0, "debug grant defaults when omitted");
    assert_eq!(cfg.units.len(), 2);

    let mut eco = Economy::new(cfg).unwrap();
    assert!(eco.units()[0].unlocked());
    assert!(eco.units()[1].unlocked(), "designer-unlocked building");
    assert!(eco.purchase(0).unwrap());
    assert_eq!(eco.production_rate(), 1.0);
    assert!(!eco.purchase(1).unwrap());
}

#[test]
fn default_roster_round_trips_through_json() {
    let cfg = EconomyConfig::default();
    let back = EconomyConfig::from_json_str(&cfg.to_json_string().unwrap()).unwrap();
    assert_eq!(back, cfg);
    assert_eq!(back.units.len(), 4);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = EconomyConfig::from_json_str("{ \"units\": [ { \"name\": 3 } ] }").unwrap_err();
    assert!(matches!(err, EconomyError::Config(_)), "got {err:?}");
}

#[test]
fn empty_roster_is_rejected() {
    let cfg = EconomyConfig { units: Vec::new(), ..EconomyConfig::default() };
    assert!(matches!(Economy::new(cfg), Err(EconomyError::EmptyRoster)));
    assert!(matches!(
        EconomyConfig::from_json_str(r#"{ "units": [] }"#),
        Err(EconomyError::EmptyRoster)
    ));
}

#[test]
fn negative_or_non_finite_definitions_are_rejected() {
    for bad in [
        UnitDef::new("Neg rate", -1.0, 10.0, 10.0),
        UnitDef::new("NaN cost", 1.0, f64::NAN, 10.0),
        UnitDef::new("Inf upgrade", 1.0, 10.0, f64::INFINITY),
    ] {
        let name = bad.name.clone();
        let cfg = EconomyConfig { units: vec![bad], ..EconomyConfig::default() };
        match Economy::new(cfg) {
            Err(EconomyError::InvalidDefinition { name: n, .. }) => assert_eq!(n, name),
            other => panic!("expected InvalidDefinition for {name}, got {other:?}"),
        }
    }
}

#[test]
fn cost_scale_touches_prices_and_purse_only() {
    let cfg = EconomyConfig { starting_currency: 15.0, ..EconomyConfig::default() };
    let scaled = cfg.with_cost_scale(2.0);
    assert_eq!(scaled.starting_currency, 30.0);
    assert_eq!(scaled.debug_grant, cfg.debug_grant);
    for (a, b) in cfg.units.iter().zip(&scaled.units) {
        assert_eq!(b.base_cost, a.base_cost * 2.0);
        assert_eq!(b.upgrade_base_cost, a.upgrade_base_cost * 2.0);
        assert_eq!(b.base_rate, a.base_rate);
    }
}

#[test]
fn error_messages_name_the_problem() {
    let e = EconomyError::UnknownUnit { index: 5, len: 4 };
    assert_eq!(e.to_string(), "unit index 5 out of range (roster has 4 units)");
}

#[test]
fn non_finite_debug_grant_is_rejected() {
    let cfg = EconomyConfig { debug_grant: f64::NAN, ..EconomyConfig::default() };
    match Economy::new(cfg) {
        Err(EconomyError::InvalidDefinition { name, .. }) => assert_eq!(name, "debug_grant"),
        other => panic!("expected InvalidDefinition, got {other:?}"),
    }
}

#[test]
fn designer_can_preset_ownership_and_visibility() {
    let cfg = EconomyConfig {
        units: vec![
            UnitDef::new("Cursor", 0.5, 15.0, 100.0).starts_unlocked(),
            UnitDef::new("Farm", 8.0, 1_100.0, 11_000.0).owned(3, 1),
        ],
        ..EconomyConfig::default()
    };
    let eco = Economy::new(cfg).unwrap();
    assert!(!eco.is_empty());
    assert_eq!(eco.len(), 2);

    assert!(eco.units()[0].unlocked(), "visible before the balance reaches 15");
    assert_eq!(eco.units()[0].count(), 0);

    let farm = &eco.units()[1];
    assert_eq!((farm.count(), farm.upgrade_level()), (3, 1));
    assert_eq!(eco.production_rate(), 3.0 * 8.0 * 2.0, "rate reflects preset ownership");
    assert_eq!(farm.purchase_cost(), 1_100.0 * 1.15_f64.powf(3.0));
    assert_eq!(farm.upgrade_cost(), 110_000.0);
}

#[test]
fn json_ownership_fields_default_to_zero() {
    let json = r#"{ "units": [
        { "name": "Mine", "base_rate": 47.0, "base_cost": 12000.0, "upgrade_base_cost": 120000.0, "count": 2 }
    ] }"#;
    let eco = Economy::new(EconomyConfig::from_json_str(json).unwrap()).unwrap();
    assert_eq!(eco.units()[0].count(), 2);
    assert_eq!(eco.units()[0].upgrade_level(), 0);
    assert_eq!(eco.production_rate(), 94.0);
}
