use super::*;

#[test]
fn defaults_match_reference_render() {
    let cfg = WheelConfig::default();
    assert_eq!(cfg.frame_count, 60);
    assert_eq!((cfg.width, cfg.height, cfg.radius), (600, 600, 250));
    cfg.validate().unwrap();
}

#[test]
fn config_validation_catches_bad_values() {
    for cfg in [
        WheelConfig {
            width: 0,
            ..WheelConfig::default()
        },
        WheelConfig {
            height: 0,
            ..WheelConfig::default()
        },
        WheelConfig {
            radius: 0,
            ..WheelConfig::default()
        },
        WheelConfig {
            width: 70_000,
            ..WheelConfig::default()
        },
        WheelConfig {
            width: 20_000,
            height: 20_000,
            ..WheelConfig::default()
        },
        WheelConfig {
            width: 64,
            height: 64,
            radius: 65,
            ..WheelConfig::default()
        },
        WheelConfig {
            width: 64,
            height: 64,
            radius: u32::MAX,
            ..WheelConfig::default()
        },
    ] {
        assert!(cfg.validate().unwrap_err().is_invalid_input());
    }
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let cfg: WheelConfig = serde_json::from_str(r#"{"frame_count": 12}"#).unwrap();
    assert_eq!(
        cfg,
        WheelConfig {
            frame_count: 12,
            ..WheelConfig::default()
        }
    );
}

#[test]
fn item_count_bounds() {
    let none: [&str; 0] = [];
    assert!(validate_items(&none).unwrap_err().is_invalid_input());

    let too_many: Vec<String> = (0..21).map(|i| format!("item{i}")).collect();
    assert!(validate_items(&too_many).unwrap_err().is_invalid_input());

    validate_items(&too_many[..20]).unwrap();
    validate_items(&["solo"]).unwrap();
}

#[test]
fn radius_bound_follows_longest_side() {
    let wide = WheelConfig {
        width: 300,
        height: 40,
        radius: 300,
        ..WheelConfig::default()
    };
    wide.validate().unwrap();

    let square = WheelConfig {
        width: 4096,
        height: 4096,
        radius: 4096,
        ..WheelConfig::default()
    };
    square.validate().unwrap();
    assert!(
        WheelConfig {
            radius: 4097,
            ..square
        }
        .validate()
        .unwrap_err()
        .is_invalid_input()
    );
}
