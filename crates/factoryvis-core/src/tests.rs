#[cfg(test)]
mod tests {
    use crate::commands::LineCommand;
    use crate::config::{ConfigError, LineConfig, StationConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::LineEvent;
    use crate::state::ProductionSnapshot;
    use crate::types::{sanitize_delta, DVec3, SimTime, UnitId};

    #[test]
    fn test_animation_offsets_are_exact() {
        assert_eq!(AnimationKind::Rise.offset(), DVec3::new(0.0, -15.0, 0.0));
        assert_eq!(AnimationKind::Drop.offset(), DVec3::new(0.0, 15.0, 0.0));
        assert_eq!(AnimationKind::SlideLeft.offset(), DVec3::new(-20.0, 0.0, 0.0));
        assert_eq!(AnimationKind::SlideRight.offset(), DVec3::new(20.0, 0.0, 0.0));
        assert_eq!(AnimationKind::SlideIn.offset(), DVec3::new(0.0, 0.0, -15.0));
        assert_eq!(AnimationKind::None.offset(), DVec3::ZERO);
    }

    #[test]
    fn test_component_slot_stage_mapping() {
        assert_eq!(ComponentSlot::for_stage(0), None);
        assert_eq!(ComponentSlot::for_stage(4), None);
        for slot in ComponentSlot::ALL {
            assert_eq!(ComponentSlot::for_stage(slot.stage()), Some(slot));
        }
        assert_eq!(ComponentSlot::Roof.stage(), STAGE_COMPLETE);
    }

    #[test]
    fn test_roof_rests_on_top_of_walls() {
        let walls = ComponentSlot::Walls.rest_position();
        let roof = ComponentSlot::Roof.rest_position();
        assert!((walls.y - 4.0).abs() < 1e-12);
        assert!((roof.y - 8.25).abs() < 1e-12);
    }

    #[test]
    fn test_sanitize_delta() {
        assert_eq!(sanitize_delta(0.016), 0.016);
        assert_eq!(sanitize_delta(0.0), 0.0);
        assert_eq!(sanitize_delta(-0.5), 0.0);
        assert_eq!(sanitize_delta(f64::NAN), 0.0);
        assert_eq!(sanitize_delta(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(DT);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = LineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.stations.len(), 3);
        assert_eq!(config.stations[0].label, "Frame Assembly");
        assert!((config.station_dwell_secs() - 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_config_uses_defaults() {
        let config = LineConfig::from_json_str(r#"{ "max_concurrent_units": 5 }"#).unwrap();
        assert_eq!(config.max_concurrent_units, 5);
        assert_eq!(config.unit_speed, UNIT_SPEED);
        assert_eq!(config.stations, LineConfig::default().stations);
    }

    #[test]
    fn test_config_rejects_crowded_stations() {
        let mut config = LineConfig::default();
        config.stations.push(StationConfig {
            track_coordinate: -21.5,
            stage: 2,
            label: "Too Close".into(),
        });
        match config.validate() {
            Err(ConfigError::Invalid(msg)) => assert!(msg.contains("closer than")),
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_config_rejects_bad_timing_and_stages() {
        let mut config = LineConfig::default();
        config.assembly_duration_secs = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = LineConfig::default();
        config.stations[1].stage = 4;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = LineConfig::default();
        config.stations[2].track_coordinate = -120.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = LineConfig::default();
        config.initial_speed = 9.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_config_parse_error() {
        let err = LineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_missing_file() {
        let err = LineConfig::from_path("/definitely/not/here/line.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    /// Commands arrive from a dashboard as tagged JSON.
    #[test]
    fn test_line_command_wire_format() {
        let cmd: LineCommand =
            serde_json::from_str(r#"{ "type": "SetSpeed", "multiplier": 2.5 }"#).unwrap();
        assert_eq!(cmd, LineCommand::SetSpeed { multiplier: 2.5 });

        let json = serde_json::to_string(&LineCommand::TogglePause).unwrap();
        assert_eq!(json, r#"{"type":"TogglePause"}"#);
    }

    #[test]
    fn test_snapshot_serializes_events() {
        let snapshot = ProductionSnapshot {
            events: vec![
                LineEvent::UnitSpawned { unit: UnitId(0) },
                LineEvent::AssemblyStarted {
                    unit: UnitId(0),
                    stage: 1,
                },
            ],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""type":"AssemblyStarted""#));
        let back: ProductionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.events, snapshot.events);
        assert_eq!(back.phase, LinePhase::Running);
    }

    #[test]
    fn test_animation_kind_serde_names() {
        let json = serde_json::to_string(&AnimationKind::SlideLeft).unwrap();
        assert_eq!(json, r#""slide-left""#);
    }
}
