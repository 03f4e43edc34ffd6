#[cfg(test)]
mod tests {
    use glam::DVec3;

    use factoryvis_core::enums::AnimationKind;

    use crate::component::ComponentAnimation;
    use crate::easing::*;
    use crate::renderable::{Renderable, SceneObject};
    use crate::sequence::{AnimationSequence, SequenceMode};
    use crate::tween::{AnimatedValue, AnimatedVector3};

    const FRAME_DT: f64 = 1.0 / 60.0;

    fn part_at(y: f64) -> SceneObject {
        SceneObject::at(DVec3::new(0.0, y, 0.0))
    }

    // ---- Easing ----

    #[test]
    fn test_easing_boundaries_exact() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at t=0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at t=1");
        }
    }

    #[test]
    fn test_easing_formulas() {
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert!((ease_in_quad(0.5) - 0.25).abs() < 1e-12);
        assert!((ease_out_quad(0.5) - 0.75).abs() < 1e-12);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);

        let c1 = 1.70158;
        let c3 = c1 + 1.0;
        let t: f64 = 0.3;
        let expected = 1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2);
        assert!((ease_out_back(t) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ease_out_back_overshoots() {
        let peak = (1..100)
            .map(|i| ease_out_back(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "back curve should overshoot, peak {peak}");
    }

    #[test]
    fn test_ease_out_bounce_segments() {
        // Segment boundaries land on the floor of each hop.
        assert!((ease_out_bounce(1.0 / 2.75) - 1.0).abs() < 1e-12);
        assert!((ease_out_bounce(1.5 / 2.75) - 0.75).abs() < 1e-12);
        assert!((ease_out_bounce(2.25 / 2.75) - 0.9375).abs() < 1e-12);
        assert!((ease_out_bounce(2.625 / 2.75) - 0.984375).abs() < 1e-12);
        for i in 0..=100 {
            let v = ease_out_bounce(i as f64 / 100.0);
            assert!((0.0..=1.0 + 1e-12).contains(&v), "bounce out of range: {v}");
        }
    }

    #[test]
    fn test_easing_fn_pointer_is_shared() {
        let curve: EasingFn = Easing::EaseOutBack.as_fn();
        let mut a = AnimatedValue::new(0.0, 10.0, 1.0, curve);
        let mut b = AnimatedValue::new(5.0, 6.0, 2.0, curve);
        a.update(0.5);
        b.update(1.0);
        assert!((a.value() - 10.0 * ease_out_back(0.5)).abs() < 1e-12);
        assert!((b.value() - (5.0 + ease_out_back(0.5))).abs() < 1e-12);
    }

    #[test]
    fn test_easing_serde_name() {
        let easing: Easing = serde_json::from_str(r#""ease-out-bounce""#).unwrap();
        assert_eq!(easing, Easing::EaseOutBounce);
    }

    // ---- Tween ----

    #[test]
    fn test_tween_converges_exactly_for_every_curve() {
        for easing in Easing::ALL {
            let end = DVec3::new(1.0 / 3.0, 7.1, -2.9);
            let mut tween = AnimatedVector3::new(DVec3::new(0.0, -15.0, 0.0), end, 1.8, easing.as_fn());
            let mut value = tween.start();
            let mut ticks = 0;
            while !tween.is_complete() {
                value = tween.update(FRAME_DT);
                ticks += 1;
                assert!(ticks < 1000, "{easing:?} never completed");
            }
            assert_eq!(value, end, "{easing:?} did not land exactly");
            assert_eq!(tween.update(FRAME_DT), end);
        }
    }

    #[test]
    fn test_tween_midpoint_uses_easing() {
        let mut tween = AnimatedValue::new(10.0, 20.0, 2.0, linear);
        let v = tween.update(0.5);
        assert!((v - 12.5).abs() < 1e-12);
        assert!((tween.progress() - 0.25).abs() < 1e-12);
        assert!(!tween.is_complete());
    }

    #[test]
    fn test_tween_value_does_not_advance() {
        let mut tween = AnimatedValue::ease_out(0.0, 1.0, 1.0);
        tween.update(0.25);
        let a = tween.value();
        let b = tween.value();
        assert_eq!(a, b);
        assert_eq!(tween.elapsed(), 0.25);
    }

    #[test]
    fn test_tween_negative_delta_is_zero_progress() {
        let mut tween = AnimatedValue::new(0.0, 1.0, 1.0, linear);
        tween.update(0.5);
        let before = tween.progress();
        tween.update(-0.4);
        assert_eq!(tween.progress(), before);
        tween.update(f64::NAN);
        assert_eq!(tween.progress(), before);
    }

    #[test]
    fn test_tween_zero_duration_completes_immediately() {
        let mut tween = AnimatedValue::new(3.0, 4.0, 0.0, linear);
        assert_eq!(tween.update(0.0), 4.0);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_tween_reset_keeps_endpoints() {
        let mut tween = AnimatedValue::new(1.0, 2.0, 0.5, linear);
        tween.update(1.0);
        assert!(tween.is_complete());
        tween.reset();
        assert!(!tween.is_complete());
        assert_eq!(tween.elapsed(), 0.0);
        assert_eq!(tween.start(), 1.0);
        assert_eq!(tween.end(), 2.0);
        assert_eq!(tween.duration(), 0.5);
        assert_eq!(tween.value(), 1.0);
    }

    // ---- Component animation ----

    #[test]
    fn test_component_construction_hides_and_offsets() {
        let anim = ComponentAnimation::new(part_at(4.0), AnimationKind::Rise);
        assert!(!anim.object().is_visible());
        assert_eq!(anim.final_position(), DVec3::new(0.0, 4.0, 0.0));
        assert_eq!(anim.start_position(), DVec3::new(0.0, -11.0, 0.0));
        assert!(!anim.is_active());
        assert!(!anim.is_complete());

        let slide = ComponentAnimation::new(part_at(4.0), AnimationKind::SlideRight);
        assert_eq!(slide.start_position(), DVec3::new(20.0, 4.0, 0.0));
    }

    #[test]
    fn test_component_start_shows_part_at_start() {
        let mut anim = ComponentAnimation::new(part_at(8.25), AnimationKind::Drop);
        assert!(anim.start(1.8, ease_out_bounce));
        assert!(anim.is_active());
        assert!(anim.object().is_visible());
        assert_eq!(anim.object().position(), DVec3::new(0.0, 23.25, 0.0));
    }

    #[test]
    fn test_component_runs_to_final_position() {
        let mut anim = ComponentAnimation::new(part_at(4.0), AnimationKind::SlideLeft);
        anim.start(1.8, ease_out_back);
        let mut ticks = 0;
        while !anim.is_complete() {
            anim.update(FRAME_DT);
            ticks += 1;
            assert!(ticks < 200);
        }
        assert!(!anim.is_active());
        assert_eq!(anim.object().position(), anim.final_position());
        assert!((ticks as f64 * FRAME_DT - 1.8).abs() < 2.0 * FRAME_DT);
    }

    #[test]
    fn test_component_start_is_idempotent() {
        let mut anim = ComponentAnimation::new(part_at(4.0), AnimationKind::Rise);
        anim.start(1.0, linear);
        anim.update(0.4);
        let position = anim.object().position();
        let progress = anim.progress();

        assert!(!anim.start(1.0, linear), "restart while active must be refused");
        assert_eq!(anim.object().position(), position);
        assert_eq!(anim.progress(), progress);

        anim.complete();
        assert!(!anim.start(1.0, linear), "restart after complete must be refused");
        assert!(anim.is_complete());
        assert!(!anim.is_active());
        assert_eq!(anim.object().position(), anim.final_position());
    }

    #[test]
    fn test_component_update_ignored_when_idle() {
        let mut anim = ComponentAnimation::new(part_at(4.0), AnimationKind::Rise);
        anim.update(1.0);
        assert!(!anim.is_complete());
        assert!(!anim.object().is_visible());
        assert_eq!(anim.object().position(), DVec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn test_component_complete_skips_animation() {
        let mut anim = ComponentAnimation::new(part_at(4.0), AnimationKind::SlideIn);
        anim.complete();
        assert!(anim.is_complete());
        assert!(anim.object().is_visible());
        assert_eq!(anim.object().position(), anim.final_position());
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_component_reset_after_complete_matches_fresh() {
        let fresh = ComponentAnimation::new(part_at(4.0), AnimationKind::Rise);
        let mut anim = fresh.clone();
        anim.start(1.0, linear);
        anim.update(0.3);
        anim.complete();
        anim.reset();

        assert_eq!(anim.start_position(), fresh.start_position());
        assert_eq!(anim.final_position(), fresh.final_position());
        assert_eq!(anim.is_active(), fresh.is_active());
        assert_eq!(anim.is_complete(), fresh.is_complete());
        assert_eq!(anim.object().is_visible(), fresh.object().is_visible());
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.object().position(), anim.start_position());

        // A reset animation replays from the start.
        assert!(anim.start(1.0, linear));
        assert_eq!(anim.object().position(), fresh.start_position());
    }

    // ---- Sequence ----

    fn three_parts(mode: SequenceMode) -> AnimationSequence<SceneObject> {
        AnimationSequence::new(mode)
            .with_timing(1.0, linear)
            .with(ComponentAnimation::new(part_at(4.0), AnimationKind::Rise))
            .with(ComponentAnimation::new(part_at(4.0), AnimationKind::SlideLeft))
            .with(ComponentAnimation::new(part_at(8.25), AnimationKind::Drop))
    }

    #[test]
    fn test_sequence_sequential_runs_in_order() {
        let mut seq = three_parts(SequenceMode::Sequential);
        seq.start();
        assert!(seq.is_running());
        assert!(seq.animations()[0].is_active());
        assert!(!seq.animations()[1].is_active());

        for _ in 0..4 {
            seq.update(0.26);
        }
        assert_eq!(seq.current_index(), 1);
        assert!(seq.animations()[0].is_complete());
        assert!(seq.animations()[1].is_active());

        for _ in 0..20 {
            seq.update(0.26);
        }
        assert!(seq.is_complete());
        assert!(!seq.is_running());
        assert!(seq.animations().iter().all(|a| a.is_complete()));
    }

    #[test]
    fn test_sequence_parallel_finishes_together() {
        let mut seq = three_parts(SequenceMode::Parallel);
        seq.start();
        assert!(seq.animations().iter().all(|a| a.is_active()));
        seq.update(0.5);
        assert!(!seq.is_complete());
        seq.update(0.5);
        assert!(seq.is_complete());
    }

    #[test]
    fn test_sequence_empty_completes_on_start() {
        let mut seq: AnimationSequence<SceneObject> = AnimationSequence::default();
        seq.start();
        assert!(seq.is_complete());
        assert!(!seq.is_running());
    }

    #[test]
    fn test_sequence_reset() {
        let mut seq = three_parts(SequenceMode::Parallel);
        seq.start();
        seq.update(2.0);
        assert!(seq.is_complete());
        seq.reset();
        assert!(!seq.is_complete());
        assert_eq!(seq.current_index(), 0);
        assert!(seq
            .animations()
            .iter()
            .all(|a| !a.is_complete() && !a.object().is_visible()));
    }
}
