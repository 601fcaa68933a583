//! Property tests for layout determinism and the interaction state machine

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use valentine_proposal::layout::{det, rising_heart, scatter_heart};
use valentine_proposal::proposal::{
    Celebrate, CelebrationParams, ContainerBounds, EffectError, NO_PHRASES, ProposalController,
    ProposalEvent, ProposalPhase, label_for,
};
use valentine_proposal::view::{MountPlan, ViewModel, mount_plan, render_page};
use valentine_proposal::viewport::FixedViewport;
use valentine_proposal::PageConfig;

#[derive(Default)]
struct CountingCelebration {
    bursts: usize,
}

impl Celebrate for CountingCelebration {
    fn burst(&mut self, _params: &CelebrationParams) -> Result<(), EffectError> {
        self.bursts += 1;
        Ok(())
    }
}

fn mounted(width: f64) -> ProposalController<CountingCelebration> {
    ProposalController::new(
        PageConfig::default(),
        CountingCelebration::default(),
        &FixedViewport::new(width),
    )
}

#[derive(Debug, Clone)]
enum Input {
    Accept,
    Evade(Option<(f32, f32)>),
    Resize(f64),
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Accept),
        proptest::option::of((0.0f32..2000.0, 0.0f32..2000.0)).prop_map(Input::Evade),
        (0.0f64..4000.0).prop_map(Input::Resize),
    ]
}

proptest! {
    #[test]
    fn det_is_deterministic(i in 0u64..1_000_000, seed in -1.0e6f64..1.0e6) {
        prop_assert_eq!(det(i, seed).to_bits(), det(i, seed).to_bits());
    }

    #[test]
    fn det_in_unit_interval(i in any::<u64>(), seed in -1.0e6f64..1.0e6) {
        let v = det(i, seed);
        prop_assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn descriptors_are_deterministic(i in 0u32..100_000, compact in any::<bool>()) {
        prop_assert_eq!(scatter_heart(i, compact), scatter_heart(i, compact));
        prop_assert_eq!(rising_heart(i), rising_heart(i));
    }

    #[test]
    fn descriptors_cover_whole_index_range(i in any::<u32>(), compact in any::<bool>()) {
        let s = scatter_heart(i, compact);
        prop_assert_eq!(s.index, i);
        prop_assert!((0.0..100.0).contains(&s.position_x));
        prop_assert_eq!(&s, &scatter_heart(i, compact));

        let r = rising_heart(i);
        prop_assert_eq!(r.index, i);
        prop_assert!((0.0..100.0).contains(&r.position_x));
        prop_assert!((0.7..=1.0).contains(&r.opacity));
        prop_assert_eq!(&r, &rising_heart(i));
    }

    #[test]
    fn label_saturates(count in any::<u32>()) {
        let expected = NO_PHRASES[(count as usize).min(NO_PHRASES.len() - 1)];
        prop_assert_eq!(label_for(&NO_PHRASES, count), expected);
    }

    #[test]
    fn evade_count_monotonic_and_accept_sticky(
        inputs in proptest::collection::vec(input(), 0..60),
        seed in any::<u64>(),
    ) {
        let mut c = mounted(1280.0);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut was_accepted = false;

        for inp in inputs {
            let before = c.state().evade_count;
            let event = match inp {
                Input::Accept => ProposalEvent::Accept,
                Input::Evade(b) => ProposalEvent::EvadeTrigger(b.map(|(w, h)| ContainerBounds::new(w, h))),
                Input::Resize(w) => ProposalEvent::ViewportChange(w),
            };
            let measurable = matches!(event, ProposalEvent::EvadeTrigger(Some(b)) if b.is_measurable());
            let asking = c.phase() == ProposalPhase::Asking;
            c.handle(event, &mut rng);

            let after = c.state().evade_count;
            prop_assert!(after >= before);
            if measurable && asking {
                prop_assert_eq!(after, before + 1);
                let range = c.config().evade_range;
                prop_assert!(c.state().evade_position.length() <= range + 1e-3);
            } else {
                prop_assert_eq!(after, before);
            }

            if was_accepted {
                prop_assert_eq!(c.phase(), ProposalPhase::Accepted);
            }
            was_accepted = c.state().accepted;
        }

        prop_assert_eq!(c.celebration().bursts, usize::from(was_accepted));
    }

    #[test]
    fn evade_stays_inside_card(w in 0.0f32..800.0, h in 0.0f32..800.0, seed in any::<u64>()) {
        let mut c = mounted(1280.0);
        let mut rng = Pcg32::seed_from_u64(seed);
        c.on_evade_trigger(Some(ContainerBounds::new(w, h)), &mut rng);
        let p = c.state().evade_position;
        let cfg = c.config();
        prop_assert!(p.x.abs() <= ((w - cfg.no_button_width).max(0.0) / 2.0) + 1e-3);
        prop_assert!(p.y.abs() <= ((h - cfg.no_button_height).max(0.0) / 2.0) + 1e-3);
    }
}

#[test]
fn scenario_fresh_mount() {
    let c = mounted(1280.0);
    assert_eq!(c.phase(), ProposalPhase::Asking);
    assert_eq!(c.state().evade_count, 0);
    assert_eq!(c.label(), "No");
}

#[test]
fn scenario_one_evade() {
    let mut c = mounted(1280.0);
    let mut rng = Pcg32::seed_from_u64(2026);
    c.on_evade_trigger(Some(ContainerBounds::new(500.0, 420.0)), &mut rng);
    assert_eq!(c.state().evade_count, 1);
    assert_eq!(c.label(), "Are you sure?");
    assert!(c.state().evade_position.length() <= 150.0 + 1e-3);
}

#[test]
fn scenario_accept_swaps_subtree_and_celebrates_once() {
    let mut c = mounted(1280.0);
    let asking = render_page(&ViewModel::build(c.state(), c.config()));
    assert!(asking.contains(r#"data-phase="asking""#));

    c.on_accept();
    c.on_accept();
    assert_eq!(c.phase(), ProposalPhase::Accepted);
    assert_eq!(c.celebration().bursts, 1);

    let accepted = render_page(&ViewModel::build(c.state(), c.config()));
    assert!(accepted.contains(r#"data-phase="accepted""#));
    assert!(!accepted.contains(r#"data-phase="asking""#));
}

#[test]
fn scenario_compact_viewport() {
    let mut c = mounted(1280.0);
    c.on_viewport_change(400.0);
    assert!(c.state().is_compact_viewport);

    let html = render_page(&ViewModel::build(c.state(), c.config()));
    assert_eq!(html.matches("heart-scatter").count(), 8);
    for class in ["text-2xl", "text-3xl", "text-4xl", "text-5xl"] {
        assert!(!html.contains(&format!(r#"<span class="{class}""#)));
    }
}

#[test]
fn first_paint_matches_rerender() {
    // Static export and the live module build the page from the same inputs
    let config = PageConfig::default();
    let exported = {
        let c = ProposalController::new(
            config.clone(),
            CountingCelebration::default(),
            &FixedViewport::headless(),
        );
        render_page(&ViewModel::build(c.state(), c.config()))
    };
    let live = {
        let c = mounted(1440.0);
        assert_eq!(mount_plan(c.state()), MountPlan::Keep);
        render_page(&ViewModel::build(c.state(), c.config()))
    };
    assert_eq!(exported, live);
}

#[test]
fn compact_mount_only_refreshes_scatter() {
    let c = mounted(400.0);
    assert_eq!(mount_plan(c.state()), MountPlan::RefreshScatter);

    // Everything outside the scatter layer matches the exported page
    let headless = ProposalController::new(
        PageConfig::default(),
        CountingCelebration::default(),
        &FixedViewport::headless(),
    );
    let exported = ViewModel::build(headless.state(), headless.config());
    let live = ViewModel::build(c.state(), c.config());
    assert_eq!(exported.rising, live.rising);
    assert_ne!(exported.subtree, live.subtree);
}
