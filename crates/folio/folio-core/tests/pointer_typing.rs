use folio_core::{
    config::PointerCfg,
    pointer::{Follower, HoverKey, PointerMode, PointerTracker, Rect, Vec2},
    typing::{TypingPhase, TypingSimulator, TypingStep},
    Config, MemoryStorage, Site, SiteEvent,
};

#[test]
fn followers_converge_and_dot_is_faster() {
    let targets = [
        Vec2::new(500.0, 300.0),
        Vec2::new(-120.0, 42.5),
        Vec2::new(0.0, 1920.0),
    ];
    for target in targets {
        let mut halo = Follower::new(0.15);
        let mut dot = Follower::new(0.5);
        let mut prev_halo = halo.pos().distance(target);
        let mut prev_dot = dot.pos().distance(target);
        for _ in 0..200 {
            halo.step(target);
            dot.step(target);
            let dh = halo.pos().distance(target);
            let dd = dot.pos().distance(target);
            assert!(dh <= prev_halo);
            assert!(dd <= prev_dot);
            assert!(dd <= dh, "dot {dd} behind halo {dh}");
            prev_halo = dh;
            prev_dot = dd;
        }
        assert!(prev_halo < 1e-3, "halo did not converge: {prev_halo}");
        assert!(prev_dot < 1e-3, "dot did not converge: {prev_dot}");
    }
}

#[test]
fn tracker_ticks_both_followers_from_one_sample() {
    let mut tracker = PointerTracker::new(&PointerCfg::default());
    tracker.sample(100.0, 200.0);
    let frame = tracker.tick().expect("fine pointer is active");
    assert_eq!(frame.dot, Vec2::new(50.0, 100.0));
    assert!((frame.halo.x - 15.0).abs() < 1e-4);
    assert!((frame.halo.y - 30.0).abs() < 1e-4);
    assert_eq!(frame.halo_size_px, 32.0);
    assert_eq!(
        frame.dot_transform(),
        "translate(50px, 100px) translate(-50%, -50%)"
    );
}

#[test]
fn touch_mode_stops_and_hides_cursor() {
    let mut site = Site::new(Config::default(), Box::new(MemoryStorage::new()));
    site.hover_enter(HoverKey(1));
    site.pointer_sample(10.0, 10.0);
    assert!(site.pointer_tick().is_some());

    site.set_pointer_mode(PointerMode::Touch);
    assert!(site.pointer_tick().is_none());
    assert!(!site.pointer().is_hovering());
    site.hover_enter(HoverKey(2));
    assert!(!site.pointer().is_hovering());

    // Setting the same mode twice emits one event.
    site.set_pointer_mode(PointerMode::Touch);
    let changes = site
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, SiteEvent::PointerModeChanged { .. }))
        .count();
    assert_eq!(changes, 1);
}

#[test]
fn hover_is_per_element() {
    let mut tracker = PointerTracker::new(&PointerCfg::default());
    tracker.enter(HoverKey(1));
    tracker.enter(HoverKey(2));
    tracker.leave(HoverKey(1));
    assert!(tracker.is_hovering(), "still over element 2");
    assert_eq!(tracker.tick().unwrap().halo_size_px, 64.0);
    tracker.leave(HoverKey(2));
    // Leaving twice is harmless.
    tracker.leave(HoverKey(2));
    assert!(!tracker.is_hovering());
}

#[test]
fn parallax_uses_configured_scale() {
    let site = Site::new(Config::default(), Box::new(MemoryStorage::new()));
    let rect = Rect {
        left: 100.0,
        top: 0.0,
        width: 400.0,
        height: 400.0,
    };
    let tilt = site.parallax(Vec2::new(400.0, 100.0), rect);
    // x offset (400 - 100 - 200) / 400 = 0.25, y offset (100 - 200) / 400 = -0.25
    assert!((tilt.x - 0.75).abs() < 1e-6);
    assert!((tilt.y + 0.75).abs() < 1e-6);
    assert_eq!(
        tilt.transform(),
        "perspective(1000px) rotateY(-0.75deg) rotateX(-0.75deg)"
    );
}

#[test]
fn typing_reveals_prefix_per_tick() {
    let full = "IT Undergraduate | GATE Aspirant";
    let mut t = TypingSimulator::new(full);
    assert_eq!(t.phase(), TypingPhase::Idle);
    assert_eq!(t.tick(), TypingStep::Ignored, "no ticks before start");
    assert!(t.start());
    assert_eq!(t.phase(), TypingPhase::Typing);

    let len = full.chars().count();
    for k in 1..len {
        assert_eq!(t.tick(), TypingStep::Advanced { shown: k });
        assert_eq!(t.displayed(), &full[..k]);
    }
    assert_eq!(t.tick(), TypingStep::Finished);
    assert_eq!(t.displayed(), full);
    assert_eq!(t.phase(), TypingPhase::Done);

    // No restart and no further progress.
    assert!(!t.start());
    assert_eq!(t.tick(), TypingStep::Ignored);
    assert_eq!(t.displayed(), full);
}

#[test]
fn site_emits_typing_finished_once() {
    let mut site = Site::new(Config::default(), Box::new(MemoryStorage::new()));
    site.start_typing();
    let len = site.typing().len();
    for _ in 0..len + 5 {
        site.typing_tick();
    }
    assert_eq!(site.typed_text(), site.config().typing.text);
    let finished = site
        .drain_events()
        .into_iter()
        .filter(|e| *e == SiteEvent::TypingFinished)
        .count();
    assert_eq!(finished, 1);
}
