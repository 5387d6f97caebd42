use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn timing(interval: u64) -> RotationTiming {
    RotationTiming {
        interval: ms(interval),
        transition: ms(interval / 8),
        slide_px: 6.0,
        ease: Ease::Linear,
    }
}

fn abc() -> MessageList {
    MessageList::new(vec!["A".to_owned(), "B".to_owned(), "C".to_owned()]).unwrap()
}

#[test]
fn empty_message_list_is_rejected() {
    assert!(MessageList::new(Vec::new()).is_err());
}

#[test]
fn message_list_indexes_modulo_len() {
    let list = abc();
    assert_eq!(list.get(0), "A");
    assert_eq!(list.get(4), "B");
    assert_eq!(list.len(), 3);
}

#[test]
fn invalid_timing_is_rejected() {
    let mut t = timing(800);
    t.interval = Duration::ZERO;
    assert!(MessageRotator::new(abc(), t, Duration::ZERO).is_err());

    let mut t = timing(800);
    t.transition = Duration::ZERO;
    assert!(MessageRotator::new(abc(), t, Duration::ZERO).is_err());

    // Exit + enter must fit in the interval.
    let mut t = timing(800);
    t.transition = ms(400);
    assert!(MessageRotator::new(abc(), t, Duration::ZERO).is_err());
}

#[test]
fn n_ticks_return_to_start() {
    for n in 1..=6usize {
        let messages = MessageList::new((0..n).map(|i| format!("m{i}")).collect()).unwrap();
        let mut r = MessageRotator::new(messages, timing(800), Duration::ZERO).unwrap();
        // Start from a non-zero cursor as well.
        let mut now = Duration::ZERO;
        for start in 0..n {
            let c0 = r.cursor();
            assert_eq!(c0, start);
            for _ in 0..n {
                now += ms(800);
                assert!(r.tick(now));
            }
            assert_eq!(r.cursor(), c0);
            now += ms(800);
            r.tick(now);
        }
    }
}

#[test]
fn sampled_at_multiples_of_interval_wraps() {
    let t = 2800u64;
    let mut r = MessageRotator::new(abc(), timing(t), Duration::ZERO).unwrap();
    let mut seen = vec![r.current().to_owned()];
    for k in 1..=3u64 {
        r.tick(ms(k * t));
        seen.push(r.current().to_owned());
    }
    assert_eq!(seen, ["A", "B", "C", "A"]);
}

#[test]
fn changes_at_most_once_per_interval() {
    let mut r = MessageRotator::new(abc(), timing(1000), Duration::ZERO).unwrap();
    assert!(!r.tick(ms(400)));
    assert_eq!(r.current(), "A");
    assert!(r.tick(ms(1000)));
    assert!(!r.tick(ms(1500)));
    assert_eq!(r.current(), "B");
}

#[test]
fn late_tick_does_not_delay_the_next_change() {
    let mut r = MessageRotator::new(abc(), timing(2800), Duration::ZERO).unwrap();
    assert!(r.tick(ms(2805)));
    assert_eq!(r.current(), "B");
    assert!(r.tick(ms(5600)));
    assert_eq!(r.current(), "C");
    assert!(r.tick(ms(8390)));
    assert_eq!(r.current(), "A");
}

#[test]
fn early_tick_within_tolerance_advances() {
    let mut r = MessageRotator::new(abc(), timing(1000), Duration::ZERO).unwrap();
    assert!(r.tick(ms(999)));
    assert!(!r.tick(ms(1400)));
    assert!(r.tick(ms(2003)));
    assert!(r.tick(ms(2999)));
    assert_eq!(r.cursor(), 0);
}

#[test]
fn schedule_resyncs_after_a_long_stall() {
    let mut r = MessageRotator::new(abc(), timing(1000), Duration::ZERO).unwrap();
    assert!(r.tick(ms(5000)));
    // Next slot is one interval after the stalled tick, not a burst of catch-up ticks.
    assert!(!r.tick(ms(5200)));
    assert!(r.tick(ms(6000)));
    assert_eq!(r.current(), "C");
}

#[test]
fn first_message_enters_at_mount() {
    let r = MessageRotator::new(abc(), timing(800), Duration::ZERO).unwrap();
    let line = r.presentation(Duration::ZERO);
    assert_eq!(line.stage, TickerStage::Entering);
    assert_eq!(line.text, "A");
    assert_eq!(line.opacity, 0.0);
    assert_eq!(line.offset_y, 6.0);

    let line = r.presentation(ms(50));
    assert_eq!(line.opacity, 0.5);
    assert_eq!(line.offset_y, 3.0);

    let line = r.presentation(ms(100));
    assert_eq!(line.stage, TickerStage::Settled);
    assert_eq!(line.opacity, 1.0);
    assert_eq!(line.offset_y, 0.0);
}

#[test]
fn change_exits_previous_then_enters_current() {
    let mut r = MessageRotator::new(abc(), timing(800), Duration::ZERO).unwrap();
    assert!(r.tick(ms(800)));
    // Model state switches immediately.
    assert_eq!(r.current(), "B");

    let exiting = r.presentation(ms(850));
    assert_eq!(exiting.stage, TickerStage::Exiting);
    assert_eq!(exiting.text, "A");
    assert_eq!(exiting.opacity, 0.5);
    assert_eq!(exiting.offset_y, -3.0);

    let entering = r.presentation(ms(950));
    assert_eq!(entering.stage, TickerStage::Entering);
    assert_eq!(entering.text, "B");
    assert_eq!(entering.opacity, 0.5);
    assert_eq!(entering.offset_y, 3.0);

    let settled = r.presentation(ms(1000));
    assert_eq!(settled.stage, TickerStage::Settled);
    assert_eq!(settled.text, "B");
}
