#[cfg(test)]
mod tests {
    use std::time::Duration;

    use aovzstd_core::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

    #[test]
    fn counters_track_each_outcome() {
        let mut c = TelemetryCounters::default();
        c.add_transformed(1000, 250);
        c.add_transformed(500, 100);
        c.add_skipped();
        c.add_failed();

        assert_eq!(c.items_seen, 4);
        assert_eq!(c.items_transformed, 2);
        assert_eq!(c.items_skipped, 1);
        assert_eq!(c.items_failed, 1);
        assert_eq!(c.bytes_in, 1500);
        assert_eq!(c.bytes_out, 350);
    }

    #[test]
    fn counters_merge() {
        let mut a = TelemetryCounters::default();
        a.add_transformed(10, 5);
        let mut b = TelemetryCounters::default();
        b.add_skipped();

        a.merge(&b);
        assert_eq!(a.items_seen, 2);
        assert_eq!(a.bytes_in, 10);
    }

    #[test]
    fn stage_times_accumulate() {
        let mut t = StageTimes::default();
        t.add(Stage::Read, Duration::from_micros(100));
        t.add(Stage::Read, Duration::from_micros(50));
        t.add(Stage::Compress, Duration::from_micros(400));

        assert_eq!(t.get(Stage::Read), Duration::from_micros(150));
        assert_eq!(t.total(), Duration::from_micros(550));
        assert!(t.has_all(&[Stage::Read, Stage::Compress]));
        assert!(!t.has_all(&[Stage::Write]));
        assert_eq!(t.get(Stage::Write), Duration::ZERO);
    }

    #[test]
    fn snapshot_ratio_and_sanity() {
        let mut c = TelemetryCounters::default();
        c.add_transformed(1000, 250);
        let mut timer = TelemetryTimer::new();
        timer.time(Stage::Compress, || std::thread::sleep(Duration::from_millis(1)));
        timer.finish();

        let snap = TelemetrySnapshot::from(&c, &timer);
        assert!((snap.size_ratio - 0.25).abs() < f64::EPSILON);
        assert!(snap.elapsed >= Duration::from_millis(1));
        assert!(snap.sanity_check());
    }

    #[test]
    fn empty_run_has_zero_ratio() {
        let mut timer = TelemetryTimer::new();
        timer.finish();
        let snap = TelemetrySnapshot::from(&TelemetryCounters::default(), &timer);
        assert_eq!(snap.size_ratio, 0.0);
        assert!(snap.sanity_check());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut c = TelemetryCounters::default();
        c.add_transformed(8, 4);
        let mut timer = TelemetryTimer::new();
        timer.add_stage_time(Stage::Write, Duration::from_micros(3));
        timer.finish();

        let json = serde_json::to_value(TelemetrySnapshot::from(&c, &timer)).unwrap();
        assert_eq!(json["items_transformed"], 1);
        assert_eq!(json["bytes_out"], 4);
        assert!(json["stage_times"]["times"].get("write").is_some());
    }

    #[test]
    fn stage_display_names() {
        assert_eq!(Stage::Decompress.to_string(), "decompress");
        assert_eq!(Stage::Classify.to_string(), "classify");
    }
}
