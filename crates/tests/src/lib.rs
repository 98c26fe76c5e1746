//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 跨 crate 合约测试
//! - 转储文件 -> 分发器 -> 诊断目标 的端到端测试
//! - 诊断目标切换与往返

#[cfg(test)]
mod contract_tests {
    use contracts::{MetricKey, ALL_METRIC_NAMES};
    use dispatcher::DecoderRegistry;

    #[test]
    fn test_builtin_registry_routes_every_topic() {
        let registry = DecoderRegistry::builtin();
        assert_eq!(registry.len(), decoders::BUILTIN.len());
        for name in ALL_METRIC_NAMES {
            assert!(
                registry.keys().iter().any(|key| key.name == *name),
                "{name} is not routable"
            );
        }
        assert!(registry.contains(&MetricKey::new("lmt_ost", 1)));
        assert!(registry.contains(&MetricKey::new("lmt_ost", 2)));
        assert!(!registry.contains(&MetricKey::new("lmt_mdt", 2)));
    }

    #[test]
    fn test_default_config_matches_contracts() {
        let config = config_loader::DiagnoseConfig::default();
        assert_eq!(config.telemetry.metrics, ALL_METRIC_NAMES);
        assert_eq!(config.catalog.params(), contracts::CatalogParams::default());
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{DecodeFailure, FieldValue, MetricFields};
    use diagnostics::{BusChannel, DiagnosticSink};
    use dispatcher::{DecoderRegistry, RecordDispatcher, RecordOutcome};
    use sources::{DumpTelemetrySource, StaticCatalog};

    /// Every generation once, plus one record per failure kind
    const DUMP: &str = "\
# lmt_mdt: one target
lmt_mdt\t1.0;mds1;2.5;30.0;lustre-MDT0000;100;200;300;400;
lmt_ost\t2.0;oss1;5.0;50.0;lustre-OST0000;1;2;3;4;5;6;7;8;
lmt_router\t1.0;rtr1;1.0;2.0;4096;
lmt_oss\t1.0;oss2;0.5;10.0;
lmt_mds\t2.0;mds2;lustre;1.0;2.0;10;20;30;40;open;1;2;3;
lmt_ost\t1.0;oss3;lustre-OST0001;10;20;30;40;50;60;
lmt_ost\tv2;oss1
lmt_mdt\t7.0;mds1;2.5;30.0
lmt_ost\t2.0;oss1;abc;50.0
lmt_router
";

    fn lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn file_sink(path: &Path) -> DiagnosticSink {
        let sink = DiagnosticSink::new("/usr/sbin/lmtdiagnose");
        sink.select_destination(&path.display().to_string()).unwrap();
        sink
    }

    #[derive(Default)]
    struct RecordingBus {
        bodies: Mutex<Vec<String>>,
    }

    impl BusChannel for RecordingBus {
        fn emit(&self, body: &str) {
            self.bodies.lock().unwrap().push(body.to_string());
        }
    }

    /// End-to-end: dump file -> DumpTelemetrySource -> RecordDispatcher -> file sink
    #[tokio::test]
    async fn test_e2e_dump_scan_to_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("metrics.dump");
        std::fs::write(&dump, DUMP).unwrap();
        let log = dir.path().join("diag.log");

        let sink = file_sink(&log);
        let dispatcher = RecordDispatcher::new(DecoderRegistry::builtin(), &sink);
        let source = DumpTelemetrySource::new(&dump);
        let summary = dispatcher
            .scan(&source, contracts::ALL_METRIC_NAMES)
            .await
            .unwrap();

        assert_eq!(summary.processed, 10);
        assert_eq!(summary.decoded, 6);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.count_kind("malformed_version"), 1);
        assert_eq!(summary.count_kind("unknown_version"), 1);
        assert_eq!(summary.count_kind("decode"), 1);

        sink.release();
        assert_eq!(
            lines(&log),
            [
                "lmtdiagnose: lmt_ost: error parsing metric version",
                "lmtdiagnose: lmt_mdt_v7: unknown metric version",
                "lmtdiagnose: lmt_ost_v2: invalid pct_cpu: \"abc\"",
            ]
        );
    }

    #[tokio::test]
    async fn test_e2e_topic_subset() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("metrics.dump");
        std::fs::write(&dump, DUMP).unwrap();
        let log = dir.path().join("diag.log");

        let sink = file_sink(&log);
        let dispatcher = RecordDispatcher::new(DecoderRegistry::builtin(), &sink);
        let summary = dispatcher
            .scan(&DumpTelemetrySource::new(&dump), &["lmt_oss", "lmt_mds"])
            .await
            .unwrap();

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.decoded, 2);
        assert!(lines(&log).is_empty());
    }

    /// Reselection between scans: lines go to the new destination only
    #[tokio::test]
    async fn test_e2e_reselect_between_scans() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("metrics.dump");
        std::fs::write(&dump, "lmt_oss\t9.0;oss1;1.0;2.0\n").unwrap();
        let first = dir.path().join("first.log");
        let second = dir.path().join("second.log");

        let sink = file_sink(&first);
        let dispatcher = RecordDispatcher::new(DecoderRegistry::builtin(), &sink);
        let source = DumpTelemetrySource::new(&dump);

        dispatcher.scan(&source, &["lmt_oss"]).await.unwrap();
        sink.select_destination(&second.display().to_string())
            .unwrap();
        dispatcher.scan(&source, &["lmt_oss"]).await.unwrap();
        assert!(sink.select_destination("syslog:nowhere").is_err());
        assert_eq!(sink.current_destination(), second.display().to_string());
        dispatcher.scan(&source, &["lmt_oss"]).await.unwrap();

        let expected = "lmtdiagnose: lmt_oss_v9: unknown metric version";
        assert_eq!(lines(&first), [expected]);
        assert_eq!(lines(&second), [expected, expected]);
    }

    /// Bus destination carries bodies without the program prefix
    #[tokio::test]
    async fn test_e2e_bus_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("metrics.dump");
        std::fs::write(&dump, "lmt_router\t1.0;rtr1;1.0\n").unwrap();

        let bus = Arc::new(RecordingBus::default());
        let sink = DiagnosticSink::new("lmtdiagnose").with_bus_channel(bus.clone());
        sink.select_destination("cerebro").unwrap();
        assert_eq!(sink.current_destination(), "cerebro");

        let dispatcher = RecordDispatcher::new(DecoderRegistry::builtin(), &sink);
        dispatcher
            .scan(&DumpTelemetrySource::new(&dump), &["lmt_router"])
            .await
            .unwrap();

        assert_eq!(
            *bus.bodies.lock().unwrap(),
            ["lmt_router_v1: missing field pct_mem"]
        );
    }

    /// A replacement decoder wins over the built-in one
    #[tokio::test]
    async fn test_e2e_custom_decoder() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("metrics.dump");
        std::fs::write(&dump, "lmt_oss\t1.0;anything\nlmt_oss\t1.0;\n").unwrap();
        let log = dir.path().join("diag.log");

        let mut registry = DecoderRegistry::builtin();
        let replaced = registry.register("lmt_oss", 1, |payload: &str| {
            if payload.is_empty() {
                return Err(DecodeFailure::new("empty payload"));
            }
            Ok(MetricFields::new().with("raw", FieldValue::Text(payload.to_string())))
        });
        assert!(replaced.is_some());

        let sink = file_sink(&log);
        let dispatcher = RecordDispatcher::new(registry, &sink);
        let metrics = dispatcher
            .fetch_all(&DumpTelemetrySource::new(&dump), &["lmt_oss"])
            .await
            .unwrap();

        match dispatcher.dispatch(&metrics[0]) {
            RecordOutcome::Decoded { key, fields } => {
                assert_eq!(key.to_string(), "lmt_oss_v1");
                assert_eq!(fields.get("raw"), Some(&FieldValue::Text("anything".into())));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(matches!(
            dispatcher.dispatch(&metrics[1]),
            RecordOutcome::Failed(_)
        ));

        sink.release();
        assert_eq!(lines(&log), ["lmtdiagnose: lmt_oss_v1: empty payload"]);
    }

    /// Config file -> catalog -> filtered listing
    #[tokio::test]
    async fn test_e2e_config_catalog() {
        let config = ConfigLoader::load_from_str(
            r#"
[catalog]
host = "mgmt01"
filesystems = ["lustre1", "scratch"]
"#,
            ConfigFormat::Toml,
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("diag.log");

        let sink = file_sink(&log);
        let dispatcher = RecordDispatcher::new(DecoderRegistry::builtin(), &sink);
        let catalog = StaticCatalog::new(config.catalog.filesystems.clone());
        let params = config.catalog.params();

        let all = dispatcher
            .check_catalog(&catalog, &params, None)
            .await
            .unwrap();
        assert_eq!(all, ["lustre1", "scratch"]);

        let one = dispatcher
            .check_catalog(&catalog, &params, Some("scratch"))
            .await
            .unwrap();
        assert_eq!(one, ["scratch"]);

        let err = dispatcher
            .check_catalog(&catalog, &params, Some("home"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "file system home is not configured");

        sink.release();
        assert_eq!(
            lines(&log),
            [
                "lmtdiagnose: mysql: lustre1",
                "lmtdiagnose: mysql: scratch",
                "lmtdiagnose: mysql: scratch",
            ]
        );
    }

    #[test]
    fn test_selector_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diag.log").display().to_string();
        let sink = DiagnosticSink::new("lmtdiagnose");

        for (selector, canonical) in [
            ("stdout", "stdout"),
            ("stderr", "stderr"),
            ("syslog", "syslog:daemon:err"),
            ("syslog:local3", "syslog:local3:err"),
            ("syslog:user:warning", "syslog:user:warning"),
            ("cerebro", "cerebro"),
            (path.as_str(), path.as_str()),
        ] {
            sink.select_destination(selector).unwrap();
            assert_eq!(sink.current_destination(), canonical);
            sink.select_destination(&sink.current_destination()).unwrap();
            assert_eq!(sink.current_destination(), canonical);
        }
        sink.release();
        assert_eq!(sink.current_destination(), "stderr");
    }
}
