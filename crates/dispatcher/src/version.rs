//! Version field parsing

use contracts::TelemetryRecord;

use crate::error::SoftFailure;

/// Split a raw value into version and payload
///
/// The first `;`-delimited field must be a finite decimal number; surrounding
/// whitespace is ignored. A value with no `;` is all version, empty payload.
pub fn parse_record(name: &str, raw: &str) -> Result<TelemetryRecord, SoftFailure> {
    let (version, payload) = raw.split_once(';').unwrap_or((raw, ""));
    let version = version
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SoftFailure::MalformedVersion {
            name: name.to_string(),
        })?;

    Ok(TelemetryRecord {
        name: name.to_string(),
        version,
        payload: payload.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::MetricKey;

    #[test]
    fn test_integer_version() {
        let record = parse_record("lmt_oss", "1;oss1;0.5;10.0;").unwrap();
        assert_eq!(record.version, 1.0);
        assert_eq!(record.payload, "oss1;0.5;10.0;");
        assert_eq!(record.key(), MetricKey::new("lmt_oss", 1));
    }

    #[test]
    fn test_fractional_version_truncates() {
        let record = parse_record("lmt_ost", "2.7;oss1;").unwrap();
        assert_eq!(record.key(), MetricKey::new("lmt_ost", 2));
    }

    #[test]
    fn test_version_without_payload() {
        let record = parse_record("lmt_mdt", " 1 ").unwrap();
        assert_eq!(record.key().version, 1);
        assert!(record.payload.is_empty());
    }

    #[test]
    fn test_malformed_versions() {
        for raw in ["", ";x", "v2;x", "2x;", "nan;", "inf;", "oss1;2"] {
            assert_eq!(
                parse_record("lmt_ost", raw),
                Err(SoftFailure::MalformedVersion {
                    name: "lmt_ost".into()
                }),
                "{raw:?} should be malformed"
            );
        }
    }
}
