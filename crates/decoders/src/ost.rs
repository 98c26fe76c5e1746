//! `lmt_ost` decoders (legacy v1 and current v2)

use contracts::{DecodeOutcome, FieldValue, MetricFields};

use crate::FieldCursor;

const OST_V2_TARGET_FIELDS: usize = 9;

/// `oss_name;ost_name;read_bytes;write_bytes;kbytes_free;kbytes_total;inodes_free;inodes_total`
pub fn decode_ost_v1(payload: &str) -> DecodeOutcome {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = MetricFields::new();
    cursor.push_text(&mut fields, "oss_name")?;
    cursor.push_text(&mut fields, "ost_name")?;
    cursor.push_count(&mut fields, "read_bytes")?;
    cursor.push_count(&mut fields, "write_bytes")?;
    cursor.push_count(&mut fields, "kbytes_free")?;
    cursor.push_count(&mut fields, "kbytes_total")?;
    cursor.push_count(&mut fields, "inodes_free")?;
    cursor.push_count(&mut fields, "inodes_total")?;
    Ok(fields)
}

/// `oss_name;pct_cpu;pct_mem` then one group per OST:
/// `ost_name;read_bytes;write_bytes;iops;num_exports;kbytes_free;kbytes_total;inodes_free;inodes_total`
pub fn decode_ost_v2(payload: &str) -> DecodeOutcome {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = MetricFields::new();
    cursor.push_text(&mut fields, "oss_name")?;
    cursor.push_float(&mut fields, "pct_cpu")?;
    cursor.push_float(&mut fields, "pct_mem")?;

    let targets = cursor.groups("ost", OST_V2_TARGET_FIELDS, |c| {
        let mut target = MetricFields::new();
        c.push_text(&mut target, "ost_name")?;
        c.push_count(&mut target, "read_bytes")?;
        c.push_count(&mut target, "write_bytes")?;
        c.push_count(&mut target, "iops")?;
        c.push_count(&mut target, "num_exports")?;
        c.push_count(&mut target, "kbytes_free")?;
        c.push_count(&mut target, "kbytes_total")?;
        c.push_count(&mut target, "inodes_free")?;
        c.push_count(&mut target, "inodes_total")?;
        Ok(target)
    })?;
    fields.push("targets", FieldValue::Group(targets));
    Ok(fields)
}
