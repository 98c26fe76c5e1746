//! Legacy `lmt_mds` decoder

use contracts::{DecodeOutcome, FieldValue, MetricFields};

use crate::FieldCursor;

const MDOPS_FIELDS: usize = 4;

/// `mds_name;fs_name;pct_cpu;pct_mem;inodes_free;inodes_total;kbytes_free;kbytes_total`
/// then one group per metadata operation: `op_name;samples;sum;sumsq`
pub fn decode_mds_v2(payload: &str) -> DecodeOutcome {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = MetricFields::new();
    cursor.push_text(&mut fields, "mds_name")?;
    cursor.push_text(&mut fields, "fs_name")?;
    cursor.push_float(&mut fields, "pct_cpu")?;
    cursor.push_float(&mut fields, "pct_mem")?;
    cursor.push_count(&mut fields, "inodes_free")?;
    cursor.push_count(&mut fields, "inodes_total")?;
    cursor.push_count(&mut fields, "kbytes_free")?;
    cursor.push_count(&mut fields, "kbytes_total")?;

    let ops = cursor.groups("mdops", MDOPS_FIELDS, |c| {
        let mut op = MetricFields::new();
        c.push_text(&mut op, "op_name")?;
        c.push_count(&mut op, "samples")?;
        c.push_count(&mut op, "sum")?;
        c.push_count(&mut op, "sumsq")?;
        Ok(op)
    })?;
    fields.push("mdops", FieldValue::Group(ops));
    Ok(fields)
}
