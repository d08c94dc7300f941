//! System info adapter — `system.info` over the bus.
//!
//! The reply shape is `{memory: {total, free}, load: [..], uptime}`. All
//! three top-level fields are mandatory; so are the nested memory
//! counters. Anything missing flags the record as unparsed and leaves
//! every numeric field at its zero value.

use log::debug;

use crate::bus::connection::BusConnection;
use crate::bus::invoke::invoke;
use crate::config::BusConfig;
use crate::error::Result;
use crate::msg::attr::Attr;
use crate::msg::decode::decode;
use crate::msg::schema::{Field, FieldKind};

/// Top-level reply schema for `system.info`.
pub const SYSTEM_INFO_SCHEMA: &[Field] = &[
    Field::new("memory", FieldKind::Table),
    Field::new("load", FieldKind::Array),
    Field::new("uptime", FieldKind::Int32),
];

/// Nested schema for the `memory` sub-table.
pub const SYSTEM_MEMORY_SCHEMA: &[Field] = &[
    Field::new("total", FieldKind::Int64),
    Field::new("free", FieldKind::Int64),
];

/// Decoded `system.info` reply.
///
/// Numeric fields are only meaningful when `parsed_successfully` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemInfo {
    /// Total system memory in bytes.
    pub memory_total: u64,
    /// Free system memory in bytes.
    pub memory_free: u64,
    /// Seconds since boot.
    pub uptime_secs: u32,
    /// 1/5/15-minute load averages; trailing slots stay zero when the
    /// reply carries fewer entries.
    pub load: [u32; 3],
    /// Set only when every mandatory field was present in the reply.
    pub parsed_successfully: bool,
}

/// Decode a `system.info` reply tree.
///
/// Missing `memory`/`load`/`uptime` — or missing nested `total`/`free`
/// counters — yield a zeroed record with `parsed_successfully` unset.
pub fn decode_system_info(tree: &Attr) -> SystemInfo {
    let fields = decode(SYSTEM_INFO_SCHEMA, tree);
    let (memory, uptime) = match (
        fields.get("memory"),
        fields.get("load"),
        fields.get("uptime"),
    ) {
        (Some(memory), Some(_), Some(uptime)) => (memory, uptime),
        _ => return SystemInfo::default(),
    };

    let counters = decode(SYSTEM_MEMORY_SCHEMA, memory);
    let (total, free) = match (
        counters.get("total").and_then(Attr::as_u64),
        counters.get("free").and_then(Attr::as_u64),
    ) {
        (Some(total), Some(free)) => (total, free),
        _ => return SystemInfo::default(),
    };

    let mut info = SystemInfo {
        memory_total: total,
        memory_free: free,
        uptime_secs: uptime.as_u32().unwrap_or(0),
        load: [0; 3],
        parsed_successfully: true,
    };
    for (slot, value) in info
        .load
        .iter_mut()
        .zip(fields.array("load").filter_map(Attr::as_u32))
    {
        *slot = value;
    }
    info
}

/// Fetch system info from the `system` service.
///
/// An incomplete reply is still an `Ok` — inspect
/// [`SystemInfo::parsed_successfully`] before using the numbers.
pub fn fetch_system_info<C>(conn: &C, config: &BusConfig) -> Result<SystemInfo>
where
    C: BusConnection + ?Sized,
{
    let info = invoke(
        conn,
        &config.system_service,
        "info",
        None,
        decode_system_info,
        config.call_timeout(),
    )?;
    if !info.parsed_successfully {
        debug!("BUS: system info reply is missing mandatory fields");
    }
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::attr::TableBuilder;

    fn memory_table(total: i64, free: i64) -> Attr {
        TableBuilder::new()
            .int64("total", total)
            .int64("free", free)
            .build()
    }

    fn full_reply(load: &[i32]) -> Attr {
        TableBuilder::new()
            .attr("memory", memory_table(1000, 400))
            .attr(
                "load",
                Attr::Array(load.iter().copied().map(Attr::Int32).collect()),
            )
            .int32("uptime", 3600)
            .build()
    }

    #[test]
    fn complete_reply_decodes() {
        let info = decode_system_info(&full_reply(&[10, 20, 30, 40]));
        assert_eq!(
            info,
            SystemInfo {
                memory_total: 1000,
                memory_free: 400,
                uptime_secs: 3600,
                load: [10, 20, 30],
                parsed_successfully: true,
            }
        );
    }

    #[test]
    fn missing_top_level_field_flags_unparsed() {
        for dropped in ["memory", "load", "uptime"] {
            let full = full_reply(&[1]);
            let stripped = Attr::Table(
                full.entries()
                    .unwrap()
                    .iter()
                    .filter(|(name, _)| name != dropped)
                    .cloned()
                    .collect(),
            );
            let info = decode_system_info(&stripped);
            assert!(!info.parsed_successfully, "dropped `{dropped}`");
            assert_eq!(info, SystemInfo::default());
        }
    }

    #[test]
    fn missing_nested_memory_counter_flags_unparsed() {
        let tree = TableBuilder::new()
            .attr("memory", TableBuilder::new().int64("total", 1000).build())
            .attr("load", Attr::Array(vec![]))
            .int32("uptime", 1)
            .build();
        assert!(!decode_system_info(&tree).parsed_successfully);
    }

    #[test]
    fn short_load_array_leaves_trailing_zeros() {
        let info = decode_system_info(&full_reply(&[7]));
        assert_eq!(info.load, [7, 0, 0]);
        assert!(info.parsed_successfully);
    }

    #[test]
    fn load_prefix_preserves_encounter_order() {
        let info = decode_system_info(&full_reply(&[1, 2, 3, 4, 5]));
        assert_eq!(info.load, [1, 2, 3]);
    }

    #[test]
    fn json_assembled_reply_decodes() {
        // JSON interop emits the narrowest integer kind, so the memory
        // counters arrive as 32-bit leaves despite the Int64 schema.
        let tree = Attr::from_json(&serde_json::json!({
            "memory": {"total": 1000, "free": 400},
            "load": [10, 20, 30, 40],
            "uptime": 3600,
        }))
        .unwrap();
        assert_eq!(tree.get("memory").unwrap().get("total"), Some(&Attr::Int32(1000)));

        let info = decode_system_info(&tree);
        assert!(info.parsed_successfully);
        assert_eq!(info.memory_total, 1000);
        assert_eq!(info.memory_free, 400);
        assert_eq!(info.uptime_secs, 3600);
        assert_eq!(info.load, [10, 20, 30]);
    }

    #[test]
    fn empty_tree_does_not_panic() {
        let info = decode_system_info(&Attr::Table(vec![]));
        assert!(!info.parsed_successfully);
    }
}
