// File: lumia-cli/src/commands.rs

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use lumia_common::models::{AlertKind, AlertShape, OverlayEvent, OverlayListener};
use lumia_core::catalog::{self, shapes::COMMON_EXTRAS, FieldSpec, VariantSchema};
use lumia_core::dispatch::OverlayRouter;
use lumia_core::eventbus::{run_router, BusConfig, OverlayBus, RouterStats};
use lumia_core::frame::read_frames;
use lumia_core::Error;

#[derive(Debug, Serialize)]
struct KindRow {
    kind: AlertKind,
    shape: AlertShape,
    description: &'static str,
}

fn kind_rows(platform: Option<&str>) -> Vec<KindRow> {
    catalog::list_kinds()
        .iter()
        .filter(|k| platform.is_none_or(|p| k.platform_prefix() == p))
        .map(|k| KindRow { kind: *k, shape: k.shape(), description: k.description() })
        .collect()
}

pub fn kinds(platform: Option<&str>, json: bool) -> anyhow::Result<bool> {
    let rows = kind_rows(platform);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            let shape = serde_json::to_value(row.shape)?;
            println!(
                "{:<40} {:<22} {}",
                row.kind.as_str(),
                shape.as_str().unwrap_or_default(),
                row.description
            );
        }
    }
    Ok(!rows.is_empty())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemaDoc {
    kind: AlertKind,
    description: &'static str,
    schema: &'static VariantSchema,
    common_extras: &'static [FieldSpec],
}

fn schema_doc(kind: &str) -> Result<SchemaDoc, Error> {
    let kind: AlertKind = kind.parse()?;
    Ok(SchemaDoc {
        kind,
        description: kind.description(),
        schema: catalog::shape_for(kind),
        common_extras: COMMON_EXTRAS,
    })
}

pub fn schema(kind: &str) -> anyhow::Result<bool> {
    let doc = schema_doc(kind)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(true)
}

fn load_json(file: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let value = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", file.display()))?;
    Ok(value)
}

fn check_payload(payload: &Value, kind: Option<&str>) -> Result<AlertKind, Error> {
    let event = match kind {
        Some(kind) => catalog::validate_str(kind, payload)?,
        None => catalog::parse_alert(payload)?,
    };
    Ok(event.kind)
}

pub fn validate(file: &Path, kind: Option<&str>) -> anyhow::Result<bool> {
    let payload = load_json(file)?;
    match check_payload(&payload, kind) {
        Ok(kind) => {
            println!("ok: valid `{}` payload", kind);
            Ok(true)
        }
        Err(Error::Validation(err)) => {
            println!("invalid `{}` payload ({} issue(s)):", err.kind, err.issues.len());
            for issue in &err.issues {
                println!("  {}", issue);
            }
            Ok(false)
        }
        Err(other) => Err(other.into()),
    }
}

fn logging_router() -> OverlayRouter {
    let mut router = OverlayRouter::new();
    for listener in OverlayListener::ALL {
        router.on_listener(*listener, |event: &OverlayEvent| {
            match event {
                OverlayEvent::Alert(alert) => info!("alert {} from {}", alert.kind, alert.common.site),
                OverlayEvent::Chat(chat) => info!("chat {}: {}", chat.displayname, chat.message),
                OverlayEvent::Hfx(hfx) => info!("hfx {} on layer {}", hfx.content, hfx.layer),
                OverlayEvent::VirtualLight(light) => info!("virtuallight {} at {}%", light.uuid, light.brightness),
                OverlayEvent::OverlayContent(c) => info!("overlaycontent {}", c.code_id),
            }
            Ok(())
        });
    }
    router
}

#[derive(Debug, Default, Serialize)]
pub struct ReplayReport {
    pub rejected: usize,
    pub stats: RouterStats,
}

pub async fn replay_file(file: &Path, buffer: Option<usize>) -> anyhow::Result<ReplayReport> {
    let frames = read_frames(file).with_context(|| format!("reading {}", file.display()))?;

    let config = buffer.map(|buffer_size| BusConfig { buffer_size }).unwrap_or_default();
    let bus = OverlayBus::with_config(config);
    let rx = bus.subscribe(None).await;
    let router = tokio::spawn(run_router(rx, Arc::new(logging_router()), bus.shutdown_rx.clone()));

    let mut rejected = 0;
    for (line, result) in frames {
        match result {
            Ok(event) => {
                bus.publish(event).await;
            }
            Err(e) => {
                warn!("line {} rejected: {}", line, e);
                rejected += 1;
            }
        }
    }
    drop(bus);

    let stats = router.await.context("router task failed")?;
    Ok(ReplayReport { rejected, stats })
}

pub async fn replay(file: &Path, buffer: Option<usize>) -> anyhow::Result<bool> {
    let report = replay_file(file, buffer).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(report.rejected == 0 && report.stats.failed == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use lumia_core::test_utils::fixtures::fixture;
    use serde_json::json;
    use tempfile::NamedTempFile;

    #[test]
    fn test_kind_rows_filter() {
        let kick = kind_rows(Some("kick"));
        assert!(!kick.is_empty());
        assert!(kick.iter().all(|r| r.kind.as_str().starts_with("kick-")));
        assert_eq!(kind_rows(None).len(), AlertKind::ALL.len());
        assert!(kind_rows(Some("myspace")).is_empty());
    }

    #[test]
    fn test_schema_doc() {
        let doc = schema_doc("kick-follower").unwrap();
        assert_eq!(doc.schema.shape, AlertShape::KickFollower);
        assert!(matches!(schema_doc("kick-folower"), Err(Error::UnknownKind(_))));
    }

    #[test]
    fn test_check_payload() {
        let payload = fixture(AlertKind::TwitchBits);
        assert_eq!(check_payload(&payload, None).unwrap(), AlertKind::TwitchBits);
        assert!(matches!(
            check_payload(&payload, Some("twitch-raid")),
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_replay_counts() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", json!({ "type": "alert", "data": fixture(AlertKind::TwitchRaid) })).unwrap();
        writeln!(file, "{}", json!({ "type": "alert", "data": fixture(AlertKind::YoutubeMember) })).unwrap();
        writeln!(file, "{}", json!({ "type": "overlaycontent", "data": { "codeId": "a", "content": "b" } })).unwrap();
        writeln!(file, "{}", json!({ "type": "alert", "data": { "alert": "twitch-raid" } })).unwrap();
        file.flush().unwrap();

        let report = replay_file(file.path(), Some(2)).await.unwrap();
        assert_eq!(report.rejected, 1);
        assert_eq!(report.stats.handled, 3);
        assert_eq!(report.stats.failed, 0);
    }
}
