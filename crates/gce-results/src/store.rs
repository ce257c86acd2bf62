//! Run storage API.

use crate::types::{RunManifest, TimeseriesRecord};
use crate::{ResultsError, ResultsResult};
use gce_model::{GalaxyState, STATE_SIZE};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// One record as a JSON array in field order. JSON has no NaN or Inf, so
/// non-finite values are written as the strings `NaN`, `inf`, `-inf`.
fn encode_record(record: &TimeseriesRecord) -> Value {
    Value::Array(
        record
            .to_vector()
            .iter()
            .map(|v| match serde_json::Number::from_f64(*v) {
                Some(n) => Value::Number(n),
                None => Value::String(v.to_string()),
            })
            .collect(),
    )
}

fn decode_record(value: &Value) -> ResultsResult<TimeseriesRecord> {
    let corrupt = |message: String| ResultsError::Corrupt { message };
    let items = value
        .as_array()
        .ok_or_else(|| corrupt("record is not an array".to_string()))?;
    let mut fields = Vec::with_capacity(STATE_SIZE);
    for item in items {
        let v = match item {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse::<f64>().ok(),
            _ => None,
        }
        .ok_or_else(|| corrupt(format!("bad value {item}")))?;
        fields.push(v);
    }
    GalaxyState::from_vector(&fields).map_err(|e| corrupt(e.to_string()))
}

#[derive(Clone, Debug)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store next to a config file, under `.gce/runs`.
    pub fn for_config(config_path: &Path) -> ResultsResult<Self> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "config path has no parent directory".to_string(),
            })?;
        let runs_dir = config_dir.join(".gce").join("runs");
        Self::new(runs_dir)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn run_dir(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id)
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.run_dir(run_id).join("manifest.json").exists()
    }

    pub fn save_run(
        &self,
        manifest: &RunManifest,
        records: &[TimeseriesRecord],
    ) -> ResultsResult<()> {
        let run_dir = self.run_dir(&manifest.run_id);
        fs::create_dir_all(&run_dir)?;

        let timeseries_path = run_dir.join("timeseries.jsonl");
        let mut timeseries_content = String::new();
        for record in records {
            let line = serde_json::to_string(&encode_record(record))?;
            timeseries_content.push_str(&line);
            timeseries_content.push('\n');
        }
        fs::write(timeseries_path, timeseries_content)?;

        // Manifest last: its presence marks the run complete.
        let manifest_path = run_dir.join("manifest.json");
        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(manifest_path, manifest_json)?;

        Ok(())
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        let manifest_path = self.run_dir(run_id).join("manifest.json");

        if !manifest_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    pub fn load_timeseries(&self, run_id: &str) -> ResultsResult<Vec<TimeseriesRecord>> {
        let timeseries_path = self.run_dir(run_id).join("timeseries.jsonl");

        if !timeseries_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(timeseries_path)?;
        let mut records = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                let value: Value = serde_json::from_str(line)?;
                records.push(decode_record(&value)?);
            }
        }

        Ok(records)
    }

    /// Manifests of every stored run, oldest first.
    pub fn list_runs(&self) -> ResultsResult<Vec<RunManifest>> {
        let mut runs = Vec::new();

        if !self.root_dir.exists() {
            return Ok(runs);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let run_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&run_id) {
                    runs.push(manifest);
                }
            }
        }

        // RFC 3339 strings with differing offsets do not sort lexically.
        runs.sort_by_key(|m| {
            chrono::DateTime::parse_from_rfc3339(&m.timestamp)
                .map(|dt| dt.timestamp_nanos_opt().unwrap_or(i64::MAX))
                .unwrap_or(i64::MAX)
        });
        Ok(runs)
    }

    pub fn delete_run(&self, run_id: &str) -> ResultsResult<()> {
        let run_dir = self.run_dir(run_id);
        if run_dir.exists() {
            fs::remove_dir_all(run_dir)?;
        }
        Ok(())
    }
}
