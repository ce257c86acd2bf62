//! Content-based hashing for run IDs.

use crate::ResultsResult;
use gce_project::schema::RunConfig;
use sha2::{Digest, Sha256};

/// Hash everything that affects the numbers. The config name is left out so
/// renaming a file does not invalidate its cache.
pub fn compute_run_id(config: &RunConfig, solver_version: &str) -> ResultsResult<String> {
    let mut hasher = Sha256::new();

    hasher.update(config.version.to_le_bytes());
    for part in [
        serde_json::to_string(&config.model)?,
        serde_json::to_string(&config.initial)?,
        serde_json::to_string(&config.integration)?,
        serde_json::to_string(&config.policy)?,
    ] {
        hasher.update(part.as_bytes());
    }

    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gce_project::schema::*;

    fn config() -> RunConfig {
        RunConfig {
            version: 2,
            name: "Test".to_string(),
            model: ModelDef {
                return_fraction: 0.43,
                outflow_efficiency: 0.0,
                metal_yield: 0.02,
                infall_metallicity: 0.0,
                star_formation: StarFormationDef {
                    efficiency: 0.01,
                    critical_mass: 0.0,
                    dynamical_time: 1.0,
                },
                infall: InfallSourceDef::Closure,
                infall_model: Some(InfallModelDef::RateOnly),
                stellar_metal_model: Some(StellarMetalModelDef::YieldDifference),
            },
            initial: InitialDef {
                m_gas: 100.0,
                ..InitialDef::default()
            },
            integration: IntegrationDef {
                dt: 0.1,
                t_end: 1.0,
                max_steps: 100,
                record_every: 1,
            },
            policy: PolicyDef::default(),
        }
    }

    #[test]
    fn hash_stability() {
        let c = config();
        assert_eq!(compute_run_id(&c, "v1").unwrap(), compute_run_id(&c, "v1").unwrap());
        assert_eq!(compute_run_id(&c, "v1").unwrap().len(), 64);
    }

    #[test]
    fn hash_ignores_name() {
        let a = config();
        let mut b = config();
        b.name = "Renamed".to_string();
        assert_eq!(compute_run_id(&a, "v1").unwrap(), compute_run_id(&b, "v1").unwrap());
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        let a = config();
        let mut b = config();
        b.model.infall_model = Some(InfallModelDef::RateTimesSfr);
        assert_ne!(compute_run_id(&a, "v1").unwrap(), compute_run_id(&b, "v1").unwrap());
        assert_ne!(compute_run_id(&a, "v1").unwrap(), compute_run_id(&a, "v2").unwrap());
    }

    #[test]
    fn policy_is_part_of_the_key() {
        let a = config();
        let mut b = config();
        b.policy.clamp_negative_sfr = true;
        let id_a = compute_run_id(&a, "v1").expect("config serializes");
        let id_b = compute_run_id(&b, "v1").expect("config serializes");
        assert_ne!(id_a, id_b);
    }
}
