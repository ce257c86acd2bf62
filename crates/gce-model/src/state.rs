//! Galaxy state container.
//!
//! A passive aggregate owned by the driver. It neither validates nor keeps
//! derived fields (metallicities) in sync; the driver decides when to
//! recompute them.

use gce_core::{GceError, GceResult, Real, mass_fraction};
use serde::{Deserialize, Serialize};

/// Number of scalar fields in [`GalaxyState`].
pub const STATE_SIZE: usize = 12;

/// Field names in vector order.
pub const FIELD_NAMES: [&str; STATE_SIZE] = [
    "t",
    "m_gas",
    "z_gas",
    "m_star",
    "z_star",
    "mz_gas",
    "mz_star",
    "m_star_sp",
    "z_star_sp",
    "mz_star_sp",
    "sfr",
    "beta",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GalaxyState {
    /// Elapsed integration time
    pub t: Real,
    /// Gas mass
    pub m_gas: Real,
    /// Gas metallicity
    pub z_gas: Real,
    /// Cumulative stellar mass
    pub m_star: Real,
    /// Stellar metallicity
    pub z_star: Real,
    /// Metal mass in the gas
    pub mz_gas: Real,
    /// Metal mass in stars
    pub mz_star: Real,
    /// Mass of the population formed in the latest step
    pub m_star_sp: Real,
    /// Metallicity of that population
    pub z_star_sp: Real,
    /// Metal mass of that population
    pub mz_star_sp: Real,
    /// Star-formation rate of the latest step
    pub sfr: Real,
    /// Infall rate of the latest step
    pub beta: Real,
}

/// Named initial conditions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    #[serde(default)]
    pub t0: Real,
    pub m_gas: Real,
    #[serde(default)]
    pub m_star: Real,
    #[serde(default)]
    pub mz_gas: Real,
    #[serde(default)]
    pub mz_star: Real,
}

impl GalaxyState {
    /// Build the state at `t0`. Metallicities are derived once here; an
    /// empty reservoir starts at zero metallicity.
    pub fn from_initial(ic: &InitialConditions) -> Self {
        let z_of = |mz: Real, m: Real| if m == 0.0 { 0.0 } else { mass_fraction(mz, m) };
        Self {
            t: ic.t0,
            m_gas: ic.m_gas,
            z_gas: z_of(ic.mz_gas, ic.m_gas),
            m_star: ic.m_star,
            z_star: z_of(ic.mz_star, ic.m_star),
            mz_gas: ic.mz_gas,
            mz_star: ic.mz_star,
            ..Self::default()
        }
    }

    /// Positional construction from a vector in [`FIELD_NAMES`] order.
    pub fn from_vector(values: &[Real]) -> GceResult<Self> {
        let arr: [Real; STATE_SIZE] =
            values
                .try_into()
                .map_err(|_| GceError::LengthMismatch {
                    what: "galaxy state vector",
                    expected: STATE_SIZE,
                    got: values.len(),
                })?;
        Ok(Self::from(arr))
    }

    pub fn to_vector(&self) -> [Real; STATE_SIZE] {
        [
            self.t,
            self.m_gas,
            self.z_gas,
            self.m_star,
            self.z_star,
            self.mz_gas,
            self.mz_star,
            self.m_star_sp,
            self.z_star_sp,
            self.mz_star_sp,
            self.sfr,
            self.beta,
        ]
    }
}

impl From<[Real; STATE_SIZE]> for GalaxyState {
    fn from(v: [Real; STATE_SIZE]) -> Self {
        let [
            t,
            m_gas,
            z_gas,
            m_star,
            z_star,
            mz_gas,
            mz_star,
            m_star_sp,
            z_star_sp,
            mz_star_sp,
            sfr,
            beta,
        ] = v;
        Self {
            t,
            m_gas,
            z_gas,
            m_star,
            z_star,
            mz_gas,
            mz_star,
            m_star_sp,
            z_star_sp,
            mz_star_sp,
            sfr,
            beta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_order_matches_field_names() {
        let v: Vec<Real> = (0..STATE_SIZE).map(|i| i as Real).collect();
        let s = GalaxyState::from_vector(&v).unwrap();
        assert_eq!(s.t, 0.0);
        assert_eq!(s.m_gas, 1.0);
        assert_eq!(s.mz_gas, 5.0);
        assert_eq!(s.beta, 11.0);
        assert_eq!(s.to_vector().to_vec(), v);
        assert_eq!(FIELD_NAMES[5], "mz_gas");
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = GalaxyState::from_vector(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            GceError::LengthMismatch {
                what: "galaxy state vector",
                expected: STATE_SIZE,
                got: 3,
            }
        );
    }

    #[test]
    fn from_initial_derives_metallicity() {
        let s = GalaxyState::from_initial(&InitialConditions {
            t0: 0.0,
            m_gas: 1000.0,
            m_star: 0.0,
            mz_gas: 20.0,
            mz_star: 0.0,
        });
        assert_eq!(s.m_gas, 1000.0);
        assert_eq!(s.z_gas, 0.02);
        // No stars yet: metallicity starts at zero rather than NaN.
        assert_eq!(s.z_star, 0.0);
        assert_eq!(s.m_star_sp, 0.0);
        assert_eq!(s.sfr, 0.0);
    }

    #[test]
    fn container_does_not_validate() {
        let s = GalaxyState::from_vector(&[
            0.0,
            -5.0,
            Real::NAN,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            -1.0,
            0.0,
        ])
        .unwrap();
        assert_eq!(s.m_gas, -5.0);
        assert!(s.z_gas.is_nan());
    }
}
