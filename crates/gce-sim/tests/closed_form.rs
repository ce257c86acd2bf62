//! Integration test: multi-step runs checked against the closed-form
//! solution of the Euler recurrence.
//!
//! With a linear star-formation law `sfr = k·(Mg − mc)` every gas term is
//! linear in `y = Mg − mc`, so the explicit scheme is a linear recurrence
//! `y[n+1] = q·y[n] + c` that can be summed exactly.

use gce_model::{
    InfallModel, InfallSource, InitialConditions, ModelParams, ModelVariant, SfrLaw,
    StellarMetalModel,
};
use gce_sim::{OneBoxModel, SimOptions, run_sim};

const R: f64 = 0.43;
const ALP: f64 = 0.1;
const BTA: f64 = 0.2;
const DT: f64 = 0.1;
const STEPS: i32 = 10;
const M_GAS0: f64 = 1000.0;
const LAW: SfrLaw = SfrLaw {
    efficiency: 0.05,
    critical_mass: 100.0,
    dynamical_time: 2.0,
};

fn k() -> f64 {
    LAW.efficiency / LAW.dynamical_time
}

fn model(infall: InfallModel) -> OneBoxModel {
    let mut p = ModelParams::new(ModelVariant::new(
        infall,
        StellarMetalModel::ReturnCorrected,
    ));
    p.return_fraction = R;
    p.outflow_efficiency = ALP;
    p.infall_source = InfallSource::Constant { beta: BTA };
    p.sfr_law = LAW;
    OneBoxModel::new(
        p,
        InitialConditions {
            m_gas: M_GAS0,
            ..InitialConditions::default()
        },
    )
}

fn opts() -> SimOptions {
    SimOptions {
        dt: DT,
        t_end: 1.0,
        max_steps: 1000,
        record_every: 1,
    }
}

fn assert_rel(got: f64, want: f64, what: &str) {
    let err = (got - want).abs() / want.abs().max(1e-300);
    assert!(err < 1e-9, "{what}: got {got}, want {want} (rel err {err})");
}

#[test]
fn rate_only_infall_matches_closed_form() {
    let record = run_sim(&mut model(InfallModel::RateOnly), &opts()).unwrap();
    assert_eq!(record.len(), STEPS as usize + 1);

    // y[n+1] = (1 + dt·a)·y[n] + dt·bta, a = k·(R − 1 − alp)
    let a = k() * (R - 1.0 - ALP);
    let q = 1.0 + DT * a;
    let y0 = M_GAS0 - LAW.critical_mass;
    let qn = q.powi(STEPS);
    let y_n = qn * y0 + BTA * (qn - 1.0) / a;

    let shifted = y0 + BTA / a;
    let sum_y = shifted * (1.0 - qn) / (1.0 - q) - f64::from(STEPS) * BTA / a;
    let m_star = (1.0 - R) * k() * DT * sum_y;

    let last = record.last().unwrap();
    assert_rel(last.m_gas, y_n + LAW.critical_mass, "m_gas");
    assert_rel(last.m_star, m_star, "m_star");
    assert_rel(last.t, 1.0, "t");
}

#[test]
fn sfr_scaled_infall_matches_closed_form() {
    let record = run_sim(&mut model(InfallModel::RateTimesSfr), &opts()).unwrap();

    // y[n+1] = (1 + dt·k·(R − 1 − alp + bta))·y[n]
    let q = 1.0 + DT * k() * (R - 1.0 - ALP + BTA);
    let y0 = M_GAS0 - LAW.critical_mass;
    let qn = q.powi(STEPS);
    let m_star = (1.0 - R) * k() * DT * y0 * (1.0 - qn) / (1.0 - q);

    let last = record.last().unwrap();
    assert_rel(last.m_gas, qn * y0 + LAW.critical_mass, "m_gas");
    assert_rel(last.m_star, m_star, "m_star");
}

#[test]
fn every_recorded_step_follows_recurrence() {
    let record = run_sim(&mut model(InfallModel::RateOnly), &opts()).unwrap();
    let a = k() * (R - 1.0 - ALP);
    let q = 1.0 + DT * a;

    for pair in record.x.windows(2) {
        let y = pair[0].m_gas - LAW.critical_mass;
        let expected = q * y + DT * BTA + LAW.critical_mass;
        assert_rel(pair[1].m_gas, expected, "m_gas step");
    }
}
