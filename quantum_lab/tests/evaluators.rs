use approx::assert_abs_diff_eq;
use quantum_lab::blackbody::{self, SpectralRegion};
use quantum_lab::compton;
use quantum_lab::config::PhotoelectricConfig;
use quantum_lab::input::{BlackbodyInput, ComptonInput, PhotoelectricInput, TEMPERATURE_RANGE};
use quantum_lab::photoelectric::{self, Metal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn spectrum_normalized_across_temperature_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let t = rng.gen_range(TEMPERATURE_RANGE.min..=TEMPERATURE_RANGE.max);
        let curve = blackbody::spectrum(t);
        assert!(curve.iter().all(|p| p.normalized_intensity >= 0.0 && p.normalized_intensity <= 1.0));
        assert!(curve.iter().any(|p| p.normalized_intensity == 1.0), "no unit sample at {t} K");
    }
}

#[test]
fn peak_region_follows_temperature() {
    let region = |t: f64| blackbody::evaluate(&BlackbodyInput::new(t).unwrap()).region;
    assert_eq!(region(1000.0), SpectralRegion::Infrared);
    assert_eq!(region(5800.0), SpectralRegion::Visible);
    assert_eq!(region(8000.0), SpectralRegion::Ultraviolet);
}

#[test]
fn evaluators_are_pure() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = PhotoelectricConfig::default();

    for _ in 0..50 {
        let bb = BlackbodyInput::new(rng.gen_range(1000.0..=8000.0)).unwrap();
        assert_eq!(blackbody::evaluate(&bb), blackbody::evaluate(&bb));

        let metal = Metal::ALL[rng.gen_range(0..Metal::ALL.len())];
        let pe = PhotoelectricInput::new(
            rng.gen_range(100.0..=850.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(-5.0..=5.0),
            metal,
        )
        .unwrap();
        let a = photoelectric::evaluate(&pe, &config);
        let b = photoelectric::evaluate(&pe, &config);
        assert_eq!(a.photon_energy_ev.to_bits(), b.photon_energy_ev.to_bits());
        assert_eq!(a.relative_current.to_bits(), b.relative_current.to_bits());

        let c = ComptonInput::new(rng.gen_range(0.0..=180.0), rng.gen_range(10.0..=500.0)).unwrap();
        let x = compton::evaluate(&c);
        let y = compton::evaluate(&c);
        assert_eq!(x.electron_angle_rad.to_bits(), y.electron_angle_rad.to_bits());
        assert_eq!(x.scattered_wavelength_nm.to_bits(), y.scattered_wavelength_nm.to_bits());
    }
}

#[test]
fn photoelectric_outputs_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    let config = PhotoelectricConfig::default();
    for _ in 0..500 {
        let metal = Metal::ALL[rng.gen_range(0..Metal::ALL.len())];
        let r = photoelectric::evaluate_raw(
            rng.gen_range(100.0..=850.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(-5.0..=5.0),
            metal,
            &config,
        );
        assert!(r.kinetic_energy_max_ev >= 0.0);
        assert!((0.0..=1.0).contains(&r.relative_current));
        if !r.emission {
            assert_eq!(r.relative_current, 0.0);
        }
    }
}

#[test]
fn compton_shift_independent_of_energy() {
    for e0 in [10.0, 50.0, 250.0, 500.0] {
        assert_abs_diff_eq!(compton::evaluate_raw(90.0, e0).wavelength_shift_nm, 0.00243, epsilon = 1e-15);
        assert_eq!(compton::evaluate_raw(0.0, e0).wavelength_shift_nm, 0.0);
    }
}
