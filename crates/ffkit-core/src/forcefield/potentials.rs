//! Closed-form potential functions behind every functional-form variant.
//!
//! All functions are pure and stateless; they exist for debugging and
//! inspection of parameter sets, not for simulation.

/// `U = 4*epsilon*((sigma/r)^12 - (sigma/r)^6)`.
#[inline]
pub fn lj_12_6(r: f64, epsilon: f64, sigma: f64) -> f64 {
    if r < 1e-9 {
        return 1e10;
    }
    let rho6 = (sigma / r).powi(6);
    4.0 * epsilon * (rho6 * rho6 - rho6)
}

/// `U = C * epsilon * ((sigma/r)^n - (sigma/r)^m)` with `n = repulsion` and
/// `m = attraction`.
#[inline]
pub fn mie(r: f64, epsilon: f64, sigma: f64, repulsion: f64, attraction: f64) -> f64 {
    if r < 1e-9 {
        return 1e10;
    }
    let rho = sigma / r;
    mie_energy_factor(repulsion, attraction)
        * epsilon
        * (rho.powf(repulsion) - rho.powf(attraction))
}

/// The Mie energy pre-factor `C = n/(n-m) * (n/m)^(m/(n-m))`.
#[inline]
pub fn mie_energy_factor(repulsion: f64, attraction: f64) -> f64 {
    let (n, m) = (repulsion, attraction);
    n / (n - m) * (n / m).powf(m / (n - m))
}

/// The factor converting sigma to the distance of the Mie energy minimum,
/// `(n/m)^(1/(n-m))`.
#[inline]
pub fn mie_r_min_factor(repulsion: f64, attraction: f64) -> f64 {
    let (n, m) = (repulsion, attraction);
    (n / m).powf(1.0 / (n - m))
}

/// `U = k * (val - val0)^2`.
#[inline]
pub fn harmonic(val: f64, val0: f64, k: f64) -> f64 {
    let dv = val - val0;
    k * dv * dv
}

/// Harmonic in a quantity measured in degrees, with `k` per squared radian.
#[inline]
pub fn harmonic_degrees(deg: f64, deg0: f64, k: f64) -> f64 {
    let dv = (deg - deg0).to_radians();
    k * dv * dv
}

/// One harmonic of the periodic dihedral series,
/// `k * (1 + cos(n*phi - phi0))`. `phi` in radians, `phi0` in degrees.
#[inline]
pub fn periodic_cosine(phi: f64, phi0_deg: f64, k: f64, n: u32) -> f64 {
    k * (1.0 + (n as f64 * phi - phi0_deg.to_radians()).cos())
}

/// OPLS improper, `U = k * (1 - cos(2*phi))`. `phi` in radians.
#[inline]
pub fn opls_improper(phi: f64, k: f64) -> f64 {
    k * (1.0 - (2.0 * phi).cos())
}

/// Isotropic Drude polarization, `U = k * d^2`.
#[inline]
pub fn drude(d: f64, k: f64) -> f64 {
    k * d * d
}
