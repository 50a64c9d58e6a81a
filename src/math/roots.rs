//! Closed-form real-root solvers for polynomials of degree 1 through 4.
//!
//! Coefficients are given highest degree first. A zero leading coefficient
//! degrades to the next-lower-degree solver instead of dividing by zero.
//! Returned roots are real, not deduplicated, and only the quadratic solver
//! orders its output. All solvers are total over finite inputs.

use std::f64::consts::PI;

/// Solves `a1*x + a0 = 0`.
///
/// The fully degenerate equation `0 = 0` yields the conventional root 0;
/// the contradictory `0*x + a0 = 0` (with `a0 != 0`) yields no root.
#[must_use]
pub fn find_roots_linear(a1: f64, a0: f64) -> Option<f64> {
    if a1 == 0.0 {
        if a0 == 0.0 {
            Some(0.0)
        } else {
            None
        }
    } else {
        Some(-a0 / a1)
    }
}

/// Solves `a2*x^2 + a1*x + a0 = 0`, returning real roots in ascending order.
///
/// Uses the cancellation-safe formulation: the root derived from the
/// larger-magnitude of `-a1 ± sqrt(disc)` is computed first and the other is
/// recovered via the product of roots, so nearly-cancelling subtractions are
/// avoided.
#[must_use]
pub fn find_roots_quadratic(a2: f64, a1: f64, a0: f64) -> Vec<f64> {
    if a2 == 0.0 {
        return find_roots_linear(a1, a0).into_iter().collect();
    }
    let discriminant = a1 * a1 - 4.0 * a2 * a0;
    if discriminant < 0.0 {
        return Vec::new();
    }
    let a2x2 = 2.0 * a2;
    if discriminant == 0.0 {
        return vec![-a1 / a2x2];
    }
    let sq = discriminant.sqrt();

    let (same_sign, diff_sign) = if a1 < 0.0 {
        (-a1 + sq, -a1 - sq)
    } else {
        (-a1 - sq, -a1 + sq)
    };

    let (x1, x2) = if same_sign.abs() > a2x2.abs() {
        if diff_sign.abs() > a2x2.abs() {
            ((a0 * 2.0) / same_sign, (a0 * 2.0) / diff_sign)
        } else {
            ((a0 * 2.0) / same_sign, same_sign / a2x2)
        }
    } else {
        (diff_sign / a2x2, same_sign / a2x2)
    };

    if x1 < x2 {
        vec![x1, x2]
    } else {
        vec![x2, x1]
    }
}

/// Solves `a3*x^3 + a2*x^2 + a1*x + a0 = 0` for all real roots.
///
/// Classification is by the cubic discriminant: negative gives one real root
/// (Cardano), zero gives a multiple root, positive gives three real roots via
/// the trigonometric method. Special shapes (depressed, normalized) take
/// their own closed-form branches.
#[must_use]
pub fn find_roots_cubic(a3: f64, a2: f64, a1: f64, a0: f64) -> Vec<f64> {
    if a3 == 0.0 {
        return find_roots_quadratic(a2, a1, a0);
    }
    if a2 == 0.0 {
        return find_roots_cubic_depressed(a1 / a3, a0 / a3);
    }
    if a3 == 1.0 {
        return find_roots_cubic_normalized(a2, a1, a0);
    }

    let d = 18.0 * a3 * a2 * a1 * a0 - 4.0 * a2 * a2 * a2 * a0 + a2 * a2 * a1 * a1
        - 4.0 * a3 * a1 * a1 * a1
        - 27.0 * a3 * a3 * a0 * a0;
    let d0 = a2 * a2 - 3.0 * a3 * a1;
    let d1 = 2.0 * a2 * a2 * a2 - 9.0 * a3 * a2 * a1 + 27.0 * a3 * a3 * a0;

    if d < 0.0 {
        // One real root.
        let sqrt = (-27.0 * a3 * a3 * d).sqrt();
        let c_base = (if d1 < 0.0 { d1 - sqrt } else { d1 + sqrt }) / 2.0;
        let c = c_base.cbrt();
        let x = -(a2 + c + d0 / c) / (3.0 * a3);
        vec![x]
    } else if d == 0.0 {
        if d0 == 0.0 {
            // Triple root.
            vec![-a2 / (a3 * 3.0)]
        } else {
            // Single root plus double root.
            vec![
                (9.0 * a3 * a0 - a2 * a1) / (d0 * 2.0),
                (4.0 * a3 * a2 * a1 - 9.0 * a3 * a3 * a0 - a2 * a2 * a2) / (a3 * d0),
            ]
        }
    } else {
        // Three real roots: cube root of the complex resolvent in polar form,
        // then the two conjugate rotations by 120 degrees.
        let c3_img = (27.0 * a3 * a3 * d).sqrt() / 2.0;
        let c3_real = d1 / 2.0;
        let c3_module = (c3_img * c3_img + c3_real * c3_real).sqrt();
        let c3_phase = 2.0 * (c3_img / (c3_real + c3_module)).atan();
        let c_module = c3_module.cbrt();
        let c_phase = c3_phase / 3.0;
        let c_real = c_module * c_phase.cos();
        let c_img = c_module * c_phase.sin();
        let x0_real = -(a2 + c_real + (d0 * c_real) / (c_module * c_module)) / (3.0 * a3);

        let e_real = -0.5;
        let e_img = 3.0_f64.sqrt() / 2.0;
        let c1_real = c_real * e_real - c_img * e_img;
        let c1_img = c_real * e_img + c_img * e_real;
        let x1_real =
            -(a2 + c1_real + (d0 * c1_real) / (c1_real * c1_real + c1_img * c1_img)) / (3.0 * a3);

        let c2_real = c1_real * e_real - c1_img * e_img;
        let c2_img = c1_real * e_img + c1_img * e_real;
        let x2_real =
            -(a2 + c2_real + (d0 * c2_real) / (c2_real * c2_real + c2_img * c2_img)) / (3.0 * a3);

        vec![x0_real, x1_real, x2_real]
    }
}

/// Solves the depressed cubic `x^3 + a1*x + a0 = 0`.
fn find_roots_cubic_depressed(a1: f64, a0: f64) -> Vec<f64> {
    if a1 == 0.0 {
        return vec![-a0.cbrt()];
    }
    if a0 == 0.0 {
        let mut roots = find_roots_quadratic(1.0, 0.0, a1);
        roots.push(0.0);
        return roots;
    }
    let d = (a0 * a0) / 4.0 + (a1 * a1 * a1) / 27.0;
    if d < 0.0 {
        let a = ((-4.0 * a1) / 3.0).sqrt();
        let phi = ((-4.0 * a0) / (a * a * a)).acos() / 3.0;
        vec![
            a * phi.cos(),
            a * (phi + (2.0 / 3.0) * PI).cos(),
            a * (phi - (2.0 / 3.0) * PI).cos(),
        ]
    } else {
        let sqrt_d = d.sqrt();
        let a0_div_2 = a0 / 2.0;
        let x1 = (sqrt_d - a0_div_2).cbrt() - (sqrt_d + a0_div_2).cbrt();
        if d == 0.0 {
            let mut roots = find_roots_quadratic(1.0, 0.0, a1);
            roots.push(a0_div_2);
            roots
        } else {
            vec![x1]
        }
    }
}

/// Solves the monic cubic `x^3 + a2*x^2 + a1*x + a0 = 0`.
fn find_roots_cubic_normalized(a2: f64, a1: f64, a0: f64) -> Vec<f64> {
    let q = (3.0 * a1 - a2 * a2) / 9.0;
    let r = (9.0 * a2 * a1 - 27.0 * a0 - 2.0 * a2 * a2 * a2) / 54.0;
    let q3 = q * q * q;
    let d = q3 + r * r;
    let a2_div_3 = a2 / 3.0;

    if d < 0.0 {
        let phi_3 = (r / (-q3).sqrt()).acos() / 3.0;
        let sqrt_q_2 = 2.0 * (-q).sqrt();
        vec![
            sqrt_q_2 * phi_3.cos() - a2_div_3,
            sqrt_q_2 * (phi_3 - (2.0 / 3.0) * PI).cos() - a2_div_3,
            sqrt_q_2 * (phi_3 + (2.0 / 3.0) * PI).cos() - a2_div_3,
        ]
    } else {
        let sqrt_d = d.sqrt();
        let s = (r + sqrt_d).cbrt();
        let t = (r - sqrt_d).cbrt();
        if s == t {
            if s + t == 0.0 {
                vec![s + t - a2_div_3]
            } else {
                vec![s + t - a2_div_3, -((s + t) / 2.0) - a2_div_3]
            }
        } else {
            vec![s + t - a2_div_3]
        }
    }
}

/// Solves the biquadratic `a4*x^4 + a2*x^2 + a0 = 0` via its quadratic in `x^2`.
fn find_roots_biquadratic(a4: f64, a2: f64, a0: f64) -> Vec<f64> {
    if a4 == 0.0 {
        return find_roots_quadratic(a2, 0.0, a0);
    }
    if a0 == 0.0 {
        let mut roots = find_roots_quadratic(a4, 0.0, a2);
        roots.push(0.0);
        return roots;
    }
    let mut roots = Vec::new();
    for x in find_roots_quadratic(a4, a2, a0) {
        if x > 0.0 {
            let sqrt_root = x.sqrt();
            roots.push(sqrt_root);
            roots.push(-sqrt_root);
        } else if x == 0.0 {
            roots.push(0.0);
        }
    }
    roots
}

/// Solves `a4*x^4 + a3*x^3 + a2*x^2 + a1*x + a0 = 0` for all real roots.
///
/// The quartic discriminant (in a partially factored form to keep
/// intermediate magnitudes small) classifies multiple-root cases; the general
/// case goes through the depressed quartic and its resolvent cubic.
#[must_use]
#[allow(clippy::similar_names)]
pub fn find_roots_quartic(a4: f64, a3: f64, a2: f64, a1: f64, a0: f64) -> Vec<f64> {
    if a4 == 0.0 {
        return find_roots_cubic(a3, a2, a1, a0);
    }
    if a0 == 0.0 {
        let mut roots = find_roots_cubic(a4, a3, a2, a1);
        roots.push(0.0);
        return roots;
    }
    if a1 == 0.0 && a3 == 0.0 {
        return find_roots_biquadratic(a4, a2, a0);
    }

    let discriminant = a4
        * a0
        * a4
        * (256.0 * a4 * a0 * a0 + a1 * (144.0 * a2 * a1 - 192.0 * a3 * a0))
        + a4 * a0 * a2 * a2 * (16.0 * a2 * a2 - 80.0 * a3 * a1 - 128.0 * a4 * a0)
        + a3 * a3
            * (a4 * a0 * (144.0 * a2 * a0 - 6.0 * a1 * a1)
                + (a0 * (18.0 * a3 * a2 * a1 - 27.0 * a3 * a3 * a0 - 4.0 * a2 * a2 * a2)
                    + a1 * a1 * (a2 * a2 - 4.0 * a3 * a1)))
        + a4 * a1 * a1 * (18.0 * a3 * a2 * a1 - 27.0 * a4 * a1 * a1 - 4.0 * a2 * a2 * a2);
    let pp = 8.0 * a4 * a2 - 3.0 * a3 * a3;
    let rr = a3 * a3 * a3 + 8.0 * a4 * a4 * a1 - 4.0 * a4 * a3 * a2;
    let delta0 = a2 * a2 - 3.0 * a3 * a1 + 12.0 * a4 * a0;
    let dd = 64.0 * a4 * a4 * a4 * a0 - 16.0 * a4 * a4 * a2 * a2 + 16.0 * a4 * a3 * a3 * a2
        - 16.0 * a4 * a4 * a3 * a1
        - 3.0 * a3 * a3 * a3 * a3;

    if discriminant == 0.0 {
        let triple_root = delta0 == 0.0;
        let quadruple_root = triple_root && dd == 0.0;
        let no_roots = dd == 0.0 && pp > 0.0 && rr == 0.0;
        if quadruple_root {
            // All four roots coincide.
            vec![-a3 / (4.0 * a4)]
        } else if triple_root {
            // Triple root: the unique root of the remainder of dividing the
            // quartic by its second derivative, plus the simple fourth root.
            let x0 = (-72.0 * a4 * a4 * a0 + 10.0 * a4 * a2 * a2 - 3.0 * a3 * a3 * a2)
                / (9.0 * (8.0 * a4 * a4 * a1 - 4.0 * a4 * a3 * a2 + a3 * a3 * a3));
            vec![x0, -(a3 / a4 + 3.0 * x0)]
        } else if no_roots {
            // Two complex conjugate double roots.
            Vec::new()
        } else {
            find_roots_via_depressed_quartic(a4, a3, a2, a1, a0, pp, rr, dd)
        }
    } else {
        let no_roots = discriminant > 0.0 && (pp > 0.0 || dd > 0.0);
        if no_roots {
            Vec::new()
        } else {
            find_roots_via_depressed_quartic(a4, a3, a2, a1, a0, pp, rr, dd)
        }
    }
}

/// Shifts the general quartic to depressed form and maps the roots back.
#[allow(clippy::too_many_arguments, clippy::similar_names)]
fn find_roots_via_depressed_quartic(
    a4: f64,
    a3: f64,
    a2: f64,
    a1: f64,
    a0: f64,
    pp: f64,
    rr: f64,
    dd: f64,
) -> Vec<f64> {
    let a4_pow_2 = a4 * a4;
    let a4_pow_3 = a4_pow_2 * a4;
    let a4_pow_4 = a4_pow_3 * a4;
    let p = pp / (a4_pow_2 * 8.0);
    let q = rr / (a4_pow_3 * 8.0);
    let r = (dd + 16.0 * a4_pow_2 * (12.0 * a0 * a4 - 3.0 * a1 * a3 + a2 * a2)) / (256.0 * a4_pow_4);

    find_roots_quartic_depressed(p, q, r)
        .into_iter()
        .map(|y| y - a3 / (4.0 * a4))
        .collect()
}

/// Solves the depressed quartic `x^4 + a2*x^2 + a1*x + a0 = 0` via its
/// resolvent cubic.
fn find_roots_quartic_depressed(a2: f64, a1: f64, a0: f64) -> Vec<f64> {
    if a1 == 0.0 {
        return find_roots_biquadratic(1.0, a2, a0);
    }
    if a0 == 0.0 {
        return find_roots_cubic_normalized(0.0, a2, a1);
    }
    let a2_pow_2 = a2 * a2;
    let a1_div_2 = a1 / 2.0;
    let b2 = (a2 * 5.0) / 2.0;
    let b1 = 2.0 * a2_pow_2 - a0;
    let b0 = (a2_pow_2 * a2 - a2 * a0 - a1_div_2 * a1_div_2) / 2.0;

    let resolvent_roots = find_roots_cubic_normalized(b2, b1, b0);
    // The normalized cubic always yields at least one real root for finite
    // input, so an empty resolvent cannot occur here.
    let Some(&y) = resolvent_roots.last() else {
        return Vec::new();
    };

    let a2_plus_2y = a2 + 2.0 * y;
    if a2_plus_2y > 0.0 {
        let sqrt_a2_plus_2y = a2_plus_2y.sqrt();
        let q0a = a2 + y - a1_div_2 / sqrt_a2_plus_2y;
        let q0b = a2 + y + a1_div_2 / sqrt_a2_plus_2y;

        let mut roots = find_roots_quadratic(1.0, sqrt_a2_plus_2y, q0a);
        roots.extend(find_roots_quadratic(1.0, -sqrt_a2_plus_2y, q0b));
        roots
    } else {
        Vec::new()
    }
}
