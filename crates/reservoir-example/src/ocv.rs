// SPDX-FileCopyrightText: 2026 Reservoir Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Open-circuit potential curves for the LG M50 cell (Chen 2020).

/// Open-circuit potential [V] of the graphite negative electrode as a function
/// of stoichiometry in `[0, 1]`.
pub fn graphite_lgm50_ocp_chen2020(sto: f64) -> f64 {
    1.9793 * (-39.3631 * sto).exp() + 0.2482
        - 0.0909 * (29.8538 * (sto - 0.1234)).tanh()
        - 0.04478 * (14.9159 * (sto - 0.2769)).tanh()
        - 0.0205 * (30.4444 * (sto - 0.6103)).tanh()
}

/// Open-circuit potential [V] of the NMC positive electrode as a function of
/// stoichiometry in `[0, 1]`.
pub fn nmc_lgm50_ocp_chen2020(sto: f64) -> f64 {
    -0.8090 * sto + 4.4875
        - 0.0428 * (18.5138 * (sto - 0.5542)).tanh()
        - 17.7326 * (15.7890 * (sto - 0.3117)).tanh()
        + 17.5842 * (15.9308 * (sto - 0.3120)).tanh()
}
