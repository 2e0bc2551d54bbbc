// ─────────────────────────────────────────────
// de Casteljau
// ─────────────────────────────────────────────
//
// 三層線性插值：
//   q0 → (1-t)·q0 + t·q1 ...
// 在 t ∈ [0,1] 上數值穩定，不需建立 y 方向的多項式係數。

fn lerp(lhs: f64, rhs: f64, t: f64) -> f64 {
    (1.0 - t) * lhs + t * rhs
}

/// y(t) of the segment with control values `q`.
pub fn de_casteljau(q: &[f64; 4], t: f64) -> f64 {
    let q01 = lerp(q[0], q[1], t);
    let q12 = lerp(q[1], q[2], t);
    let q23 = lerp(q[2], q[3], t);
    lerp(lerp(q01, q12, t), lerp(q12, q23, t), t)
}

/// dy/dt, the quadratic Bézier of the control differences scaled by 3.
pub fn de_casteljau_derivative(q: &[f64; 4], t: f64) -> f64 {
    let d0 = q[1] - q[0];
    let d1 = q[2] - q[1];
    let d2 = q[3] - q[2];
    3.0 * lerp(lerp(d0, d1, t), lerp(d1, d2, t), t)
}
