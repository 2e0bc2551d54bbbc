/// 三次多項式 f(t) = a·t³ + b·t² + c·t + d
///
/// Horner 形式求值，與 `Subpolynomial` 相同使用 `mul_add`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPolynomial {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl CubicPolynomial {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> CubicPolynomial {
        CubicPolynomial { a, b, c, d }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    pub fn value(&self, t: f64) -> f64 {
        f64::mul_add(f64::mul_add(f64::mul_add(self.a, t, self.b), t, self.c), t, self.d)
    }

    /// f'(t) = 3a·t² + 2b·t + c
    pub fn derivative(&self, t: f64) -> f64 {
        f64::mul_add(f64::mul_add(3.0 * self.a, t, 2.0 * self.b), t, self.c)
    }

    /// f(1) = a + b + c + d
    pub fn value_at_one(&self) -> f64 {
        self.a + self.b + self.c + self.d
    }

    /// |a| + |b| + |c| + |d|, bounds |f(t)| and the rounding error of `value` on [0, 1].
    pub fn magnitude(&self) -> f64 {
        self.a.abs() + self.b.abs() + self.c.abs() + self.d.abs()
    }
}
