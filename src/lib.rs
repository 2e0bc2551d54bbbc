//! Evaluates a piecewise cubic Bézier curve as a function y = f(x).
//!
//! Control points `xpos`/`ypos` of length 1 + 3M describe M cubic Bézier
//! segments sharing their anchors. For each query x the covering segment is
//! located, x(t) = x is solved for t with a Newton-Raphson / bisection
//! hybrid, and y(t) is evaluated with de Casteljau's algorithm.
//!
//! ```
//! let y = bezierspline::evaluate(&[0.0, 1.0, 2.0, 3.0], &[0.0, 0.0, 1.0, 1.0], &[1.5]).unwrap();
//! assert!((y[0] - 0.5).abs() < 1e-7);
//! ```

pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod curvedefinition;
    pub mod manager;
}

pub mod math {
    pub mod cubicpolynomial;

    pub mod curve {
        pub mod curve;
        pub mod curveerror;

        pub mod bezier {
            pub mod validator;
            pub mod segmentcoefficients;
            pub mod segmentlocator;
            pub mod decasteljau;
        }

        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod cubicbezierspline;
        }
    }

    pub mod rootfinding {
        pub mod rootfinder;
        pub mod newtonbisection;
        pub mod brentroot;
    }
}

pub use configuration::{
    Configuration,
    SolverConfiguration
};
pub use math::curve::curve::Curve;
pub use math::curve::curveerror::CurveError;
pub use math::curve::nonparametriccurve::cubicbezierspline::{
    evaluate,
    evaluate_with_configuration,
    CubicBezierSpline
};
pub use math::curve::nonparametriccurve::nonparametriccurve::NonparametricCurve;
pub use math::rootfinding::rootfinder::RootFinderType;
